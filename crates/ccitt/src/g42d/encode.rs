//! Encoder implementation

use std::ops::AddAssign;

use log::{debug, trace};

use super::{
    common::next_changing_element,
    tables::{self, Mode, EOFB, MAX_MAKEUP_RUN},
};
use crate::{
    bits::{BitWriter, CodeSink, FillOrder},
    Color, FaxError, FaxResult,
};

/// How often each mode was used
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ModeCounts {
    /// Pass mode codes
    pub pass: usize,
    /// Horizontal mode codes
    pub horizontal: usize,
    /// Vertical mode codes, indexed by `a1 - b1 + 3`
    pub vertical: [usize; 7],
}

impl ModeCounts {
    /// Vertical mode codes with `a1 - b1 == distance`
    pub fn vertical_at(&self, distance: isize) -> usize {
        match distance {
            -3..=3 => self.vertical[(distance + 3) as usize],
            _ => 0,
        }
    }

    /// Total number of mode codes
    pub fn total(&self) -> usize {
        self.pass + self.horizontal + self.vertical.iter().sum::<usize>()
    }
}

impl AddAssign for ModeCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.pass += rhs.pass;
        self.horizontal += rhs.horizontal;
        for (a, b) in self.vertical.iter_mut().zip(rhs.vertical.iter()) {
            *a += b;
        }
    }
}

/// Options for the group 4 encoder
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Pad every row to a byte boundary
    pub byte_align: bool,
    /// The order of bits in the output bytes
    pub fill_order: FillOrder,
}

/// An encoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The group 4 bitstream, including EOFB
    pub data: Vec<u8>,
    /// The modes used for the image
    pub counts: ModeCounts,
}

/// Coding position on the current line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Cursor {
    /// The last coded changing element, `None` in front of the line
    a0: Option<usize>,
    /// The color right of `a0`
    color: Color,
}

/// Write the makeup and terminating codes for a run
///
/// The terminating code is always written, also for a remainder of zero.
pub fn encode_run<S: CodeSink + ?Sized>(
    mut run: usize,
    color: Color,
    sink: &mut S,
) -> FaxResult<()> {
    while run >= MAX_MAKEUP_RUN + 64 {
        sink.write_code(tables::makeup(color, MAX_MAKEUP_RUN / 64))?;
        run -= MAX_MAKEUP_RUN;
    }
    let q = run / 64;
    if q > 0 {
        sink.write_code(tables::makeup(color, q))?;
    }
    sink.write_code(tables::terminating(color)[run % 64])?;
    Ok(())
}

/// Code `curr` against the reference line `prev`
///
/// An empty `prev` stands for the (white) line in front of the first row.
pub fn encode_row<S: CodeSink + ?Sized>(
    curr: &[Color],
    prev: &[Color],
    sink: &mut S,
) -> FaxResult<ModeCounts> {
    let width = curr.len();
    if !prev.is_empty() && prev.len() != width {
        return Err(FaxError::RowLength {
            expected: width,
            actual: prev.len(),
        });
    }

    let mut counts = ModeCounts::default();
    let mut pos = Cursor {
        a0: None,
        color: Color::White,
    };

    while pos.a0.map_or(true, |a0| a0 < width) {
        let a1 = next_changing_element(curr, pos.a0);
        let (b1, b2) = if prev.is_empty() {
            (width, width)
        } else {
            let mut b1 = next_changing_element(prev, pos.a0);
            if b1 < width && prev[b1] != pos.color.inverted() {
                b1 = next_changing_element(prev, Some(b1));
            }
            (b1, next_changing_element(prev, Some(b1)))
        };

        if b2 < a1 {
            sink.write_code(Mode::Pass.code())?;
            counts.pass += 1;
            pos.a0 = Some(b2);
            continue;
        }

        let distance = a1 as isize - b1 as isize;
        if let Some(mode) = Mode::vertical(distance) {
            sink.write_code(mode.code())?;
            counts.vertical[(distance + 3) as usize] += 1;
            pos.a0 = Some(a1);
            pos.color.invert();
        } else {
            sink.write_code(Mode::Horizontal.code())?;
            counts.horizontal += 1;
            let a2 = next_changing_element(curr, Some(a1));
            let a0a1 = pos.a0.map_or(a1, |a0| a1 - a0);
            encode_run(a0a1, pos.color, sink)?;
            encode_run(a2 - a1, pos.color.inverted(), sink)?;
            // a2 has the color of a0
            pos.a0 = Some(a2);
        }
    }
    Ok(counts)
}

/// Encode all rows of an image and the EOFB into `sink`
///
/// The sink is not finalized, so the last byte may be incomplete.
pub fn encode_into<S: CodeSink + ?Sized>(
    sink: &mut S,
    width: usize,
    height: usize,
    pixels: &[Color],
    byte_align: bool,
) -> FaxResult<ModeCounts> {
    if width == 0 {
        return Err(FaxError::InvalidWidth);
    }
    let expected = width.checked_mul(height);
    if expected != Some(pixels.len()) {
        return Err(FaxError::RasterSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut counts = ModeCounts::default();
    let mut reference: &[Color] = &[];
    for (y, row) in pixels.chunks_exact(width).enumerate() {
        let row_counts = encode_row(row, reference, sink)?;
        trace!("row {}: {:?}", y, row_counts);
        counts += row_counts;
        reference = row;
        if byte_align {
            sink.align()?;
        }
    }
    sink.write_code(EOFB)?;
    Ok(counts)
}

/// Encode an image with the given options
pub fn encode_with(
    width: usize,
    height: usize,
    pixels: &[Color],
    options: EncodeOptions,
) -> FaxResult<Encoded> {
    let mut writer = BitWriter::with_fill_order(Vec::new(), options.fill_order);
    let counts = encode_into(&mut writer, width, height, pixels, options.byte_align)?;
    let data = writer.finish()?;
    debug!(
        "Encoded {}x{} image ({:?}) into {} bytes",
        width,
        height,
        options,
        data.len()
    );
    Ok(Encoded { data, counts })
}

/// Encode an image as CCITT group 4 (MSB first)
pub fn encode(
    width: usize,
    height: usize,
    pixels: &[Color],
    byte_align: bool,
) -> FaxResult<Vec<u8>> {
    let options = EncodeOptions {
        byte_align,
        ..EncodeOptions::default()
    };
    encode_with(width, height, pixels, options).map(|e| e.data)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::bits::Code;
    use crate::Color::{Black as B, White as W};

    /// Collects the codes as a string of `0`s and `1`s
    #[derive(Default)]
    struct Bits(String);

    impl CodeSink for Bits {
        fn write_code(&mut self, code: Code) -> FaxResult<()> {
            self.0.extend(code.iter().map(|b| if b { '1' } else { '0' }));
            Ok(())
        }

        fn align(&mut self) -> FaxResult<()> {
            while self.0.len() % 8 != 0 {
                self.0.push('0');
            }
            Ok(())
        }
    }

    /// Fails once more than `limit` bytes were written
    struct Limited {
        written: usize,
        limit: usize,
    }

    impl io::Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn line(s: &str) -> Vec<Color> {
        s.chars().map(|c| Color::from(c == '#')).collect()
    }

    fn row_bits(curr: &str, prev: &str) -> (String, ModeCounts) {
        let mut bits = Bits::default();
        let counts = encode_row(&line(curr), &line(prev), &mut bits).unwrap();
        (bits.0, counts)
    }

    fn run_len(run: usize, color: Color) -> usize {
        let mut bits = Bits::default();
        encode_run(run, color, &mut bits).unwrap();
        bits.0.len()
    }

    #[test]
    fn test_horizontal_first_row() {
        let (bits, counts) = row_bits("..##....", "");
        // H, white 2, black 2, V0
        assert_eq!(bits, "001".to_owned() + "0111" + "11" + "1");
        assert_eq!(counts.horizontal, 1);
        assert_eq!(counts.vertical_at(0), 1);

        // an all white reference is the same as no reference
        let (white_ref, _) = row_bits("..##....", "........");
        assert_eq!(white_ref, bits);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(row_bits("..##....", "..##....").0, "111");
        assert_eq!(row_bits("...##...", "..##....").0, "0110111");
        assert_eq!(row_bits(".##.....", "..##....").0, "0100101");

        let (bits, counts) = row_bits("########", "...##...");
        assert_eq!(bits, "0000010".to_owned() + "0000011");
        assert_eq!(counts.vertical_at(-3), 1);
        assert_eq!(counts.vertical_at(3), 1);
    }

    #[test]
    fn test_pass() {
        let (bits, counts) = row_bits("......##", ".##.....");
        assert_eq!(bits, "0001".to_owned() + "000010" + "1");
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.vertical_at(-2), 1);

        let (bits, counts) = row_bits(".....##.", "..##....");
        assert_eq!(bits, "0001".to_owned() + "0000010" + "010" + "1");
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_horizontal_zero_run() {
        // a1 at the start of the line
        let (bits, _) = row_bits("##......", ".....###");
        assert_eq!(bits, "001".to_owned() + "00110101" + "11" + "0000011");

        // a2 is the end of the line
        let (bits, counts) = row_bits(".#######", "..#.....");
        assert_eq!(bits, "010".to_owned() + "001" + "00011" + "00110101");
        assert_eq!(counts.horizontal, 1);
    }

    #[test]
    fn test_reference_length() {
        let mut bits = Bits::default();
        let err = encode_row(&line("...."), &line("..."), &mut bits).unwrap_err();
        assert!(matches!(
            err,
            FaxError::RowLength {
                expected: 4,
                actual: 3
            }
        ));
        assert!(bits.0.is_empty());
    }

    #[test]
    fn test_run_makeup_and_zero_terminating() {
        // makeup 64 + terminating 0
        assert_eq!(run_len(64, W), 5 + 8);
        assert_eq!(run_len(64, B), 10 + 10);
        assert_eq!(run_len(128, W), 5 + 8);
        assert_eq!(run_len(128, B), 12 + 10);
        assert_eq!(run_len(0, W), 8);
        assert_eq!(run_len(0, B), 10);
        assert_eq!(run_len(65, W), 5 + 6);
        assert_eq!(run_len(1728, W), 9 + 8);
        assert_eq!(run_len(2560, B), 12 + 10);

        let mut bits = Bits::default();
        encode_run(64, W, &mut bits).unwrap();
        assert_eq!(bits.0, "11011".to_owned() + "00110101");
    }

    #[test]
    fn test_run_lengths() {
        // terminating code lengths, T.4 table 2
        let white: Vec<usize> = (0..64)
            .map(|r| match r {
                0 => 8,
                1 => 6,
                2..=7 => 4,
                8..=11 => 5,
                12..=17 => 6,
                18..=28 => 7,
                _ => 8,
            })
            .collect();
        let black: Vec<usize> = (0..64)
            .map(|r| match r {
                0 => 10,
                1 | 4 => 3,
                2 | 3 => 2,
                5 | 6 => 4,
                7 => 5,
                8 | 9 => 6,
                10..=12 => 7,
                13 | 14 => 8,
                15 => 9,
                16..=18 => 10,
                19..=25 => 11,
                _ => 12,
            })
            .collect();
        // makeup code lengths, T.4 table 3
        let white_makeup = |q: usize| match q {
            1 | 2 => 5,
            3 | 26 => 6,
            4 => 7,
            5..=10 => 8,
            11..=27 => 9,
            28..=30 => 11,
            _ => 12,
        };
        let black_makeup = |q: usize| match q {
            1 => 10,
            2..=7 => 12,
            8..=27 => 13,
            28..=30 => 11,
            _ => 12,
        };

        for run in 0..=2560 {
            let (q, r) = (run / 64, run % 64);
            let wm = if q > 0 { white_makeup(q) } else { 0 };
            let bm = if q > 0 { black_makeup(q) } else { 0 };
            assert_eq!(run_len(run, W), wm + white[r], "white {}", run);
            assert_eq!(run_len(run, B), bm + black[r], "black {}", run);
        }
    }

    #[test]
    fn test_long_runs() {
        // 2560 + 64 + 0
        assert_eq!(run_len(2624, W), 12 + 5 + 8);
        // 2560 + 2560 + 0
        assert_eq!(run_len(5120, B), 12 + 12 + 10);
        // 2560 + 3
        assert_eq!(run_len(2563, W), 12 + 4);
    }

    #[test]
    fn test_encode_all_black() {
        let pixels = vec![B; 8];
        // H, white 0, black 8, EOFB
        assert_eq!(
            encode(8, 1, &pixels, false).unwrap(),
            vec![0x26, 0xA2, 0x80, 0x08, 0x00, 0x80]
        );

        let pixels = vec![B; 16];
        // second row: V0
        assert_eq!(
            encode(8, 2, &pixels, false).unwrap(),
            vec![0x26, 0xA2, 0xE0, 0x02, 0x00, 0x20]
        );
        assert_eq!(
            encode(8, 2, &pixels, true).unwrap(),
            vec![0x26, 0xA2, 0x80, 0xC0, 0x00, 0x10, 0x01]
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(4, 0, &[], false).unwrap(), vec![0x00, 0x10, 0x01]);
        assert_eq!(
            encode(4, 1, &[W; 4], false).unwrap(),
            vec![0x80, 0x08, 0x00, 0x80]
        );
    }

    #[test]
    fn test_terminator() {
        let pixels = line("..##.#..#####.#.##..#...");
        for &aligned in &[false, true] {
            let mut bits = Bits::default();
            encode_into(&mut bits, 8, 3, &pixels, aligned).unwrap();
            assert!(bits.0.ends_with("000000000001000000000001"));
            if aligned {
                assert_eq!((bits.0.len() - 24) % 8, 0);
            }
        }
    }

    #[test]
    fn test_alignment() {
        let pixels = line("..##.#..#####.#.##..#...");
        let mut writer = BitWriter::new(Vec::new());
        let mut reference: &[Color] = &[];
        for row in pixels.chunks(8) {
            encode_row(row, reference, &mut writer).unwrap();
            writer.align().unwrap();
            assert_eq!(writer.pending_bits(), 0);
            reference = row;
        }
    }

    #[test]
    fn test_deterministic() {
        let pixels: Vec<Color> = (0..37 * 23)
            .map(|i| Color::from((i * 7 + i / 37) % 5 < 2))
            .collect();
        let a = encode(37, 23, &pixels, false).unwrap();
        let b = encode(37, 23, &pixels, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            encode(0, 0, &[], false),
            Err(FaxError::InvalidWidth)
        ));
        assert!(matches!(
            encode(4, 2, &[W; 7], false),
            Err(FaxError::RasterSize {
                expected: Some(8),
                actual: 7,
                ..
            })
        ));
        assert!(matches!(
            encode(usize::MAX, 2, &[W; 7], false),
            Err(FaxError::RasterSize { expected: None, .. })
        ));

        let mut bits = Bits::default();
        assert!(encode_into(&mut bits, 4, 2, &[W; 9], false).is_err());
        assert!(bits.0.is_empty());
    }

    #[test]
    fn test_sink_failure() {
        let pixels: Vec<Color> = (0..64 * 16).map(|i| Color::from(i % 3 == 0)).collect();
        let mut writer = BitWriter::new(Limited {
            written: 0,
            limit: 4,
        });
        let err = encode_into(&mut writer, 64, 16, &pixels, false).unwrap_err();
        assert!(matches!(err, FaxError::Io(_)));
    }

    #[test]
    fn test_fill_order() {
        let pixels = vec![B; 8];
        let options = EncodeOptions {
            byte_align: false,
            fill_order: FillOrder::LsbToMsb,
        };
        let encoded = encode_with(8, 1, &pixels, options).unwrap();
        let msb = encode(8, 1, &pixels, false).unwrap();
        let reversed: Vec<u8> = msb.iter().map(|b| b.reverse_bits()).collect();
        assert_eq!(encoded.data, reversed);
        assert_eq!(encoded.counts.horizontal, 1);
    }
}
