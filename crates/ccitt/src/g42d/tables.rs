//! # Code tables
//!
//! Mode codes (T.6, Table 1) and run length codes (T.4, Tables 2 and 3).

use crate::{bits::Code, Color};

/// End of facsimile block: two EOL codes (`000000000001`)
pub const EOFB: Code = Code::new(0b000000000001_000000000001, 24);

/// Longest run with a single makeup code
pub const MAX_MAKEUP_RUN: usize = 2560;

/// A coding mode
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Pass mode (`P`)
    Pass,
    /// Horizontal mode (`H`), followed by two runs
    Horizontal,
    /// Vertical mode, `a1` right under `b1`
    V0,
    /// Vertical mode, `a1` one to the right of `b1`
    VR1,
    /// Vertical mode, `a1` two to the right of `b1`
    VR2,
    /// Vertical mode, `a1` three to the right of `b1`
    VR3,
    /// Vertical mode, `a1` one to the left of `b1`
    VL1,
    /// Vertical mode, `a1` two to the left of `b1`
    VL2,
    /// Vertical mode, `a1` three to the left of `b1`
    VL3,
}

impl Mode {
    /// The vertical mode for `a1 - b1`, if `|a1 - b1| <= 3`
    pub fn vertical(distance: isize) -> Option<Mode> {
        match distance {
            -3 => Some(Mode::VL3),
            -2 => Some(Mode::VL2),
            -1 => Some(Mode::VL1),
            0 => Some(Mode::V0),
            1 => Some(Mode::VR1),
            2 => Some(Mode::VR2),
            3 => Some(Mode::VR3),
            _ => None,
        }
    }

    /// The code word of this mode
    #[rustfmt::skip]
    pub const fn code(self) -> Code {
        match self {
            Mode::Pass       => Code::new(0b0001, 4),
            Mode::Horizontal => Code::new(0b001, 3),
            Mode::V0         => Code::new(0b1, 1),
            Mode::VR1        => Code::new(0b011, 3),
            Mode::VR2        => Code::new(0b000011, 6),
            Mode::VR3        => Code::new(0b0000011, 7),
            Mode::VL1        => Code::new(0b010, 3),
            Mode::VL2        => Code::new(0b000010, 6),
            Mode::VL3        => Code::new(0b0000010, 7),
        }
    }
}

/// The terminating codes for runs of `color`
pub fn terminating(color: Color) -> &'static [Code; 64] {
    match color {
        Color::White => &WHITE_TERMINATING,
        Color::Black => &BLACK_TERMINATING,
    }
}

/// The makeup code for a run of `q * 64` pixels of `color`, `1 <= q <= 40`
pub fn makeup(color: Color, q: usize) -> Code {
    if q > WHITE_MAKEUP.len() {
        return EXTENDED_MAKEUP[q - WHITE_MAKEUP.len() - 1];
    }
    match color {
        Color::White => WHITE_MAKEUP[q - 1],
        Color::Black => BLACK_MAKEUP[q - 1],
    }
}

/// Terminating codes for white runs of length `0..=63`
pub const WHITE_TERMINATING: [Code; 64] = [
    Code::new(0b00110101, 8), // 0
    Code::new(0b000111, 6), // 1
    Code::new(0b0111, 4), // 2
    Code::new(0b1000, 4), // 3
    Code::new(0b1011, 4), // 4
    Code::new(0b1100, 4), // 5
    Code::new(0b1110, 4), // 6
    Code::new(0b1111, 4), // 7
    Code::new(0b10011, 5), // 8
    Code::new(0b10100, 5), // 9
    Code::new(0b00111, 5), // 10
    Code::new(0b01000, 5), // 11
    Code::new(0b001000, 6), // 12
    Code::new(0b000011, 6), // 13
    Code::new(0b110100, 6), // 14
    Code::new(0b110101, 6), // 15
    Code::new(0b101010, 6), // 16
    Code::new(0b101011, 6), // 17
    Code::new(0b0100111, 7), // 18
    Code::new(0b0001100, 7), // 19
    Code::new(0b0001000, 7), // 20
    Code::new(0b0010111, 7), // 21
    Code::new(0b0000011, 7), // 22
    Code::new(0b0000100, 7), // 23
    Code::new(0b0101000, 7), // 24
    Code::new(0b0101011, 7), // 25
    Code::new(0b0010011, 7), // 26
    Code::new(0b0100100, 7), // 27
    Code::new(0b0011000, 7), // 28
    Code::new(0b00000010, 8), // 29
    Code::new(0b00000011, 8), // 30
    Code::new(0b00011010, 8), // 31
    Code::new(0b00011011, 8), // 32
    Code::new(0b00010010, 8), // 33
    Code::new(0b00010011, 8), // 34
    Code::new(0b00010100, 8), // 35
    Code::new(0b00010101, 8), // 36
    Code::new(0b00010110, 8), // 37
    Code::new(0b00010111, 8), // 38
    Code::new(0b00101000, 8), // 39
    Code::new(0b00101001, 8), // 40
    Code::new(0b00101010, 8), // 41
    Code::new(0b00101011, 8), // 42
    Code::new(0b00101100, 8), // 43
    Code::new(0b00101101, 8), // 44
    Code::new(0b00000100, 8), // 45
    Code::new(0b00000101, 8), // 46
    Code::new(0b00001010, 8), // 47
    Code::new(0b00001011, 8), // 48
    Code::new(0b01010010, 8), // 49
    Code::new(0b01010011, 8), // 50
    Code::new(0b01010100, 8), // 51
    Code::new(0b01010101, 8), // 52
    Code::new(0b00100100, 8), // 53
    Code::new(0b00100101, 8), // 54
    Code::new(0b01011000, 8), // 55
    Code::new(0b01011001, 8), // 56
    Code::new(0b01011010, 8), // 57
    Code::new(0b01011011, 8), // 58
    Code::new(0b01001010, 8), // 59
    Code::new(0b01001011, 8), // 60
    Code::new(0b00110010, 8), // 61
    Code::new(0b00110011, 8), // 62
    Code::new(0b00110100, 8), // 63
];

/// Terminating codes for black runs of length `0..=63`
pub const BLACK_TERMINATING: [Code; 64] = [
    Code::new(0b0000110111, 10), // 0
    Code::new(0b010, 3), // 1
    Code::new(0b11, 2), // 2
    Code::new(0b10, 2), // 3
    Code::new(0b011, 3), // 4
    Code::new(0b0011, 4), // 5
    Code::new(0b0010, 4), // 6
    Code::new(0b00011, 5), // 7
    Code::new(0b000101, 6), // 8
    Code::new(0b000100, 6), // 9
    Code::new(0b0000100, 7), // 10
    Code::new(0b0000101, 7), // 11
    Code::new(0b0000111, 7), // 12
    Code::new(0b00000100, 8), // 13
    Code::new(0b00000111, 8), // 14
    Code::new(0b000011000, 9), // 15
    Code::new(0b0000010111, 10), // 16
    Code::new(0b0000011000, 10), // 17
    Code::new(0b0000001000, 10), // 18
    Code::new(0b00001100111, 11), // 19
    Code::new(0b00001101000, 11), // 20
    Code::new(0b00001101100, 11), // 21
    Code::new(0b00000110111, 11), // 22
    Code::new(0b00000101000, 11), // 23
    Code::new(0b00000010111, 11), // 24
    Code::new(0b00000011000, 11), // 25
    Code::new(0b000011001010, 12), // 26
    Code::new(0b000011001011, 12), // 27
    Code::new(0b000011001100, 12), // 28
    Code::new(0b000011001101, 12), // 29
    Code::new(0b000001101000, 12), // 30
    Code::new(0b000001101001, 12), // 31
    Code::new(0b000001101010, 12), // 32
    Code::new(0b000001101011, 12), // 33
    Code::new(0b000011010010, 12), // 34
    Code::new(0b000011010011, 12), // 35
    Code::new(0b000011010100, 12), // 36
    Code::new(0b000011010101, 12), // 37
    Code::new(0b000011010110, 12), // 38
    Code::new(0b000011010111, 12), // 39
    Code::new(0b000001101100, 12), // 40
    Code::new(0b000001101101, 12), // 41
    Code::new(0b000011011010, 12), // 42
    Code::new(0b000011011011, 12), // 43
    Code::new(0b000001010100, 12), // 44
    Code::new(0b000001010101, 12), // 45
    Code::new(0b000001010110, 12), // 46
    Code::new(0b000001010111, 12), // 47
    Code::new(0b000001100100, 12), // 48
    Code::new(0b000001100101, 12), // 49
    Code::new(0b000001010010, 12), // 50
    Code::new(0b000001010011, 12), // 51
    Code::new(0b000000100100, 12), // 52
    Code::new(0b000000110111, 12), // 53
    Code::new(0b000000111000, 12), // 54
    Code::new(0b000000100111, 12), // 55
    Code::new(0b000000101000, 12), // 56
    Code::new(0b000001011000, 12), // 57
    Code::new(0b000001011001, 12), // 58
    Code::new(0b000000101011, 12), // 59
    Code::new(0b000000101100, 12), // 60
    Code::new(0b000001011010, 12), // 61
    Code::new(0b000001100110, 12), // 62
    Code::new(0b000001100111, 12), // 63
];

/// Makeup codes for white runs of `64..=1728`, indexed by `run / 64 - 1`
pub const WHITE_MAKEUP: [Code; 27] = [
    Code::new(0b11011, 5), // 64
    Code::new(0b10010, 5), // 128
    Code::new(0b010111, 6), // 192
    Code::new(0b0110111, 7), // 256
    Code::new(0b00110110, 8), // 320
    Code::new(0b00110111, 8), // 384
    Code::new(0b01100100, 8), // 448
    Code::new(0b01100101, 8), // 512
    Code::new(0b01101000, 8), // 576
    Code::new(0b01100111, 8), // 640
    Code::new(0b011001100, 9), // 704
    Code::new(0b011001101, 9), // 768
    Code::new(0b011010010, 9), // 832
    Code::new(0b011010011, 9), // 896
    Code::new(0b011010100, 9), // 960
    Code::new(0b011010101, 9), // 1024
    Code::new(0b011010110, 9), // 1088
    Code::new(0b011010111, 9), // 1152
    Code::new(0b011011000, 9), // 1216
    Code::new(0b011011001, 9), // 1280
    Code::new(0b011011010, 9), // 1344
    Code::new(0b011011011, 9), // 1408
    Code::new(0b010011000, 9), // 1472
    Code::new(0b010011001, 9), // 1536
    Code::new(0b010011010, 9), // 1600
    Code::new(0b011000, 6), // 1664
    Code::new(0b010011011, 9), // 1728
];

/// Makeup codes for black runs of `64..=1728`, indexed by `run / 64 - 1`
pub const BLACK_MAKEUP: [Code; 27] = [
    Code::new(0b0000001111, 10), // 64
    Code::new(0b000011001000, 12), // 128
    Code::new(0b000011001001, 12), // 192
    Code::new(0b000001011011, 12), // 256
    Code::new(0b000000110011, 12), // 320
    Code::new(0b000000110100, 12), // 384
    Code::new(0b000000110101, 12), // 448
    Code::new(0b0000001101100, 13), // 512
    Code::new(0b0000001101101, 13), // 576
    Code::new(0b0000001001010, 13), // 640
    Code::new(0b0000001001011, 13), // 704
    Code::new(0b0000001001100, 13), // 768
    Code::new(0b0000001001101, 13), // 832
    Code::new(0b0000001110010, 13), // 896
    Code::new(0b0000001110011, 13), // 960
    Code::new(0b0000001110100, 13), // 1024
    Code::new(0b0000001110101, 13), // 1088
    Code::new(0b0000001110110, 13), // 1152
    Code::new(0b0000001110111, 13), // 1216
    Code::new(0b0000001010010, 13), // 1280
    Code::new(0b0000001010011, 13), // 1344
    Code::new(0b0000001010100, 13), // 1408
    Code::new(0b0000001010101, 13), // 1472
    Code::new(0b0000001011010, 13), // 1536
    Code::new(0b0000001011011, 13), // 1600
    Code::new(0b0000001100100, 13), // 1664
    Code::new(0b0000001100101, 13), // 1728
];

/// Makeup codes for runs of `1792..=2560`, shared by both colors
pub const EXTENDED_MAKEUP: [Code; 13] = [
    Code::new(0b00000001000, 11), // 1792
    Code::new(0b00000001100, 11), // 1856
    Code::new(0b00000001101, 11), // 1920
    Code::new(0b000000010010, 12), // 1984
    Code::new(0b000000010011, 12), // 2048
    Code::new(0b000000010100, 12), // 2112
    Code::new(0b000000010101, 12), // 2176
    Code::new(0b000000010110, 12), // 2240
    Code::new(0b000000010111, 12), // 2304
    Code::new(0b000000011100, 12), // 2368
    Code::new(0b000000011101, 12), // 2432
    Code::new(0b000000011110, 12), // 2496
    Code::new(0b000000011111, 12), // 2560
];
