//! Row-by-row encoder for incremental input

use std::io::{self, Write};

use log::{debug, trace};

use super::{
    encode::{encode_row, EncodeOptions, ModeCounts},
    tables::EOFB,
};
use crate::{
    bits::{BitWriter, CodeSink},
    Color, FaxError, FaxResult,
};

/// A group 4 encoder that accepts one gray byte per pixel
///
/// Every byte is thresholded with [`Color::from_gray`]. A row is coded as
/// soon as `width` bytes have been written; [`StreamEncoder::finish`]
/// appends the EOFB.
///
/// Once the output failed, every later call returns an error.
#[derive(Debug)]
pub struct StreamEncoder<W: Write> {
    output: BitWriter<W>,
    width: usize,
    byte_align: bool,
    reference: Vec<Color>,
    current: Vec<Color>,
    /// Pixels in `current`
    filled: usize,
    rows: usize,
    counts: ModeCounts,
    failed: bool,
    /// Error held back by a `write` that had consumed some bytes
    deferred: Option<io::Error>,
}

impl<W: Write> StreamEncoder<W> {
    /// Create a new encoder for rows of `width` pixels
    pub fn new(writer: W, width: usize, options: EncodeOptions) -> FaxResult<Self> {
        if width == 0 {
            return Err(FaxError::InvalidWidth);
        }
        Ok(Self {
            output: BitWriter::with_fill_order(writer, options.fill_order),
            width,
            byte_align: options.byte_align,
            reference: Vec::new(),
            current: vec![Color::White; width],
            filled: 0,
            rows: 0,
            counts: ModeCounts::default(),
            failed: false,
            deferred: None,
        })
    }

    /// Number of rows coded so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Modes used for the rows coded so far
    pub fn counts(&self) -> ModeCounts {
        self.counts
    }

    /// Add a single pixel, coding the row once it is complete
    pub fn push(&mut self, color: Color) -> FaxResult<()> {
        if self.failed {
            return Err(FaxError::Poisoned);
        }
        self.current[self.filled] = color;
        self.filled += 1;
        if self.filled == self.width {
            self.filled = 0;
            if let Err(e) = self.code_row() {
                self.failed = true;
                return Err(e);
            }
        }
        Ok(())
    }

    fn code_row(&mut self) -> FaxResult<()> {
        let row_counts = encode_row(&self.current, &self.reference, &mut self.output)?;
        trace!("row {}: {:?}", self.rows, row_counts);
        if self.byte_align {
            self.output.align()?;
        }
        self.counts += row_counts;
        self.rows += 1;
        if self.reference.is_empty() {
            self.reference = vec![Color::White; self.width];
        }
        std::mem::swap(&mut self.reference, &mut self.current);
        Ok(())
    }

    /// Write the EOFB and return the underlying writer
    pub fn finish(mut self) -> FaxResult<W> {
        if let Some(e) = self.deferred.take() {
            return Err(FaxError::Io(e));
        }
        if self.failed {
            return Err(FaxError::Poisoned);
        }
        if self.filled > 0 {
            return Err(FaxError::IncompleteRow {
                filled: self.filled,
                width: self.width,
            });
        }
        self.output.write_code(EOFB)?;
        let writer = self.output.finish()?;
        debug!(
            "Encoded {}x{} image in {} mode codes",
            self.width,
            self.rows,
            self.counts.total()
        );
        Ok(writer)
    }
}

fn into_io_error(e: FaxError) -> io::Error {
    match e {
        FaxError::Io(e) => e,
        e => io::Error::new(io::ErrorKind::Other, e),
    }
}

impl<W: Write> Write for StreamEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(e) = self.deferred.take() {
            return Err(e);
        }
        for (n, &byte) in buf.iter().enumerate() {
            if let Err(e) = self.push(Color::from_gray(byte)) {
                let e = into_io_error(e);
                if n == 0 {
                    return Err(e);
                }
                self.deferred = Some(e);
                return Ok(n);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.deferred.take() {
            return Err(e);
        }
        self.output.flush()
    }
}
