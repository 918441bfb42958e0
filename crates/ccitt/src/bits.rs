//! # Bit Writer and Code Sink

use std::io::{self, Write};

use crate::FaxResult;

/// A variable length code
///
/// The lowest `len` bits of `bits` are the code word, most significant first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    /// The code word
    pub bits: u32,
    /// Number of bits in the code word
    pub len: u8,
}

impl Code {
    /// Create a new code
    pub const fn new(bits: u32, len: u8) -> Self {
        Self { bits, len }
    }

    /// Iterate over the bits of the code, most significant first
    pub fn iter(self) -> impl Iterator<Item = bool> {
        (0..self.len).rev().map(move |i| (self.bits >> i) & 1 == 1)
    }
}

/// Something that accepts codes
pub trait CodeSink {
    /// Append a code to the output
    fn write_code(&mut self, code: Code) -> FaxResult<()>;
    /// Pad with zero bits up to the next byte boundary
    fn align(&mut self) -> FaxResult<()>;
}

/// Order of writing/reading bits to/from a byte (see TIFF spec)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillOrder {
    /// A byte is filled from most- to least-significant bit
    MsbToLsb = 1,
    /// A byte is filled from least- to most-significant bit
    LsbToMsb = 2,
}

impl Default for FillOrder {
    fn default() -> Self {
        FillOrder::MsbToLsb
    }
}

impl FillOrder {
    fn apply(&self, byte: u8) -> u8 {
        match self {
            FillOrder::MsbToLsb => byte,
            FillOrder::LsbToMsb => byte.reverse_bits(),
        }
    }
}

/// A bitwise writer
#[derive(Debug)]
pub struct BitWriter<W> {
    inner: W,
    fill_order: FillOrder,
    curr: u8,
    /// number of bits in `curr`
    used: u8,
}

impl Default for BitWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> BitWriter<W> {
    /// Creates a new instance
    pub fn new(inner: W) -> Self {
        Self::with_fill_order(inner, FillOrder::MsbToLsb)
    }

    /// Creates a new instance with the given bit order
    pub fn with_fill_order(inner: W, fill_order: FillOrder) -> Self {
        Self {
            inner,
            fill_order,
            curr: 0,
            used: 0,
        }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// The number of bits waiting for the next byte
    pub fn pending_bits(&self) -> u8 {
        self.used
    }

    fn emit(&mut self) -> io::Result<()> {
        let byte = self.fill_order.apply(self.curr);
        self.inner.write_all(&[byte])?;
        self.curr = 0;
        self.used = 0;
        Ok(())
    }

    /// Write a single bit
    pub fn write(&mut self, b: bool) -> io::Result<()> {
        self.write_bits(u32::from(b), 1)
    }

    /// Write the lowest `len` bits of `val`
    pub fn write_bits(&mut self, val: u32, len: u8) -> io::Result<()> {
        debug_assert!(len <= 32);
        let mut todo = len;
        while todo > 0 {
            let take = todo.min(8 - self.used);
            let chunk = (u64::from(val) >> (todo - take)) as u32 & ((1 << take) - 1);
            self.curr = ((u32::from(self.curr) << take) | chunk) as u8;
            self.used += take;
            todo -= take;
            if self.used == 8 {
                self.emit()?;
            }
        }
        Ok(())
    }

    /// Pad the current byte with zeros
    pub fn pad(&mut self) -> io::Result<()> {
        if self.used > 0 {
            self.curr <<= 8 - self.used;
            self.emit()?;
        }
        Ok(())
    }

    /// Flush the underlying writer, keeping a partial byte
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Pad, flush and return the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.pad()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> CodeSink for BitWriter<W> {
    fn write_code(&mut self, code: Code) -> FaxResult<()> {
        self.write_bits(code.bits, code.len)?;
        Ok(())
    }

    fn align(&mut self) -> FaxResult<()> {
        self.pad()?;
        Ok(())
    }
}
