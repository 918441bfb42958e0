#![warn(missing_docs)]
//! # CCITT Group 4 encoder
//!
//! Codes bi-level images as ITU-T T.6 ("MMR") bitstreams, as used by
//! fax and by TIFF and PDF images with `CCITTFaxDecode` (`K < 0`).
//!
//! ```
//! use ccitt_g4::{g42d::encode, Color};
//!
//! let pixels = vec![Color::Black; 8];
//! let data = encode(8, 1, &pixels, false).unwrap();
//! assert_eq!(data, [0x26, 0xA2, 0x80, 0x08, 0x00, 0x80]);
//! ```

mod ascii_art;
pub mod bits;
mod color;
mod error;
pub mod g42d;

pub use ascii_art::ascii_art;
pub use color::Color;
pub use error::{FaxError, FaxResult};
