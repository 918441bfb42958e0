//! # CCITT Group 4 2D-encoding
//!
//! Spec: ITU-T Recommendation T.6 (11/88) <https://www.itu.int/rec/T-REC-T.6-198811-I/en>

mod common;
mod encode;
mod stream;
pub mod tables;

pub use common::next_changing_element;
pub use encode::{
    encode, encode_into, encode_row, encode_run, encode_with, EncodeOptions, Encoded, ModeCounts,
};
pub use stream::StreamEncoder;
