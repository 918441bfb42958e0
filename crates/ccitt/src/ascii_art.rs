//! # Draw bitmap as ascii-art
use std::fmt;

use crate::Color;

struct BorderDrawing {
    left: char,
    middle: char,
    right: char,
}

struct BoxDrawing {
    top: BorderDrawing,
    left: char,
    right: char,
    bottom: BorderDrawing,
    ink: char,
    no_ink: char,
}

const UNICODE: &BoxDrawing = &BoxDrawing {
    top: BorderDrawing {
        left: '╔',
        middle: '═',
        right: '╗',
    },
    left: '║',
    right: '║',
    bottom: BorderDrawing {
        left: '╚',
        middle: '═',
        right: '╝',
    },
    ink: '█',
    no_ink: ' ',
};

fn border<W: fmt::Write>(w: &mut W, b: &BorderDrawing, width: usize) -> fmt::Result {
    w.write_char(b.left)?;
    for _ in 0..width {
        w.write_char(b.middle)?;
    }
    w.write_char(b.right)?;
    w.write_char('\n')
}

/// Draw the rows of `pixels` using box drawing characters
pub fn ascii_art<W: fmt::Write>(w: &mut W, pixels: &[Color], width: usize) -> fmt::Result {
    let b = UNICODE;
    border(w, &b.top, width)?;
    for row in pixels.chunks(width.max(1)) {
        w.write_char(b.left)?;
        for &color in row {
            w.write_char(match color {
                Color::Black => b.ink,
                Color::White => b.no_ink,
            })?;
        }
        w.write_char(b.right)?;
        w.write_char('\n')?;
    }
    border(w, &b.bottom, width)
}
