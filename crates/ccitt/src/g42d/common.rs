use crate::Color;

/// Find the next changing element in `line`, to the right of `start`
///
/// A `start` of `None` is the imaginary white pixel in front of the line.
/// Returns `line.len()` (the imaginary changing element after the line)
/// if the color does not change anymore.
pub fn next_changing_element(line: &[Color], start: Option<usize>) -> usize {
    let (from, color) = match start {
        None => (0, Color::White),
        Some(s) if s >= line.len() => return line.len(),
        Some(s) => (s, line[s]),
    };
    line[from..]
        .iter()
        .position(|&c| c != color)
        .map_or(line.len(), |offset| from + offset)
}
