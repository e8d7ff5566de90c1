//! Content-line folding.

use crate::constants::FOLD_WIDTH;

/// Fold a content line so no physical line exceeds [`FOLD_WIDTH`] octets.
///
/// Continuation lines start with a single space, which counts toward the
/// width. Multi-byte characters are never split. The result has no trailing
/// line break.
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 3);
    let mut width = 0;

    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > FOLD_WIDTH {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += len;
    }

    folded
}
