//! Line-ending normalization and line splitting.

use std::borrow::Cow;

/// Rewrite CRLF and bare CR line endings to `\n`.
///
/// # Returns
/// The input unchanged (borrowed) when it contains no `\r`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split normalized text on `\n`.
///
/// Every separator produces a boundary: `""` yields one empty line and a
/// trailing newline yields a trailing empty line. Run
/// [`normalize_line_endings`] first; a stray `\r` stays part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
