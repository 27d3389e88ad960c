//! NSV (newline-separated values) encoding and decoding
//!
//! NSV is a flat, line-oriented tabular format: every non-empty line holds
//! one cell, a blank line terminates the current row. Embedded newlines and
//! backslashes are escaped (`\n`, `\\`), and an empty cell is written as the
//! single character `\` so it cannot be mistaken for a row terminator.
//!
//! `decode` and `encode` are pure functions with no shared state. They never
//! fail: malformed escape sequences decode as literal text, and any table
//! value (including ragged rows) encodes cleanly.

/// What to do with an unterminated final row when input ends.
///
/// A well-formed NSV stream terminates every row with a blank line, so cells
/// that arrive after the last terminator are in limbo when the input runs
/// out. The legacy behavior is to drop them; `Flush` closes the pending row
/// instead, also treating any trailing text after the last newline as a
/// final cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trailing {
    /// Discard an in-progress row that was never terminated (legacy behavior).
    #[default]
    Discard,
    /// Close the in-progress row and keep it.
    Flush,
}

/// Decode NSV text into rows of string cells.
///
/// Equivalent to `decode_with(text, Trailing::Discard)`: cells after the
/// last row terminator are dropped. Empty input yields an empty table.
pub fn decode(text: &str) -> Vec<Vec<String>> {
    decode_with(text, Trailing::Discard)
}

/// Decode NSV text, choosing how an unterminated final row is handled.
pub fn decode_with(text: &str, trailing: Trailing) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut start = 0;

    // Scan for newline boundaries directly; a raw '\n' never occurs inside
    // an encoded cell, only as a cell or row terminator. Byte positions are
    // safe here because '\n' cannot appear inside a multi-byte UTF-8
    // sequence.
    for (pos, byte) in text.bytes().enumerate() {
        if byte != b'\n' {
            continue;
        }
        let segment = &text[start..pos];
        if segment.is_empty() {
            // Blank line: terminate the current row, even if it has no cells.
            rows.push(std::mem::take(&mut row));
        } else {
            row.push(unescape_cell(segment));
        }
        start = pos + 1;
    }

    if trailing == Trailing::Flush {
        let tail = &text[start..];
        if !tail.is_empty() {
            row.push(unescape_cell(tail));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    rows
}

/// Encode rows of string cells as NSV text.
///
/// Every cell line and every row terminator is emitted, including the
/// terminator after the last row, so the output always re-decodes to the
/// same table. Rows of differing lengths are encoded as-is.
pub fn encode(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for cell in row {
            escape_cell_into(cell, &mut out);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Un-escape one non-empty cell segment.
///
/// The segment `\` alone is the empty-cell marker. Otherwise `\\` becomes a
/// literal backslash and `\n` a literal newline, resolved in a single
/// left-to-right pass so that in `\\n` the leading pair wins and the `n`
/// stays literal. A backslash before any other character (or at end of
/// segment) is kept verbatim.
fn unescape_cell(segment: &str) -> String {
    if segment == "\\" {
        return String::new();
    }
    if !segment.contains('\\') {
        return segment.to_string();
    }

    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Escape one cell and append it to `out`, without the trailing newline.
fn escape_cell_into(cell: &str, out: &mut String) {
    if cell.is_empty() {
        out.push('\\');
        return;
    }
    if !cell.contains('\\') && !cell.contains('\n') {
        out.push_str(cell);
        return;
    }
    // One pass over the characters: each source character maps to exactly
    // one output sequence, so a backslash produced for an escaped newline
    // can never be re-escaped.
    for c in cell.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
}
