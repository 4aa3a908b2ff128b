//! Locator for embedded-constant regions in the target file.
//!
//! A region is the full span of a declaration of the form
//! `const <NAME>: &str = r#"<payload>"#;` where the payload may contain
//! anything except the closing `"#;` sequence, line breaks included. The
//! locator scans byte offsets explicitly rather than pattern-matching the
//! whole declaration, so there is no ambiguity about where a region ends:
//! the first `"#;` after the opening delimiter closes it.

/// Byte spans of one located region.
///
/// `start..end` covers the whole declaration including the trailing `;`.
/// `payload_start..payload_end` covers the text between the raw-string
/// delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
    pub payload_start: usize,
    pub payload_end: usize,
}

/// Closing delimiter of an embedded raw-string constant.
const CLOSE: &str = "\"#;";

/// Opening token for a named constant, up to and including the raw-string
/// delimiter.
fn open_token(constant_name: &str) -> String {
    format!("const {constant_name}: &str = r#\"")
}

/// Find the first region for `constant_name` at or after byte offset `from`.
///
/// Returns `None` if no opening token occurs, or if an opening token is never
/// closed (an unterminated declaration is not a region).
pub fn find_region(text: &str, constant_name: &str, from: usize) -> Option<Region> {
    let open = open_token(constant_name);
    let start = from + text[from..].find(&open)?;
    let payload_start = start + open.len();
    let payload_end = payload_start + text[payload_start..].find(CLOSE)?;
    Some(Region {
        start,
        end: payload_end + CLOSE.len(),
        payload_start,
        payload_end,
    })
}

/// Build a replacement declaration for `constant_name` holding `payload`.
pub fn declaration(constant_name: &str, payload: &str) -> String {
    format!("const {constant_name}: &str = r#\"{payload}\"#;")
}
