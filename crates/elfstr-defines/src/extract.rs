//! Extraction of object-like `#define` lines.
//!
//! Only the simplest shape is recognized:
//!
//! ```text
//! #define NAME VALUE [anything...] [/* comment */]
//! ```
//!
//! Function-like macros and values containing parentheses are skipped, as
//! are lines with no value token. Nothing here is an error; lines that do not
//! match are simply ignored.

use crate::definition::RawDefinition;
use tracing::trace;

const DEFINE: &str = "#define ";

/// Extract definitions from header lines, preserving line order.
pub fn extract_definitions<I, S>(lines: I) -> Vec<RawDefinition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_define(line.as_ref()))
        .collect()
}

/// Parse a single line as a `#define`.
///
/// Returns `None` for anything that is not a simple object-like definition.
pub fn parse_define(line: &str) -> Option<RawDefinition> {
    let rest = line.trim().strip_prefix(DEFINE)?;

    let mut tokens = rest.split_whitespace();
    let key = tokens.next()?;
    let Some(value) = tokens.next() else {
        trace!(key, "skipping define without a value");
        return None;
    };

    if has_paren(key) || has_paren(value) {
        trace!(key, value, "skipping parenthesized define");
        return None;
    }

    Some(RawDefinition {
        key: key.to_string(),
        value: value.to_string(),
        comment: trailing_comment(rest),
    })
}

fn has_paren(token: &str) -> bool {
    token.contains(['(', ')'])
}

/// Text of the first block comment, if it closes at the end of the line.
fn trailing_comment(rest: &str) -> Option<String> {
    let body = rest.split("/*").nth(1)?;
    let body = body.strip_suffix("*/")?;
    Some(body.trim().to_string())
}
