//! Frontmatter parsing utilities.
//!
//! Used only to confirm that a patched SKILL.md still reads as a mapping
//! carrying the values that were written into it.

use serde_yaml::{Mapping, Value};

use crate::error::ParseError;

/// Parse YAML frontmatter from file content.
///
/// Returns the frontmatter mapping; the body is ignored.
pub fn parse_frontmatter(content: &str) -> Result<Mapping, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let frontmatter = split_frontmatter(content)?;

    match serde_yaml::from_str::<Value>(frontmatter)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(ParseError::NotAMapping),
    }
}

fn split_frontmatter(content: &str) -> Result<&str, ParseError> {
    let mut lines = content.split_inclusive('\n');
    let Some(first_line) = lines.next() else {
        return Err(ParseError::MissingFrontmatter);
    };

    if trim_line_ending(first_line) != "---" {
        return Err(ParseError::MissingFrontmatter);
    }

    let mut offset = first_line.len();
    for line in lines {
        if trim_line_ending(line) == "---" {
            return Ok(&content[first_line.len()..offset]);
        }
        offset += line.len();
    }

    Err(ParseError::UnclosedFrontmatter)
}

/// Strip a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
