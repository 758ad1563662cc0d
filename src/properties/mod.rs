//! Parser for the properties-style text format used by `.mui` files.
//!
//! The format follows the conventional flat key/value syntax: `#` or `!`
//! comment lines, `key=value` / `key:value` / whitespace-separated pairs,
//! trailing-backslash line continuation, and the usual escape sequences
//! (`\n`, `\t`, `\r`, `\f`, `\uXXXX`, `\\` and friends).

use std::collections::HashMap;

use thiserror::Error;

/// Error raised for content the parser cannot interpret.
///
/// Only escape sequences can actually be malformed; separator-less lines
/// are valid and produce a key with an empty value.
#[derive(Error, Debug)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Parse properties-format text into a flat key/value table.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn parse(content: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut table = HashMap::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let line_number = index + 1;
        let mut logical = line.to_string();
        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_pair(&logical);
        let key = unescape(key, line_number)?;
        let value = unescape(value, line_number)?;
        table.insert(key, value);
    }

    Ok(table)
}

/// A logical line continues when it ends with an odd run of backslashes.
fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped separator.
///
/// The key ends at the first unescaped `=`, `:` or whitespace character;
/// a whitespace terminator may be followed by one optional `=`/`:` before
/// the value starts.
fn split_pair(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if c == '=' || c == ':' {
            return (&line[..i], line[i + 1..].trim_start());
        }
        if c.is_whitespace() {
            let rest = line[i..].trim_start();
            let rest = match rest.strip_prefix(['=', ':']) {
                Some(after) => after.trim_start(),
                None => rest,
            };
            return (&line[..i], rest);
        }
    }
    (line, "")
}

fn unescape(text: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return Err(ParseError {
                        line,
                        message: format!("truncated \\u escape '\\u{hex}'"),
                    });
                }
                let code = u32::from_str_radix(&hex, 16).map_err(|_| ParseError {
                    line,
                    message: format!("invalid \\u escape '\\u{hex}'"),
                })?;
                let decoded = char::from_u32(code).ok_or_else(|| ParseError {
                    line,
                    message: format!("\\u{hex} is not a valid character"),
                })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    Ok(out)
}
