//! Common DDL parsing utilities

use crate::ddl::{DdlOptions, DdlResult};

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Strip a leading run and a trailing run of quote characters (`'` or `"`).
///
/// The literal is normalized, never rejected: `'/tmp/a.csv'`, `"/tmp/a.csv"`
/// and `/tmp/a.csv` all yield `/tmp/a.csv`.
pub fn normalize_path_literal(raw: &str) -> String {
    raw.trim_start_matches(is_quote)
        .trim_end_matches(is_quote)
        .to_string()
}

/// Remove one pair of matching surrounding quotes, if present.
pub fn unquote(value: &str) -> &str {
    let value = value.trim();
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && is_quote(bytes[0] as char) && bytes[0] == bytes[bytes.len() - 1] {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Split a leading literal off `input`: a quoted string (up to its closing
/// quote) or, unquoted, everything up to the next whitespace.
///
/// Returns `(literal, rest)` with the literal's quotes kept.
pub fn split_literal(input: &str) -> DdlResult<(&str, &str)> {
    let input = input.trim_start();
    let first = input
        .chars()
        .next()
        .ok_or_else(|| "Expected a literal".to_string())?;

    if is_quote(first) {
        let close = input[1..]
            .find(first)
            .ok_or_else(|| format!("Unterminated literal: {}", input))?;
        let end = close + 2;
        Ok((&input[..end], input[end..].trim()))
    } else {
        let end = input.find(char::is_whitespace).unwrap_or(input.len());
        Ok((&input[..end], input[end..].trim()))
    }
}

/// Parse a `WITH (key = 'value', ...)` clause.
///
/// Keys are lower-cased; values lose their surrounding quotes. Commas inside
/// quoted values do not split entries.
pub fn parse_with_options(clause: &str) -> DdlResult<DdlOptions> {
    let clause = clause.trim();
    let upper = clause.to_ascii_uppercase();
    if !upper.starts_with("WITH") {
        return Err(format!("Expected WITH clause, found '{}'", clause));
    }

    let body = clause["WITH".len()..].trim();
    let body = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .ok_or_else(|| "WITH options must be enclosed in parentheses".to_string())?;

    let mut options = DdlOptions::new();
    for entry in split_unquoted(body, ',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err("Empty entry in WITH options".to_string());
        }

        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Expected key = value in WITH options, found '{}'", entry))?;

        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(format!("Missing option name in '{}'", entry));
        }
        options.insert(key, unquote(value).to_string());
    }

    if options.is_empty() {
        return Err("WITH clause requires at least one option".to_string());
    }

    Ok(options)
}

/// Split on `separator` outside of quoted sections.
fn split_unquoted(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if is_quote(c) => quote = Some(c),
            None if c == separator => {
                parts.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            None => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Parse `<COMMAND> <table> <KEYWORD> '<path>' [WITH (...)]`, shared by the
/// table backup/restore statements.
///
/// Returns the table name, the raw path literal and the options.
pub fn parse_table_file_statement<'a>(
    sql: &'a str,
    command: &str,
    keyword: &str,
) -> DdlResult<(String, &'a str, Option<DdlOptions>)> {
    let sql_trimmed = sql.trim().trim_end_matches(';').trim_end();
    let sql_upper = sql_trimmed.to_ascii_uppercase();

    let mut tokens = sql_upper.split_whitespace();
    let command_matches = command
        .split_whitespace()
        .all(|expected| tokens.next() == Some(expected));
    if !command_matches {
        return Err(format!("Expected {} statement", command));
    }

    // Skip the command words in the original-case text
    let mut remaining = sql_trimmed;
    for _ in command.split_whitespace() {
        remaining = remaining.trim_start();
        let end = remaining.find(char::is_whitespace).unwrap_or(remaining.len());
        remaining = &remaining[end..];
    }
    let remaining = remaining.trim();

    let (table, after_table) = split_literal(remaining)
        .map_err(|_| "Table name is required".to_string())?;
    if table.eq_ignore_ascii_case(keyword) {
        return Err("Table name is required".to_string());
    }
    let table_name = unquote(table).to_string();
    if table_name.is_empty() {
        return Err("Table name is required".to_string());
    }

    let after_keyword = match after_table.get(..keyword.len()) {
        Some(word) if word.eq_ignore_ascii_case(keyword) => &after_table[keyword.len()..],
        _ => return Err(format!("Expected {} clause in {}", keyword, command)),
    };
    if !after_keyword.starts_with(char::is_whitespace) {
        return Err(format!("Expected {} clause in {}", keyword, command));
    }

    let (path, rest) = split_literal(after_keyword)
        .map_err(|e| format!("File path is required: {}", e))?;

    let options = if rest.is_empty() {
        None
    } else {
        Some(parse_with_options(rest)?)
    };

    Ok((table_name, path, options))
}
