// ABOUTME: PostgreSQL identifier quoting and positional placeholder tokens
// ABOUTME: Keeps reserved words and mixed-case names valid inside generated statements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Quote `name` as a PostgreSQL identifier
///
/// The name is cut at the first NUL byte, embedded double quotes are doubled,
/// and the result is wrapped in double quotes.
///
/// ```
/// use rowkit::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("order"), r#""order""#);
/// assert_eq!(quote_identifier(r#"odd"name"#), r#""odd""name""#);
/// ```
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    let name = name.find('\0').map_or(name, |end| &name[..end]);
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Positional placeholder for the 1-based `position`
#[must_use]
pub fn placeholder(position: usize) -> String {
    format!("${position}")
}
