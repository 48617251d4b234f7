//! Directive argument parsing.
//!
//! Parses the `[content]{key="value"}` syntax from directives.

use std::collections::HashMap;

/// Parsed arguments from directive syntax.
///
/// Represents the content and named options extracted from a directive:
/// `::name[content]{key="value"}`
///
/// # Example
///
/// ```
/// use qr_directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("hello", r#"size="300" color=ff0000"#);
/// assert_eq!(args.content, "hello");
/// assert_eq!(args.get("size"), Some("300"));
/// assert_eq!(args.get_or("color", "000000"), "ff0000");
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Content from brackets: `[content]` (empty string if not provided).
    pub content: String,
    /// Named options: `{key="value"}`.
    pub options: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse content and options string into structured arguments.
    ///
    /// # Arguments
    ///
    /// * `content` - The content from brackets `[content]`
    /// * `options_str` - The options string from braces `{...}` (without braces)
    #[must_use]
    pub fn parse(content: &str, options_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        // Parse options: key="value", key='value', or key=value
        let mut remaining = options_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.options.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else {
                // Skip unrecognized character
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str();
            }
        }

        args
    }

    /// Get an option value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Get an option value, falling back to `default` when the option is
    /// absent or empty.
    ///
    /// Empty values count as absent so that `::qr[x]{size=""}` behaves like
    /// `::qr[x]`.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

}

/// Parse a key-value pair from the options string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        // Unquoted value (until whitespace)
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}
