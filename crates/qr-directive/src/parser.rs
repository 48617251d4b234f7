//! Directive syntax parsing.
//!
//! Parses the leaf directive form: `::name[content]{options}`

use super::DirectiveArgs;

/// A leaf directive parsed out of a line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedLeaf {
    pub(crate) name: String,
    pub(crate) args: DirectiveArgs,
}

/// Parse a line for leaf directive syntax.
///
/// Returns the parsed directive and the byte range it occupies, or `None`
/// if the line contains no directive.
pub(crate) fn parse_leaf(line: &str) -> Option<(ParsedLeaf, usize, usize)> {
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find("::") {
        let start = search_from + offset;
        let colon_count = line[start..].chars().take_while(|&c| c == ':').count();

        // Exactly two colons marks a leaf; anything else is inline or
        // container syntax, which this host does not handle.
        if colon_count != 2 {
            search_from = start + colon_count;
            continue;
        }

        let mut pos = start + 2;
        let after_colons = &line[pos..];

        // Name ends at [, {, or whitespace
        let name_end = after_colons
            .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
            .unwrap_or(after_colons.len());

        let name = &after_colons[..name_end];
        if !is_valid_directive_name(name) {
            search_from = start + 2;
            continue;
        }

        pos += name_end;

        let (content, content_consumed) = parse_delimited(&line[pos..], '[', ']');
        pos += content_consumed;

        let (options_str, options_consumed) = parse_delimited(&line[pos..], '{', '}');
        pos += options_consumed;

        let parsed = ParsedLeaf {
            name: name.to_owned(),
            args: DirectiveArgs::parse(&content, &options_str),
        };

        return Some((parsed, start, pos));
    }

    None
}

/// Check if a name is a valid directive name.
///
/// Valid names contain only alphanumeric characters, hyphens, and underscores.
fn is_valid_directive_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse a delimited section like `[content]` or `{options}`.
///
/// Handles nesting of the delimiter pair. Returns the inner text and the
/// bytes consumed; `("", 0)` when the section is missing or unclosed.
fn parse_delimited(s: &str, open: char, close: char) -> (String, usize) {
    if !s.starts_with(open) {
        return (String::new(), 0);
    }

    let mut depth = 0;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (s[open.len_utf8()..i].to_owned(), i + close.len_utf8());
            }
        }
    }

    (String::new(), 0)
}
