//! Directive processor.
//!
//! Scans markdown line by line, dispatches registered leaf directives, and
//! splices their node output back into the document as HTML.

use super::fence::FenceTracker;
use super::parser::{ParsedLeaf, parse_leaf};
use super::{DirectiveOutput, LeafDirective, Node};

/// Processor for leaf directives in `CommonMark` documents.
///
/// Converts `::name[content]{options}` occurrences to HTML that passes
/// through a `CommonMark` renderer unchanged. Directives inside fenced code
/// blocks and directives with no registered handler are left as-is.
///
/// # Example
///
/// ```
/// use qr_directive::{DirectiveProcessor, QrDirective};
///
/// let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);
///
/// let output = processor.process("::qr[https://example.com]");
/// assert!(output.contains("api.qrserver.com"));
/// ```
pub struct DirectiveProcessor {
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    fence: FenceTracker,
    warnings: Vec<String>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a new directive processor with no handlers registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            leaf_handlers: Vec::new(),
            fence: FenceTracker::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    /// Process a markdown document, replacing handled directives.
    ///
    /// Unhandled input is reproduced byte for byte, including CR LF line
    /// endings and any trailing newline.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        // Splitting on '\n' keeps any '\r' inside the segment, so CR LF
        // documents round-trip unchanged.
        for (idx, line) in input.split('\n').enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let processed = self.process_line(line, idx + 1);
            output.push_str(&processed);
        }

        output
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        self.fence.update(line);

        // Skip directive processing inside code fences
        if self.fence.in_fence() {
            return line.to_owned();
        }

        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while !remaining.is_empty() {
            let Some((directive, start, end)) = parse_leaf(remaining) else {
                result.push_str(remaining);
                break;
            };

            result.push_str(&remaining[..start]);

            match self.dispatch(directive, line_num) {
                Some(html) => result.push_str(&html),
                None => result.push_str(&remaining[start..end]),
            }

            remaining = &remaining[end..];
        }

        result
    }

    /// Dispatch a parsed directive to its handler.
    ///
    /// Returns the replacement HTML, or `None` to pass the directive
    /// through unchanged.
    fn dispatch(&mut self, directive: ParsedLeaf, line_num: usize) -> Option<String> {
        let ParsedLeaf { name, args } = directive;

        let idx = self.leaf_handlers.iter().position(|h| h.name() == name)?;

        // Required-argument validation happens here, upstream of the
        // handler; handlers never see a missing required content argument.
        if self.leaf_handlers[idx].requires_content() && args.content.is_empty() {
            self.warnings.push(format!(
                "line {line_num}: ::{name} requires a content argument"
            ));
            return None;
        }

        match self.leaf_handlers[idx].process(args) {
            DirectiveOutput::Nodes(nodes) => {
                let html: Vec<String> = nodes.iter().map(Node::to_html).collect();
                Some(html.join(""))
            }
            DirectiveOutput::Skip => None,
        }
    }

    /// Get all warnings generated during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectiveArgs, Node, QrDirective};
    use pretty_assertions::assert_eq;

    struct AlwaysSkip;

    impl LeafDirective for AlwaysSkip {
        fn name(&self) -> &'static str {
            "skipper"
        }

        fn process(&mut self, _args: DirectiveArgs) -> DirectiveOutput {
            DirectiveOutput::Skip
        }
    }

    #[test]
    fn test_replaces_qr_directive() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let output = processor.process("Scan ::qr[hello world] to continue.");
        assert_eq!(
            output,
            r#"Scan <img src="https://api.qrserver.com/v1/create-qr-code/?size=150x150&amp;data=hello%20world&amp;color=000000" alt="QR Code for hello world" title="QR Code: hello world"> to continue."#
        );
    }

    #[test]
    fn test_options_reach_handler() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let output = processor.process(r#"::qr[x]{size="300" color="ff0000"}"#);
        assert!(output.contains("size=300x300"));
        assert!(output.contains("color=ff0000"));
    }

    #[test]
    fn test_unknown_directive_passthrough() {
        let mut processor = DirectiveProcessor::new();

        let output = processor.process("::unknown[content]");
        assert_eq!(output, "::unknown[content]");
    }

    #[test]
    fn test_skip_passthrough() {
        let mut processor = DirectiveProcessor::new().with_leaf(AlwaysSkip);

        let output = processor.process("::skipper[content]{a=1}");
        assert_eq!(output, "::skipper[content]{a=1}");
    }

    #[test]
    fn test_missing_required_content_warns_and_passes_through() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let output = processor.process("::qr");
        assert_eq!(output, "::qr");

        let warnings = processor.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("line 1"));
        assert!(warnings[0].contains("::qr"));
    }

    #[test]
    fn test_code_fence_skipping() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let input = "```\n::qr[inside fence]\n```\n::qr[outside]";
        let output = processor.process(input);

        assert!(output.contains("::qr[inside fence]"));
        assert!(!output.contains("::qr[outside]"));
        assert!(output.contains("data=outside"));
    }

    #[test]
    fn test_multiple_directives_per_line() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let output = processor.process("::qr[a] and ::qr[b]");
        assert!(output.contains("data=a"));
        assert!(output.contains("data=b"));
        assert_eq!(output.matches("<img ").count(), 2);
    }

    #[test]
    fn test_preserves_trailing_newline() {
        let mut processor = DirectiveProcessor::new();

        assert_eq!(processor.process("line\n"), "line\n");
        assert_eq!(processor.process("line"), "line");
    }

    #[test]
    fn test_preserves_crlf_line_endings() {
        let mut processor = DirectiveProcessor::new();

        assert_eq!(processor.process("one\r\ntwo\r\n"), "one\r\ntwo\r\n");
    }

    #[test]
    fn test_directive_on_crlf_line() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let output = processor.process("Scan:\r\n::qr[x]\r\nDone.\r\n");
        assert!(output.starts_with("Scan:\r\n<img "));
        assert!(output.ends_with(">\r\nDone.\r\n"));
    }

    #[test]
    fn test_empty_input() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        assert_eq!(processor.process(""), "");
    }

    #[test]
    fn test_multiline_document() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let input = "# Title\n\n::qr[https://example.com]\n\nText after.\n";
        let output = processor.process(input);

        assert!(output.starts_with("# Title\n\n<img "));
        assert!(output.ends_with("\n\nText after.\n"));
    }

    #[test]
    fn test_multiple_nodes_joined() {
        struct TwoImages;

        impl LeafDirective for TwoImages {
            fn name(&self) -> &'static str {
                "two"
            }

            fn process(&mut self, _args: DirectiveArgs) -> DirectiveOutput {
                DirectiveOutput::Nodes(vec![
                    Node::image("u1", "a1", "t1"),
                    Node::image("u2", "a2", "t2"),
                ])
            }
        }

        let mut processor = DirectiveProcessor::new().with_leaf(TwoImages);

        let output = processor.process("::two[x]");
        assert_eq!(output.matches("<img ").count(), 2);
    }

    #[test]
    fn test_no_warnings_on_clean_input() {
        let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);

        let _ = processor.process("::qr[ok]");
        assert!(processor.warnings().is_empty());
    }
}
