//! Leaf directive trait and output types.
//!
//! Leaf directives use double-colon syntax: `::name[content]{options}`

use super::{DirectiveArgs, Node};

/// Output from directive processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Structured nodes for the surrounding renderer.
    Nodes(Vec<Node>),
    /// Don't handle this directive (pass through unchanged).
    Skip,
}

impl DirectiveOutput {
    /// Create an output carrying a single node.
    ///
    /// # Example
    ///
    /// ```
    /// use qr_directive::{DirectiveOutput, Node};
    ///
    /// let output = DirectiveOutput::node(Node::image("u", "a", "t"));
    /// assert!(matches!(output, DirectiveOutput::Nodes(ref nodes) if nodes.len() == 1));
    /// ```
    #[must_use]
    pub fn node(node: Node) -> Self {
        Self::Nodes(vec![node])
    }
}

/// Handler for leaf directives: `::name[content]{options}`
///
/// Leaf directives are self-contained elements. Handlers are pure
/// transformations of their arguments into document nodes; they perform no
/// I/O and hold no state across invocations.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its
/// own processor instance.
///
/// # Example
///
/// ```
/// use qr_directive::{DirectiveArgs, DirectiveOutput, LeafDirective, Node};
///
/// struct BadgeDirective;
///
/// impl LeafDirective for BadgeDirective {
///     fn name(&self) -> &str { "badge" }
///
///     fn process(&mut self, args: DirectiveArgs) -> DirectiveOutput {
///         let url = format!("https://img.shields.io/badge/{}", args.content);
///         DirectiveOutput::node(Node::image(url, args.content.clone(), args.content))
///     }
/// }
/// ```
pub trait LeafDirective: Send {
    /// Directive name (e.g., "qr").
    ///
    /// This is matched against the directive syntax: `::name[...]`
    fn name(&self) -> &str;

    /// Whether the bracketed content argument is required.
    ///
    /// When `true`, the processor validates presence before dispatch: a
    /// directive with missing or empty content is passed through unchanged
    /// with a warning, and `process` is never called for it.
    fn requires_content(&self) -> bool {
        false
    }

    /// Process the directive into document nodes.
    ///
    /// Returns [`DirectiveOutput::Nodes`] to replace the directive, or
    /// [`DirectiveOutput::Skip`] to pass it through unchanged.
    fn process(&mut self, args: DirectiveArgs) -> DirectiveOutput;
}
