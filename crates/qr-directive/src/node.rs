//! Document node model.
//!
//! Defines the structured output units directive handlers produce for the
//! surrounding document renderer.

/// A structured document node produced by a directive handler.
///
/// With the `serde` feature enabled, nodes serialize as tagged mappings the
/// way node-consuming host frameworks expect, e.g.
/// `{"type": "image", "url": ..., "alt": ..., "title": ...}`.
///
/// # Example
///
/// ```
/// use qr_directive::Node;
///
/// let node = Node::image("https://example.com/img.png", "An image", "Image");
/// assert_eq!(node.to_html(), r#"<img src="https://example.com/img.png" alt="An image" title="Image">"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    /// An embeddable image reference.
    Image {
        /// Image request URL.
        url: String,
        /// Alt text (shown when the image cannot be displayed).
        alt: String,
        /// Title text (typically shown on hover).
        title: String,
    },
}

impl Node {
    /// Create an image node.
    #[must_use]
    pub fn image(url: impl Into<String>, alt: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Image {
            url: url.into(),
            alt: alt.into(),
            title: title.into(),
        }
    }

    /// Render the node as HTML that passes through a `CommonMark` renderer
    /// unchanged.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Image { url, alt, title } => format!(
                r#"<img src="{}" alt="{}" title="{}">"#,
                escape_attr(url),
                escape_attr(alt),
                escape_attr(title)
            ),
        }
    }
}

/// Escape a string for use inside a double-quoted HTML attribute value.
fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
