//! The `qr` directive.
//!
//! `::qr[content]{size="300" color="ff0000"}` emits an image node whose URL
//! points at the `api.qrserver.com` image-generation service. The service
//! does all the QR encoding; this handler only builds the request URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::{DirectiveArgs, DirectiveOutput, LeafDirective, Node};

/// QR image service endpoint.
const QR_API_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default image size in pixels (the service renders `size x size`).
const DEFAULT_SIZE: &str = "150";

/// Default foreground color (hex, no leading `#`).
const DEFAULT_COLOR: &str = "000000";

/// URL component encode set: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Leaf directive that renders its content as a QR code image.
///
/// The content is percent-encoded into the `data` query parameter. The
/// `size` and `color` options are forwarded verbatim; the service reports
/// malformed values itself.
///
/// # Example
///
/// ```
/// use qr_directive::{DirectiveArgs, DirectiveOutput, LeafDirective, Node, QrDirective};
///
/// let mut qr = QrDirective;
/// let output = qr.process(DirectiveArgs::parse("hello world", ""));
///
/// let DirectiveOutput::Nodes(nodes) = output else { unreachable!() };
/// let Node::Image { url, .. } = &nodes[0];
/// assert_eq!(
///     url,
///     "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=hello%20world&color=000000"
/// );
/// ```
pub struct QrDirective;

impl QrDirective {
    /// Build the QR image request URL for `content` at the given size and
    /// color.
    fn image_url(content: &str, size: &str, color: &str) -> String {
        let data = utf8_percent_encode(content, COMPONENT_ENCODE_SET);
        format!("{QR_API_BASE}?size={size}x{size}&data={data}&color={color}")
    }
}

impl LeafDirective for QrDirective {
    fn name(&self) -> &'static str {
        "qr"
    }

    fn requires_content(&self) -> bool {
        true
    }

    fn process(&mut self, args: DirectiveArgs) -> DirectiveOutput {
        let size = args.get_or("size", DEFAULT_SIZE);
        let color = args.get_or("color", DEFAULT_COLOR);

        let url = Self::image_url(&args.content, size, color);
        let alt = format!("QR Code for {}", args.content);
        let title = format!("QR Code: {}", args.content);

        DirectiveOutput::node(Node::image(url, alt, title))
    }
}
