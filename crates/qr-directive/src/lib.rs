//! QR code leaf directive for `CommonMark` documents.
//!
//! This crate registers one directive, `::qr[content]{size="300" color="ff0000"}`,
//! which emits an image node referencing the `api.qrserver.com`
//! image-generation service. QR encoding is delegated entirely to that
//! service; the directive only constructs a request URL.
//!
//! # Architecture
//!
//! - [`DirectiveProcessor`] scans a document line by line, skipping fenced
//!   code blocks, and dispatches `::name[content]{options}` occurrences to
//!   registered [`LeafDirective`] handlers.
//! - Handlers return [`Node`]s, which the processor splices back into the
//!   document as HTML that passes through a `CommonMark` renderer unchanged.
//! - [`QrDirective`] is the one handler this crate ships: a pure function
//!   of its arguments, performing no I/O.
//!
//! With the `serde` feature, [`Node`] serializes as a tagged mapping
//! (`{"type": "image", ...}`) for host frameworks that consume structured
//! nodes instead of HTML.
//!
//! # Example
//!
//! ```
//! use qr_directive::{DirectiveProcessor, QrDirective};
//!
//! let mut processor = DirectiveProcessor::new().with_leaf(QrDirective);
//!
//! let output = processor.process("Scan ::qr[https://example.com] to visit.");
//! assert!(output.contains("https://api.qrserver.com/v1/create-qr-code/"));
//! ```

mod args;
mod directive;
mod fence;
mod node;
mod parser;
mod processor;
mod qr;

pub use args::DirectiveArgs;
pub use directive::{DirectiveOutput, LeafDirective};
pub use node::Node;
pub use processor::DirectiveProcessor;
pub use qr::QrDirective;
