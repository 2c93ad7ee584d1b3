//! Schema-derived grammar tree for the CP2K input format.
//!
//! The CP2K text format is not hard-coded anywhere in this workspace; which
//! section and keyword names are legal at each nesting level is derived on
//! demand from an XML Schema document carrying `libhpc` annotations. This
//! crate reads such a schema with `roxmltree` and exposes it as a lazily
//! populated tree of [`Section`] and [`Keyword`] nodes.

pub mod config;
pub mod error;
pub mod node;
pub mod tree;

pub use config::AnnotationConfig;
pub use error::SchemaError;
pub use node::{GrammarNode, Keyword, Section};
pub use tree::GrammarTree;

/// The XML Schema namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
