//! Converts CP2K text input files into schema-validated XML documents.
//!
//! The grammar of the text format is derived on demand from an XML Schema
//! document carrying `libhpc` annotations; nothing about section or keyword
//! names is hard-coded. See `cp2k-xml-grammar` for the schema-derived
//! grammar tree and `cp2k-xml-transform` for the line classifier and the
//! recursive-descent transformer.
//!
//! This crate ties the two together: [`SchemaCatalog`] resolves a schema
//! identifier to a schema file, and [`InputTransformer`] runs one conversion
//! from a readable input stream to a serialized XML string.

pub mod catalog;
pub mod error;
pub mod transformer;

pub use catalog::SchemaCatalog;
pub use error::ConvertError;
pub use transformer::InputTransformer;

// Re-export the member crates the way the workspace's service consumes them.
pub use cp2k_xml_grammar as grammar;
pub use cp2k_xml_transform as transform;

pub use cp2k_xml_grammar::AnnotationConfig;
