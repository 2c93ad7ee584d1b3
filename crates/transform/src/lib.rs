//! Line classification and text-to-XML transformation for CP2K input files.
//!
//! The transformer walks a line-oriented input stream against a grammar tree
//! from `cp2k-xml-grammar` and drives a [`DocumentBuilder`], which decouples
//! the traversal from the concrete XML writer. [`XmlStreamBuilder`] is the
//! `quick-xml` implementation used in production.

pub mod builder;
pub mod classify;
pub mod error;
pub mod transformer;
pub mod xml_builder;

pub use builder::DocumentBuilder;
pub use error::TransformError;
pub use transformer::{transform, transform_to_string};
pub use xml_builder::XmlStreamBuilder;

/// Element name emitted for inline parameters on a section's start line.
pub const SECTION_PARAMETERS_ELEMENT: &str = "CP2K_KEYWORD_SECTION_PARAMETERS";

/// Element name emitted for lines the grammar does not recognize.
pub const DEFAULT_KEYWORD_ELEMENT: &str = "CP2K_KEYWORD_DEFAULT_KEYWORD";

/// Attribute carrying a keyword's bracketed measurement unit.
pub const UNIT_ATTRIBUTE: &str = "UNIT";

/// Value substituted for a recognized keyword with no value on its line.
pub const EMPTY_VALUE_MARKER: &str = "T";
