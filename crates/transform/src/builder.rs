//! Defines the `DocumentBuilder` trait, which decouples the transformer
//! from the specific XML writer producing the output document.

use crate::error::TransformError;

/// Semantic actions for building the output element tree. Any streaming or
/// DOM-based writer that keeps elements properly nested satisfies this.
pub trait DocumentBuilder {
    /// Starts the document (XML declaration, for writers that emit one).
    fn start_document(&mut self) -> Result<(), TransformError>;

    /// Ends the document, closing any elements still open.
    fn end_document(&mut self) -> Result<(), TransformError>;

    fn start_element(&mut self, name: &str) -> Result<(), TransformError>;
    fn end_element(&mut self) -> Result<(), TransformError>;

    /// Sets an attribute on the most recently started element. Must be
    /// called before any content is written into that element.
    fn attribute(&mut self, name: &str, value: &str) -> Result<(), TransformError>;

    /// Appends character content to the current element.
    fn text(&mut self, text: &str) -> Result<(), TransformError>;

    /// Emits a comment node, verbatim.
    fn comment(&mut self, text: &str) -> Result<(), TransformError>;
}
