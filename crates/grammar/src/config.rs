/// Settings for the custom schema annotations carried by a CP2K schema.
///
/// The schemas annotate element declarations with the name actually typed in
/// input files (`trueName`) and with accepted alternate spellings (`alias`).
/// An explicit config value is passed into tree construction rather than
/// registering annotation handling process-wide, so two schemas with
/// different annotation vocabularies can coexist in one process.
#[derive(Debug, Clone)]
pub struct AnnotationConfig {
    /// Namespace URI of the annotation vocabulary.
    pub annotation_ns: String,
    /// Local name of the true-name attribute on element declarations.
    pub true_name_attr: String,
    /// Local name of the alias elements inside `xs:appinfo`.
    pub alias_element: String,
    /// Name of the top-level element declaration acting as the grammar root.
    pub root_element: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        AnnotationConfig {
            annotation_ns: "http://www.libhpc.imperial.ac.uk/SchemaAnnotation".to_string(),
            true_name_attr: "trueName".to_string(),
            alias_element: "alias".to_string(),
            root_element: "CP2K".to_string(),
        }
    }
}
