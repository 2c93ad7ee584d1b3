use crate::error::ConvertError;
use crate::transformer::InputTransformer;
use cp2k_xml_grammar::AnnotationConfig;
use log::debug;
use std::path::{Path, PathBuf};

/// Maps schema identifiers to schema files under one directory.
///
/// An identifier `X` resolves to `{dir}/X.xsd`. Identifiers are plain
/// names: path separators and parent references are rejected so a caller
/// facing the network cannot escape the schema directory.
pub struct SchemaCatalog {
    dir: PathBuf,
    config: AnnotationConfig,
}

impl SchemaCatalog {
    pub fn new(dir: impl Into<PathBuf>, config: AnnotationConfig) -> Self {
        SchemaCatalog {
            dir: dir.into(),
            config,
        }
    }

    /// Resolves an identifier to an existing schema file path.
    pub fn resolve(&self, schema_id: &str) -> Result<PathBuf, ConvertError> {
        if schema_id.is_empty()
            || schema_id.contains(['/', '\\'])
            || schema_id.contains("..")
        {
            return Err(ConvertError::InvalidSchemaId(schema_id.to_string()));
        }
        let path = self.dir.join(format!("{schema_id}.xsd"));
        if !path.is_file() {
            return Err(ConvertError::SchemaNotFound(schema_id.to_string()));
        }
        debug!("schema id '{}' resolved to {}", schema_id, path.display());
        Ok(path)
    }

    /// Builds a transformer for the schema registered under `schema_id`.
    pub fn transformer(&self, schema_id: &str) -> Result<InputTransformer, ConvertError> {
        let path = self.resolve(schema_id)?;
        InputTransformer::for_schema_file(&path, self.config.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn catalog_with_schema() -> (tempfile::TempDir, SchemaCatalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cp2k-3.0.xsd"),
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:element name="CP2K">
                   <xs:complexType><xs:sequence/></xs:complexType>
                 </xs:element>
               </xs:schema>"#,
        )
        .unwrap();
        let catalog = SchemaCatalog::new(dir.path(), AnnotationConfig::default());
        (dir, catalog)
    }

    #[test]
    fn resolves_registered_schema() {
        let (_dir, catalog) = catalog_with_schema();
        let path = catalog.resolve("cp2k-3.0").unwrap();
        assert!(path.ends_with("cp2k-3.0.xsd"));
        assert!(catalog.transformer("cp2k-3.0").is_ok());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (_dir, catalog) = catalog_with_schema();
        assert!(matches!(
            catalog.resolve("cp2k-9.9"),
            Err(ConvertError::SchemaNotFound(_))
        ));
    }

    #[test]
    fn traversal_attempts_are_rejected() {
        let (_dir, catalog) = catalog_with_schema();
        for id in ["../etc/passwd", "a/b", "a\\b", ""] {
            assert!(matches!(
                catalog.resolve(id),
                Err(ConvertError::InvalidSchemaId(_))
            ));
        }
    }
}
