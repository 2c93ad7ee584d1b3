use crate::config::AnnotationConfig;
use crate::error::SchemaError;
use crate::node::Section;
use crate::XSD_NS;
use log::debug;
use roxmltree::Document;
use std::rc::Rc;

/// The grammar tree derived from one schema document.
///
/// Construction only locates the root element declaration; descendant nodes
/// are materialized lazily as the transformer queries them. The tree borrows
/// the parsed [`Document`], which in turn borrows the schema source text.
#[derive(Debug)]
pub struct GrammarTree<'a, 'input> {
    root: Rc<Section<'a, 'input>>,
}

impl<'a, 'input> GrammarTree<'a, 'input> {
    /// Wraps the schema's configured top-level element as the root section.
    pub fn from_document(
        doc: &'a Document<'input>,
        config: AnnotationConfig,
    ) -> Result<Self, SchemaError> {
        let root_name = config.root_element.clone();
        let root_element = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name((XSD_NS, "element")))
            .find(|n| n.attribute("name") == Some(root_name.as_str()))
            .ok_or_else(|| SchemaError::RootElementMissing(root_name.clone()))?;

        debug!("got schema root element '{}'", root_name);

        let root = Section::from_element(root_element, Rc::new(config))
            .ok_or(SchemaError::RootElementMissing(root_name))?;

        Ok(GrammarTree { root: Rc::new(root) })
    }

    pub fn root(&self) -> &Rc<Section<'a, 'input>> {
        &self.root
    }
}
