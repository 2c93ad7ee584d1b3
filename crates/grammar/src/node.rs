//! Section and keyword nodes of the grammar tree.
//!
//! A node wraps one `xs:element` declaration. Section contents are built the
//! first time a lookup hits that section, not at construction time, so a
//! conversion that only touches a few sections never walks the rest of the
//! schema. Population happens exactly once per node (`OnceCell`); the tree
//! is immutable from the transformer's point of view.

use crate::config::AnnotationConfig;
use crate::XSD_NS;
use log::{debug, warn};
use roxmltree::Node;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A child of a section: either a nested section or a leaf keyword.
///
/// The schema distinguishes the two by type shape: an element declaration
/// with complex content is a section, anything else is a keyword.
pub enum GrammarNode<'a, 'input> {
    Section(Rc<Section<'a, 'input>>),
    Keyword(Rc<Keyword>),
}

/// A named leaf value within a section.
#[derive(Debug)]
pub struct Keyword {
    sanitized_name: String,
    true_name: String,
    aliases: Vec<String>,
}

impl Keyword {
    fn from_element(element: Node<'_, '_>, config: &AnnotationConfig) -> Option<Self> {
        let sanitized_name = element.attribute("name")?.to_string();
        let true_name = true_name(element, config).unwrap_or(&sanitized_name).to_string();
        let aliases = aliases(element, config);
        Some(Keyword {
            sanitized_name,
            true_name,
            aliases,
        })
    }

    /// The XML-safe name used for the output element.
    pub fn sanitized_name(&self) -> &str {
        &self.sanitized_name
    }

    /// The name actually typed in CP2K input files.
    pub fn true_name(&self) -> &str {
        &self.true_name
    }

    /// Alternate true names accepted for this keyword, in schema order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// A named, nestable scope of the input format.
#[derive(Debug)]
pub struct Section<'a, 'input> {
    element: Node<'a, 'input>,
    sanitized_name: String,
    true_name: String,
    config: Rc<AnnotationConfig>,
    contents: OnceCell<Contents<'a, 'input>>,
}

/// Lookup tables for one populated section. Alias entries point at the same
/// `Rc` as the true-name entry, so a keyword reached through an alias is the
/// identical node, not a copy.
#[derive(Debug)]
struct Contents<'a, 'input> {
    subsections: HashMap<String, Rc<Section<'a, 'input>>>,
    keywords: HashMap<String, Rc<Keyword>>,
}

impl<'a, 'input> Section<'a, 'input> {
    pub(crate) fn from_element(
        element: Node<'a, 'input>,
        config: Rc<AnnotationConfig>,
    ) -> Option<Self> {
        let sanitized_name = element.attribute("name")?.to_string();
        let true_name = true_name(element, &config)
            .unwrap_or(&sanitized_name)
            .to_string();
        debug!("new section: {} (true name {})", sanitized_name, true_name);
        Some(Section {
            element,
            sanitized_name,
            true_name,
            config,
            contents: OnceCell::new(),
        })
    }

    /// The XML-safe name used for the output element.
    pub fn sanitized_name(&self) -> &str {
        &self.sanitized_name
    }

    /// The name actually typed in CP2K input files.
    pub fn true_name(&self) -> &str {
        &self.true_name
    }

    /// Whether this section allows a subsection with the given true name.
    pub fn has_subsection(&self, name: &str) -> bool {
        self.contents().subsections.contains_key(name)
    }

    /// Looks up a subsection by its true name.
    pub fn subsection(&self, name: &str) -> Option<Rc<Section<'a, 'input>>> {
        self.contents().subsections.get(name).cloned()
    }

    /// Whether this section allows a keyword with the given true name or alias.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.contents().keywords.contains_key(name)
    }

    /// Looks up a keyword by its true name or any of its aliases.
    pub fn keyword(&self, name: &str) -> Option<Rc<Keyword>> {
        self.contents().keywords.get(name).cloned()
    }

    fn contents(&self) -> &Contents<'a, 'input> {
        self.contents.get_or_init(|| self.populate())
    }

    /// Builds the lookup tables from this section's content model. Children
    /// that do not fit the expected shape are skipped, not errors: the
    /// converter tolerates schema drift and buckets whatever the grammar
    /// does not recognize as default content at transform time.
    fn populate(&self) -> Contents<'a, 'input> {
        debug!("populating contents of section {}", self.sanitized_name);

        let mut contents = Contents {
            subsections: HashMap::new(),
            keywords: HashMap::new(),
        };

        let Some(sequence) = self.content_model() else {
            warn!(
                "section '{}' has no sequence content model; treating as empty",
                self.sanitized_name
            );
            return contents;
        };

        for child in sequence.children().filter(Node::is_element) {
            if !child.has_tag_name((XSD_NS, "element")) {
                warn!(
                    "skipping non-element particle <{}> in section '{}'",
                    child.tag_name().name(),
                    self.sanitized_name
                );
                continue;
            }
            match classify_child(child, &self.config) {
                Some(GrammarNode::Section(subsection)) => {
                    contents
                        .subsections
                        .insert(subsection.true_name().to_string(), subsection);
                }
                Some(GrammarNode::Keyword(keyword)) => {
                    for alias in keyword.aliases() {
                        contents.keywords.insert(alias.clone(), Rc::clone(&keyword));
                    }
                    contents
                        .keywords
                        .insert(keyword.true_name().to_string(), keyword);
                }
                None => {
                    warn!(
                        "skipping unnamed element declaration in section '{}'",
                        self.sanitized_name
                    );
                }
            }
        }

        contents
    }

    /// Resolves this section's `xs:sequence`, looking through either an
    /// inline `xs:complexType` or a reference to a named top-level type.
    fn content_model(&self) -> Option<Node<'a, 'input>> {
        let complex_type = inline_complex_type(self.element)
            .or_else(|| referenced_complex_type(self.element))?;
        complex_type
            .children()
            .find(|n| n.has_tag_name((XSD_NS, "sequence")))
    }
}

/// Decides whether a child element declaration denotes a section or a
/// keyword. Complex content means section; everything else is a keyword.
fn classify_child<'a, 'input>(
    element: Node<'a, 'input>,
    config: &Rc<AnnotationConfig>,
) -> Option<GrammarNode<'a, 'input>> {
    let has_complex_type =
        inline_complex_type(element).is_some() || referenced_complex_type(element).is_some();
    if has_complex_type {
        Section::from_element(element, Rc::clone(config)).map(Rc::new).map(GrammarNode::Section)
    } else {
        Keyword::from_element(element, config).map(Rc::new).map(GrammarNode::Keyword)
    }
}

fn inline_complex_type<'a, 'input>(element: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    element
        .children()
        .find(|n| n.has_tag_name((XSD_NS, "complexType")))
}

/// Resolves a `type="pfx:Name"` attribute against top-level named complex
/// types in the same document. Prefixes are ignored; the schemas in scope
/// declare all their named types in one document.
fn referenced_complex_type<'a, 'input>(element: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    let type_name = element.attribute("type")?;
    let local = type_name.rsplit(':').next().unwrap_or(type_name);
    element
        .document()
        .root_element()
        .children()
        .filter(|n| n.has_tag_name((XSD_NS, "complexType")))
        .find(|n| n.attribute("name") == Some(local))
}

/// Reads the true-name annotation attribute, if present.
fn true_name<'a>(element: Node<'a, '_>, config: &AnnotationConfig) -> Option<&'a str> {
    element.attribute((config.annotation_ns.as_str(), config.true_name_attr.as_str()))
}

/// Collects alias markers from the element's `xs:annotation/xs:appinfo`.
fn aliases(element: Node<'_, '_>, config: &AnnotationConfig) -> Vec<String> {
    element
        .children()
        .filter(|n| n.has_tag_name((XSD_NS, "annotation")))
        .flat_map(|annotation| {
            annotation
                .children()
                .filter(|n| n.has_tag_name((XSD_NS, "appinfo")))
        })
        .flat_map(|appinfo| appinfo.children())
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == config.alias_element
                && n.tag_name().namespace() == Some(config.annotation_ns.as_str())
        })
        .filter_map(|alias| alias.text().map(str::to_string))
        .collect()
}
