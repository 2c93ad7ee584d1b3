//! The recursive-descent engine walking input lines against the grammar.
//!
//! One activation of [`process_section`] exists per level of section
//! nesting; the call stack is the parse stack. Each activation owns its own
//! "default-content element open" flag, so unrecognized lines are bucketed
//! per scope.

use crate::builder::DocumentBuilder;
use crate::classify;
use crate::error::TransformError;
use crate::{
    DEFAULT_KEYWORD_ELEMENT, EMPTY_VALUE_MARKER, SECTION_PARAMETERS_ELEMENT, UNIT_ATTRIBUTE,
};
use cp2k_xml_grammar::Section;
use log::{debug, warn};
use std::io::BufRead;
use std::io::Lines;
use std::rc::Rc;

/// Converts a whole input stream into a document rooted at `root`.
pub fn transform<R, B>(
    input: R,
    root: &Rc<Section<'_, '_>>,
    builder: &mut B,
) -> Result<(), TransformError>
where
    R: BufRead,
    B: DocumentBuilder,
{
    builder.start_document()?;
    let mut lines = input.lines();
    process_section(&mut lines, root, None, builder, 0)?;
    builder.end_document()?;
    Ok(())
}

/// Convenience wrapper producing the serialized document as a string.
pub fn transform_to_string<R: BufRead>(
    input: R,
    root: &Rc<Section<'_, '_>>,
) -> Result<String, TransformError> {
    let mut builder = crate::XmlStreamBuilder::new(Vec::new());
    transform(input, root, &mut builder)?;
    Ok(String::from_utf8(builder.into_inner())?)
}

/// One activation per nesting level. Returns on the section-end line of its
/// own level; when input runs out first, closes only its own element and
/// lets the enclosing activations unwind the same way, so truncated inputs
/// still produce a well-formed document.
fn process_section<R, B>(
    lines: &mut Lines<R>,
    section: &Rc<Section<'_, '_>>,
    parameters: Option<&str>,
    builder: &mut B,
    depth: usize,
) -> Result<(), TransformError>
where
    R: BufRead,
    B: DocumentBuilder,
{
    builder.start_element(section.sanitized_name())?;

    if let Some(parameters) = parameters {
        builder.start_element(SECTION_PARAMETERS_ELEMENT)?;
        builder.text(parameters)?;
        builder.end_element()?;
    }

    let mut default_open = false;

    while let Some(line) = lines.next() {
        let line = line.map_err(TransformError::Input)?;

        if classify::is_section_end(&line) {
            if default_open {
                builder.end_element()?;
            }
            builder.end_element()?;
            return Ok(());
        }

        if classify::is_comment(&line) {
            builder.comment(&line)?;
        } else if classify::is_section_start(&line) {
            if default_open {
                builder.end_element()?;
                default_open = false;
            }
            match classify::section_name(&line).and_then(|name| section.subsection(name)) {
                Some(subsection) => {
                    process_section(
                        lines,
                        &subsection,
                        classify::section_parameters(&line),
                        builder,
                        depth + 1,
                    )?;
                }
                None => {
                    // Unknown sections are dropped, not errors; subsequent
                    // lines still parse against the current section.
                    debug!(
                        "dropping unknown section line in '{}': {}",
                        section.sanitized_name(),
                        line
                    );
                }
            }
        } else {
            match classify::keyword_name(&line).and_then(|name| section.keyword(name)) {
                Some(keyword) => {
                    builder.start_element(keyword.sanitized_name())?;
                    if let Some(unit) = classify::keyword_unit(&line) {
                        builder.attribute(UNIT_ATTRIBUTE, unit)?;
                    }
                    let value = match classify::keyword_value(&line) {
                        Some(value) if !value.is_empty() => value,
                        // Bare keyword is the boolean flag convention.
                        _ => EMPTY_VALUE_MARKER,
                    };
                    builder.text(value)?;
                    builder.end_element()?;
                }
                None => {
                    // Default content: every unrecognized line gets its own
                    // element, never appended to the previous one.
                    if default_open {
                        builder.end_element()?;
                    }
                    builder.start_element(DEFAULT_KEYWORD_ELEMENT)?;
                    default_open = true;
                    builder.text(&line)?;
                }
            }
        }
    }

    // Input exhausted without a section-end marker. Close this level only;
    // callers unwind the same way as their own loops exhaust.
    if depth > 0 {
        warn!(
            "input ended with section '{}' still open",
            section.sanitized_name()
        );
    }
    builder.end_element()?;
    Ok(())
}
