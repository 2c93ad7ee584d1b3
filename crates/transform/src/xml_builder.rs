//! Streaming `DocumentBuilder` implementation over a `quick_xml::Writer`.

use crate::builder::DocumentBuilder;
use crate::error::TransformError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Writes the output document as a flat event stream.
///
/// Attributes arrive after `start_element`, so the start tag is held back
/// until the first child token forces it out. Element names are kept on a
/// stack so `end_element` can emit the matching end tag and `end_document`
/// can close whatever the transformer left open at end of input.
pub struct XmlStreamBuilder<W: Write> {
    writer: Writer<W>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
}

impl<W: Write> XmlStreamBuilder<W> {
    pub fn new(inner: W) -> Self {
        XmlStreamBuilder {
            writer: Writer::new(inner),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Returns the underlying writer. Call after `end_document`.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn flush_pending(&mut self) -> Result<(), TransformError> {
        if let Some(start) = self.pending.take() {
            self.writer
                .write_event(Event::Start(start))
                .map_err(TransformError::Output)?;
        }
        Ok(())
    }
}

impl<W: Write> DocumentBuilder for XmlStreamBuilder<W> {
    fn start_document(&mut self) -> Result<(), TransformError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(TransformError::Output)
    }

    fn end_document(&mut self) -> Result<(), TransformError> {
        self.flush_pending()?;
        while let Some(name) = self.open.pop() {
            self.writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(TransformError::Output)?;
        }
        Ok(())
    }

    fn start_element(&mut self, name: &str) -> Result<(), TransformError> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(name.to_owned());
        Ok(())
    }

    fn end_element(&mut self) -> Result<(), TransformError> {
        self.flush_pending()?;
        let name = self
            .open
            .pop()
            .ok_or_else(|| TransformError::Builder("end_element with no open element".into()))?;
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(TransformError::Output)
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), TransformError> {
        let start = self.pending.as_mut().ok_or_else(|| {
            TransformError::Builder(format!("attribute '{name}' with no open start tag"))
        })?;
        start.push_attribute((name, value));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), TransformError> {
        self.flush_pending()?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(TransformError::Output)
    }

    fn comment(&mut self, text: &str) -> Result<(), TransformError> {
        self.flush_pending()?;
        // Comment content passes through verbatim, matching the source line.
        self.writer
            .write_event(Event::Comment(BytesText::from_escaped(text)))
            .map_err(TransformError::Output)
    }
}
