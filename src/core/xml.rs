//! Minimal element tree over `quick-xml` events.
//!
//! Responses are small and fully buffered, so the decoder works on an owned
//! tree instead of streaming. Element names are stored as local names; the
//! namespace prefix (`soap:`, `soapenv:`, `env:` ...) is dropped so that the
//! same response shapes match regardless of which prefix the server picked.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::constants;

/// One XML element with its unescaped, trimmed text and child elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Parses a complete document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if the bytes are not a single
    /// well-formed XML element tree.
    pub fn parse(bytes: &[u8]) -> Result<Self, String> {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| format!("malformed XML at byte {}: {e}", reader.buffer_position()))?;

            match event {
                Event::Start(start) => stack.push(Self::open(&start)),
                Event::Empty(start) => {
                    let element = Self::open(&start);
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| "closing tag without matching opening tag".to_string())?;
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| format!("invalid character data: {e}"))?;
                    Self::append_text(&text, &mut stack)?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    Self::append_text(&text, &mut stack)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype.
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(format!("unexpected end of document inside <{}>", open.name));
        }
        root.ok_or_else(|| constants::ERR_EMPTY_DOCUMENT.to_string())
    }

    /// Returns `true` if this element's local name matches `name`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// First child element named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(name))
    }

    /// All child elements named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// Text of the first child named `name`.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    fn open(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    fn attach(
        element: Element,
        stack: &mut [Element],
        root: &mut Option<Element>,
    ) -> Result<(), String> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
            return Ok(());
        }
        if let Some(existing) = root {
            return Err(format!(
                "multiple root elements: <{}> after <{}>",
                element.name, existing.name
            ));
        }
        *root = Some(element);
        Ok(())
    }

    fn append_text(text: &str, stack: &mut [Element]) -> Result<(), String> {
        match stack.last_mut() {
            Some(current) => {
                current.text.push_str(text);
                Ok(())
            }
            None => Err(format!("text outside of root element: {text:?}")),
        }
    }
}
