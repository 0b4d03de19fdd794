use crate::error::Error;

pub const OFD_NS: &str = "http://www.ofdspec.org/2016";
pub const OFD_PREFIX: &str = "ofd";

/// Owned XML element. Names keep their prefix (`ofd:Page`); elements in the
/// OFD namespace always carry the `ofd:` prefix regardless of how the
/// producer declared it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub elements: Vec<XmlChild>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum XmlChild {
    Element(XmlNode),
    Text(String),
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        XmlNode {
            name: name.into(),
            ..XmlNode::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &XmlNode> {
        self.elements.iter().filter_map(|c| match c {
            XmlChild::Element(e) => Some(e),
            XmlChild::Text(_) => None,
        })
    }

    /// First direct child element with exactly this (qualified) name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children().filter(move |c| c.name == name)
    }

    /// Concatenated text of the direct text children, `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let mut out = String::new();
        let mut seen = false;
        for c in &self.elements {
            if let XmlChild::Text(t) = c {
                out.push_str(t);
                seen = true;
            }
        }
        seen.then_some(out)
    }

    /// Text of the first child element named `name`, trimmed.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .and_then(XmlNode::text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// True when this element has exactly one child and that child is text.
    pub fn is_text_only(&self) -> bool {
        matches!(self.elements.as_slice(), [XmlChild::Text(_)])
    }
}

/// Parse an XML string into an owned tree rooted at the document element.
pub fn parse(text: &str) -> Result<XmlNode, Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(convert(doc.root_element()))
}

fn qualified_name(node: roxmltree::Node) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        Some(OFD_NS) => format!("{OFD_PREFIX}:{}", tag.name()),
        Some(ns) => match node.lookup_prefix(ns) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
            _ => tag.name().to_string(),
        },
        None => tag.name().to_string(),
    }
}

fn convert(node: roxmltree::Node) -> XmlNode {
    let attributes = node
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    let mut elements = Vec::new();
    for child in node.children() {
        if child.is_element() {
            elements.push(XmlChild::Element(convert(child)));
        } else if child.is_text() {
            let Some(t) = child.text() else { continue };
            // Indentation between elements is noise; text inside leaves is kept verbatim.
            if t.trim().is_empty() && node.children().any(|c| c.is_element()) {
                continue;
            }
            elements.push(XmlChild::Text(t.to_string()));
        }
    }
    XmlNode {
        name: qualified_name(node),
        attributes,
        elements,
    }
}
