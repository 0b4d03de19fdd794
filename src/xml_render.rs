//! Pretty-printed view of arbitrary XML as nested HTML blocks.

use crate::error::Error;
use crate::svg::Element;
use crate::xml::{self, XmlChild, XmlNode};

fn open_tag(node: &XmlNode, self_closing: bool) -> String {
    let mut tag = format!("<{}", node.name);
    for (k, v) in &node.attributes {
        tag.push_str(&format!(" {k}=\"{v}\""));
    }
    tag.push_str(if self_closing { "/>" } else { ">" });
    tag
}

/// One `div.xml-node` per element. Text-only elements stay on one line.
pub fn render_node(node: &XmlNode) -> Element {
    let mut block = Element::new("div").attr("class", "xml-node");
    if node.elements.is_empty() {
        block.push(Element::new("span").attr("class", "xml-tag").text(open_tag(node, true)));
        return block;
    }
    block.push(Element::new("span").attr("class", "xml-tag").text(open_tag(node, false)));
    if node.is_text_only() {
        block.set_attr("class", "xml-node xml-inline");
    }
    for child in &node.elements {
        match child {
            XmlChild::Element(el) => block.push(render_node(el)),
            XmlChild::Text(t) => {
                let t = t.trim();
                if !t.is_empty() {
                    block.push(Element::new("span").attr("class", "xml-text").text(t));
                }
            }
        }
    }
    block.push(
        Element::new("span")
            .attr("class", "xml-tag")
            .text(format!("</{}>", node.name)),
    );
    block
}

/// Parse `text`, after the optional filter, and render it.
pub fn render_text(text: &str, response_filter: Option<&dyn Fn(&str) -> String>) -> Result<Element, Error> {
    let filtered;
    let text = match response_filter {
        Some(filter) => {
            filtered = filter(text);
            filtered.as_str()
        }
        None => text,
    };
    if text.trim().is_empty() {
        return Err(Error::MissingArgument("xml".into()));
    }
    let root = xml::parse(text)?;
    Ok(Element::new("div")
        .attr("class", "xml-document")
        .child(render_node(&root)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_blocks_per_element() {
        let el = render_text("<a x=\"1\"><b>hi</b><c/></a>", None).unwrap();
        let markup = el.to_markup();
        assert!(markup.starts_with("<div class=\"xml-document\"><div class=\"xml-node\">"));
        assert!(markup.contains("&lt;a x=&quot;1&quot;&gt;"));
        assert!(markup.contains("<span class=\"xml-text\">hi</span>"));
        assert!(markup.contains("&lt;c/&gt;"));
    }

    #[test]
    fn filter_runs_first() {
        let strip = |s: &str| s.replace("junk", "");
        let el = render_text("junk<a/>", Some(&strip)).unwrap();
        assert_eq!(el.descendants().len(), 2);
    }
}
