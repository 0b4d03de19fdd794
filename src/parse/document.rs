use crate::model::PageArea;
use crate::namespace::strip_namespace;
use crate::xml::XmlNode;

use super::ParseContext;

/// Cross-references found in `Document.xml`, resolved to package paths.
pub(super) struct Pointers<'p> {
    pub(super) pages: Option<&'p XmlNode>,
    /// PublicRes and DocumentRes files in declaration order.
    pub(super) res_files: Vec<String>,
    pub(super) templates: Vec<&'p XmlNode>,
    pub(super) annotations: Option<String>,
}

pub(super) fn parse_document<'p>(ctx: &mut ParseContext, document: &'p XmlNode) -> Pointers<'p> {
    let common = document.child("ofd:CommonData");

    match common.and_then(|c| c.child("ofd:PageArea")) {
        Some(area) => ctx.doc.page_area = Some(parse_page_area(area)),
        None => log::debug!("Document has no PageArea; pages must carry their own"),
    }

    let mut res_files = Vec::new();
    let mut templates = Vec::new();
    if let Some(common) = common {
        for node in common.children() {
            match strip_namespace(&node.name) {
                "PublicRes" | "DocumentRes" => {
                    if let Some(loc) = node.text().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
                        res_files.push(ctx.doc_path(&loc));
                    }
                }
                "TemplatePage" => templates.push(node),
                _ => {}
            }
        }
    }

    let annotations = document
        .child_text("ofd:Annotations")
        .map(|loc| ctx.doc_path(&loc));

    Pointers {
        pages: document.child("ofd:Pages"),
        res_files,
        templates,
        annotations,
    }
}

/// Each child's stripped name keyed to its text.
pub(super) fn parse_page_area(area: &XmlNode) -> PageArea {
    let mut out = PageArea::default();
    for child in area.children() {
        let Some(text) = child.text().map(|t| t.trim().to_string()) else {
            continue;
        };
        match strip_namespace(&child.name) {
            "PhysicalBox" => out.physical_box = Some(text),
            "ApplicationBox" => out.application_box = Some(text),
            "ContentBox" => out.content_box = Some(text),
            "BleedBox" => out.bleed_box = Some(text),
            other => log::debug!("Ignoring page area box {other}"),
        }
    }
    out
}
