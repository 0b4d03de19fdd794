use crate::error::Error;
use crate::model::Annotation;
use crate::namespace::strip_namespace;
use crate::xml::XmlNode;

use super::objects::decode_objects;
use super::{ParseContext, attr_string, dir_of, parse_bool, resolve};

/// Read the annotation index and attach each page's annotations to it.
pub(super) fn parse_annotations(ctx: &mut ParseContext, path: &str) -> Result<(), Error> {
    let package = ctx.package;
    let index = package
        .xml(path)
        .ok_or_else(|| Error::NotFound(path.to_string()))?;
    if strip_namespace(&index.name) != "Annotations" {
        return Err(Error::Structure {
            part: "Annotations",
            reason: format!("{path} has root element {}", index.name),
        });
    }
    let dir = dir_of(path).to_string();

    for entry in index.children_named("ofd:Page") {
        let Some(page_id) = entry.attribute("PageID").map(str::trim) else {
            log::warn!("Annotation entry without PageID skipped");
            continue;
        };
        let Some(file_loc) = entry.child_text("ofd:FileLoc") else {
            log::warn!("Annotation entry for page {page_id} has no FileLoc");
            continue;
        };
        let mut file_path = resolve(&dir, &file_loc);
        if !package.contains(&file_path) {
            file_path = ctx.doc_path(&file_loc);
        }
        let Some(page_annot) = package.xml(&file_path) else {
            log::warn!("Annotation part {file_path} is missing");
            continue;
        };
        let annots: Vec<Annotation> = page_annot
            .children_named("ofd:Annot")
            .map(parse_annot)
            .collect();

        match ctx.doc.pages.iter_mut().find(|p| p.id == page_id) {
            Some(page) => page.annots.extend(annots),
            None => log::warn!("Annotations reference unknown page {page_id}"),
        }
    }
    Ok(())
}

fn parse_annot(node: &XmlNode) -> Annotation {
    let appearance = node.child("ofd:Appearance");
    Annotation {
        id: attr_string(node, "ID"),
        annot_type: node.attribute("Type").unwrap_or_default().to_string(),
        creator: attr_string(node, "Creator"),
        last_mod_date: attr_string(node, "LastModDate"),
        visible: parse_bool(node.attribute("Visible")).unwrap_or(true),
        appearance_boundary: appearance.and_then(|a| attr_string(a, "Boundary")),
        page_block: appearance.map(decode_objects).unwrap_or_default(),
    }
}
