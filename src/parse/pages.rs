use crate::model::{LayerType, Page, PageLayer, TemplateRef, ZOrder};
use crate::xml::XmlNode;

use super::document::parse_page_area;
use super::objects::decode_objects;
use super::{ParseContext, attr_string, dir_of, resources};

pub(super) fn parse_pages(ctx: &mut ParseContext, pages: &XmlNode) {
    for entry in pages.children_named("ofd:Page") {
        let (Some(id), Some(base_loc)) = (entry.attribute("ID"), entry.attribute("BaseLoc")) else {
            log::warn!("Page entry without ID or BaseLoc skipped");
            continue;
        };
        let path = ctx.doc_path(base_loc);
        let mut page = Page {
            id: id.trim().to_string(),
            ..Page::default()
        };
        let package = ctx.package;
        match package.xml(&path) {
            Some(xml) => read_page_part(ctx, &mut page, xml, &path),
            None => log::warn!("Page {} content {path} is missing", page.id),
        }
        ctx.doc.pages.push(page);
    }
}

/// Fill area, templates, layers and page resources from a page-shaped part.
pub(super) fn read_page_part(ctx: &mut ParseContext, page: &mut Page, xml: &XmlNode, path: &str) {
    if let Some(area) = xml.child("ofd:Area") {
        page.area = Some(parse_page_area(area));
    }

    page.templates = xml
        .children_named("ofd:Template")
        .filter_map(|t| {
            Some(TemplateRef {
                template_id: attr_string(t, "TemplateID")?,
                z_order: match t.attribute("ZOrder") {
                    Some("Foreground") => ZOrder::Foreground,
                    _ => ZOrder::Background,
                },
            })
        })
        .collect();

    let dir = dir_of(path).to_string();
    for res in xml.children_named("ofd:PageRes") {
        let Some(loc) = res.text().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) else {
            continue;
        };
        let res_path = super::resolve(&dir, &loc);
        let res_path = if ctx.package.contains(&res_path) {
            res_path
        } else {
            ctx.doc_path(&loc)
        };
        if let Err(e) = resources::parse_res_file(ctx, &res_path) {
            log::warn!("Skipping page resource file {res_path}: {e}");
        }
    }

    page.content = Some(
        xml.child("ofd:Content")
            .map(|content| content.children_named("ofd:Layer").map(parse_layer).collect())
            .unwrap_or_default(),
    );
}

fn parse_layer(layer: &XmlNode) -> PageLayer {
    PageLayer {
        id: attr_string(layer, "ID"),
        layer_type: layer
            .attribute("Type")
            .map(LayerType::parse)
            .unwrap_or_default(),
        draw_param: attr_string(layer, "DrawParam"),
        page_block: decode_objects(layer),
    }
}
