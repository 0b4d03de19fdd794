use crate::error::Error;
use crate::model::{
    ColorSpaceRes, CompositeUnitRes, DrawParamRes, FontRes, MediaRes, OfdType, Resource,
    ResourceKind,
};
use crate::namespace::strip_namespace;
use crate::xml::XmlNode;

use super::objects::{decode_color, decode_objects};
use super::{ParseContext, attr_string, dir_of, parse_bool, parse_f64, resolve};

/// Read one `Res` part and append its entries to the document resources.
pub(super) fn parse_res_file(ctx: &mut ParseContext, path: &str) -> Result<(), Error> {
    let package = ctx.package;
    let res = package
        .xml(path)
        .ok_or_else(|| Error::NotFound(path.to_string()))?;
    if strip_namespace(&res.name) != "Res" {
        return Err(Error::Structure {
            part: "Res",
            reason: format!("{path} has root element {}", res.name),
        });
    }

    // Media and font files live under `<dir of Res part>/<BaseLoc>/`.
    let mut base = dir_of(path).to_string();
    if let Some(base_loc) = res.attribute("BaseLoc").map(str::trim).filter(|b| !b.is_empty()) {
        base = resolve(&base, base_loc);
        if !base.ends_with('/') {
            base.push('/');
        }
    }

    let before = ctx.doc.resources.len();
    for group in res.children() {
        // Resources sit inside plural wrappers (Fonts, MultiMedias, ...).
        for item in group.children() {
            match parse_resource(ctx, item, &base) {
                Some(resource) => ctx.doc.resources.push(resource),
                None => log::warn!(
                    "Dropping resource {} (ID {:?}) from {path}",
                    item.name,
                    item.attribute("ID")
                ),
            }
        }
    }
    log::debug!("{path}: {} resources", ctx.doc.resources.len() - before);
    Ok(())
}

fn parse_resource(ctx: &ParseContext, item: &XmlNode, base: &str) -> Option<Resource> {
    let ofd_type = OfdType::from_element(strip_namespace(&item.name))?;
    let id = attr_string(item, "ID")?;
    let file_path = |child: &str| -> Option<String> {
        let loc = item.child_text(child)?;
        let candidate = resolve(base, &loc);
        if ctx.package.contains(&candidate) {
            Some(candidate)
        } else {
            // Some producers write locations relative to the document root instead.
            let fallback = ctx.doc_path(&loc);
            if ctx.package.contains(&fallback) {
                Some(fallback)
            } else {
                Some(candidate)
            }
        }
    };
    let kind = match ofd_type {
        OfdType::Font => ResourceKind::Font(FontRes {
            font_name: item.attribute("FontName").unwrap_or_default().to_string(),
            family_name: attr_string(item, "FamilyName"),
            bold: parse_bool(item.attribute("Bold")).unwrap_or(false),
            italic: parse_bool(item.attribute("Italic")).unwrap_or(false),
            serif: parse_bool(item.attribute("Serif")).unwrap_or(false),
            fixed_width: parse_bool(item.attribute("FixedWidth")).unwrap_or(false),
            charset: attr_string(item, "Charset"),
            path: file_path("ofd:FontFile"),
        }),
        OfdType::MultiMedia => ResourceKind::MultiMedia(MediaRes {
            media_type: attr_string(item, "Type"),
            format: attr_string(item, "Format"),
            path: file_path("ofd:MediaFile"),
        }),
        OfdType::DrawParam => ResourceKind::DrawParam(parse_draw_param(item)),
        OfdType::ColorSpace => ResourceKind::ColorSpace(ColorSpaceRes {
            space_type: item.attribute("Type").unwrap_or("RGB").to_string(),
            bits_per_component: item
                .attribute("BitsPerComponent")
                .and_then(|b| b.trim().parse().ok()),
            profile: attr_string(item, "Profile"),
            palette: item
                .child("ofd:Palette")
                .map(|p| {
                    p.children_named("ofd:CV")
                        .filter_map(|cv| cv.text())
                        .map(|t| t.trim().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        }),
        OfdType::CompositeGraphicUnit => ResourceKind::CompositeGraphicUnit(CompositeUnitRes {
            width: parse_f64(item.attribute("Width")),
            height: parse_f64(item.attribute("Height")),
            content: item
                .child("ofd:Content")
                .map(decode_objects)
                .unwrap_or_default(),
        }),
    };
    Some(Resource { id, kind })
}

/// Defaults first, then whatever the element states explicitly.
fn parse_draw_param(item: &XmlNode) -> DrawParamRes {
    let mut dp = DrawParamRes {
        relative: attr_string(item, "Relative"),
        ..DrawParamRes::default()
    };
    let overrides = [
        ("Join", &mut dp.join),
        ("LineWidth", &mut dp.line_width),
        ("Cap", &mut dp.cap),
        ("MiterLimit", &mut dp.miter_limit),
        ("DashOffset", &mut dp.dash_offset),
    ];
    for (name, slot) in overrides {
        if let Some(v) = attr_string(item, name) {
            *slot = v;
        }
    }
    dp.dash_pattern = attr_string(item, "DashPattern");
    dp.fill_color = item.child("ofd:FillColor").map(decode_color);
    dp.stroke_color = item.child("ofd:StrokeColor").map(decode_color);
    dp
}
