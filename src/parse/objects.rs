use crate::model::{
    AxialShading, CgTransform, ColorSpec, CompositeObject, DrawableObject, ImageObject,
    ObjectCommon, PathObject, ShadingSegment, TextCode, TextObject,
};
use crate::namespace::strip_namespace;
use crate::xml::XmlNode;

use super::{attr_string, parse_bool, parse_f64};

/// Decode the graphic units under `parent` in document order. Nested
/// `PageBlock`s are flattened into the same list.
pub(super) fn decode_objects(parent: &XmlNode) -> Vec<DrawableObject> {
    let mut out = Vec::new();
    decode_into(parent, &mut out);
    out
}

fn decode_into(parent: &XmlNode, out: &mut Vec<DrawableObject>) {
    for node in parent.children() {
        match strip_namespace(&node.name) {
            "PageBlock" => decode_into(node, out),
            "TextObject" => out.push(DrawableObject::Text(decode_text(node))),
            "PathObject" => out.push(DrawableObject::Path(decode_path(node))),
            "ImageObject" => out.push(DrawableObject::Image(ImageObject {
                common: decode_common(node),
                resource_id: node.attribute("ResourceID").unwrap_or_default().trim().to_string(),
            })),
            "CompositeObject" => out.push(DrawableObject::Composite(CompositeObject {
                common: decode_common(node),
                resource_id: node.attribute("ResourceID").unwrap_or_default().trim().to_string(),
            })),
            other => log::debug!("Skipping unsupported page object {other}"),
        }
    }
}

fn decode_common(node: &XmlNode) -> ObjectCommon {
    ObjectCommon {
        id: attr_string(node, "ID"),
        boundary: node.attribute("Boundary").unwrap_or_default().trim().to_string(),
        ctm: attr_string(node, "CTM"),
        draw_param: attr_string(node, "DrawParam"),
        line_width: attr_string(node, "LineWidth"),
        alpha: attr_string(node, "Alpha"),
        visible: parse_bool(node.attribute("Visible")).unwrap_or(true),
        join: attr_string(node, "Join"),
        cap: attr_string(node, "Cap"),
        miter_limit: attr_string(node, "MiterLimit"),
        dash_pattern: attr_string(node, "DashPattern"),
        dash_offset: attr_string(node, "DashOffset"),
    }
}

fn decode_path(node: &XmlNode) -> PathObject {
    PathObject {
        common: decode_common(node),
        stroke: parse_bool(node.attribute("Stroke")),
        fill: parse_bool(node.attribute("Fill")),
        rule: attr_string(node, "Rule"),
        abbreviated_data: node.child_text("ofd:AbbreviatedData").unwrap_or_default(),
        stroke_color: node.child("ofd:StrokeColor").map(decode_color),
        fill_color: node.child("ofd:FillColor").map(decode_color),
    }
}

fn decode_text(node: &XmlNode) -> TextObject {
    let cg_transforms = node
        .children_named("ofd:CGTransform")
        .map(|cg| CgTransform {
            code_position: parse_usize(cg.attribute("CodePosition")),
            code_count: parse_usize(cg.attribute("CodeCount")).max(1),
            glyph_count: parse_usize(cg.attribute("GlyphCount")).max(1),
            glyphs: cg
                .child_text("ofd:Glyphs")
                .map(|g| g.split_whitespace().filter_map(|t| t.parse().ok()).collect())
                .unwrap_or_default(),
        })
        .collect();

    let text_codes = node
        .children_named("ofd:TextCode")
        .map(|tc| TextCode {
            x: parse_f64(tc.attribute("X")),
            y: parse_f64(tc.attribute("Y")),
            delta_x: attr_string(tc, "DeltaX"),
            delta_y: attr_string(tc, "DeltaY"),
            text: tc.text().unwrap_or_default(),
        })
        .collect();

    TextObject {
        common: decode_common(node),
        font: node.attribute("Font").unwrap_or_default().trim().to_string(),
        size: parse_f64(node.attribute("Size")).unwrap_or(0.0),
        stroke: parse_bool(node.attribute("Stroke")),
        fill: parse_bool(node.attribute("Fill")),
        h_scale: parse_f64(node.attribute("HScale")),
        weight: node.attribute("Weight").and_then(|w| w.trim().parse().ok()),
        italic: parse_bool(node.attribute("Italic")).unwrap_or(false),
        char_direction: parse_f64(node.attribute("CharDirection")),
        stroke_color: node.child("ofd:StrokeColor").map(decode_color),
        fill_color: node.child("ofd:FillColor").map(decode_color),
        cg_transforms,
        text_codes,
    }
}

fn parse_usize(val: Option<&str>) -> usize {
    val.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// `FillColor`/`StrokeColor`/`Color` element, including shadings.
pub(super) fn decode_color(node: &XmlNode) -> ColorSpec {
    let axial = node.child("ofd:AxialShd").map(|shd| AxialShading {
        start_point: shd.attribute("StartPoint").unwrap_or("0 0").to_string(),
        end_point: shd.attribute("EndPoint").unwrap_or("0 0").to_string(),
        map_type: attr_string(shd, "MapType"),
        extend: attr_string(shd, "Extend"),
        segments: decode_segments(shd),
    });
    let radial_fallback = node.child("ofd:RadialShd").and_then(|shd| {
        log::warn!("RadialShd is drawn with its first segment color");
        decode_segments(shd).into_iter().next().map(|s| Box::new(s.color))
    });
    ColorSpec {
        value: attr_string(node, "Value"),
        index: attr_string(node, "Index"),
        color_space: attr_string(node, "ColorSpace"),
        alpha: attr_string(node, "Alpha"),
        axial,
        radial_fallback,
    }
}

fn decode_segments(shd: &XmlNode) -> Vec<ShadingSegment> {
    shd.children_named("ofd:Segment")
        .filter_map(|seg| {
            let color = seg.child("ofd:Color")?;
            Some(ShadingSegment {
                position: parse_f64(seg.attribute("Position")),
                color: decode_color(color),
            })
        })
        .collect()
}
