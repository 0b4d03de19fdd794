use crate::geometry::{
    Ctm, IDENTITY, Unit, apply_ctm, expand_delta_positions, fmt_num, multiply, parse_ctm,
    rotation_degrees,
};
use crate::model::{CgTransform, TextObject, get_font};
use crate::svg::Element;

use super::fonts::GlyphRef;
use super::{Renderer, apply_alpha};

/// Where one character lands, in boundary-space px.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TextPoint {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) text: char,
    /// Glyph id from a `CGTransform` covering this character.
    pub(crate) glyph: Option<u16>,
}

fn glyph_for(transforms: &[CgTransform], index: usize) -> Option<u16> {
    let cg = transforms
        .iter()
        .find(|cg| index >= cg.code_position && index - cg.code_position < cg.code_count)?;
    let offset = index - cg.code_position;
    if cg.code_count == cg.glyph_count {
        cg.glyphs.get(offset).copied()
    } else {
        cg.glyphs
            .get(offset.min(cg.glyphs.len().saturating_sub(1)))
            .copied()
    }
}

/// Per-character positions: each `TextCode` starts at its `X`/`Y` (or where
/// the previous one stopped), steps through `DeltaX`/`DeltaY`, and is then
/// projected through the object's CTM.
pub(crate) fn cal_text_points(text: &TextObject, unit: Unit) -> Vec<TextPoint> {
    let ctm = text.common.ctm.as_deref().and_then(parse_ctm);
    let mut out = Vec::new();
    let mut index = 0;
    let (mut last_x, mut last_y) = (0.0, 0.0);
    for code in &text.text_codes {
        let chars: Vec<char> = code.text.chars().collect();
        let deltas = |d: &Option<String>| {
            d.as_deref()
                .map(|d| expand_delta_positions(d, chars.len()))
                .unwrap_or_default()
        };
        let dx = deltas(&code.delta_x);
        let dy = deltas(&code.delta_y);
        let mut x = code.x.unwrap_or(last_x);
        let mut y = code.y.unwrap_or(last_y);
        for (i, c) in chars.iter().enumerate() {
            if i > 0 {
                x += dx.get(i - 1).copied().unwrap_or(0.0);
                y += dy.get(i - 1).copied().unwrap_or(0.0);
            }
            let (tx, ty) = match &ctm {
                Some(m) => apply_ctm(x, y, m),
                None => (x, y),
            };
            out.push(TextPoint {
                x: unit.px(tx),
                y: unit.px(ty),
                text: *c,
                glyph: glyph_for(&text.cg_transforms, index),
            });
            index += 1;
        }
        last_x = x;
        last_y = y;
    }
    out
}

/// CTM without its translation, or identity.
fn linear_part(text: &TextObject) -> Ctm {
    match text.common.ctm.as_deref().and_then(parse_ctm) {
        Some(m) => [m[0], m[1], m[2], m[3], 0.0, 0.0],
        None => IDENTITY,
    }
}

/// `CharDirection` as a rotation matrix, or identity.
fn char_rotation(text: &TextObject) -> Ctm {
    match text.char_direction {
        Some(deg) if deg % 360.0 != 0.0 => {
            let (sin, cos) = deg.to_radians().sin_cos();
            [cos, sin, -sin, cos, 0.0, 0.0]
        }
        _ => IDENTITY,
    }
}

impl Renderer<'_> {
    pub(super) fn render_text(&mut self, text: &TextObject, layer_param: Option<&str>) -> Option<Element> {
        let points = cal_text_points(text, self.unit);
        if points.is_empty() {
            return None;
        }
        let style = self.resolve_style(&text.common, layer_param);
        let mut el = match self.glyph_run(text, &points) {
            Some(d) => Element::new("path").attr("d", d),
            None => self.native_text(text, &points),
        };

        if text.fill.unwrap_or(true) {
            let spec = text.fill_color.as_ref().or(style.fill.as_ref());
            self.apply_fill(&mut el, spec);
        } else {
            el.set_attr("fill", "none");
        }
        if text.stroke.unwrap_or(false) {
            let spec = text.stroke_color.as_ref().or(style.stroke.as_ref());
            self.apply_stroke(&mut el, spec, &style);
        }
        apply_alpha(&mut el, &text.common);
        Some(el)
    }

    /// Outlines from the embedded font, one path for the whole object.
    /// `None` when there is no usable font or none of the glyphs exist.
    fn glyph_run(&mut self, text: &TextObject, points: &[TextPoint]) -> Option<String> {
        let doc = self.doc;
        let unit = self.unit;
        let font = self.fonts.get(&doc.resources, self.package, &text.font)?;
        let k = text.size / font.units_per_em;
        let h_scale = text.h_scale.unwrap_or(1.0);
        // Font units are y-up; OFD page space is y-down.
        let to_text_space = [k * h_scale, 0.0, 0.0, -k, 0.0, 0.0];
        let m = multiply(
            &multiply(&to_text_space, &char_rotation(text)),
            &linear_part(text),
        );

        let mut d = String::new();
        let mut missing = 0;
        for p in points {
            let transform = [
                m[0] * unit.pixels_per_mm,
                m[1] * unit.pixels_per_mm,
                m[2] * unit.pixels_per_mm,
                m[3] * unit.pixels_per_mm,
                p.x,
                p.y,
            ];
            let glyph = match p.glyph {
                Some(id) => GlyphRef::Id(id),
                None => GlyphRef::Char(p.text),
            };
            match font.glyph_path(glyph, &transform) {
                Some(outline) => {
                    if !outline.is_empty() {
                        if !d.is_empty() {
                            d.push(' ');
                        }
                        d.push_str(&outline);
                    }
                }
                None => {
                    log::debug!("Font {} has no glyph for {:?}", text.font, p.text);
                    missing += 1;
                }
            }
        }
        if missing == points.len() {
            return None;
        }
        Some(d)
    }

    /// One `<text>` per character, for fonts that are not embedded.
    fn native_text(&self, text: &TextObject, points: &[TextPoint]) -> Element {
        let font = get_font(&self.doc.resources, &text.font);
        let family = font
            .map(|f| f.family_name.clone().unwrap_or_else(|| f.font_name.clone()))
            .unwrap_or_default();
        let generic = if font.is_some_and(|f| f.serif) { "serif" } else { "sans-serif" };
        let family = if family.is_empty() {
            generic.to_string()
        } else {
            format!("'{family}', {generic}")
        };

        let linear = linear_part(text);
        let scale_y = linear[2].hypot(linear[3]);
        let angle = rotation_degrees(&linear) + text.char_direction.unwrap_or(0.0);
        let mut h_scale = text.h_scale.unwrap_or(1.0);
        if angle.abs() < 1e-6 && linear[3].abs() > f64::EPSILON {
            h_scale *= linear[0] / linear[3];
        }

        let mut group = Element::new("g")
            .attr("class", "ofd-text")
            .attr("font-family", family)
            .attr("font-size", fmt_num(self.unit.px(text.size) * scale_y));
        if text.weight.is_some_and(|w| w >= 700) || font.is_some_and(|f| f.bold) {
            group.set_attr("font-weight", "bold");
        }
        if text.italic || font.is_some_and(|f| f.italic) {
            group.set_attr("font-style", "italic");
        }

        for p in points {
            let mut glyph = Element::new("text").text(p.text.to_string());
            if angle.abs() >= 1e-6 {
                glyph.set_attr("x", fmt_num(p.x));
                glyph.set_attr("y", fmt_num(p.y));
                glyph.set_attr(
                    "transform",
                    format!("rotate({} {} {})", fmt_num(angle), fmt_num(p.x), fmt_num(p.y)),
                );
            } else if (h_scale - 1.0).abs() > 1e-6 {
                glyph.set_attr(
                    "transform",
                    format!(
                        "translate({} {}) scale({} 1)",
                        fmt_num(p.x),
                        fmt_num(p.y),
                        fmt_num(h_scale)
                    ),
                );
            } else {
                glyph.set_attr("x", fmt_num(p.x));
                glyph.set_attr("y", fmt_num(p.y));
            }
            group.push(glyph);
        }
        group
    }
}
