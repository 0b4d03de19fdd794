use std::collections::HashMap;
use std::fmt::Write;

use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::geometry::{Ctm, apply_ctm, fmt_num};
use crate::model::{Resource, get_font};
use crate::package::Package;

/// An embedded font file that parsed successfully.
pub(crate) struct EmbeddedFont {
    data: Vec<u8>,
    face_index: u32,
    pub(crate) units_per_em: f64,
}

/// Font files loaded during one render, keyed by font resource ID.
/// Failures are cached too so each file is only tried once.
#[derive(Default)]
pub(crate) struct FontCache {
    loaded: HashMap<String, Option<EmbeddedFont>>,
}

fn load_embedded(data: Vec<u8>) -> Option<EmbeddedFont> {
    let face_count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
    for face_index in 0..face_count {
        let Ok(face) = Face::parse(&data, face_index) else {
            continue;
        };
        let units_per_em = f64::from(face.units_per_em());
        return Some(EmbeddedFont {
            data,
            face_index,
            units_per_em,
        });
    }
    None
}

impl FontCache {
    pub(crate) fn get(&mut self, res: &[Resource], package: &Package, font_id: &str) -> Option<&EmbeddedFont> {
        self.loaded
            .entry(font_id.to_string())
            .or_insert_with(|| {
                let path = get_font(res, font_id)?.path.as_deref()?;
                let Some(bytes) = package.bytes(path) else {
                    log::warn!("Font file {path} for font {font_id} is missing");
                    return None;
                };
                let font = load_embedded(bytes.to_vec());
                if font.is_none() {
                    log::warn!("Font file {path} for font {font_id} could not be parsed");
                }
                font
            })
            .as_ref()
    }
}

/// Glyph selector: an explicit glyph id from CGTransform, or a character.
#[derive(Clone, Copy, Debug)]
pub(crate) enum GlyphRef {
    Id(u16),
    Char(char),
}

struct PathWriter<'t> {
    d: String,
    transform: &'t Ctm,
}

impl PathWriter<'_> {
    fn point(&mut self, x: f32, y: f32) {
        let (px, py) = apply_ctm(f64::from(x), f64::from(y), self.transform);
        let _ = write!(self.d, " {} {}", fmt_num(px), fmt_num(py));
    }
}

impl OutlineBuilder for PathWriter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.d.push_str(" M");
        self.point(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.d.push_str(" L");
        self.point(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.d.push_str(" Q");
        self.point(x1, y1);
        self.point(x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.d.push_str(" C");
        self.point(x1, y1);
        self.point(x2, y2);
        self.point(x, y);
    }

    fn close(&mut self) {
        self.d.push_str(" Z");
    }
}

impl EmbeddedFont {
    /// Outline of one glyph as SVG path data, mapped from font units through
    /// `transform`. `None` when the font has no such glyph; an empty string
    /// for glyphs without contours (spaces).
    pub(crate) fn glyph_path(&self, glyph: GlyphRef, transform: &Ctm) -> Option<String> {
        let face = Face::parse(&self.data, self.face_index).ok()?;
        let id = match glyph {
            GlyphRef::Id(id) => GlyphId(id),
            GlyphRef::Char(c) => face.glyph_index(c)?,
        };
        if id.0 >= face.number_of_glyphs() {
            return None;
        }
        let mut writer = PathWriter {
            d: String::new(),
            transform,
        };
        face.outline_glyph(id, &mut writer);
        Some(writer.d.trim_start().to_string())
    }
}
