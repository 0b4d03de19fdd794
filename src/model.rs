use std::collections::HashMap;

/// Parsed OFD document, built once per parse and owned by the caller.
#[derive(Clone, Debug, Default)]
pub struct OfdDocument {
    /// Root directory prefix such as `Doc_0/` (STLoc).
    pub doc_root: String,
    pub doc_info: DocInfo,
    pub page_area: Option<PageArea>,
    pub pages: Vec<Page>,
    pub resources: Vec<Resource>,
    /// Template ID -> page-shaped template content (Tpls).
    pub templates: HashMap<String, Vec<Page>>,
    pub signatures: Vec<Signature>,
    /// Page ID -> signatures whose stamps sit on that page, stamps filtered to it.
    pub page_signatures: HashMap<String, Vec<Signature>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocInfo {
    pub doc_id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub creator_version: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageArea {
    pub physical_box: Option<String>,
    pub application_box: Option<String>,
    pub content_box: Option<String>,
    pub bleed_box: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    pub id: String,
    pub area: Option<PageArea>,
    /// `None` until the page's own XML part has been read.
    pub content: Option<Vec<PageLayer>>,
    pub templates: Vec<TemplateRef>,
    pub annots: Vec<Annotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateRef {
    pub template_id: String,
    pub z_order: ZOrder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZOrder {
    #[default]
    Background,
    Foreground,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayerType {
    Background,
    #[default]
    Body,
    WatermarkAnnot,
    Foreground,
}

impl LayerType {
    pub fn parse(val: &str) -> LayerType {
        match val {
            "Background" => LayerType::Background,
            "Foreground" => LayerType::Foreground,
            "WatermarkAnnot" | "Watermark" => LayerType::WatermarkAnnot,
            _ => LayerType::Body,
        }
    }

    /// Stacking position; lower renders first.
    pub fn z_index(self) -> u8 {
        match self {
            LayerType::Background => 2,
            LayerType::Body => 4,
            LayerType::WatermarkAnnot => 6,
            LayerType::Foreground => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::Background => "Background",
            LayerType::Body => "Body",
            LayerType::WatermarkAnnot => "WatermarkAnnot",
            LayerType::Foreground => "Foreground",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageLayer {
    pub id: Option<String>,
    pub layer_type: LayerType,
    pub draw_param: Option<String>,
    pub page_block: Vec<DrawableObject>,
}

/// Attributes every graphic unit carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectCommon {
    pub id: Option<String>,
    pub boundary: String,
    pub ctm: Option<String>,
    pub draw_param: Option<String>,
    pub line_width: Option<String>,
    pub alpha: Option<String>,
    pub visible: bool,
    pub join: Option<String>,
    pub cap: Option<String>,
    pub miter_limit: Option<String>,
    pub dash_pattern: Option<String>,
    pub dash_offset: Option<String>,
}

#[derive(Clone, Debug)]
pub enum DrawableObject {
    Text(TextObject),
    Path(PathObject),
    Image(ImageObject),
    Composite(CompositeObject),
}

impl DrawableObject {
    pub fn type_name(&self) -> &'static str {
        match self {
            DrawableObject::Text(_) => "TextObject",
            DrawableObject::Path(_) => "PathObject",
            DrawableObject::Image(_) => "ImageObject",
            DrawableObject::Composite(_) => "CompositeObject",
        }
    }

    pub fn common(&self) -> &ObjectCommon {
        match self {
            DrawableObject::Text(o) => &o.common,
            DrawableObject::Path(o) => &o.common,
            DrawableObject::Image(o) => &o.common,
            DrawableObject::Composite(o) => &o.common,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorSpec {
    pub value: Option<String>,
    pub index: Option<String>,
    pub color_space: Option<String>,
    pub alpha: Option<String>,
    pub axial: Option<AxialShading>,
    /// Radial shadings degrade to their first segment.
    pub radial_fallback: Option<Box<ColorSpec>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxialShading {
    pub start_point: String,
    pub end_point: String,
    pub map_type: Option<String>,
    pub extend: Option<String>,
    pub segments: Vec<ShadingSegment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadingSegment {
    pub position: Option<f64>,
    pub color: ColorSpec,
}

#[derive(Clone, Debug, Default)]
pub struct PathObject {
    pub common: ObjectCommon,
    pub stroke: Option<bool>,
    pub fill: Option<bool>,
    pub rule: Option<String>,
    pub abbreviated_data: String,
    pub stroke_color: Option<ColorSpec>,
    pub fill_color: Option<ColorSpec>,
}

#[derive(Clone, Debug, Default)]
pub struct TextObject {
    pub common: ObjectCommon,
    pub font: String,
    pub size: f64,
    pub stroke: Option<bool>,
    pub fill: Option<bool>,
    pub h_scale: Option<f64>,
    pub weight: Option<u32>,
    pub italic: bool,
    /// Glyph rotation in degrees, clockwise.
    pub char_direction: Option<f64>,
    pub stroke_color: Option<ColorSpec>,
    pub fill_color: Option<ColorSpec>,
    pub cg_transforms: Vec<CgTransform>,
    pub text_codes: Vec<TextCode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextCode {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub delta_x: Option<String>,
    pub delta_y: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CgTransform {
    pub code_position: usize,
    pub code_count: usize,
    pub glyph_count: usize,
    pub glyphs: Vec<u16>,
}

#[derive(Clone, Debug, Default)]
pub struct ImageObject {
    pub common: ObjectCommon,
    pub resource_id: String,
}

#[derive(Clone, Debug, Default)]
pub struct CompositeObject {
    pub common: ObjectCommon,
    pub resource_id: String,
}

#[derive(Clone, Debug)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
}

#[derive(Clone, Debug)]
pub enum ResourceKind {
    Font(FontRes),
    MultiMedia(MediaRes),
    DrawParam(DrawParamRes),
    ColorSpace(ColorSpaceRes),
    CompositeGraphicUnit(CompositeUnitRes),
}

impl ResourceKind {
    pub fn ofd_type(&self) -> OfdType {
        match self {
            ResourceKind::Font(_) => OfdType::Font,
            ResourceKind::MultiMedia(_) => OfdType::MultiMedia,
            ResourceKind::DrawParam(_) => OfdType::DrawParam,
            ResourceKind::ColorSpace(_) => OfdType::ColorSpace,
            ResourceKind::CompositeGraphicUnit(_) => OfdType::CompositeGraphicUnit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OfdType {
    Font,
    MultiMedia,
    DrawParam,
    ColorSpace,
    CompositeGraphicUnit,
}

impl OfdType {
    pub fn from_element(local_name: &str) -> Option<OfdType> {
        match local_name {
            "Font" => Some(OfdType::Font),
            "MultiMedia" => Some(OfdType::MultiMedia),
            "DrawParam" => Some(OfdType::DrawParam),
            "ColorSpace" => Some(OfdType::ColorSpace),
            "CompositeGraphicUnit" => Some(OfdType::CompositeGraphicUnit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontRes {
    pub font_name: String,
    pub family_name: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub serif: bool,
    pub fixed_width: bool,
    pub charset: Option<String>,
    /// Package path of the embedded font file.
    pub path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaRes {
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub path: Option<String>,
}

pub const DEFAULT_JOIN: &str = "Miter";
pub const DEFAULT_LINE_WIDTH: &str = "0.353";
pub const DEFAULT_CAP: &str = "Butt";
pub const DEFAULT_MITER_LIMIT: &str = "3.528";
pub const DEFAULT_DASH_OFFSET: &str = "0";

/// Draw parameters with the built-in defaults already merged in.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawParamRes {
    pub relative: Option<String>,
    pub join: String,
    pub line_width: String,
    pub cap: String,
    pub miter_limit: String,
    pub dash_offset: String,
    pub dash_pattern: Option<String>,
    pub fill_color: Option<ColorSpec>,
    pub stroke_color: Option<ColorSpec>,
}

impl Default for DrawParamRes {
    fn default() -> Self {
        DrawParamRes {
            relative: None,
            join: DEFAULT_JOIN.to_string(),
            line_width: DEFAULT_LINE_WIDTH.to_string(),
            cap: DEFAULT_CAP.to_string(),
            miter_limit: DEFAULT_MITER_LIMIT.to_string(),
            dash_offset: DEFAULT_DASH_OFFSET.to_string(),
            dash_pattern: None,
            fill_color: None,
            stroke_color: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorSpaceRes {
    pub space_type: String,
    pub bits_per_component: Option<u32>,
    pub profile: Option<String>,
    /// Palette `CV` entries in order.
    pub palette: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CompositeUnitRes {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Vec<DrawableObject>,
}

/// Look up a resource by ID inside a single type bucket.
pub fn find_resource<'a>(res: &'a [Resource], id: &str, ofd_type: OfdType) -> Option<&'a Resource> {
    res.iter()
        .find(|r| r.id == id && r.kind.ofd_type() == ofd_type)
}

pub fn get_font<'a>(res: &'a [Resource], id: &str) -> Option<&'a FontRes> {
    match &find_resource(res, id, OfdType::Font)?.kind {
        ResourceKind::Font(f) => Some(f),
        _ => None,
    }
}

pub fn get_media<'a>(res: &'a [Resource], id: &str) -> Option<&'a MediaRes> {
    match &find_resource(res, id, OfdType::MultiMedia)?.kind {
        ResourceKind::MultiMedia(m) => Some(m),
        _ => None,
    }
}

pub fn get_draw_param<'a>(res: &'a [Resource], id: &str) -> Option<&'a DrawParamRes> {
    match &find_resource(res, id, OfdType::DrawParam)?.kind {
        ResourceKind::DrawParam(d) => Some(d),
        _ => None,
    }
}

pub fn get_color_space<'a>(res: &'a [Resource], id: &str) -> Option<&'a ColorSpaceRes> {
    match &find_resource(res, id, OfdType::ColorSpace)?.kind {
        ResourceKind::ColorSpace(c) => Some(c),
        _ => None,
    }
}

pub fn get_composite_unit<'a>(res: &'a [Resource], id: &str) -> Option<&'a CompositeUnitRes> {
    match &find_resource(res, id, OfdType::CompositeGraphicUnit)?.kind {
        ResourceKind::CompositeGraphicUnit(c) => Some(c),
        _ => None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct Annotation {
    pub id: Option<String>,
    pub annot_type: String,
    pub creator: Option<String>,
    pub last_mod_date: Option<String>,
    pub visible: bool,
    pub appearance_boundary: Option<String>,
    pub page_block: Vec<DrawableObject>,
}

#[derive(Clone, Debug, Default)]
pub struct Signature {
    pub id: String,
    pub sign_type: Option<String>,
    pub base_loc: String,
    pub signed_info: SignedInfo,
    pub signed_value: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct SignedInfo {
    pub provider: Provider,
    pub signature_method: Option<String>,
    pub signature_date_time: Option<String>,
    pub references: References,
    pub stamp_annots: Vec<StampAnnot>,
    pub seal_base_loc: Option<String>,
    pub seal: Option<SealPicture>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Provider {
    pub provider_name: Option<String>,
    pub company: Option<String>,
    pub version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct References {
    pub check_method: Option<String>,
    pub items: Vec<Reference>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reference {
    pub file_ref: String,
    pub check_value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StampAnnot {
    pub id: Option<String>,
    pub page_ref: String,
    pub boundary: String,
    pub clip: Option<String>,
}

/// Seal image pulled out of the signed value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SealPicture {
    pub data: Option<Vec<u8>>,
    pub pic_type: String,
    pub width: String,
    pub height: String,
}
