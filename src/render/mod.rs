//! Projects an [`OfdDocument`] onto an owned SVG/HTML element tree.
//!
//! Pages render in document order. Inside a page, content is stacked as
//! background templates, page layers by type, annotations, foreground
//! templates and finally signature seals. Every drawable becomes a nested
//! `<svg>` placed at its boundary box.

mod color;
mod fonts;
mod image;
mod path;
mod text;

use std::fmt;
use std::sync::Arc;

use crate::geometry::{
    DEFAULT_PIXELS_PER_MM, PixelBox, Unit, fmt_num, format_box, parse_ctm, parse_numbers,
    parse_st_box, svg_matrix,
};
use crate::model::{
    ColorSpec, DrawParamRes, DrawableObject, ObjectCommon, OfdDocument, Page, PageLayer, ZOrder,
    get_composite_unit, get_draw_param,
};
use crate::package::Package;
use crate::svg::Element;

use self::color::{Paint, flat_color, linear_gradient};
use self::fonts::FontCache;

pub const DEFAULT_MAX_SEAL_DEPTH: usize = 5;

/// Page box used when neither the page nor the document declares one (A4).
const FALLBACK_PAGE_BOX: &str = "0 0 210 297";

/// Decoder for bitonal JBIG2/CCITT image streams.
pub trait BitonalCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Option<::image::GrayImage>;
}

#[derive(Clone)]
pub struct RenderOptions {
    pub pixels_per_mm: f64,
    /// Fit the first page to this many pixels wide, overriding `pixels_per_mm`.
    pub screen_width: Option<f64>,
    /// Deepest nested-OFD seal that is still rendered.
    pub max_seal_depth: usize,
    pub bitonal_codec: Option<Arc<dyn BitonalCodec>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pixels_per_mm: DEFAULT_PIXELS_PER_MM,
            screen_width: None,
            max_seal_depth: DEFAULT_MAX_SEAL_DEPTH,
            bitonal_codec: None,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("pixels_per_mm", &self.pixels_per_mm)
            .field("screen_width", &self.screen_width)
            .field("max_seal_depth", &self.max_seal_depth)
            .field("bitonal_codec", &self.bitonal_codec.is_some())
            .finish()
    }
}

/// Stroke and fill settings after the DrawParam chain and object overrides.
#[derive(Clone, Debug)]
pub(crate) struct Style {
    pub(crate) line_width: f64,
    pub(crate) join: String,
    pub(crate) cap: String,
    pub(crate) miter_limit: f64,
    pub(crate) dash_pattern: Option<Vec<f64>>,
    pub(crate) dash_offset: f64,
    pub(crate) fill: Option<ColorSpec>,
    pub(crate) stroke: Option<ColorSpec>,
}

pub(crate) struct Renderer<'a> {
    doc: &'a OfdDocument,
    package: &'a Package,
    options: &'a RenderOptions,
    unit: Unit,
    /// Nested-seal depth; the top-level document is 0.
    depth: usize,
    fonts: FontCache,
    /// Gradients collected for the page being rendered.
    defs: Vec<Element>,
    id_prefix: String,
    next_id: usize,
    composite_stack: Vec<String>,
}

/// Page box in mm: the page's own `PhysicalBox`, then the document's.
pub fn page_box(doc: &OfdDocument, page: &Page) -> String {
    page.area
        .as_ref()
        .and_then(|a| a.physical_box.clone())
        .or_else(|| doc.page_area.as_ref().and_then(|a| a.physical_box.clone()))
        .unwrap_or_else(|| FALLBACK_PAGE_BOX.to_string())
}

/// Pixel scale for a render: the explicit density, or the one that makes
/// the first page exactly `screen_width` pixels wide.
pub fn effective_unit(doc: &OfdDocument, options: &RenderOptions) -> Unit {
    if let Some(screen_width) = options.screen_width
        && let Some(first) = doc.pages.first()
        && let Some(b) = parse_st_box(&page_box(doc, first))
        && b.w.abs() > f64::EPSILON
    {
        return Unit::new(screen_width / b.w.abs());
    }
    Unit::new(options.pixels_per_mm)
}

/// Render every page of `doc` under one `<div class="ofd-document">`.
pub fn render_document(doc: &OfdDocument, package: &Package, options: &RenderOptions) -> Element {
    let unit = effective_unit(doc, options);
    let mut renderer = Renderer::new(doc, package, options, unit, 0, "ofd".to_string());
    let mut root = Element::new("div").attr("class", "ofd-document");
    for page in &doc.pages {
        let svg = renderer.render_page(page);
        root.push(
            Element::new("div")
                .attr("class", "ofd-page")
                .attr("data-page-id", page.id.as_str())
                .child(svg),
        );
    }
    log::debug!("Rendered {} pages at {} px/mm", doc.pages.len(), unit.pixels_per_mm);
    root
}

fn join_name(join: &str) -> &'static str {
    match join {
        "Round" => "round",
        "Bevel" => "bevel",
        _ => "miter",
    }
}

fn cap_name(cap: &str) -> &'static str {
    match cap {
        "Round" => "round",
        "Square" => "square",
        _ => "butt",
    }
}

fn number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Boundary box as a nested `<svg>` viewport.
fn viewport(b: PixelBox) -> Element {
    Element::new("svg")
        .attr("x", fmt_num(b.left))
        .attr("y", fmt_num(b.top))
        .attr("width", fmt_num(b.width))
        .attr("height", fmt_num(b.height))
        .attr("overflow", "visible")
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(
        doc: &'a OfdDocument,
        package: &'a Package,
        options: &'a RenderOptions,
        unit: Unit,
        depth: usize,
        id_prefix: String,
    ) -> Self {
        Renderer {
            doc,
            package,
            options,
            unit,
            depth,
            fonts: FontCache::default(),
            defs: Vec::new(),
            id_prefix,
            next_id: 0,
            composite_stack: Vec::new(),
        }
    }

    fn fresh_id(&mut self, kind: &str) -> String {
        self.next_id += 1;
        format!("{}-{kind}{}", self.id_prefix, self.next_id)
    }

    /// One page as a standalone `<svg>` sized in px.
    pub(crate) fn render_page(&mut self, page: &Page) -> Element {
        let page_box = format_box(&page_box(self.doc, page), self.unit, true).unwrap_or_default();
        let mut svg = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .attr("width", fmt_num(page_box.width))
            .attr("height", fmt_num(page_box.height))
            .attr(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    fmt_num(page_box.left),
                    fmt_num(page_box.top),
                    fmt_num(page_box.width),
                    fmt_num(page_box.height)
                ),
            );

        let mut slots: Vec<(u8, Element)> = Vec::new();
        let doc = self.doc;
        for tref in &page.templates {
            let Some(template_pages) = doc.templates.get(&tref.template_id) else {
                log::warn!("Page {} uses unknown template {}", page.id, tref.template_id);
                continue;
            };
            let z = match tref.z_order {
                ZOrder::Background => 1,
                ZOrder::Foreground => 9,
            };
            for tpage in template_pages {
                for layer in tpage.content.iter().flatten() {
                    slots.push((z, self.render_layer(layer, "template")));
                }
            }
        }
        for layer in page.content.iter().flatten() {
            slots.push((layer.layer_type.z_index(), self.render_layer(layer, "page")));
        }
        for annot in page.annots.iter().filter(|a| a.visible) {
            let z = if annot.annot_type == "Watermark" { 6 } else { 7 };
            let mut group = Element::new("g")
                .attr("class", "ofd-annot")
                .attr("data-annot-type", annot.annot_type.as_str());
            let mut target = match annot
                .appearance_boundary
                .as_deref()
                .and_then(|b| format_box(b, self.unit, true))
            {
                Some(b) => viewport(b),
                None => Element::new("g"),
            };
            for obj in &annot.page_block {
                if let Some(el) = self.render_object(obj, None) {
                    target.push(el);
                }
            }
            group.push(target);
            slots.push((z, group));
        }
        slots.sort_by_key(|(z, _)| *z);

        let defs = std::mem::take(&mut self.defs);
        if !defs.is_empty() {
            let mut defs_el = Element::new("defs");
            for d in defs {
                defs_el.push(d);
            }
            svg.push(defs_el);
        }
        for (_, el) in slots {
            svg.push(el);
        }

        if let Some(signatures) = doc.page_signatures.get(&page.id) {
            let mut group = Element::new("g").attr("class", "ofd-signatures");
            for sig in signatures {
                for stamp in &sig.signed_info.stamp_annots {
                    if let Some(el) = self.render_stamp(sig, stamp) {
                        group.push(el);
                    }
                }
            }
            if !group.children.is_empty() {
                svg.push(group);
            }
        }
        svg
    }

    fn render_layer(&mut self, layer: &PageLayer, source: &str) -> Element {
        let mut group = Element::new("g")
            .attr("class", "ofd-layer")
            .attr("data-layer", layer.layer_type.as_str())
            .attr("data-source", source);
        for obj in &layer.page_block {
            if let Some(el) = self.render_object(obj, layer.draw_param.as_deref()) {
                group.push(el);
            }
        }
        group
    }

    /// One drawable inside a viewport at its boundary, or `None` when it is
    /// hidden, unplaceable or draws nothing.
    pub(crate) fn render_object(&mut self, obj: &DrawableObject, layer_param: Option<&str>) -> Option<Element> {
        let common = obj.common();
        if !common.visible {
            return None;
        }
        let Some(bounds) = format_box(&common.boundary, self.unit, true) else {
            log::warn!("{} without a usable Boundary skipped", obj.type_name());
            return None;
        };
        let inner = match obj {
            DrawableObject::Path(p) => self.render_path(p, layer_param),
            DrawableObject::Text(t) => self.render_text(t, layer_param),
            DrawableObject::Image(i) => self.render_image(i, bounds),
            DrawableObject::Composite(c) => self.render_composite(c, layer_param),
        }?;
        let mut wrapper = viewport(bounds).attr("data-type", obj.type_name());
        if let Some(id) = &common.id {
            wrapper.set_attr("data-id", id.as_str());
        }
        wrapper.push(inner);
        Some(wrapper)
    }

    fn render_composite(
        &mut self,
        composite: &crate::model::CompositeObject,
        layer_param: Option<&str>,
    ) -> Option<Element> {
        let id = composite.resource_id.as_str();
        if self.composite_stack.iter().any(|c| c == id) {
            log::warn!("Composite unit {id} references itself; skipped");
            return None;
        }
        let doc = self.doc;
        let Some(unit) = get_composite_unit(&doc.resources, id) else {
            log::warn!("Composite unit {id} not found");
            return None;
        };
        self.composite_stack.push(id.to_string());
        let mut group = Element::new("g").attr("class", "ofd-composite");
        for obj in &unit.content {
            if let Some(el) = self.render_object(obj, layer_param) {
                group.push(el);
            }
        }
        self.composite_stack.pop();
        if let Some(ctm) = composite.common.ctm.as_deref().and_then(parse_ctm) {
            group.set_attr("transform", svg_matrix(&ctm, self.unit));
        }
        apply_alpha(&mut group, &composite.common);
        Some(group)
    }

    /// Style for an object: its own attributes, then its DrawParam (or the
    /// layer's) with the `Relative` chain, then defaults.
    pub(crate) fn resolve_style(&self, common: &ObjectCommon, layer_param: Option<&str>) -> Style {
        let chain = common
            .draw_param
            .as_deref()
            .or(layer_param)
            .map(|id| draw_param_chain(self.doc, id))
            .unwrap_or_default();
        let defaults = DrawParamRes::default();
        let base = chain.first().copied().unwrap_or(&defaults);

        let line_width = common
            .line_width
            .as_deref()
            .and_then(number)
            .or_else(|| number(&base.line_width))
            .unwrap_or(0.353);
        let dash_pattern = common
            .dash_pattern
            .as_deref()
            .or_else(|| chain.iter().find_map(|p| p.dash_pattern.as_deref()))
            .map(parse_numbers)
            .filter(|v| !v.is_empty());
        Style {
            line_width,
            join: common.join.clone().unwrap_or_else(|| base.join.clone()),
            cap: common.cap.clone().unwrap_or_else(|| base.cap.clone()),
            miter_limit: common
                .miter_limit
                .as_deref()
                .and_then(number)
                .or_else(|| number(&base.miter_limit))
                .unwrap_or(3.528),
            dash_pattern,
            dash_offset: common
                .dash_offset
                .as_deref()
                .and_then(number)
                .or_else(|| number(&base.dash_offset))
                .unwrap_or(0.0),
            fill: chain.iter().find_map(|p| p.fill_color.clone()),
            stroke: chain.iter().find_map(|p| p.stroke_color.clone()),
        }
    }

    /// Flat color, or a gradient registered in this page's `<defs>`.
    pub(crate) fn paint(&mut self, spec: &ColorSpec) -> Paint {
        let doc = self.doc;
        if let Some(axial) = &spec.axial {
            let id = self.fresh_id("g");
            self.defs
                .push(linear_gradient(&id, axial, &doc.resources, self.unit));
            return Paint {
                color: format!("url(#{id})"),
                opacity: None,
            };
        }
        flat_color(spec, &doc.resources)
    }

    /// Apply stroke attributes from `style` to `el`.
    pub(crate) fn apply_stroke(&mut self, el: &mut Element, spec: Option<&ColorSpec>, style: &Style) {
        let paint = spec.map(|s| self.paint(s)).unwrap_or_else(Paint::black);
        el.set_attr("stroke", paint.color);
        if let Some(o) = paint.opacity {
            el.set_attr("stroke-opacity", fmt_num(o));
        }
        el.set_attr("stroke-width", fmt_num(self.unit.px(style.line_width)));
        el.set_attr("stroke-linejoin", join_name(&style.join));
        el.set_attr("stroke-linecap", cap_name(&style.cap));
        if style.join == "Miter" {
            el.set_attr("stroke-miterlimit", fmt_num(style.miter_limit));
        }
        if let Some(dashes) = &style.dash_pattern {
            let px: Vec<String> = dashes.iter().map(|d| fmt_num(self.unit.px(*d))).collect();
            el.set_attr("stroke-dasharray", px.join(" "));
            if style.dash_offset != 0.0 {
                el.set_attr("stroke-dashoffset", fmt_num(self.unit.px(style.dash_offset)));
            }
        }
    }

    pub(crate) fn apply_fill(&mut self, el: &mut Element, spec: Option<&ColorSpec>) {
        let paint = spec.map(|s| self.paint(s)).unwrap_or_else(Paint::black);
        el.set_attr("fill", paint.color);
        if let Some(o) = paint.opacity {
            el.set_attr("fill-opacity", fmt_num(o));
        }
    }
}

/// `Alpha` (0-255) as element opacity.
pub(crate) fn apply_alpha(el: &mut Element, common: &ObjectCommon) {
    if let Some(alpha) = common
        .alpha
        .as_deref()
        .and_then(crate::geometry::normalize_alpha)
        && alpha < 1.0
    {
        el.set_attr("opacity", fmt_num(alpha));
    }
}

/// `id` followed by its `Relative` ancestors, stopping at the first repeat.
fn draw_param_chain<'d>(doc: &'d OfdDocument, id: &str) -> Vec<&'d DrawParamRes> {
    let mut chain = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    let mut next = Some(id);
    while let Some(current) = next {
        if seen.contains(&current) {
            log::warn!("DrawParam {current} is part of a Relative cycle");
            break;
        }
        let Some(param) = get_draw_param(&doc.resources, current) else {
            break;
        };
        seen.push(current);
        chain.push(param);
        next = param.relative.as_deref();
    }
    chain
}

