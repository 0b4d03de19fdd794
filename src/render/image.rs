use std::io::Cursor;

use ::image::{DynamicImage, ImageFormat, RgbaImage};
use base64::Engine;

use crate::detect::{FileKind, image_kind, kind_from_name};
use crate::error::Error;
use crate::geometry::{PixelBox, fmt_num, format_box, parse_ctm};
use crate::model::{ImageObject, Signature, StampAnnot, get_media};
use crate::package::Package;
use crate::parse::parse_package;
use crate::svg::Element;

use super::{Renderer, apply_alpha, effective_unit, viewport};

/// Anything brighter than this on every channel counts as paper.
const WHITE_KEY_THRESHOLD: u8 = 250;

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

fn encode_png(image: DynamicImage) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    image.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

/// Near-white pixels become fully transparent.
pub(crate) fn key_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > WHITE_KEY_THRESHOLD && g > WHITE_KEY_THRESHOLD && b > WHITE_KEY_THRESHOLD {
            pixel.0[3] = 0;
        }
    }
}

/// BMP re-encoded as PNG with a transparent background.
fn bmp_to_png(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let mut rgba = ::image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?.to_rgba8();
    key_white(&mut rgba);
    encode_png(DynamicImage::ImageRgba8(rgba))
}

impl Renderer<'_> {
    /// `href` for raw image bytes of the given kind.
    fn image_href(&self, bytes: &[u8], kind: FileKind, what: &str) -> Option<String> {
        match kind {
            FileKind::Png | FileKind::Jpeg | FileKind::Gif => Some(data_uri(kind.mime_type(), bytes)),
            FileKind::Bmp => match bmp_to_png(bytes) {
                Ok(png) => Some(data_uri("image/png", &png)),
                Err(e) => {
                    log::warn!("Could not convert BMP {what}: {e}");
                    None
                }
            },
            FileKind::Jbig2 => {
                let Some(codec) = &self.options.bitonal_codec else {
                    log::warn!("No bitonal codec available for {what}; image skipped");
                    return None;
                };
                let Some(gray) = codec.decode(bytes) else {
                    log::warn!("Bitonal codec could not decode {what}");
                    return None;
                };
                match encode_png(DynamicImage::ImageLuma8(gray)) {
                    Ok(png) => Some(data_uri("image/png", &png)),
                    Err(e) => {
                        log::warn!("Could not encode decoded bitonal image {what}: {e}");
                        None
                    }
                }
            }
            other => {
                log::warn!("Unsupported image format {other:?} for {what}");
                None
            }
        }
    }

    /// `ImageObject`: the CTM maps the unit square onto the page, so the
    /// `<image>` is 1x1 and every CTM term is scaled to px.
    pub(super) fn render_image(&mut self, img: &ImageObject, bounds: PixelBox) -> Option<Element> {
        let doc = self.doc;
        let Some(media) = get_media(&doc.resources, &img.resource_id) else {
            log::warn!("Image resource {} not found", img.resource_id);
            return None;
        };
        let path = media.path.as_deref()?;
        let Some(bytes) = self.package.bytes(path) else {
            log::warn!("Image file {path} is missing");
            return None;
        };
        let kind = image_kind(bytes, media.format.as_deref(), Some(path));
        let href = self.image_href(bytes, kind, path)?;

        let mut el = Element::new("image")
            .attr("href", href)
            .attr("preserveAspectRatio", "none");
        match img.common.ctm.as_deref().and_then(parse_ctm) {
            Some(ctm) => {
                let m: Vec<String> = ctm.iter().map(|v| fmt_num(self.unit.px(*v))).collect();
                el.set_attr("width", "1");
                el.set_attr("height", "1");
                el.set_attr("transform", format!("matrix({})", m.join(" ")));
            }
            None => {
                el.set_attr("width", fmt_num(bounds.width));
                el.set_attr("height", fmt_num(bounds.height));
            }
        }
        apply_alpha(&mut el, &img.common);
        Some(el)
    }

    /// One seal at one stamp position.
    pub(super) fn render_stamp(&mut self, sig: &Signature, stamp: &StampAnnot) -> Option<Element> {
        let Some(bounds) = format_box(&stamp.boundary, self.unit, true) else {
            log::warn!("Stamp of signature {} has no usable Boundary", sig.id);
            return None;
        };
        let Some(seal) = &sig.signed_info.seal else {
            log::debug!("Signature {} has no seal picture", sig.id);
            return None;
        };
        let data = seal.data.as_deref()?;
        let mut wrapper = viewport(bounds)
            .attr("class", "ofd-seal")
            .attr("data-signature-id", sig.id.as_str());

        if seal.pic_type == "ofd" {
            wrapper.push(self.render_nested_seal(data, bounds));
            return Some(wrapper);
        }
        let kind = match kind_from_name(&seal.pic_type) {
            FileKind::Unknown => crate::detect::sniff(data),
            kind => kind,
        };
        let href = self.image_href(data, kind, &format!("seal of signature {}", sig.id))?;
        wrapper.push(
            Element::new("image")
                .attr("href", href)
                .attr("width", fmt_num(bounds.width))
                .attr("height", fmt_num(bounds.height))
                .attr("preserveAspectRatio", "none"),
        );
        Some(wrapper)
    }

    /// First page of an OFD seal, scaled into `bounds`. Past the depth limit
    /// or on any failure a placeholder box stands in.
    fn render_nested_seal(&mut self, data: &[u8], bounds: PixelBox) -> Element {
        let depth = self.depth + 1;
        if depth > self.options.max_seal_depth {
            log::warn!("Nested OFD seal at depth {depth} exceeds the limit; placeholder drawn");
            return seal_placeholder(bounds);
        }
        let package = match Package::from_bytes(data) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Nested OFD seal is not a readable package: {e}");
                return seal_placeholder(bounds);
            }
        };
        let doc = match parse_package(&package) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Nested OFD seal failed to parse: {e}");
                return seal_placeholder(bounds);
            }
        };
        let Some(first) = doc.pages.first() else {
            return seal_placeholder(bounds);
        };
        let prefix = format!("{}-n{}", self.id_prefix, self.next_id + 1);
        self.next_id += 1;
        let unit = effective_unit(&doc, self.options);
        let mut nested = Renderer::new(&doc, &package, self.options, unit, depth, prefix);
        let mut svg = nested.render_page(first);
        svg.set_attr("width", fmt_num(bounds.width));
        svg.set_attr("height", fmt_num(bounds.height));
        svg.set_attr("preserveAspectRatio", "none");
        svg
    }
}

fn seal_placeholder(bounds: PixelBox) -> Element {
    Element::new("rect")
        .attr("class", "ofd-seal-placeholder")
        .attr("width", fmt_num(bounds.width))
        .attr("height", fmt_num(bounds.height))
        .attr("fill", "none")
        .attr("stroke", "rgb(255,0,0)")
        .attr("stroke-dasharray", "4 2")
}
