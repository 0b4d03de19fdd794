pub mod asn1;
pub mod detect;
mod error;
pub mod geometry;
pub mod model;
pub mod namespace;
pub mod oid;
pub mod package;
pub mod parse;
mod render;
pub mod seal;
mod source;
pub mod svg;
pub mod xml;
mod xml_render;

pub use error::{Error, ErrorDomain};
pub use render::{BitonalCodec, DEFAULT_MAX_SEAL_DEPTH, RenderOptions, render_document};
pub use source::Source;

use std::path::Path;

use detect::FileKind;
use model::OfdDocument;
use package::Package;
use svg::Element;

/// A parsed document together with the package its parts came from.
#[derive(Clone, Debug)]
pub struct ParsedOfd {
    pub document: OfdDocument,
    pub package: Package,
}

impl ParsedOfd {
    pub fn render(&self, options: &RenderOptions) -> Element {
        render_document(&self.document, &self.package, options)
    }
}

/// Where rendered output gets attached: a `content` element, or the element
/// with `id` inside `host`. Giving both `content` and `id` is an error.
#[derive(Default)]
pub struct MountTarget<'m> {
    pub content: Option<&'m mut Element>,
    pub id: Option<&'m str>,
    pub host: Option<&'m mut Element>,
}

impl MountTarget<'_> {
    fn check(&self) -> Result<(), Error> {
        if self.content.is_some() && self.id.is_some() {
            return Err(Error::Mount("content and id are mutually exclusive".into()));
        }
        if self.id.is_some() && self.host.is_none() {
            return Err(Error::MissingArgument("host tree for id".into()));
        }
        Ok(())
    }

    fn attach(self, el: &Element) -> Result<(), Error> {
        self.check()?;
        if let Some(content) = self.content {
            content.push(el.clone());
        } else if let (Some(id), Some(host)) = (self.id, self.host) {
            let target = host
                .find_by_id_mut(id)
                .ok_or_else(|| Error::NotFound(format!("element #{id}")))?;
            target.push(el.clone());
        }
        Ok(())
    }
}

/// Input to [`get_svg_doms`]: something to load, or an already parsed document.
pub enum OfdInput<'a> {
    File(Source),
    Ofd(&'a ParsedOfd),
}

/// Input to [`xml_render`].
pub enum XmlInput {
    Literal(String),
    File(Source),
}

pub fn parse_ofd(source: &Source) -> Result<ParsedOfd, Error> {
    let bytes = source.load()?;
    parse_ofd_bytes(&bytes)
}

pub fn parse_ofd_bytes(bytes: &[u8]) -> Result<ParsedOfd, Error> {
    if bytes.is_empty() {
        return Err(Error::MissingArgument("file".into()));
    }
    let kind = detect::sniff(bytes);
    if kind != FileKind::Zip {
        return Err(Error::Unsupported(format!(
            "expected an OFD package, found {}",
            kind.mime_type()
        )));
    }
    let package = Package::from_bytes(bytes)?;
    let document = parse::parse_package(&package)?;
    Ok(ParsedOfd { document, package })
}

/// Parse (if needed) and render; the result is also attached to `target`.
pub fn get_svg_doms(
    input: OfdInput<'_>,
    options: &RenderOptions,
    target: MountTarget<'_>,
) -> Result<Element, Error> {
    target.check()?;
    let rendered = match input {
        OfdInput::File(source) => parse_ofd(&source)?.render(options),
        OfdInput::Ofd(parsed) => parsed.render(options),
    };
    target.attach(&rendered)?;
    Ok(rendered)
}

/// Pretty-print generic XML as nested HTML blocks.
pub fn xml_render(
    input: XmlInput,
    response_filter: Option<&dyn Fn(&str) -> String>,
    target: MountTarget<'_>,
) -> Result<Element, Error> {
    target.check()?;
    let text = match input {
        XmlInput::Literal(text) => text,
        XmlInput::File(source) => String::from_utf8_lossy(&source.load()?).into_owned(),
    };
    let rendered = xml_render::render_text(&text, response_filter)?;
    target.attach(&rendered)?;
    Ok(rendered)
}

fn html_page(title: &str, body: &Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{body}</body></html>\n",
        svg::escape(title)
    )
}

pub fn convert_ofd_to_html(input: &Path, output: &Path, options: &RenderOptions) -> Result<(), Error> {
    let parsed = parse_ofd(&Source::Path(input.to_path_buf()))?;
    let title = parsed
        .document
        .doc_info
        .title
        .clone()
        .unwrap_or_else(|| input.display().to_string());
    let html = html_page(&title, &parsed.render(options));
    std::fs::write(output, html).map_err(Error::Io)
}

pub fn convert_xml_to_html(input: &Path, output: &Path) -> Result<(), Error> {
    let tree = xml_render(
        XmlInput::File(Source::Path(input.to_path_buf())),
        None,
        MountTarget::default(),
    )?;
    let html = html_page(&input.display().to_string(), &tree);
    std::fs::write(output, html).map_err(Error::Io)
}
