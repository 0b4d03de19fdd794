//! Builds an [`OfdDocument`] from a [`Package`].
//!
//! Each stage reads the parts it needs and writes into one [`ParseContext`];
//! nothing is kept between parses.

mod annotations;
mod document;
mod objects;
mod ofd_xml;
mod pages;
mod resources;
mod signatures;
mod templates;

use std::collections::HashMap;

use crate::error::Error;
use crate::model::{OfdDocument, Signature};
use crate::package::{Package, normalize_path};

pub(crate) struct ParseContext<'p> {
    pub(crate) package: &'p Package,
    pub(crate) doc: OfdDocument,
}

impl<'p> ParseContext<'p> {
    fn new(package: &'p Package) -> Self {
        ParseContext {
            package,
            doc: OfdDocument::default(),
        }
    }

    /// `loc` relative to the document root (STLoc).
    pub(crate) fn doc_path(&self, loc: &str) -> String {
        resolve(&self.doc.doc_root, loc)
    }
}

/// Join by concatenation: absolute locations lose their leading `/`,
/// locations already under `prefix` are used as-is, everything else is
/// appended to `prefix`. There is no `..` handling.
pub fn resolve(prefix: &str, loc: &str) -> String {
    let loc = loc.trim();
    if loc.starts_with('/') {
        return normalize_path(loc).to_string();
    }
    if !prefix.is_empty() && loc.starts_with(prefix) {
        return loc.to_string();
    }
    format!("{prefix}{loc}")
}

/// Directory part of a package path, with its trailing `/`.
pub fn dir_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    }
}

pub fn parse_package(package: &Package) -> Result<OfdDocument, Error> {
    let mut ctx = ParseContext::new(package);

    let entry = ofd_xml::parse_entry(&mut ctx)?;
    let document_path = ctx.doc_path(&entry.doc_root);
    let document = package.xml(&document_path).ok_or_else(|| {
        Error::InvalidOfd(format!("document part {document_path} is missing"))
    })?;
    log::debug!("Document root {} at {document_path}", ctx.doc.doc_root);

    let pointers = document::parse_document(&mut ctx, document);

    let pages = pointers
        .pages
        .ok_or_else(|| Error::InvalidOfd("document has no Pages".into()))?;
    pages::parse_pages(&mut ctx, pages);

    for res_path in pointers.res_files {
        if let Err(e) = resources::parse_res_file(&mut ctx, &res_path) {
            log::warn!("Skipping resource file {res_path}: {e}");
        }
    }

    for template in pointers.templates {
        if let Err(e) = templates::parse_template(&mut ctx, template) {
            log::warn!("Skipping template page: {e}");
        }
    }

    if let Some(loc) = pointers.annotations {
        if let Err(e) = annotations::parse_annotations(&mut ctx, &loc) {
            log::warn!("Skipping annotations: {e}");
        }
    }

    if let Some(loc) = entry.signatures {
        if let Err(e) = signatures::parse_signatures(&mut ctx, &loc) {
            log::warn!("Skipping signatures: {e}");
        }
    }
    ctx.doc.page_signatures = index_page_signatures(&ctx.doc.signatures);

    log::info!(
        "Parsed OFD: {} pages, {} resources, {} signatures",
        ctx.doc.pages.len(),
        ctx.doc.resources.len(),
        ctx.doc.signatures.len()
    );
    Ok(ctx.doc)
}

/// Page ID -> one copy of each signature stamped on it, stamps filtered to that page.
pub fn index_page_signatures(signatures: &[Signature]) -> HashMap<String, Vec<Signature>> {
    let mut index: HashMap<String, Vec<Signature>> = HashMap::new();
    for sig in signatures {
        let mut page_refs: Vec<&str> = Vec::new();
        for stamp in &sig.signed_info.stamp_annots {
            if !page_refs.contains(&stamp.page_ref.as_str()) {
                page_refs.push(&stamp.page_ref);
            }
        }
        for page_ref in page_refs {
            let mut copy = sig.clone();
            copy.signed_info
                .stamp_annots
                .retain(|s| s.page_ref == page_ref);
            index.entry(page_ref.to_string()).or_default().push(copy);
        }
    }
    index
}

fn parse_bool(val: Option<&str>) -> Option<bool> {
    match val?.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_f64(val: Option<&str>) -> Option<f64> {
    val.and_then(|v| v.trim().parse::<f64>().ok())
}

fn attr_string(node: &crate::xml::XmlNode, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
