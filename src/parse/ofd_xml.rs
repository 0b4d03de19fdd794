use crate::error::Error;
use crate::model::DocInfo;
use crate::namespace::{self, Flattened};
use crate::package::normalize_path;

use super::ParseContext;

pub(super) struct Entry {
    /// `DocRoot` as written, e.g. `Doc_0/Document.xml`.
    pub(super) doc_root: String,
    pub(super) signatures: Option<String>,
}

/// Read `OFD.xml`: document root, root prefix, signature pointer, DocInfo.
pub(super) fn parse_entry(ctx: &mut ParseContext) -> Result<Entry, Error> {
    let ofd = ctx
        .package
        .xml("OFD.xml")
        .ok_or_else(|| Error::InvalidOfd("OFD.xml is missing".into()))?;
    let body = ofd
        .child("ofd:DocBody")
        .ok_or_else(|| Error::InvalidOfd("OFD.xml has no DocBody".into()))?;
    if ofd.children_named("ofd:DocBody").count() > 1 {
        log::warn!("OFD.xml lists several documents; only the first is read");
    }

    let (nested, flat) = namespace::flatten(body.children());
    let doc_root = flat
        .get("DocRoot")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidOfd("DocBody has no DocRoot".into()))?;

    let normalized = normalize_path(&doc_root);
    ctx.doc.doc_root = match normalized.find('/') {
        Some(i) => format!("{}/", &normalized[..i]),
        None => String::new(),
    };

    let signatures = body
        .child_text("ofd:Signatures")
        .map(|s| normalize_path(&s).to_string());

    if let Some(info) = nested.get("DocInfo").and_then(Flattened::as_map) {
        let text = |key: &str| info.get(key).and_then(Flattened::as_text).map(str::to_string);
        ctx.doc.doc_info = DocInfo {
            doc_id: text("DocID"),
            title: text("Title"),
            author: text("Author"),
            subject: text("Subject"),
            creator: text("Creator"),
            creator_version: text("CreatorVersion"),
            creation_date: text("CreationDate"),
            mod_date: text("ModDate"),
        };
    }

    Ok(Entry {
        doc_root: normalized.to_string(),
        signatures,
    })
}
