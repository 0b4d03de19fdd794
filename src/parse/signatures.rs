use crate::error::Error;
use crate::model::{Provider, Reference, References, Signature, SignedInfo, StampAnnot};
use crate::namespace::strip_namespace;
use crate::package::normalize_path;
use crate::seal;
use crate::xml::XmlNode;

use super::{ParseContext, attr_string, dir_of, resolve};

/// Read the signature index pointed to by `OFD.xml`, then every signature it lists.
pub(super) fn parse_signatures(ctx: &mut ParseContext, path: &str) -> Result<(), Error> {
    let package = ctx.package;
    let index = package
        .xml(path)
        .ok_or_else(|| Error::NotFound(path.to_string()))?;
    if strip_namespace(&index.name) != "Signatures" {
        return Err(Error::Structure {
            part: "Signatures",
            reason: format!("{path} has root element {}", index.name),
        });
    }
    let dir = dir_of(path).to_string();

    for entry in index.children_named("ofd:Signature") {
        let Some(base_loc) = entry.attribute("BaseLoc") else {
            log::warn!("Signature entry without BaseLoc skipped");
            continue;
        };
        let mut sig_path = resolve(&dir, base_loc);
        if !package.contains(&sig_path) {
            sig_path = ctx.doc_path(base_loc);
        }
        let Some(xml) = package.xml(&sig_path) else {
            log::warn!("Signature part {sig_path} is missing");
            continue;
        };
        let mut sig = parse_signature(xml);
        sig.id = entry.attribute("ID").unwrap_or_default().to_string();
        sig.sign_type = attr_string(entry, "Type");
        sig.base_loc = sig_path.clone();

        if let Some(value_loc) = sig.signed_value.clone() {
            match signed_value_path(ctx, &sig_path, &value_loc) {
                Some(value_path) => {
                    sig.signed_value = Some(value_path.clone());
                    sig.signed_info.seal = package
                        .bytes(&value_path)
                        .and_then(seal::decode_seal_picture);
                }
                None => log::warn!("Signed value {value_loc} of signature {} is missing", sig.id),
            }
        }
        ctx.doc.signatures.push(sig);
    }
    Ok(())
}

/// Try the location as absolute, then under the signature's own directory
/// (dropping a repeated directory prefix), then under the document root.
fn signed_value_path(ctx: &ParseContext, sig_path: &str, loc: &str) -> Option<String> {
    let stripped = normalize_path(loc.trim());
    let sig_dir = dir_of(sig_path);
    let candidates = [
        stripped.to_string(),
        format!("{sig_dir}{}", stripped.strip_prefix(sig_dir).unwrap_or(stripped)),
        ctx.doc_path(stripped),
    ];
    candidates.into_iter().find(|c| ctx.package.contains(c))
}

fn parse_signature(xml: &XmlNode) -> Signature {
    let mut sig = Signature {
        signed_value: xml.child_text("ofd:SignedValue"),
        ..Signature::default()
    };
    let Some(info) = xml.child("ofd:SignedInfo") else {
        log::warn!("Signature without SignedInfo");
        return sig;
    };

    let provider = info.child("ofd:Provider").map(|p| Provider {
        provider_name: attr_string(p, "ProviderName"),
        company: attr_string(p, "Company"),
        version: attr_string(p, "Version"),
    });

    let references = info
        .child("ofd:References")
        .map(|refs| References {
            check_method: attr_string(refs, "CheckMethod"),
            items: refs
                .children_named("ofd:Reference")
                .map(|r| Reference {
                    file_ref: r.attribute("FileRef").unwrap_or_default().to_string(),
                    check_value: r.child_text("ofd:CheckValue"),
                })
                .collect(),
        })
        .unwrap_or_default();

    let stamp_annots = info
        .children_named("ofd:StampAnnot")
        .map(|s| StampAnnot {
            id: attr_string(s, "ID"),
            page_ref: s.attribute("PageRef").unwrap_or_default().trim().to_string(),
            boundary: s.attribute("Boundary").unwrap_or_default().trim().to_string(),
            clip: attr_string(s, "Clip"),
        })
        .collect();

    sig.signed_info = SignedInfo {
        provider: provider.unwrap_or_default(),
        signature_method: info.child_text("ofd:SignatureMethod"),
        signature_date_time: info.child_text("ofd:SignatureDateTime"),
        references,
        stamp_annots,
        seal_base_loc: info
            .child("ofd:Seal")
            .and_then(|s| s.child_text("ofd:BaseLoc")),
        seal: None,
    };
    sig
}
