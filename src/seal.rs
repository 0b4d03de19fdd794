//! Locates the electronic-seal picture inside an OFD `SignedValue` blob.
//!
//! Layout (GM/T 0031 / GB/T 38540):
//! `SES_Signature { toSign { version, eseal SESeal { sealInfo {header, esID,
//! property, picture, extDatas}, .. }, .. }, .. }`

use crate::asn1::{self, Asn1Node};
use crate::error::Error;
use crate::model::SealPicture;

/// The five positional fields of `SES_SealInfo`.
#[derive(Debug)]
pub struct SealInfo<'n> {
    pub header: &'n Asn1Node,
    pub es_id: &'n Asn1Node,
    pub property: &'n Asn1Node,
    pub picture: &'n Asn1Node,
    pub ext_datas: &'n Asn1Node,
}

pub fn seal_info(signature: &Asn1Node) -> Result<SealInfo<'_>, Error> {
    let to_sign = signature
        .sub
        .first()
        .ok_or_else(|| Error::MalformedSeal("signature has no toSign element".into()))?;
    let eseal = to_sign
        .sub
        .iter()
        .find(|n| n.is_sequence())
        .ok_or_else(|| Error::MalformedSeal("toSign carries no SESeal".into()))?;
    let info = eseal
        .sub
        .iter()
        .find(|n| n.is_sequence() && !n.sub.is_empty())
        .ok_or_else(|| Error::MalformedSeal("SESeal carries no seal info".into()))?;
    match info.sub.as_slice() {
        [header, es_id, property, picture, ext_datas, ..] => Ok(SealInfo {
            header,
            es_id,
            property,
            picture,
            ext_datas,
        }),
        fields => Err(Error::MalformedSeal(format!(
            "seal info has {} fields, expected 5",
            fields.len()
        ))),
    }
}

/// Decode `buf` and pull out the seal picture. Errors propagate.
pub fn extract_picture(buf: &[u8]) -> Result<SealPicture, Error> {
    let root = asn1::decode(buf)?;
    let info = seal_info(&root)?;
    let fields = &info.picture.sub;
    let pic_type = fields
        .first()
        .and_then(|n| n.preview(buf))
        .ok_or_else(|| Error::MalformedSeal("picture has no type".into()))?;
    let data_node = fields
        .get(1)
        .ok_or_else(|| Error::MalformedSeal("picture has no data".into()))?;
    let data = buf
        .get(data_node.content_start()..data_node.content_end())
        .map(<[u8]>::to_vec);
    let width = fields.get(2).and_then(|n| n.preview(buf)).unwrap_or_default();
    let height = fields.get(3).and_then(|n| n.preview(buf)).unwrap_or_default();
    Ok(SealPicture {
        data,
        pic_type: pic_type.trim().to_ascii_lowercase(),
        width,
        height,
    })
}

/// Seal picture or `None`; decode failures are logged and swallowed.
pub fn decode_seal_picture(buf: &[u8]) -> Option<SealPicture> {
    match extract_picture(buf) {
        Ok(picture) => Some(picture),
        Err(e) => {
            log::warn!("No seal picture: {e}");
            None
        }
    }
}
