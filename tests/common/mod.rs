#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

pub const NS: &str = "xmlns:ofd=\"http://www.ofdspec.org/2016\"";

/// In-memory OFD package.
#[derive(Default)]
pub struct OfdBuilder {
    files: Vec<(String, Vec<u8>)>,
}

impl OfdBuilder {
    pub fn new() -> Self {
        OfdBuilder::default()
    }

    pub fn file(mut self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        self.files.retain(|(n, _)| n != name);
        self.files.push((name.to_string(), contents.as_ref().to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, data) in &self.files {
            zip.start_file(name.as_str(), options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

pub fn ofd_xml(extra_body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:OFD {NS} Version="1.1" DocType="OFD">
  <ofd:DocBody>
    <ofd:DocInfo><ofd:DocID>d41d8cd9</ofd:DocID><ofd:Title>Sample</ofd:Title><ofd:Author>QA</ofd:Author></ofd:DocInfo>
    <ofd:DocRoot>Doc_0/Document.xml</ofd:DocRoot>
    {extra_body}
  </ofd:DocBody>
</ofd:OFD>"#
    )
}

pub fn document_xml(common_extra: &str, pages: &[&str], extra: &str) -> String {
    let pages: String = pages
        .iter()
        .enumerate()
        .map(|(i, id)| format!(r#"<ofd:Page ID="{id}" BaseLoc="Pages/Page_{i}/Content.xml"/>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:Document {NS}>
  <ofd:CommonData>
    <ofd:MaxUnitID>100</ofd:MaxUnitID>
    <ofd:PageArea><ofd:PhysicalBox>0 0 210 297</ofd:PhysicalBox></ofd:PageArea>
    {common_extra}
  </ofd:CommonData>
  <ofd:Pages>{pages}</ofd:Pages>
  {extra}
</ofd:Document>"#
    )
}

pub fn page_xml(layers: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:Page {NS}><ofd:Content>{layers}</ofd:Content></ofd:Page>"#
    )
}

pub fn body_layer(objects: &str) -> String {
    format!(r#"<ofd:Layer ID="2" Type="Body">{objects}</ofd:Layer>"#)
}

pub const SIMPLE_PATH: &str = r#"<ofd:PathObject ID="3" Boundary="10 10 50 50"><ofd:AbbreviatedData>S 0 0 B 10 10 20 20 30 30 C</ofd:AbbreviatedData></ofd:PathObject>"#;

/// OFD.xml, Document.xml and one page holding `objects` in a body layer.
pub fn single_page(objects: &str) -> OfdBuilder {
    OfdBuilder::new()
        .file("OFD.xml", ofd_xml(""))
        .file("Doc_0/Document.xml", document_xml("", &["1"], ""))
        .file("Doc_0/Pages/Page_0/Content.xml", page_xml(&body_layer(objects)))
}

pub fn res_xml(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:Res {NS} BaseLoc="Res">{items}</ofd:Res>"#
    )
}

/// BER tag-length-value with a definite length.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.extend([0x81, len as u8]);
    } else if len <= 0xffff {
        out.extend([0x82, (len >> 8) as u8, len as u8]);
    } else {
        out.extend([0x83, (len >> 16) as u8, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(content);
    out
}

pub fn seq(children: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x30, &children.concat())
}

pub fn ia5(s: &str) -> Vec<u8> {
    tlv(0x16, s.as_bytes())
}

pub fn int(v: u8) -> Vec<u8> {
    tlv(0x02, &[v])
}

/// `SES_Signature` carrying a picture of `pic_type` with `data`.
pub fn ses_signature(pic_type: &str, data: &[u8]) -> Vec<u8> {
    let header = seq(&[ia5("ES"), int(4), ia5("OFD")]);
    let property = seq(&[int(1), tlv(0x0c, "Test seal".as_bytes())]);
    let picture = seq(&[ia5(pic_type), tlv(0x04, data), int(40), int(40)]);
    let seal_info = seq(&[header, ia5("seal-001"), property, picture, seq(&[])]);
    let eseal = seq(&[seal_info, tlv(0x04, b"cert")]);
    let to_sign = seq(&[int(4), eseal, tlv(0x18, b"20240101000000Z")]);
    seq(&[to_sign, tlv(0x03, &[0x00, 0xde, 0xad])])
}

/// 1x1 PNG; only the signature bytes matter to the renderer.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// A one-page OFD whose page carries a signature stamped with `seal_value`.
pub fn signed_page(seal_value: &[u8]) -> OfdBuilder {
    let signatures = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:Signatures {NS}><ofd:Signature ID="1" Type="Seal" BaseLoc="Sign_0/Signature.xml"/></ofd:Signatures>"#
    );
    let signature = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ofd:Signature {NS}>
  <ofd:SignedInfo>
    <ofd:Provider ProviderName="TestSigner" Company="ACME" Version="1.0"/>
    <ofd:SignatureMethod>1.2.156.10197.1.501</ofd:SignatureMethod>
    <ofd:SignatureDateTime>20240101000000Z</ofd:SignatureDateTime>
    <ofd:References CheckMethod="1.2.156.10197.1.401">
      <ofd:Reference FileRef="/Doc_0/Document.xml"><ofd:CheckValue>AAAA</ofd:CheckValue></ofd:Reference>
    </ofd:References>
    <ofd:StampAnnot ID="s1" PageRef="1" Boundary="100 100 40 40"/>
  </ofd:SignedInfo>
  <ofd:SignedValue>/Doc_0/Signs/Sign_0/SignedValue.dat</ofd:SignedValue>
</ofd:Signature>"#
    );
    single_page(SIMPLE_PATH)
        .file(
            "OFD.xml",
            ofd_xml("<ofd:Signatures>Doc_0/Signs/Signatures.xml</ofd:Signatures>"),
        )
        .file("Doc_0/Signs/Signatures.xml", signatures)
        .file("Doc_0/Signs/Sign_0/Signature.xml", signature)
        .file("Doc_0/Signs/Sign_0/SignedValue.dat", seal_value)
}

fn table_record(tag: &[u8; 4], offset: usize, len: usize) -> Vec<u8> {
    let mut out = tag.to_vec();
    out.extend(0u32.to_be_bytes());
    out.extend((offset as u32).to_be_bytes());
    out.extend((len as u32).to_be_bytes());
    out
}

fn be16(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| (*v as i16).to_be_bytes()).collect()
}

/// TrueType font with 1000 units per em, no cmap, and one triangle at glyph 1.
pub fn triangle_ttf() -> Vec<u8> {
    let mut head = Vec::new();
    head.extend(0x0001_0000u32.to_be_bytes());
    head.extend(0x0001_0000u32.to_be_bytes());
    head.extend(0u32.to_be_bytes());
    head.extend(0x5F0F_3CF5u32.to_be_bytes());
    head.extend(be16(&[0, 1000]));
    head.extend([0u8; 16]);
    head.extend(be16(&[0, 0, 500, 700, 0, 8, 2, 0, 0]));

    let mut hhea = 0x0001_0000u32.to_be_bytes().to_vec();
    hhea.extend(be16(&[800, -200, 0]));
    hhea.extend([0u8; 24]);
    hhea.extend(be16(&[2]));

    let mut maxp = 0x0000_5000u32.to_be_bytes().to_vec();
    maxp.extend(be16(&[2]));

    let hmtx = be16(&[500, 0, 500, 0]);

    // numberOfContours, bbox, endPts, instruction length
    let mut glyf = be16(&[1, 0, 0, 500, 700, 2, 0]);
    glyf.extend([1u8, 1, 1]);
    glyf.extend(be16(&[0, 500, -250]));
    glyf.extend(be16(&[0, 0, 700]));
    glyf.push(0);
    let loca = be16(&[0, 0, (glyf.len() / 2) as i32]);

    let tables: [(&[u8; 4], Vec<u8>); 6] = [
        (b"glyf", glyf),
        (b"head", head),
        (b"hhea", hhea),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp),
    ];
    let mut out = 0x0001_0000u32.to_be_bytes().to_vec();
    out.extend(be16(&[tables.len() as i32, 0, 0, 0]));
    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        out.extend(table_record(tag, offset, data.len()));
        body.extend(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend(body);
    out
}

/// One page whose resources list `items`, with `files` stored under `Doc_0/Res/`.
pub fn page_with_res(objects: &str, items: &str, files: &[(&str, &[u8])]) -> OfdBuilder {
    let mut builder = single_page(objects)
        .file(
            "Doc_0/Document.xml",
            document_xml("<ofd:DocumentRes>DocumentRes.xml</ofd:DocumentRes>", &["1"], ""),
        )
        .file("Doc_0/DocumentRes.xml", res_xml(items));
    for (name, data) in files {
        builder = builder.file(&format!("Doc_0/Res/{name}"), data);
    }
    builder
}
