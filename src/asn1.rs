//! Streaming BER/DER reader.
//!
//! Nodes keep byte offsets into the buffer they were decoded from, so callers
//! can slice raw content without copying the tree.

use crate::error::Error;
use crate::oid;

const MAX_DEPTH: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u64,
}

pub const EOC: u64 = 0x00;
pub const BOOLEAN: u64 = 0x01;
pub const INTEGER: u64 = 0x02;
pub const BIT_STRING: u64 = 0x03;
pub const OCTET_STRING: u64 = 0x04;
pub const NULL: u64 = 0x05;
pub const OBJECT_IDENTIFIER: u64 = 0x06;
pub const ENUMERATED: u64 = 0x0a;
pub const UTF8_STRING: u64 = 0x0c;
pub const SEQUENCE: u64 = 0x10;
pub const SET: u64 = 0x11;
pub const UTC_TIME: u64 = 0x17;
pub const GENERALIZED_TIME: u64 = 0x18;
pub const UNIVERSAL_STRING: u64 = 0x1c;
pub const BMP_STRING: u64 = 0x1e;

const UNIVERSAL_NAMES: [&str; 31] = [
    "EOC",
    "BOOLEAN",
    "INTEGER",
    "BIT_STRING",
    "OCTET_STRING",
    "NULL",
    "OBJECT_IDENTIFIER",
    "ObjectDescriptor",
    "EXTERNAL",
    "REAL",
    "ENUMERATED",
    "EMBEDDED_PDV",
    "UTF8String",
    "RELATIVE_OID",
    "Universal_14",
    "Universal_15",
    "SEQUENCE",
    "SET",
    "NumericString",
    "PrintableString",
    "TeletexString",
    "VideotexString",
    "IA5String",
    "UTCTime",
    "GeneralizedTime",
    "GraphicString",
    "VisibleString",
    "GeneralString",
    "UniversalString",
    "CHARACTER_STRING",
    "BMPString",
];

impl Tag {
    pub fn is_universal(&self, number: u64) -> bool {
        self.class == TagClass::Universal && self.number == number
    }

    pub fn name(&self) -> String {
        match self.class {
            TagClass::Universal => UNIVERSAL_NAMES
                .get(self.number as usize)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("Universal_{}", self.number)),
            TagClass::Application => format!("Application_{}", self.number),
            TagClass::ContextSpecific => format!("[{}]", self.number),
            TagClass::Private => format!("Private_{}", self.number),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Asn1Node {
    /// Offset of the first tag byte.
    pub offset: usize,
    pub header_len: usize,
    pub content_len: usize,
    pub indefinite: bool,
    pub tag: Tag,
    /// Children of constructed nodes, or the encapsulated tree of a
    /// BIT/OCTET STRING that itself parses as BER.
    pub sub: Vec<Asn1Node>,
}

impl Asn1Node {
    pub fn content_start(&self) -> usize {
        self.offset + self.header_len
    }

    pub fn content_end(&self) -> usize {
        self.content_start() + self.content_len
    }

    /// Header + content, plus the two EOC bytes of an indefinite form.
    pub fn total_len(&self) -> usize {
        self.header_len + self.content_len + if self.indefinite { 2 } else { 0 }
    }

    pub fn content<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.content_start()..self.content_end()]
    }

    pub fn type_name(&self) -> String {
        self.tag.name()
    }

    pub fn is_sequence(&self) -> bool {
        self.tag.is_universal(SEQUENCE)
    }

    /// Human-readable rendering of the content, for diagnostics.
    pub fn preview(&self, buf: &[u8]) -> Option<String> {
        if self.tag.constructed {
            return Some(format!("({} elem)", self.sub.len()));
        }
        let content = self.content(buf);
        if self.tag.class != TagClass::Universal {
            return Some(preview_bytes(content));
        }
        match self.tag.number {
            BOOLEAN => Some(if content.first().copied().unwrap_or(0) != 0 {
                "true".to_string()
            } else {
                "false".to_string()
            }),
            INTEGER | ENUMERATED => Some(decode_integer(content)),
            BIT_STRING => {
                if !self.sub.is_empty() {
                    return Some(format!("({} elem)", self.sub.len()));
                }
                let unused = content.first().copied().unwrap_or(0) as usize;
                let bits = content.len().saturating_sub(1) * 8;
                Some(format!(
                    "({} bit) {}",
                    bits.saturating_sub(unused),
                    preview_bytes(content.get(1..).unwrap_or_default())
                ))
            }
            OCTET_STRING => {
                if !self.sub.is_empty() {
                    return Some(format!("({} elem)", self.sub.len()));
                }
                Some(preview_bytes(content))
            }
            NULL => None,
            OBJECT_IDENTIFIER => {
                let dotted = decode_oid(content)?;
                Some(match oid::lookup(&dotted) {
                    Some(info) => format!("{dotted} {}", info.d),
                    None => dotted,
                })
            }
            UTF8_STRING => Some(String::from_utf8_lossy(content).into_owned()),
            BMP_STRING => {
                let units: Vec<u16> = content
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                Some(String::from_utf16_lossy(&units))
            }
            UNIVERSAL_STRING => Some(
                content
                    .chunks_exact(4)
                    .filter_map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
                    .collect(),
            ),
            // Numeric/Printable/Teletex/Videotex/IA5/UTCTime/GeneralizedTime/Graphic/Visible/General
            0x12..=0x1b => Some(content.iter().map(|&b| b as char).collect()),
            _ => Some(preview_bytes(content)),
        }
    }
}

/// UTF-8 text when it is printable, hex otherwise.
fn preview_bytes(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes)
        && !s.is_empty()
        && s.chars().all(|c| !c.is_control() || c == '\n' || c == '\r' || c == '\t')
    {
        return s.to_string();
    }
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

/// Decimal accumulator in base 10^13, so `limb * 256 + carry` stays
/// within the range a float64 would represent exactly.
#[derive(Clone, Debug, Default)]
struct Int10 {
    limbs: Vec<u64>,
}

const INT10_BASE: u64 = 10_000_000_000_000;

impl Int10 {
    fn mul_add(&mut self, m: u64, c: u64) {
        let mut carry = c;
        for limb in self.limbs.iter_mut() {
            let t = *limb * m + carry;
            *limb = t % INT10_BASE;
            carry = t / INT10_BASE;
        }
        while carry > 0 {
            self.limbs.push(carry % INT10_BASE);
            carry /= INT10_BASE;
        }
    }

    fn to_decimal(&self) -> String {
        let Some((last, rest)) = self.limbs.split_last() else {
            return "0".to_string();
        };
        let mut s = last.to_string();
        for limb in rest.iter().rev() {
            s.push_str(&format!("{limb:013}"));
        }
        s
    }
}

/// Two's complement big-endian integer as arbitrary-precision decimal.
pub fn decode_integer(content: &[u8]) -> String {
    if content.is_empty() {
        return "0".to_string();
    }
    let negative = content[0] & 0x80 != 0;
    let magnitude: Vec<u8> = if negative {
        let mut inverted: Vec<u8> = content.iter().map(|b| !b).collect();
        for b in inverted.iter_mut().rev() {
            let (v, overflow) = b.overflowing_add(1);
            *b = v;
            if !overflow {
                break;
            }
        }
        inverted
    } else {
        content.to_vec()
    };
    let mut n = Int10::default();
    for b in magnitude {
        n.mul_add(256, b as u64);
    }
    if negative {
        format!("-{}", n.to_decimal())
    } else {
        n.to_decimal()
    }
}

/// Dotted-decimal form of an OBJECT IDENTIFIER body.
pub fn decode_oid(content: &[u8]) -> Option<String> {
    let mut arcs: Vec<u128> = Vec::new();
    let mut acc: u128 = 0;
    for &b in content {
        acc = acc.checked_mul(128)?.checked_add((b & 0x7f) as u128)?;
        if b & 0x80 == 0 {
            arcs.push(acc);
            acc = 0;
        }
    }
    let (&first, rest) = arcs.split_first()?;
    let (a, b) = match first {
        0..=39 => (0, first),
        40..=79 => (1, first - 40),
        _ => (2, first - 80),
    };
    let mut out = format!("{a}.{b}");
    for arc in rest {
        out.push('.');
        out.push_str(&arc.to_string());
    }
    Some(out)
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn byte(&mut self, limit: usize) -> Result<u8, Error> {
        if self.pos >= limit {
            return Err(Error::Asn1 {
                offset: self.pos,
                reason: "requesting byte past end of stream".into(),
            });
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    fn tag(&mut self, limit: usize) -> Result<Tag, Error> {
        let b = self.byte(limit)?;
        let class = match b >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        };
        let constructed = b & 0x20 != 0;
        let mut number = (b & 0x1f) as u64;
        if number == 0x1f {
            number = 0;
            loop {
                let n = self.byte(limit)?;
                if number > (u64::MAX >> 7) {
                    return Err(Error::Asn1 {
                        offset: self.pos,
                        reason: "tag number too large".into(),
                    });
                }
                number = (number << 7) | (n & 0x7f) as u64;
                if n & 0x80 == 0 {
                    break;
                }
            }
        }
        Ok(Tag {
            class,
            constructed,
            number,
        })
    }

    /// `None` for the indefinite form.
    fn length(&mut self, limit: usize) -> Result<Option<usize>, Error> {
        let b = self.byte(limit)?;
        if b & 0x80 == 0 {
            return Ok(Some(b as usize));
        }
        let n = (b & 0x7f) as usize;
        if n == 0 {
            return Ok(None);
        }
        if n > 6 {
            return Err(Error::Asn1 {
                offset: self.pos - 1,
                reason: "length over 48 bits not supported".into(),
            });
        }
        let mut len = 0usize;
        for _ in 0..n {
            len = (len << 8) | self.byte(limit)? as usize;
        }
        Ok(Some(len))
    }
}

/// Decode the single element at the start of `buf`.
pub fn decode(buf: &[u8]) -> Result<Asn1Node, Error> {
    let mut reader = Reader { buf, pos: 0 };
    decode_node(&mut reader, buf.len(), 0)
}

fn decode_node(reader: &mut Reader, limit: usize, depth: usize) -> Result<Asn1Node, Error> {
    if depth > MAX_DEPTH {
        return Err(Error::Asn1 {
            offset: reader.pos,
            reason: "nesting too deep".into(),
        });
    }
    let offset = reader.pos;
    let tag = reader.tag(limit)?;
    let length = reader.length(limit)?;
    let content_start = reader.pos;
    let header_len = content_start - offset;

    match length {
        Some(len) => {
            let end = content_start.checked_add(len).filter(|&e| e <= limit).ok_or_else(|| {
                Error::Asn1 {
                    offset,
                    reason: format!("content of {len} bytes runs past the container end {limit}"),
                }
            })?;
            let mut sub = Vec::new();
            if tag.constructed {
                while reader.pos < end {
                    sub.push(decode_node(reader, end, depth + 1)?);
                }
                if reader.pos != end {
                    return Err(Error::Asn1 {
                        offset,
                        reason: "content size is not correct for container".into(),
                    });
                }
            } else if tag.class == TagClass::Universal
                && (tag.number == BIT_STRING || tag.number == OCTET_STRING)
            {
                let skip = usize::from(tag.number == BIT_STRING);
                let inner_start = (content_start + skip).min(end);
                if let Some(nested) = try_decode_nested(reader.buf, inner_start, end, depth + 1) {
                    sub = nested;
                }
            }
            reader.pos = end;
            Ok(Asn1Node {
                offset,
                header_len,
                content_len: len,
                indefinite: false,
                tag,
                sub,
            })
        }
        None => {
            if !tag.constructed {
                return Err(Error::Asn1 {
                    offset,
                    reason: "indefinite length on a primitive element".into(),
                });
            }
            let mut sub = Vec::new();
            loop {
                if reader.pos + 2 > limit {
                    return Err(Error::Asn1 {
                        offset,
                        reason: "exceeded data length while looking for end-of-contents".into(),
                    });
                }
                if reader.buf[reader.pos] == 0 && reader.buf[reader.pos + 1] == 0 {
                    break;
                }
                sub.push(decode_node(reader, limit, depth + 1)?);
            }
            let content_len = reader.pos - content_start;
            reader.pos += 2;
            Ok(Asn1Node {
                offset,
                header_len,
                content_len,
                indefinite: true,
                tag,
                sub,
            })
        }
    }
}

/// Try to read `buf[start..end]` as a run of BER elements that exactly fills it.
pub fn try_decode_nested(
    buf: &[u8],
    start: usize,
    end: usize,
    depth: usize,
) -> Option<Vec<Asn1Node>> {
    if start >= end {
        return None;
    }
    let mut reader = Reader { buf, pos: start };
    let mut nodes = Vec::new();
    while reader.pos < end {
        let node = decode_node(&mut reader, end, depth).ok()?;
        // A lone EOC inside a string is almost always coincidence.
        if node.tag.is_universal(EOC) {
            return None;
        }
        nodes.push(node);
    }
    (reader.pos == end).then_some(nodes)
}

/// Indented text dump of a decoded tree.
pub fn dump(node: &Asn1Node, buf: &[u8]) -> String {
    let mut out = String::new();
    dump_into(node, buf, 0, &mut out);
    out
}

fn dump_into(node: &Asn1Node, buf: &[u8], indent: usize, out: &mut String) {
    let preview = node
        .preview(buf)
        .map(|p| {
            let mut p = p.replace('\n', " ");
            if p.len() > 80 {
                let cut = (0..=80).rev().find(|&i| p.is_char_boundary(i)).unwrap_or(0);
                p.truncate(cut);
                p.push('…');
            }
            p
        })
        .unwrap_or_default();
    out.push_str(&format!(
        "{:indent$}{} @{}+{}+{} {}\n",
        "",
        node.type_name(),
        node.offset,
        node.header_len,
        node.content_len,
        preview,
        indent = indent * 2
    ));
    for child in &node.sub {
        dump_into(child, buf, indent + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int10_carries_across_limbs() {
        let mut n = Int10::default();
        for b in [0xffu8; 16] {
            n.mul_add(256, b as u64);
        }
        assert_eq!(n.to_decimal(), u128::MAX.to_string());
    }

    #[test]
    fn negative_integer() {
        assert_eq!(decode_integer(&[0xff]), "-1");
        assert_eq!(decode_integer(&[0x80]), "-128");
        assert_eq!(decode_integer(&[0x00, 0x80]), "128");
    }

    #[test]
    fn oid_first_arc_split() {
        // 1.2.840.113549
        assert_eq!(
            decode_oid(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d]).as_deref(),
            Some("1.2.840.113549")
        );
        assert_eq!(decode_oid(&[0x81, 0x34]).as_deref(), Some("2.100"));
    }
}
