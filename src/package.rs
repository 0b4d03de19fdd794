use std::collections::HashMap;
use std::io::{Cursor, Read};

use crate::error::Error;
use crate::xml::{self, XmlNode};

/// One decoded entry of the OFD container.
#[derive(Clone, Debug)]
pub enum Part {
    Xml { tree: XmlNode, raw: Vec<u8> },
    Binary(Vec<u8>),
}

impl Part {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Part::Xml { raw, .. } => raw,
            Part::Binary(data) => data,
        }
    }
}

/// Cap on up-front buffer space per entry.
const MAX_PREALLOCATION: usize = 64 << 20;

/// Every entry of the ZIP, keyed by its path without a leading `/`.
#[derive(Clone, Debug, Default)]
pub struct Package {
    parts: HashMap<String, Part>,
}

/// Strip a single leading `/`. No other normalization happens.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn is_xml_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".xml")
}

impl Package {
    /// Read all entries up front; XML parts are parsed before any model building starts.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        let mut zip = zip::ZipArchive::new(Cursor::new(data))?;
        let mut parts = HashMap::new();
        for i in 0..zip.len() {
            let mut file = zip.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = normalize_path(file.name()).to_string();
            // The declared size is only a hint; the buffer grows as needed.
            let hint = usize::try_from(file.size()).unwrap_or(0).min(MAX_PREALLOCATION);
            let mut raw = Vec::with_capacity(hint);
            file.read_to_end(&mut raw)?;
            let part = if is_xml_name(&name) {
                let text = String::from_utf8_lossy(&raw);
                match xml::parse(&text) {
                    Ok(tree) => Part::Xml { tree, raw },
                    Err(e) => {
                        log::warn!("Part {name} is not well-formed XML: {e}");
                        Part::Binary(raw)
                    }
                }
            } else {
                Part::Binary(raw)
            };
            parts.insert(name, part);
        }
        log::debug!("Loaded {} package parts", parts.len());
        Ok(Package { parts })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.parts.contains_key(normalize_path(path))
    }

    pub fn get(&self, path: &str) -> Option<&Part> {
        self.parts.get(normalize_path(path))
    }

    pub fn xml(&self, path: &str) -> Option<&XmlNode> {
        match self.get(path)? {
            Part::Xml { tree, .. } => Some(tree),
            Part::Binary(_) => None,
        }
    }

    pub fn bytes(&self, path: &str) -> Option<&[u8]> {
        self.get(path).map(Part::bytes)
    }

    pub fn text(&self, path: &str) -> Option<String> {
        let bytes = self.bytes(path)?;
        let text = String::from_utf8_lossy(bytes);
        Some(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
