//! Namespace prefix handling and shallow flattening of OFD element lists.

use std::collections::HashMap;

use crate::xml::{OFD_PREFIX, XmlNode};

/// Value stored by [`flatten`]: a leaf's text or a nested mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum Flattened {
    Text(String),
    Map(HashMap<String, Flattened>),
}

impl Flattened {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Flattened::Text(t) => Some(t),
            Flattened::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Flattened>> {
        match self {
            Flattened::Map(m) => Some(m),
            Flattened::Text(_) => None,
        }
    }
}

/// `Page` -> `ofd:Page`.
pub fn qualify(local_name: &str) -> String {
    format!("{OFD_PREFIX}:{local_name}")
}

/// Remove the `ofd:` prefix if present; other prefixes are left alone.
pub fn strip_namespace(name: &str) -> &str {
    name.strip_prefix(OFD_PREFIX)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(name)
}

/// Walk `elements` and build two maps keyed by unprefixed names.
///
/// Text-only elements land in both maps. Structured elements only nest in the
/// first map, but their text leaves still go into the flat map, so same-named
/// leaves at different depths overwrite each other there (last write wins).
/// Elements with no children are skipped.
pub fn flatten<'a>(
    elements: impl IntoIterator<Item = &'a XmlNode>,
) -> (HashMap<String, Flattened>, HashMap<String, String>) {
    let mut nested = HashMap::new();
    let mut flat = HashMap::new();
    flatten_into(elements, &mut nested, &mut flat);
    (nested, flat)
}

fn flatten_into<'a>(
    elements: impl IntoIterator<Item = &'a XmlNode>,
    nested: &mut HashMap<String, Flattened>,
    flat: &mut HashMap<String, String>,
) {
    for el in elements {
        let key = strip_namespace(&el.name).to_string();
        if el.is_text_only() {
            let text = el.text().unwrap_or_default();
            nested.insert(key.clone(), Flattened::Text(text.clone()));
            flat.insert(key, text);
        } else if !el.elements.is_empty() {
            let mut inner = HashMap::new();
            flatten_into(el.children(), &mut inner, flat);
            nested.insert(key, Flattened::Map(inner));
        }
    }
}

/// Depth-first pre-order search for the first element named `qualified_name`.
/// The matched element's own subtree is not searched further.
pub fn find_qualified<'a>(
    elements: impl IntoIterator<Item = &'a XmlNode>,
    qualified_name: &str,
) -> Option<&'a XmlNode> {
    for el in elements {
        if el.name == qualified_name {
            return Some(el);
        }
        if let Some(found) = find_qualified(el.children(), qualified_name) {
            return Some(found);
        }
    }
    None
}

/// Convenience for `find_qualified(.., &qualify(local))`.
pub fn find_local<'a>(
    elements: impl IntoIterator<Item = &'a XmlNode>,
    local_name: &str,
) -> Option<&'a XmlNode> {
    find_qualified(elements, &qualify(local_name))
}
