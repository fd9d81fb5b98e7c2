// Link resolution
//
// The Delivery API returns references as `{"sys": {"type": "Link", ...}}`
// stubs and ships the referenced resources in the collection's `includes`
// block. Splicing them back in lets callers read linked assets (including
// assets embedded in rich-text documents) without a second round trip.

use std::collections::HashMap;

use serde_json::Value;

use super::models::{Entry, EntryCollection};

/// Lookup table over everything a collection can resolve a link to.
struct LinkIndex {
    entries: HashMap<String, Entry>,
    assets: HashMap<String, Entry>,
}

impl LinkIndex {
    fn new(collection: &EntryCollection) -> Self {
        let entries = collection
            .items
            .iter()
            .chain(&collection.includes.entries)
            .map(|e| (e.sys.id.clone(), e.clone()))
            .collect();
        let assets = collection
            .includes
            .assets
            .iter()
            .map(|a| (a.sys.id.clone(), a.clone()))
            .collect();
        Self { entries, assets }
    }

    fn lookup(&self, link_type: &str, id: &str) -> Option<&Entry> {
        match link_type {
            "Entry" => self.entries.get(id),
            "Asset" => self.assets.get(id),
            _ => None,
        }
    }
}

/// Replace link stubs in every item's fields with the linked resource,
/// following nested links up to `depth` levels. Unresolvable links stay
/// in place.
pub fn resolve_links(mut collection: EntryCollection, depth: u8) -> EntryCollection {
    if depth == 0 {
        return collection;
    }

    let index = LinkIndex::new(&collection);
    for item in &mut collection.items {
        for value in item.fields.values_mut() {
            resolve_value(value, &index, depth);
        }
    }
    collection
}

fn resolve_value(value: &mut Value, index: &LinkIndex, depth: u8) {
    match value {
        Value::Object(map) => {
            if let Some((link_type, id)) = link_target(map) {
                if depth == 0 {
                    return;
                }
                if let Some(target) = index.lookup(&link_type, &id) {
                    let mut resolved = target.to_value();
                    if let Some(fields) = resolved.get_mut("fields") {
                        resolve_value(fields, index, depth - 1);
                    }
                    *value = resolved;
                }
                return;
            }
            for child in map.values_mut() {
                resolve_value(child, index, depth);
            }
        }
        Value::Array(items) => {
            for child in items {
                resolve_value(child, index, depth);
            }
        }
        _ => {}
    }
}

/// `Some((linkType, id))` if the object is a bare link stub.
fn link_target(map: &serde_json::Map<String, Value>) -> Option<(String, String)> {
    if map.len() != 1 {
        return None;
    }
    let sys = map.get("sys")?;
    if sys.get("type")?.as_str()? != "Link" {
        return None;
    }
    let link_type = sys.get("linkType")?.as_str()?.to_owned();
    let id = sys.get("id")?.as_str()?.to_owned();
    Some((link_type, id))
}
