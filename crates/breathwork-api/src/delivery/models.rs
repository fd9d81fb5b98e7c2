// Delivery API response types
//
// Entries and assets share the same `{ sys, fields }` shape. Fields are kept
// as an untyped JSON map: content types are defined in the CMS web interface,
// so the schema lives upstream and the domain mapping lives in
// `breathwork-core`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── System metadata ──────────────────────────────────────────────────

/// The `sys` block attached to every entry, asset and link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    #[serde(default)]
    pub id: String,
    /// `"Entry"`, `"Asset"`, `"Link"`, `"Array"`, `"Error"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Present on links only: `"Entry"` or `"Asset"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Sys {
    /// The content type id of an entry (`sys.contentType.sys.id`).
    pub fn content_type_id(&self) -> Option<&str> {
        self.content_type
            .as_ref()
            .and_then(|ct| ct.pointer("/sys/id"))
            .and_then(Value::as_str)
    }
}

// ── Entry / Asset ────────────────────────────────────────────────────

/// A single entry or asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// The full JSON form (`{ "sys": ..., "fields": ... }`), used when the
    /// entry is spliced into another entry's fields.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "sys".into(),
            serde_json::to_value(&self.sys).unwrap_or(Value::Null),
        );
        obj.insert("fields".into(), Value::Object(self.fields.clone()));
        Value::Object(obj)
    }
}

// ── Collection ───────────────────────────────────────────────────────

/// Linked resources returned alongside a collection when `include > 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    #[serde(default, rename = "Entry")]
    pub entries: Vec<Entry>,
    #[serde(default, rename = "Asset")]
    pub assets: Vec<Entry>,
}

/// Response of `GET /spaces/{space}/environments/{env}/entries`.
///
/// ```json
/// { "sys": { "type": "Array" }, "total": 1, "skip": 0, "limit": 100,
///   "items": [...], "includes": { "Entry": [...], "Asset": [...] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Includes,
    /// Per-link resolution errors (e.g. links to unpublished entries).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Value>,
}
