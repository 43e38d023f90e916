//! Export record types
//!
//! Items and folders are stored as the exact JSON value they were loaded
//! from. The editor reads them through accessors and writes only the keys a
//! user changes, so a saved record keeps every other key, its `null`s, its
//! absent keys and its key order.
//!
//! # Types
//!
//! - **`Folder`**: `{ id, name }` catalog entry
//! - **`Item`**: one credential record (login, note, card, identity)
//! - **`ItemType`**: numeric item kind, unknown codes preserved

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;

/// Identifier of an item inside an export
pub type ItemId = String;

/// Text form of an `id` value: strings as-is, numbers in decimal, else empty
fn id_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

/// A folder entry
///
/// `id` and `name` are read from the raw record at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    raw: Value,
}

impl Folder {
    /// Create a folder with no extra fields
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let (id, name) = (id.into(), name.into());
        Self::from(json!({ "id": id, "name": name }))
    }

    /// The record exactly as it will be written back
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<Value> for Folder {
    fn from(raw: Value) -> Self {
        let id = id_text(raw.get("id"));
        let name = match raw.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        };
        Self { id, name, raw }
    }
}

impl Serialize for Folder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Folder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Kind of an item, serialized as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ItemType {
    Login,
    SecureNote,
    Card,
    Identity,
    /// A code this editor does not know about
    Other(u32),
}

impl ItemType {
    /// The four kinds the editor can filter by, in code order
    pub const KNOWN: [Self; 4] = [Self::Login, Self::SecureNote, Self::Card, Self::Identity];

    /// Numeric code used in the export
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Login => 1,
            Self::SecureNote => 2,
            Self::Card => 3,
            Self::Identity => 4,
            Self::Other(code) => code,
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SecureNote => "Note",
            Self::Card => "Card",
            Self::Identity => "Identity",
            Self::Other(_) => "Unknown",
        }
    }
}

impl From<u32> for ItemType {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::Login,
            2 => Self::SecureNote,
            3 => Self::Card,
            4 => Self::Identity,
            other => Self::Other(other),
        }
    }
}

impl From<ItemType> for u32 {
    fn from(kind: ItemType) -> Self {
        kind.code()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemType {
    type Err = String;

    /// Accepts `login`, `note`, `card`, `identity` (any case) or a numeric code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "note" | "securenote" | "secure-note" => Ok(Self::SecureNote),
            "card" => Ok(Self::Card),
            "identity" => Ok(Self::Identity),
            other => other
                .parse::<u32>()
                .map(Self::from)
                .map_err(|_| format!("unknown item type '{s}' (expected login, note, card, identity or a number)")),
        }
    }
}

/// A credential record
///
/// Any JSON value is a valid item. Accessors return `None` or the empty
/// string for fields that are missing or of an unexpected type, and the
/// setters only touch records that are JSON objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) id: ItemId,
    raw: Value,
}

impl Item {
    /// Create a bare item, mostly useful for tests and fixtures
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemType) -> Self {
        let (id, name) = (id.into(), name.into());
        Self::from(json!({ "id": id, "name": name, "type": kind.code() }))
    }

    /// Builder: place the item in a folder
    #[must_use]
    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.set_field("folderId", Value::String(folder_id.into()));
        self
    }

    /// Builder: attach a login with an optional username and uri
    #[must_use]
    pub fn with_login(mut self, username: Option<&str>, uri: Option<&str>) -> Self {
        let mut login = Map::new();
        if let Some(username) = username {
            login.insert("username".into(), Value::from(username));
        }
        if let Some(uri) = uri {
            login.insert("uris".into(), json!([{ "uri": uri }]));
        }
        self.set_field("login", Value::Object(login));
        self
    }

    /// Identifier; numeric ids are shown in decimal, missing ids are empty
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The record exactly as it will be written back
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the record is a JSON object and so can be edited
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.raw.is_object()
    }

    /// Name, or the empty string when the record has no string name
    #[must_use]
    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Kind, when `type` holds a numeric code
    #[must_use]
    pub fn kind(&self) -> Option<ItemType> {
        self.raw
            .get("type")
            .and_then(Value::as_u64)
            .and_then(|code| u32::try_from(code).ok())
            .map(ItemType::from)
    }

    /// Folder id when `folderId` is a non-empty string
    #[must_use]
    pub fn folder(&self) -> Option<&str> {
        self.raw
            .get("folderId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Whether the item references any folder, existing or not
    ///
    /// Missing keys, `null` and the empty string mean "no folder". Any other
    /// value counts as a (dangling) reference.
    #[must_use]
    pub fn has_folder(&self) -> bool {
        match self.raw.get("folderId") {
            None | Some(Value::Null) => false,
            Some(Value::String(id)) => !id.is_empty(),
            Some(_) => true,
        }
    }

    /// Login username if present and non-empty
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.raw
            .pointer("/login/username")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Raw string of the first login uri, if the item has at least one
    ///
    /// An entry without a string `uri` yields the empty string.
    #[must_use]
    pub fn primary_uri(&self) -> Option<&str> {
        self.raw
            .pointer("/login/uris")
            .and_then(Value::as_array)
            .and_then(|uris| uris.first())
            .map(|entry| entry.get("uri").and_then(Value::as_str).unwrap_or_default())
    }

    /// Replace the name; returns `false` for records that are not objects
    pub fn set_name(&mut self, name: &str) -> bool {
        self.set_field("name", Value::from(name))
    }

    /// Replace `folderId`, writing `null` for "no folder"
    ///
    /// Returns `false` for records that are not objects.
    pub fn set_folder(&mut self, folder_id: Option<&str>) -> bool {
        self.set_field("folderId", folder_id.map_or(Value::Null, Value::from))
    }

    /// Existing keys keep their position; new keys are appended
    fn set_field(&mut self, key: &str, value: Value) -> bool {
        match &mut self.raw {
            Value::Object(record) => {
                record.insert(key.to_string(), value);
                true
            }
            _ => false,
        }
    }
}

impl From<Value> for Item {
    fn from(raw: Value) -> Self {
        let id = id_text(raw.get("id"));
        Self { id, raw }
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_codes_round_trip() {
        for code in 0..8 {
            assert_eq!(ItemType::from(code).code(), code);
        }
        assert_eq!(ItemType::from(5), ItemType::Other(5));
        assert_eq!(ItemType::Other(5).label(), "Unknown");
    }

    #[test]
    fn test_item_type_from_str() {
        assert_eq!("login".parse::<ItemType>().unwrap(), ItemType::Login);
        assert_eq!("Note".parse::<ItemType>().unwrap(), ItemType::SecureNote);
        assert_eq!("3".parse::<ItemType>().unwrap(), ItemType::Card);
        assert!("password".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_item_reads_through_unknown_fields() {
        let json = r#"{
            "id": "a",
            "name": "Gmail",
            "type": 1,
            "folderId": null,
            "favorite": true,
            "login": {"username": "bob", "password": "hunter2", "uris": [{"match": null, "uri": "https://mail.google.com"}]}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.id(), "a");
        assert_eq!(item.kind(), Some(ItemType::Login));
        assert_eq!(item.username(), Some("bob"));
        assert_eq!(item.primary_uri(), Some("https://mail.google.com"));
        assert_eq!(item.raw()["favorite"], Value::Bool(true));
        assert_eq!(item.raw()["login"]["password"], Value::from("hunter2"));
        assert!(!item.has_folder());
    }

    #[test]
    fn test_item_with_unexpected_field_types() {
        let item: Item = serde_json::from_str(r#"{"id": 5, "name": 7, "type": "1", "folderId": 3}"#).unwrap();

        assert_eq!(item.id(), "5");
        assert_eq!(item.name(), "");
        assert_eq!(item.kind(), None);
        assert_eq!(item.folder(), None);
        assert!(item.has_folder());
    }

    #[test]
    fn test_non_object_item_is_kept_but_not_editable() {
        let mut item: Item = serde_json::from_str("42").unwrap();

        assert_eq!(item.id(), "");
        assert!(!item.is_editable());
        assert!(!item.set_name("x"));
        assert!(!item.set_folder(None));
        assert_eq!(serde_json::to_string(&item).unwrap(), "42");
    }

    #[test]
    fn test_item_serializes_exactly_as_loaded() {
        let source = r#"{"organizationId":null,"folderId":null,"type":1,"name":null,"login":null,"id":"a"}"#;
        let item: Item = serde_json::from_str(source).unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), source);
    }

    #[test]
    fn test_setters_keep_key_positions() {
        let mut item: Item = serde_json::from_str(r#"{"folderId":"f1","name":"x","id":"a"}"#).unwrap();
        assert!(item.set_name("y"));
        assert!(item.set_folder(None));
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"folderId":null,"name":"y","id":"a"}"#
        );

        let mut bare: Item = serde_json::from_str(r#"{"id":"b"}"#).unwrap();
        bare.set_folder(Some("f2"));
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"id":"b","folderId":"f2"}"#);
    }

    #[test]
    fn test_empty_folder_id_means_no_folder() {
        let item = Item::new("a", "x", ItemType::Login).in_folder("");
        assert_eq!(item.folder(), None);
        assert!(!item.has_folder());
    }

    #[test]
    fn test_empty_username_is_absent() {
        let item = Item::new("a", "x", ItemType::Login).with_login(Some(""), None);
        assert_eq!(item.username(), None);
        assert_eq!(item.primary_uri(), None);
    }

    #[test]
    fn test_uri_entry_without_value_is_empty_string() {
        let json = r#"{"id": "a", "type": 1, "login": {"uris": [{"uri": null}]}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.primary_uri(), Some(""));
        assert_eq!(item.name(), "");
    }

    #[test]
    fn test_folder_from_loose_record() {
        let folder: Folder = serde_json::from_str(r#"{"id": 1, "name": "Work", "extra": [1]}"#).unwrap();
        assert_eq!(folder.id, "1");
        assert_eq!(folder.name, "Work");
        assert_eq!(serde_json::to_string(&folder).unwrap(), r#"{"id":1,"name":"Work","extra":[1]}"#);

        let odd: Folder = serde_json::from_str("null").unwrap();
        assert_eq!(odd.id, "");
    }
}
