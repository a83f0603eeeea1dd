use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::utils::constants::{
    ASTRONOMY_FIELDS, BLOCK_ASTRONOMY, BLOCK_CURRENT, BLOCK_DAILY, BLOCK_MONTHLY, BLOCK_YEARLY,
    CURRENT_FIELDS, DAILY_FIELDS, EXTREMES_FIELDS,
};

/// The five measurement groupings a station document may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Current,
    Daily,
    Monthly,
    Yearly,
    Astronomy,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Current,
        BlockKind::Daily,
        BlockKind::Monthly,
        BlockKind::Yearly,
        BlockKind::Astronomy,
    ];

    /// Element name of the block in the station document (and key in the JSON output)
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Current => BLOCK_CURRENT,
            BlockKind::Daily => BLOCK_DAILY,
            BlockKind::Monthly => BLOCK_MONTHLY,
            BlockKind::Yearly => BLOCK_YEARLY,
            BlockKind::Astronomy => BLOCK_ASTRONOMY,
        }
    }

    pub fn expected_fields(&self) -> &'static [&'static str] {
        match self {
            BlockKind::Current => CURRENT_FIELDS,
            BlockKind::Daily => DAILY_FIELDS,
            BlockKind::Monthly | BlockKind::Yearly => EXTREMES_FIELDS,
            BlockKind::Astronomy => ASTRONOMY_FIELDS,
        }
    }

    /// Monthly and yearly extremes record the day of the extreme, not the hour.
    pub fn uses_day_suffix(&self) -> bool {
        matches!(self, BlockKind::Monthly | BlockKind::Yearly)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Insertion-ordered mapping of field name to optional text value.
///
/// Expected fields come first (null until filled), followed by any extra
/// fields in the order the source document listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBlock {
    fields: Vec<(String, Option<String>)>,
}

impl FieldBlock {
    /// Block holding every expected key, all null
    pub fn with_expected(expected: &[&str]) -> Self {
        Self {
            fields: expected
                .iter()
                .map(|name| (name.to_string(), None))
                .collect(),
        }
    }

    pub fn for_kind(kind: BlockKind) -> Self {
        Self::with_expected(kind.expected_fields())
    }

    /// Set a field, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        let index = self.fields.iter().position(|(key, _)| key == name)?;
        Some(self.fields.remove(index).1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == name)
    }

    /// Value of a field; `None` when the key is absent or null.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of keys with a non-null value
    pub fn populated_count(&self) -> usize {
        self.fields.iter().filter(|(_, value)| value.is_some()).count()
    }
}

impl Serialize for FieldBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct FieldBlockVisitor;

impl<'de> Visitor<'de> for FieldBlockVisitor {
    type Value = FieldBlock;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to string or null values")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<FieldBlock, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut block = FieldBlock::default();
        while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
            block.insert(key, value);
        }
        Ok(block)
    }
}

impl<'de> Deserialize<'de> for FieldBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FieldBlockVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expected_keys_start_null() {
        let block = FieldBlock::for_kind(BlockKind::Astronomy);
        assert_eq!(block.len(), ASTRONOMY_FIELDS.len());
        assert_eq!(block.populated_count(), 0);
        assert!(block.contains_key("faselunar"));
        assert_eq!(block.value("faselunar"), None);
    }

    #[test]
    fn test_insert_keeps_position_and_appends_extras() {
        let mut block = FieldBlock::with_expected(&["a", "b"]);
        block.insert("extra", Some("1".to_string()));
        block.insert("a", Some("5".to_string()));

        let keys: Vec<&str> = block.keys().collect();
        assert_eq!(keys, vec!["a", "b", "extra"]);
        assert_eq!(block.value("a"), Some("5"));
        assert_eq!(block.value("extra"), Some("1"));
    }

    #[test]
    fn test_remove() {
        let mut block = FieldBlock::with_expected(&["a", "b"]);
        block.insert("b", Some("x".to_string()));

        assert_eq!(block.remove("b"), Some(Some("x".to_string())));
        assert_eq!(block.remove("b"), None);
        assert!(!block.contains_key("b"));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn test_serializes_in_order_with_nulls() {
        let mut block = FieldBlock::with_expected(&["temperatura", "humedad"]);
        block.insert("temperatura", Some("21.4".to_string()));

        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"temperatura":"21.4","humedad":null}"#);

        let back: FieldBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_block_kind_layouts() {
        assert_eq!(BlockKind::Monthly.expected_fields(), BlockKind::Yearly.expected_fields());
        assert!(BlockKind::Monthly.uses_day_suffix());
        assert!(BlockKind::Yearly.uses_day_suffix());
        assert!(!BlockKind::Daily.uses_day_suffix());
        assert_eq!(BlockKind::Astronomy.to_string(), "astronomia");
    }
}
