use xmltree::{Element, XMLNode};

use crate::models::{BlockKind, FieldBlock};

/// Parsed station document.
///
/// Stations publish a namespaced root holding `fecha`, `hora` and up to five
/// flat blocks (`actuales`, `diarios`, `mensuales`, `anuales`, `astronomia`).
#[derive(Debug, Clone)]
pub struct StationDocument {
    root: Element,
    namespace: String,
}

impl StationDocument {
    pub fn parse(bytes: &[u8], namespace: &str) -> Result<Self, xmltree::ParseError> {
        let root = Element::parse(bytes)?;
        Ok(Self {
            root,
            namespace: namespace.to_string(),
        })
    }

    /// Text of a top-level element. Outer `None` means the element is absent,
    /// inner `None` means it is present but empty.
    pub fn root_text(&self, name: &str) -> Option<Option<String>> {
        self.root
            .get_child((name, self.namespace.as_str()))
            .map(element_text)
    }

    pub fn has_block(&self, kind: BlockKind) -> bool {
        self.root
            .get_child((kind.tag(), self.namespace.as_str()))
            .is_some()
    }

    pub fn extract_block(&self, kind: BlockKind) -> FieldBlock {
        extract_block(&self.root, kind.tag(), kind.expected_fields(), &self.namespace)
    }
}

/// Collect the direct children of `block` under `root` into a [`FieldBlock`].
///
/// Every name in `expected` is present in the result (null when the source
/// omits it or the block itself is missing). Children outside `expected` are
/// kept under their local name.
pub fn extract_block(root: &Element, block: &str, expected: &[&str], namespace: &str) -> FieldBlock {
    let mut fields = FieldBlock::with_expected(expected);

    if let Some(block_elem) = root.get_child((block, namespace)) {
        for child in &block_elem.children {
            if let XMLNode::Element(field) = child {
                // xmltree already splits the prefix off into `prefix`
                fields.insert(field.name.clone(), element_text(field));
            }
        }
    }

    fields
}

fn element_text(element: &Element) -> Option<String> {
    element.get_text().map(|text| text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::STATION_NAMESPACE;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ns:estacion xmlns:ns="https://www.w3schools.com">
  <ns:fecha>14/03/2025</ns:fecha>
  <ns:hora>12:00</ns:hora>
  <ns:actuales>
    <ns:temperatura>18.2</ns:temperatura>
    <ns:humedad>71</ns:humedad>
    <ns:indicecalor>18.0</ns:indicecalor>
    <ns:lluvia/>
  </ns:actuales>
  <ns:mensuales>
    <ns:temperaturamaxima>24.1</ns:temperaturamaxima>
    <ns:temperaturamaximahora>09</ns:temperaturamaximahora>
  </ns:mensuales>
</ns:estacion>"#;

    fn document() -> StationDocument {
        StationDocument::parse(DOCUMENT.as_bytes(), STATION_NAMESPACE).unwrap()
    }

    #[test]
    fn test_root_text() {
        let doc = document();
        assert_eq!(doc.root_text("fecha"), Some(Some("14/03/2025".to_string())));
        assert_eq!(doc.root_text("hora"), Some(Some("12:00".to_string())));
        assert_eq!(doc.root_text("zona"), None);
    }

    #[test]
    fn test_extract_present_block() {
        let block = document().extract_block(BlockKind::Current);

        assert_eq!(block.value("temperatura"), Some("18.2"));
        assert_eq!(block.value("humedad"), Some("71"));
        // empty element is null
        assert!(block.contains_key("lluvia"));
        assert_eq!(block.value("lluvia"), None);
        // expected but missing
        assert!(block.contains_key("puntoderocio"));
        assert_eq!(block.value("puntoderocio"), None);
        // extra field kept without its prefix
        assert_eq!(block.value("indicecalor"), Some("18.0"));
        assert!(!block.keys().any(|k| k.contains(':')));

        let expected = BlockKind::Current.expected_fields().len();
        assert_eq!(block.len(), expected + 1);
    }

    #[test]
    fn test_missing_block_is_all_null() {
        let doc = document();
        assert!(!doc.has_block(BlockKind::Astronomy));

        let block = doc.extract_block(BlockKind::Astronomy);
        let keys: Vec<&str> = block.keys().collect();
        assert_eq!(keys, BlockKind::Astronomy.expected_fields().to_vec());
        assert_eq!(block.populated_count(), 0);
    }

    #[test]
    fn test_hour_named_field_kept_as_extra_before_reconciliation() {
        let block = document().extract_block(BlockKind::Monthly);
        assert_eq!(block.value("temperaturamaximahora"), Some("09"));
        assert_eq!(block.value("temperaturamaximadia"), None);
    }

    #[test]
    fn test_block_outside_namespace_is_ignored() {
        let xml = r#"<estacion xmlns:ns="https://www.w3schools.com">
  <actuales><temperatura>30</temperatura></actuales>
</estacion>"#;
        let doc = StationDocument::parse(xml.as_bytes(), STATION_NAMESPACE).unwrap();
        let block = doc.extract_block(BlockKind::Current);
        assert_eq!(block.populated_count(), 0);
    }

    #[test]
    fn test_malformed_document() {
        let result = StationDocument::parse(b"<ns:estacion><ns:fecha>", STATION_NAMESPACE);
        assert!(result.is_err());

        let result = StationDocument::parse(b"Service Unavailable", STATION_NAMESPACE);
        assert!(result.is_err());
    }
}
