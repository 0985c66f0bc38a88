//! # Example Catalog
//!
//! The bundled example list is a static JSON document: an ordered array of
//! entries, each itself an array of three or four strings:
//! `[displayName, resourceURL, sourceURL]` with an optional trailing axis
//! letter. The positional format is a wire contract with the deployed
//! `examples.json`, so deserialization is written by hand.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use step_scene::Axis;

use crate::error::IoError;

/// One entry of the example catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Text shown in the example selector.
    pub display_name: String,
    /// URL of the document to fetch and load.
    pub resource_url: String,
    /// URL of the model's source page, shown as a reference link.
    pub source_url: String,
    /// Axis to point up after loading, when the entry specifies one.
    pub up_axis: Option<Axis>,
}

impl<'de> Deserialize<'de> for CatalogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = CatalogEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a catalog entry array [name, url, source, axis?]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CatalogEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let display_name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let resource_url: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let source_url: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;

                let up_axis = match seq.next_element::<String>()? {
                    None => None,
                    Some(letter) => Some(Axis::from_letter(&letter).ok_or_else(|| {
                        de::Error::custom(format!("unknown axis letter {letter:?}"))
                    })?),
                };

                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("catalog entry has trailing elements"));
                }

                Ok(CatalogEntry {
                    display_name,
                    resource_url,
                    source_url,
                    up_axis,
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// Parses the catalog document, preserving entry order.
///
/// # Errors
///
/// [`IoError::Catalog`] when the document is not the expected array-of-arrays
/// shape.
///
/// # Example
///
/// ```rust
/// use step_pipeline::parse_catalog;
///
/// let entries = parse_catalog(r#"[["Cube", "cube.step", "cube_src.txt", "Z"]]"#).unwrap();
/// assert_eq!(entries[0].display_name, "Cube");
/// ```
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, IoError> {
    serde_json::from_str(json).map_err(|err| IoError::catalog(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_element_entries() {
        let entries = parse_catalog(r#"[["Gear", "gear.step", "gear_src.txt"]]"#).unwrap();
        assert_eq!(
            entries,
            vec![CatalogEntry {
                display_name: "Gear".to_string(),
                resource_url: "gear.step".to_string(),
                source_url: "gear_src.txt".to_string(),
                up_axis: None,
            }]
        );
    }

    #[test]
    fn parses_the_optional_axis_letter() {
        let entries = parse_catalog(r#"[["Cube", "cube.step", "cube_src.txt", "Z"]]"#).unwrap();
        assert_eq!(entries[0].up_axis, Some(Axis::Z));
    }

    #[test]
    fn preserves_entry_order() {
        let entries = parse_catalog(
            r#"[["A", "a.step", "a.txt"], ["B", "b.step", "b.txt", "X"], ["C", "c.step", "c.txt"]]"#,
        )
        .unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(entries[1].up_axis, Some(Axis::X));
    }

    #[test]
    fn rejects_unknown_axis_letters() {
        let err = parse_catalog(r#"[["Cube", "cube.step", "cube_src.txt", "Q"]]"#).unwrap_err();
        assert!(err.to_string().contains("axis"));
    }

    #[test]
    fn rejects_short_and_overlong_entries() {
        assert!(parse_catalog(r#"[["Cube", "cube.step"]]"#).is_err());
        assert!(parse_catalog(r#"[["Cube", "cube.step", "s.txt", "Z", "extra"]]"#).is_err());
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_catalog(r#"{"name": "Cube"}"#).unwrap_err();
        assert!(matches!(err, IoError::Catalog(_)));
    }
}
