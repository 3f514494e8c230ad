use serde::{Deserialize, Serialize};

/// A named, authored collection of character roles.
///
/// Scripts arrive from the hosting layer as part of an in-memory catalog;
/// the search engine treats them as immutable input data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Unique integer primary key within the catalog.
    pub pk: u32,
    pub title: String,
    pub author: String,
    /// Raw character identifiers as authored. Resolved to display names
    /// through the role registry; unresolvable entries are not an error.
    #[serde(default)]
    pub characters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "pk": 19,
            "title": "Catfishing",
            "author": "emily",
            "characters": ["Fortune Teller", "imp"]
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();

        assert_eq!(script.pk, 19);
        assert_eq!(script.title, "Catfishing");
        assert_eq!(script.characters.len(), 2);
    }

    #[test]
    fn test_characters_default_to_empty() {
        let json = r#"{"pk": 1, "title": "Bare", "author": "nobody"}"#;

        let script: Script = serde_json::from_str(json).unwrap();

        assert!(script.characters.is_empty());
    }
}
