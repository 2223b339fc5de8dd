// src/catalog/models.rs

use serde::{Deserialize, Serialize};

/// One game mode as it appears in the catalog JSON.
///
/// The JSON keys are Portuguese (`nome`, `descrição`, `imagens`); they are
/// mapped onto English field names here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descrição", default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "imagens", default)]
    pub images: Vec<String>,
}

impl ModeRecord {
    /// Image shown on the card face.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// The authoritative, load-once list of records. Cards and search results
/// refer back into it by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ModeRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ModeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ModeRecord] {
        &self.records
    }

    /// Resolve an identity key. Names are assumed unique; the first match wins.
    pub fn find(&self, name: &str) -> Option<&ModeRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
