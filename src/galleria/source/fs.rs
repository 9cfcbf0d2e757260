use super::ItemSource;
use crate::error::{GalleriaError, Result};
use crate::model::Item;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    gallery: Option<Vec<HashMap<String, Value>>>,
}

/// Flattens one card's attributes to strings. Numbers and booleans keep their
/// JSON spelling; nulls and nested values are dropped.
fn attribute_bag(card: &HashMap<String, Value>) -> HashMap<String, String> {
    card.iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

/// Page manifest on disk.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonSource {
    fn load_gallery(&self) -> Result<Option<Vec<Item>>> {
        let content = fs::read_to_string(&self.path).map_err(GalleriaError::Io)?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(GalleriaError::Serialization)?;

        let items = manifest
            .gallery
            .map(|cards| {
                cards
                    .iter()
                    .map(|card| Item::from_attributes(&attribute_bag(card)))
                    .collect::<Vec<_>>()
            });

        match &items {
            Some(items) => tracing::debug!(
                path = %self.path.display(),
                count = items.len(),
                "loaded gallery manifest"
            ),
            None => tracing::debug!(path = %self.path.display(), "manifest has no gallery"),
        }

        Ok(items)
    }
}
