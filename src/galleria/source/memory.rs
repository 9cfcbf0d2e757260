use super::ItemSource;
use crate::error::Result;
use crate::model::Item;

/// Fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    gallery: Option<Vec<Item>>,
}

impl InMemorySource {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            gallery: Some(items),
        }
    }

    /// A page without a gallery container.
    pub fn without_container() -> Self {
        Self { gallery: None }
    }
}

impl ItemSource for InMemorySource {
    fn load_gallery(&self) -> Result<Option<Vec<Item>>> {
        Ok(self.gallery.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The three-card page used throughout the docs and tests.
    pub fn scenario() -> InMemorySource {
        InMemorySource::new(vec![
            Item::new("Red Dawn", "Sunrise over the harbour", "Oil", "2020", "Storm"),
            Item::new("Blue Dusk", "Evening study", "Ink", "2019", ""),
            Item::new("Red Tide", "Algae bloom", "Oil", "2019", "Storm"),
        ])
    }

    pub struct SourceFixture {
        items: Vec<Item>,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self { items: Vec::new() }
        }

        pub fn with_item(mut self, title: &str, medium: &str, year: &str, series: &str) -> Self {
            self.items.push(Item::new(title, "", medium, year, series));
            self
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                self.items.push(Item::new(
                    format!("Study {}", i + 1),
                    format!("Sketchbook page {}", i + 1),
                    "Graphite",
                    "2018",
                    "",
                ));
            }
            self
        }

        pub fn build(self) -> InMemorySource {
            InMemorySource::new(self.items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::SourceFixture;
    use super::*;

    #[test]
    fn returns_configured_items() {
        let source = SourceFixture::new().with_items(3).build();
        let items = source.load_gallery().unwrap().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].title, "Study 3");
    }

    #[test]
    fn without_container_returns_none() {
        let source = InMemorySource::without_container();
        assert!(source.load_gallery().unwrap().is_none());
    }
}
