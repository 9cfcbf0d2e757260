use crate::config::GalleriaConfig;
use crate::error::Result;
use crate::model::{FacetSet, Item, ResultSummary};
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod facets;
pub mod filter;
pub mod session;

/// Where configuration lives: the working directory's `.galleria/`, with the
/// user config dir as fallback.
#[derive(Debug, Clone)]
pub struct GalleriaPaths {
    pub project: PathBuf,
    pub global: Option<PathBuf>,
}

impl GalleriaPaths {
    /// Directory to write to.
    pub fn config_dir(&self, global: bool) -> Result<PathBuf> {
        if global {
            self.global.clone().ok_or_else(|| {
                crate::error::GalleriaError::Config(
                    "No user config directory available".to_string(),
                )
            })
        } else {
            Ok(self.project.clone())
        }
    }

    /// Directory to read from: the project one if it exists.
    pub fn active_config_dir(&self) -> PathBuf {
        match &self.global {
            Some(global) if !self.project.exists() => global.clone(),
            _ => self.project.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// An item as listed to the user, with its 1-based position on the page.
#[derive(Debug, Clone, Serialize)]
pub struct ListedItem {
    pub position: usize,
    pub item: Item,
}

/// A status-line change observed during a session, at virtual time `at_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub at_ms: u64,
    pub status: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed_items: Vec<ListedItem>,
    pub facets: Option<FacetSet>,
    pub summary: Option<ResultSummary>,
    pub status: Option<String>,
    pub status_updates: Vec<StatusUpdate>,
    #[serde(skip)]
    pub config: Option<GalleriaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ListedItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_facets(mut self, facets: FacetSet) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_summary(mut self, summary: ResultSummary, status: String) -> Self {
        self.summary = Some(summary);
        self.status = Some(status);
        self
    }

    pub fn with_status_updates(mut self, updates: Vec<StatusUpdate>) -> Self {
        self.status_updates = updates;
        self
    }

    pub fn with_config(mut self, config: GalleriaConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) const NO_GALLERY_MESSAGE: &str = "No gallery container on this page; filtering is disabled";

/// Lists the items whose flag is set, keeping page order.
pub(crate) fn listed(items: &[Item], visible: &[bool]) -> Vec<ListedItem> {
    items
        .iter()
        .zip(visible)
        .enumerate()
        .filter_map(|(i, (item, &visible))| {
            visible.then(|| ListedItem {
                position: i + 1,
                item: item.clone(),
            })
        })
        .collect()
}
