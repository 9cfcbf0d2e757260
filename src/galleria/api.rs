//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs`, normalizes inputs (script text to
//! parsed events, config to engine options) and returns `Result<CmdResult>`.
//! It does no printing and holds no filtering logic.
//!
//! `GalleriaApi<S: ItemSource>` is generic over where the page comes from:
//! `JsonSource` in the CLI, `InMemorySource` in tests.

use crate::commands;
use crate::config::GalleriaConfig;
use crate::controls::GalleryEngine;
use crate::debounce::Clock;
use crate::error::Result;
use crate::model::FilterState;
use crate::source::ItemSource;
use crate::surface::GallerySurface;

pub struct GalleriaApi<S: ItemSource> {
    source: S,
    config: GalleriaConfig,
}

impl<S: ItemSource> GalleriaApi<S> {
    pub fn new(source: S, config: GalleriaConfig) -> Self {
        Self { source, config }
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.source)
    }

    pub fn filter(&self, state: &FilterState) -> Result<commands::CmdResult> {
        commands::filter::run(&self.source, state, &self.config.noun)
    }

    pub fn session(&self, script: &str) -> Result<commands::CmdResult> {
        let events = commands::session::parse_script(script)?;
        commands::session::run(&self.source, &events, self.config.engine_options())
    }

    /// Builds a live engine for an interactive host. `None` when the page has
    /// no gallery.
    pub fn engine<C: Clock, U: GallerySurface>(
        &self,
        clock: C,
        surface: U,
    ) -> Result<Option<GalleryEngine<C, U>>> {
        let gallery = self.source.load_gallery()?;
        Ok(GalleryEngine::init(
            gallery,
            clock,
            surface,
            self.config.engine_options(),
        ))
    }

    pub fn config(&self) -> &GalleriaConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, GalleriaPaths, ListedItem, MessageLevel, StatusUpdate,
};
