//! # Galleria Architecture
//!
//! Galleria is the filter and search engine behind a static art-gallery page:
//! live text search, medium/year/series selectors derived from the artwork
//! itself, and a reset action. It is a **UI-agnostic library**. The bundled CLI
//! is one client; a browser binding is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - facets, filter, session replay, config                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (facets.rs, evaluate.rs, debounce.rs, controls.rs)  │
//! │  - Pure types and algorithms, driven by explicit events     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (source/) and Surfaces (surface.rs)                │
//! │  - ItemSource: where the cards come from                    │
//! │  - GallerySurface: where visibility and status go           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Engine
//!
//! Three stages cooperate:
//!
//! 1. **Facet extraction** ([`facets`]) runs once when the engine is built and
//!    produces the options offered by each selector.
//! 2. **Control surface** ([`controls`]) holds the current [`model::FilterState`]
//!    and reacts to search input (debounced), facet selection and reset.
//! 3. **Match evaluation** ([`evaluate`]) decides per item visibility and the
//!    visible/total summary.
//!
//! Evaluation is pure. Applying it is a separate step through
//! [`surface::GallerySurface`], so matching can be tested without any UI.
//!
//! ## Time
//!
//! The engine never sleeps or spawns. Debounced search is a pending payload
//! with a deadline ([`debounce::Debouncer`]); the host calls
//! `GalleryEngine::tick` from its own timer. Time is read from a
//! [`debounce::Clock`], which tests replace with [`debounce::ManualClock`].
//!
//! ## No Gallery, No Error
//!
//! A page without a gallery container disables filtering: sources return
//! `Ok(None)` and `GalleryEngine::init` returns `None`. Once running, the
//! engine has no failure modes. The only errors in the crate come from reading
//! files, parsing JSON, parsing session scripts and config keys.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command logic (facets, filter, session, config)
//! - [`controls`]: The live engine and the controls render model
//! - [`evaluate`]: Pure matching
//! - [`facets`]: Facet extraction
//! - [`debounce`]: Clocks and the cancel-and-reschedule timer
//! - [`surface`]: Render adapter trait and an in-memory surface
//! - [`source`]: Item sources
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod controls;
pub mod debounce;
pub mod error;
pub mod evaluate;
pub mod facets;
pub mod model;
pub mod source;
pub mod surface;
