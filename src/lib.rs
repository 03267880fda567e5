//! country_atlas
//!
//! A lightweight Rust library for browsing country records from the
//! REST Countries API. Pairs with the `atlas` CLI.
//!
//! ### Features
//! - Fetch all countries (with a `fields=` projection) or one country by code
//! - Filter by name and region, sort by population or area
//! - Turn loosely-typed records into display-ready strings (`N/A` when absent)
//! - Religion demographics from a remote CSV snapshot, fetched once and cached,
//!   with per-country and per-region fallback tables
//!
//! ### Example
//! ```no_run
//! use country_atlas::listing::{FilterState, RegionFilter, SortKey};
//! use country_atlas::{Atlas, Settings};
//!
//! let atlas = Atlas::from_settings(&Settings::default())?;
//! let countries = atlas.countries();
//! let state = FilterState {
//!     region: RegionFilter::Named("Europe".into()),
//!     sort: SortKey::PopulationDesc,
//!     ..FilterState::default()
//! };
//! for c in state.apply(&countries) {
//!     println!("{} {}", c.cca3, c.name.common);
//! }
//! let details = atlas.details("DEU")?;
//! println!("{}", details.religions);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod models;
pub mod religion;
pub mod service;
pub mod view;

pub use api::Client;
pub use config::Settings;
pub use error::AtlasError;
pub use models::{Country, Entries};
pub use religion::{ReligionBreakdown, Resolver};
pub use service::Atlas;
