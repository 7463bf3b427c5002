//! usamap - An interactive SVG map of the United States
//!
//! This library renders state shapes from a static region table, resolves
//! per-state fill colors through a caller-supplied policy, and routes
//! pointer interaction back to the host by state abbreviation.
//!
//! # Example
//!
//! ```rust
//! use usamap::render;
//!
//! let svg = render();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"data-name="CA""#));
//! ```

pub mod dataset;
pub mod events;
pub mod renderer;
pub mod style;

pub use dataset::{DatasetError, Region, RegionTable};
pub use events::{EventRouter, MapCallbacks, PointerEvent, PointerKind};
pub use renderer::{render_map, MapConfig, RegionShape, DISTRICT_ID};
pub use style::{FillPolicy, RegionStyle, StyleError, DEFAULT_FILL};

use thiserror::Error;

/// Errors that can occur when loading map inputs
///
/// Rendering itself is infallible; only dataset and style loading can
/// fail.
#[derive(Debug, Error)]
pub enum MapError {
    /// Error loading the region table
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Error loading the fill policy
    #[error("style error: {0}")]
    Style(#[from] StyleError),
}

/// Render the bundled USA map with default fills and configuration
///
/// # Example
///
/// ```rust
/// use usamap::render;
///
/// let svg = render();
/// assert!(svg.contains(r#"viewBox="0 0 959 593""#));
/// ```
pub fn render() -> String {
    render_map(
        &RegionTable::builtin(),
        &FillPolicy::default(),
        &MapConfig::default(),
    )
}

/// Render the bundled USA map with a custom fill policy
///
/// # Example
///
/// ```rust
/// use usamap::{render_with_policy, FillPolicy};
///
/// let policy = FillPolicy::default().with_fill("CA", "#ff0000");
/// let svg = render_with_policy(&policy);
/// assert!(svg.contains(r##"fill="#ff0000""##));
/// ```
pub fn render_with_policy(policy: &FillPolicy) -> String {
    render_map(&RegionTable::builtin(), policy, &MapConfig::default())
}

/// Render an arbitrary region table with explicit policy and config
pub fn render_with_config(table: &RegionTable, policy: &FillPolicy, config: &MapConfig) -> String {
    render_map(table, policy, config)
}
