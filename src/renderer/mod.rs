//! SVG renderer for the map
//!
//! This module takes a region table and fill policy and produces an SVG
//! string with the identifiers queryable on each shape.

pub mod config;
pub mod region;
pub mod svg;

pub use config::{MapConfig, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
pub use region::RegionShape;
pub use svg::{render_map, DISTRICT_ID, DISTRICT_MARKER_KEY, DISTRICT_PATH_KEY};
