//! SVG generation for the map
//!
//! Takes a region table and a fill policy and produces the SVG string:
//! one path per region inside an `outlines` group, plus the fixed
//! federal-district fragment (a path sliver and a circle marker). The
//! district is not a dataset entry; it always renders, its two pieces
//! resolve fill under the keys `DC1` and `DC2`, and both interact under
//! the identifier `DC`.

use crate::dataset::RegionTable;
use crate::style::FillPolicy;

use super::region::{escape_xml, RegionShape};
use super::{MapConfig, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};

/// Interaction identifier reported by both district pieces
pub const DISTRICT_ID: &str = "DC";
/// Fill-policy key for the district path sliver
pub const DISTRICT_PATH_KEY: &str = "DC1";
/// Fill-policy key for the district circle marker
pub const DISTRICT_MARKER_KEY: &str = "DC2";

/// Geometry of the district path sliver
const DISTRICT_PATH_D: &str = "M801.8,253.8 l-1.1-1.6 -1-0.8 1.1-1.6 2.2,1.5z";
/// Center and radius of the district circle marker
const DISTRICT_MARKER: (f64, f64, f64) = (801.3, 251.8, 5.0);

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: MapConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one region shape
    pub fn add_region(&mut self, shape: &RegionShape) {
        let mut out = String::new();
        shape.write(&mut out, &self.indent_str(), self.newline());
        self.elements.push(out);
    }

    /// Add the fixed federal-district fragment
    pub fn add_district(&mut self, policy: &FillPolicy) {
        let indent = self.indent_str();
        let nl = self.newline();
        let inner = if self.config.pretty_print { "  " } else { "" };
        let (cx, cy, r) = DISTRICT_MARKER;

        let mut out = String::new();
        out.push_str(&format!(
            "{}<g class=\"{} state\">{}",
            indent, DISTRICT_ID, nl
        ));
        out.push_str(&format!(
            r#"{indent}{inner}<path class="{key}" fill="{fill}" d="{d}"/>{nl}"#,
            indent = indent,
            inner = inner,
            key = DISTRICT_PATH_KEY,
            fill = escape_xml(policy.resolve(DISTRICT_PATH_KEY)),
            d = DISTRICT_PATH_D,
            nl = nl,
        ));
        out.push_str(&format!(
            r##"{indent}{inner}<circle class="{key}" data-name="{id}" fill="{fill}" stroke="#FFFFFF" stroke-width="1.5" cx="{cx}" cy="{cy}" r="{r}" opacity="1"/>{nl}"##,
            indent = indent,
            inner = inner,
            key = DISTRICT_MARKER_KEY,
            id = DISTRICT_ID,
            fill = escape_xml(policy.resolve(DISTRICT_MARKER_KEY)),
            cx = cx,
            cy = cy,
            r = r,
            nl = nl,
        ));
        out.push_str(&format!("{}</g>{}", indent, nl));
        self.elements.push(out);
    }

    /// Open a group element
    pub fn start_group(&mut self, class: &str) {
        self.elements.push(format!(
            "{}<g class=\"{}\">{}",
            self.indent_str(),
            escape_xml(class),
            self.newline()
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements
            .push(format!("{}</g>{}", self.indent_str(), self.newline()));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // The viewBox never changes: width/height scale the map, they
        // do not reflow it.
        svg.push_str(&format!(
            r#"<svg class="us-state-map" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.config.width, self.config.height, VIEWBOX_WIDTH, VIEWBOX_HEIGHT
        ));
        svg.push_str(nl);

        svg.push_str(&format!(
            "{}<title>{}</title>{}",
            if self.config.pretty_print { "  " } else { "" },
            escape_xml(&self.config.title),
            nl
        ));

        for elem in &self.elements {
            svg.push_str(elem);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a region table to an SVG map string
///
/// Every region yields exactly one shape with its identifier queryable
/// via `data-name`; fills come from the policy (override if set, default
/// otherwise). The district fragment renders last, regardless of the
/// table's contents.
pub fn render_map(table: &RegionTable, policy: &FillPolicy, config: &MapConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.start_group("outlines");
    for region in table {
        builder.add_region(&RegionShape::new(
            &region.id,
            &region.name,
            &region.d,
            policy.resolve(&region.id),
        ));
    }
    builder.add_district(policy);
    builder.end_group();

    builder.build()
}
