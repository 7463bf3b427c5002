//! Leaf renderer for a single region shape
//!
//! One region becomes one `<path>` element: the identifier is exposed as
//! a queryable `data-name` attribute, the class carries the identifier
//! plus the shared `state` marker class, and the display name becomes a
//! `<title>` child so it shows as a hover tooltip.

/// A single renderable region: geometry, identity, and resolved fill
#[derive(Debug, Clone)]
pub struct RegionShape<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub d: &'a str,
    pub fill: &'a str,
}

impl<'a> RegionShape<'a> {
    pub fn new(id: &'a str, name: &'a str, d: &'a str, fill: &'a str) -> Self {
        Self { id, name, d, fill }
    }

    /// Emit the shape as an SVG path element
    pub(crate) fn write(&self, out: &mut String, indent: &str, nl: &str) {
        out.push_str(&format!(
            r#"{indent}<path class="{id} state" d="{d}" data-name="{id}" fill="{fill}">{nl}"#,
            indent = indent,
            id = escape_xml(self.id),
            d = escape_xml(self.d),
            fill = escape_xml(self.fill),
            nl = nl,
        ));
        out.push_str(&format!(
            "{indent}{indent2}<title>{name}</title>{nl}",
            indent = indent,
            indent2 = if nl.is_empty() { "" } else { "  " },
            name = escape_xml(self.name),
            nl = nl,
        ));
        out.push_str(&format!("{}</path>{}", indent, nl));
    }
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_shape(shape: &RegionShape) -> String {
        let mut out = String::new();
        shape.write(&mut out, "", "");
        out
    }

    #[test]
    fn test_shape_carries_identifier() {
        let shape = RegionShape::new("CA", "California", "M0,0 Z", "#d3d3d3");
        let svg = render_shape(&shape);
        assert!(svg.contains(r#"data-name="CA""#));
        assert!(svg.contains(r#"class="CA state""#));
        assert!(svg.contains(r#"d="M0,0 Z""#));
        assert!(svg.contains(r##"fill="#d3d3d3""##));
    }

    #[test]
    fn test_shape_title_tooltip() {
        let shape = RegionShape::new("NM", "New Mexico", "M1,1 Z", "#fff");
        let svg = render_shape(&shape);
        assert!(svg.contains("<title>New Mexico</title>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let shape = RegionShape::new("XX", "Fields & \"Woods\"", "M0,0 Z", "#fff");
        let svg = render_shape(&shape);
        assert!(svg.contains("Fields &amp; &quot;Woods&quot;"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }
}
