//! Configuration for map SVG output

/// Width of the fixed viewBox
pub const VIEWBOX_WIDTH: u32 = 959;
/// Height of the fixed viewBox
pub const VIEWBOX_HEIGHT: u32 = 593;

/// Configuration options for the rendered map
///
/// Width and height only scale the output; the viewBox is always
/// `0 0 959 593`, so geometry never reflows.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Rendered canvas width
    pub width: u32,

    /// Rendered canvas height
    pub height: u32,

    /// Title shown for the whole map
    pub title: String,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: VIEWBOX_WIDTH,
            height: VIEWBOX_HEIGHT,
            title: "USA Map".to_string(),
            standalone: false,
            pretty_print: true,
        }
    }
}

impl MapConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered canvas width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the rendered canvas height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the map title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
