use serde::{Deserialize, Serialize};

/// Holds the styling options of the yield locus figure
///
/// This is passed explicitly to the plotter; nothing here touches global plotting state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Figure width in points
    pub figure_width: f64,

    /// Figure height in points
    pub figure_height: f64,

    /// Resolution of the saved raster image
    pub dpi: usize,

    /// Image format (extension of the figure file), e.g., "png" or "jpg"
    ///
    /// **Note:** The default is "png". Earlier yield locus figures were JPEG images at 600 dpi;
    /// set "jpg" to reproduce them.
    pub extension: String,

    /// Base font size
    pub font_size: f64,

    /// Font size of the legend and annotation
    pub label_font_size: f64,

    /// Marker area of the scatter points (points²)
    pub scatter_size: f64,

    /// Color of the elastic points
    pub elastic_color: String,

    /// Name of the Matplotlib colormap used for the plastic points
    pub colormap: String,

    /// Number of discrete levels of the colormap
    pub n_colors: usize,

    /// Number of ticks on the colorbar
    pub n_ticks: usize,

    /// Color of the yield locus curves
    pub contour_color: String,

    /// Line style of the yield locus curves
    pub contour_line_style: String,

    /// Line width of the yield locus curves
    pub contour_line_width: f64,

    /// Line style of the cross through the origin
    pub cross_line_style: String,

    /// Line width of the cross through the origin
    pub cross_line_width: f64,

    /// Half-width of the symmetric axes limits
    pub axis_limit: f64,

    /// Annotation text; None means a description generated from the shear levels
    pub annotation: Option<String>,

    /// Position (x, y) of the center of the annotation text in data coordinates
    pub annotation_position: (f64, f64),

    /// Vertical distance between the lines of the annotation in data coordinates
    pub annotation_line_spacing: f64,
}

impl RenderConfig {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        RenderConfig {
            figure_width: 1152.0,
            figure_height: 648.0,
            dpi: 600,
            extension: "png".to_string(),
            font_size: 24.0,
            label_font_size: 12.0,
            scatter_size: 15.0,
            elastic_color: "grey".to_string(),
            colormap: "jet".to_string(),
            n_colors: 12,
            n_ticks: 5,
            contour_color: "k".to_string(),
            contour_line_style: "-.".to_string(),
            contour_line_width: 1.2,
            cross_line_style: "--".to_string(),
            cross_line_width: 0.7,
            axis_limit: 1.5,
            annotation: None,
            annotation_position: (1.25, 1.16),
            annotation_line_spacing: 0.1,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.figure_width <= 0.0 || self.figure_height <= 0.0 {
            return Some(format!(
                "figure size = ({:?}, {:?}) is incorrect; it must be positive",
                self.figure_width, self.figure_height
            ));
        }
        if self.dpi < 1 {
            return Some("dpi = 0 is incorrect; it must be ≥ 1".to_string());
        }
        if self.extension.is_empty() {
            return Some("extension must not be empty".to_string());
        }
        if self.n_colors < 1 {
            return Some("n_colors = 0 is incorrect; it must be ≥ 1".to_string());
        }
        if self.n_ticks < 2 {
            return Some(format!("n_ticks = {} is incorrect; it must be ≥ 2", self.n_ticks));
        }
        if !(self.axis_limit > 0.0) {
            return Some(format!(
                "axis_limit = {:?} is incorrect; it must be > 0.0",
                self.axis_limit
            ));
        }
        if !(self.annotation_line_spacing >= 0.0) {
            return Some(format!(
                "annotation_line_spacing = {:?} is incorrect; it must be ≥ 0.0",
                self.annotation_line_spacing
            ));
        }
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
