use super::{ClassifiedPoints, ColorScale, PointGroup};
use crate::base::{Error, FilePath, RenderConfig};
use crate::material::YieldLocusCurve;
use log::debug;
use plotpy::{Curve, Legend, Plot, Text};
use std::fs;
use std::path::Path;

/// Draws the normalized stress points and the yield locus curves
pub struct Plotter<'a> {
    /// Styling options
    render: &'a RenderConfig,
}

impl<'a> Plotter<'a> {
    /// Allocates a new instance
    pub fn new(render: &'a RenderConfig) -> Self {
        Plotter { render }
    }

    /// Draws the figure
    ///
    /// # Input
    ///
    /// * `points` -- the elastic and plastic points (σ11/σy, σ22/σy)
    /// * `curves` -- the yield locus curves at several shear levels
    /// * `scale` -- the color scale of the plastic points
    /// * `annotation` -- the text written in the upper-right region of the plot
    pub fn draw(
        &self,
        points: &ClassifiedPoints,
        curves: &[YieldLocusCurve],
        scale: &ColorScale,
        annotation: &str,
    ) -> Plot {
        let r = self.render;
        let mut plot = Plot::new();
        plot.extra(&self.style_commands(scale));

        if !points.elastic.is_empty() {
            let mut curve = Curve::new();
            curve
                .set_label("Elastic")
                .set_line_style("None")
                .set_marker_style("o")
                .set_marker_color(&r.elastic_color)
                .set_marker_line_color(&r.elastic_color)
                .set_marker_size(f64::sqrt(r.scatter_size))
                .draw(&points.elastic.xx, &points.elastic.yy);
            plot.add(&curve);
        }
        if !points.plastic.is_empty() {
            plot.extra(&self.scatter_commands(&points.plastic, scale));
        }

        for locus in curves {
            for polyline in &locus.polylines {
                let mut curve = Curve::new();
                curve
                    .set_line_color(&r.contour_color)
                    .set_line_style(&r.contour_line_style)
                    .set_line_width(r.contour_line_width)
                    .draw(&polyline.x, &polyline.y);
                plot.add(&curve);
            }
        }

        plot.set_cross(0.0, 0.0, "k", &r.cross_line_style, r.cross_line_width);
        for (x, y, line) in self.annotation_lines(annotation) {
            let mut text = Text::new();
            text.set_fontsize(r.label_font_size)
                .set_align_horizontal("center")
                .set_align_vertical("center")
                .set_bbox(true)
                .set_bbox_style("square,pad=0.05")
                .set_bbox_facecolor("w")
                .set_bbox_edgecolor("w");
            text.draw(x, y, &line);
            plot.add(&text);
        }

        let mut legend = Legend::new();
        legend
            .set_location("lower right")
            .set_fontsize(r.label_font_size)
            .set_show_frame(false)
            .draw();
        plot.add(&legend);

        let lim = r.axis_limit;
        plot.set_range(-lim, lim, -lim, lim)
            .set_label_x("$\\sigma_{11}/\\sigma_y$")
            .set_label_y("$\\sigma_{22}/\\sigma_y$")
            .set_figure_size_points(r.figure_width, r.figure_height);
        plot.extra(&self.colorbar_commands(scale));
        plot
    }

    /// Saves the figure
    ///
    /// The figure is written to a `.partial` sibling file first and then renamed, thus the final
    /// path never holds a partially written image.
    ///
    /// # Input
    ///
    /// * `plot` -- the figure returned by [Plotter::draw]
    /// * `path` -- the final path of the figure
    /// * `show` -- also shows the figure in a window
    pub fn save(&self, plot: &mut Plot, path: &Path, show: bool) -> Result<(), Error> {
        let display = path.to_string_lossy().to_string();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::io(&display, e))?;
        }
        let partial = FilePath::partial(path);
        let res = if show { plot.show(&partial) } else { plot.save(&partial) };
        if let Err(message) = res {
            let script = partial.with_extension("py");
            for leftover in [&partial, &script] {
                if leftover.is_file() {
                    fs::remove_file(leftover).map_err(|e| Error::io(&display, e))?;
                }
            }
            return Err(message.into());
        }
        fs::rename(&partial, path).map_err(|e| Error::io(&display, e))?;

        // keep the generated python script next to the figure
        let script = partial.with_extension("py");
        if script.exists() {
            fs::rename(&script, path.with_extension("py")).map_err(|e| Error::io(&display, e))?;
        }
        debug!("figure published to {}", display);
        Ok(())
    }

    /// Returns the commands setting the figure style and the colormap
    fn style_commands(&self, scale: &ColorScale) -> String {
        let r = self.render;
        format!(
            "plt.rcParams.update({{'font.size': {}, 'savefig.dpi': {}, 'axes.facecolor': 'white', \
             'figure.facecolor': 'white', 'axes.edgecolor': (0.15, 0.15, 0.15), 'text.usetex': False}})\n\
             cmap = plt.get_cmap({}).resampled({})\n",
            python_float(r.font_size),
            r.dpi,
            python_str(&r.colormap),
            scale.n_colors,
        )
    }

    /// Returns the commands drawing the plastic points colored by the equivalent plastic strain
    fn scatter_commands(&self, group: &PointGroup, scale: &ColorScale) -> String {
        format!(
            "plt.scatter({}, {}, c={}, cmap=cmap, vmin={}, vmax={}, s={}, label='Plastic', zorder=3)\n",
            python_list(&group.xx),
            python_list(&group.yy),
            python_list(&group.strain),
            python_float(scale.min),
            python_float(scale.max),
            python_float(self.render.scatter_size),
        )
    }

    /// Returns the lines of the annotation with their (x, y) positions
    ///
    /// The lines are stacked downwards and the block is centered at the annotation position.
    /// Single quotes are replaced by typographic apostrophes.
    fn annotation_lines(&self, annotation: &str) -> Vec<(f64, f64, String)> {
        let (x, y) = self.render.annotation_position;
        let spacing = self.render.annotation_line_spacing;
        let lines: Vec<&str> = annotation.lines().collect();
        let middle = (lines.len() as f64 - 1.0) / 2.0;
        lines
            .iter()
            .enumerate()
            .map(|(k, line)| (x, y + (middle - k as f64) * spacing, line.replace('\'', "\u{2019}")))
            .collect()
    }

    /// Returns the commands drawing the colorbar
    fn colorbar_commands(&self, scale: &ColorScale) -> String {
        let labels: Vec<String> = scale.tick_labels().iter().map(|l| python_str(l)).collect();
        format!(
            "sm = plt.cm.ScalarMappable(cmap=cmap, norm=plt.Normalize(vmin={}, vmax={}))\n\
             sm.set_array([])\n\
             cb = plt.colorbar(sm, ax=plt.gca(), ticks={})\n\
             cb.set_ticklabels([{}])\n\
             cb.set_label({}, labelpad=-40, y=1.1, rotation=0)\n",
            python_float(scale.min),
            python_float(scale.max),
            python_list(&scale.ticks),
            labels.join(", "),
            python_str("$\\bar{\\epsilon}^\\mathrm{p}$"),
        )
    }
}

/// Returns the annotation describing the shear levels
///
/// Evenly spaced levels are described by the first value and the increment.
pub fn shear_levels_annotation(shear_levels: &[f64]) -> String {
    let prefix = "$\\sigma_{12}/\\sigma_y";
    match shear_levels.len() {
        0 => String::new(),
        1 => format!("{}={}$", prefix, short_number(shear_levels[0])),
        n => {
            let step = shear_levels[1] - shear_levels[0];
            let even = (2..n).all(|k| f64::abs(shear_levels[k] - shear_levels[k - 1] - step) < 1e-9);
            if even {
                format!(
                    "{}={}$,\nincrements of {}",
                    prefix,
                    short_number(shear_levels[0]),
                    short_number(step)
                )
            } else {
                let all: Vec<_> = shear_levels.iter().map(|s| short_number(*s)).collect();
                format!("{}$ = {}", prefix, all.join(", "))
            }
        }
    }
}

/// Formats a number with at most six decimal places and no trailing zeros
fn short_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Returns a Python float literal
fn python_float(value: f64) -> String {
    if value.is_nan() {
        "float('nan')".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else {
        format!("{:?}", value)
    }
}

/// Returns a Python list literal
fn python_list(values: &[f64]) -> String {
    let items: Vec<_> = values.iter().map(|v| python_float(*v)).collect();
    format!("[{}]", items.join(","))
}

/// Returns a (single-quoted) Python string literal
fn python_str(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
