//! Chart output for curves and their zero markers
//!
//! A thin renderer over the sampler: a [`Plot`] draws one or more curves
//! as line series into an SVG drawing area, with red circle markers and
//! `"x = <root>"` labels at the zeros in roots mode. The [`crate::plot!`]
//! macro wraps the whole pipeline for one-line use from demos and tests.
pub use plotters;

use std::ops::Range;
use std::path::PathBuf;

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
};

use crate::{
    curve::Curve,
    roots::Marker,
    sample::{sample, SamplePoints},
    value::Value,
};

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum PlottingError<'root> {
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<SVGBackend<'root> as DrawingBackend>::ErrorType>),

    /// Error sampling the curve
    #[error("Error sampling curve: {0}")]
    Sample(#[from] crate::error::Error),
}

/// Type alias for the root drawing area.
pub type PlotRoot<'root> = DrawingArea<SVGBackend<'root>, Shift>;

/// Line chart for curves, with optional zero markers
pub struct Plot<'root> {
    chart: ChartContext<'root, SVGBackend<'root>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
}

impl<'root> Plot<'root> {
    /// Create a new plot
    ///
    /// # Errors
    /// Returns an error if the chart cannot be created.
    pub fn new(
        root: &PlotRoot<'root>,
        title: &str,
        x_range: Range<f64>,
        y_range: Range<f64>,
    ) -> Result<Self, PlottingError<'root>> {
        let chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 24).into_font())
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)?;

        Ok(Plot { chart })
    }

    /// Create a plot from a curve, sampling it over `domain`.
    ///
    /// The y-range is taken from the samples with a small pad; in roots
    /// mode the zero markers are drawn too.
    ///
    /// # Errors
    /// Returns an error if sampling fails or the chart cannot be built.
    pub fn from_curve(
        root: &PlotRoot<'root>,
        title: &str,
        curve: &Curve<f64>,
        domain: std::ops::RangeInclusive<f64>,
        count: usize,
    ) -> Result<Self, PlottingError<'root>> {
        let points = sample(curve, domain.clone(), count)?;

        let (min_y, max_y) = points
            .ys()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            });
        let pad = ((max_y - min_y) * 0.05).max(1.0);

        let x_range = *domain.start()..*domain.end();
        let y_range = (min_y - pad)..(max_y + pad);

        let mut plot = Self::new(root, title, x_range, y_range)?
            .with_line(&points, &format!("f(x) = {}", curve.equation()), 3, &BLUE)?;
        if let Some(markers) = curve.markers() {
            plot = plot.with_markers(&markers)?;
        }

        Ok(plot)
    }

    /// Add a line series to the plot
    ///
    /// # Errors
    /// Returns an error if the series cannot be drawn.
    pub fn with_line(
        mut self,
        points: &SamplePoints<f64>,
        label: &str,
        width: u32,
        color: impl Into<ShapeStyle>,
    ) -> Result<Self, PlottingError<'root>> {
        let style = color.into().stroke_width(width);
        self.chart
            .draw_series(LineSeries::new(points.points(), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        Ok(self)
    }

    /// Add zero markers with their labels to the plot
    ///
    /// # Errors
    /// Returns an error if the markers cannot be drawn.
    pub fn with_markers<T: Value + Into<f64>>(
        mut self,
        markers: &[Marker<T>],
    ) -> Result<Self, PlottingError<'root>> {
        self.chart.draw_series(markers.iter().map(|marker| {
            EmptyElement::at((marker.x.into(), marker.y.into()))
                + Circle::new((0, 0), 5, RED.filled())
                + Text::new(marker.label.clone(), (10, -15), ("sans-serif", 14).into_font())
        }))?;

        Ok(self)
    }

    /// Build the final plot
    ///
    /// # Errors
    /// Returns an error if the mesh or legend cannot be drawn.
    pub fn build(mut self) -> Result<(), PlottingError<'root>> {
        self.chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("f(x)")
            .draw()?;
        self.chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;

        self.chart.plotting_area().present()?;
        Ok(())
    }

    /// Directory plot files are written to: `target/plot_output`
    #[must_use]
    pub fn plots_dir() -> PathBuf {
        PathBuf::from("target").join("plot_output")
    }
}

/// Plots a [`crate::Curve`] to an SVG file.
///
/// # Syntax
/// ```ignore
/// plot!(
///     curve                     // Required: a `Curve`
///     , title = "My Plot"       // Optional: custom title
///     , domain = (-6.0..=6.0)   // Optional: x-domain (default: CURVE_DOMAIN)
///     , count = 400             // Optional: sample density (default: CURVE_SAMPLES)
///     , size = (width, height)  // Optional: image size in pixels (default: (640, 480))
/// );
/// ```
///
/// # Behavior
/// - Automatically generates a filename based on the source file, line
///   number, and timestamp.
/// - Ensures the target directory exists before writing the SVG file.
/// - Prints the path of the generated file to stdout and returns it.
#[macro_export]
macro_rules! plot {
    (
        $curve:expr
        $(, title = $title:expr)?
        $(, domain = $domain:expr)?
        $(, count = $count:expr)?
        $(, size = ($width:expr, $height:expr))?
    ) => {{
        #[allow(unused_mut, unused_assignments)]
        let mut size = (640, 480); $( size = ($width, $height); )?
        #[allow(unused_mut, unused_assignments)]
        let mut title = "Graph of f(x)".to_string(); $( title = $title.to_string(); )?
        #[allow(unused_mut, unused_assignments)]
        let mut domain = $crate::curve::CURVE_DOMAIN; $( domain = $domain; )?
        #[allow(unused_mut, unused_assignments)]
        let mut count = $crate::curve::CURVE_SAMPLES; $( count = $count; )?

        let path = $crate::plot_filename!();
        let mut svg = String::new();
        {
            let backend = $crate::plot::plotters::prelude::SVGBackend::with_string(&mut svg, size);
            let root =
                $crate::plot::plotters::prelude::IntoDrawingArea::into_drawing_area(backend);
            root.fill(&$crate::plot::plotters::prelude::WHITE)
                .expect("Failed to fill drawing area");

            $crate::plot::Plot::from_curve(&root, &title, &$curve, domain, count)
                .and_then($crate::plot::Plot::build)
                .expect("Failed to build plot");
        }
        ::std::fs::write(&path, svg).expect("Failed to write plot");
        println!("Wrote plot to {}", path.display());
        path
    }};
}

/// Generate a filename for a plot: `target/plot_output/{file}_line_{line}_{datetime}.svg`
#[macro_export]
macro_rules! plot_filename {
    () => {{
        let file = file!().replace(['/', '\\'], "_");
        let line = line!();
        let datetime = ::std::time::SystemTime::now()
            .duration_since(::std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let plots_dir = $crate::plot::Plot::plots_dir();
        let _ = ::std::fs::create_dir_all(&plots_dir);

        let filename = format!("{file}_line_{line}_{datetime}.svg");
        plots_dir.join(filename)
    }};
}
