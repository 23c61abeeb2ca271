use crate::airfoil::common::ShapeParameters;
use crate::airfoil::Contour;
use crate::solver::{BucketDiagram, Polar, SinglePoint, SolverConfig};
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Typesetting options for a plotting backend. Handed to the backend with every figure instead
/// of being set process-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub font_family: String,
    pub serif_fonts: Vec<String>,
    pub use_tex: bool,
    pub tex_preamble: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            font_family: "serif".to_string(),
            serif_fonts: vec!["DejaVu Serif".to_string()],
            use_tex: true,
            tex_preamble: r"\usepackage{siunitx}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(label: &str, x: Vec<f64>, y: Vec<f64>) -> Series {
        Series {
            label: label.to_string(),
            x,
            y,
        }
    }
}

/// A backend-neutral description of a single 2D line plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub file_name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub equal_aspect: bool,
    pub invert_x: bool,
    pub legend: bool,
}

impl Figure {
    fn new(file_name: &str, title: String, x_label: &str, y_label: &str) -> Figure {
        Figure {
            file_name: file_name.to_string(),
            title,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
            equal_aspect: false,
            invert_x: false,
            legend: false,
        }
    }
}

/// A plotting backend which renders and stores figures
pub trait FigureSink {
    fn render(&mut self, config: &PlotConfig, figure: &Figure) -> Result<(), Box<dyn Error>>;
}

pub fn profile_title(params: &ShapeParameters) -> String {
    format!(
        "{} profile  (m={:.2}, p={:.2}, t={:.2}, N={})",
        params.designation().as_deref().unwrap_or("NACAXXXX"),
        params.m,
        params.p,
        params.t,
        params.n
    )
}

fn reynolds_tex(config: &SolverConfig) -> String {
    if config.is_viscous() {
        format!("${}$", config.reynolds_label())
    } else {
        config.reynolds_label()
    }
}

/// The section outline drawn at equal axis scaling
pub fn profile_figure(params: &ShapeParameters, contour: &Contour) -> Figure {
    let mut figure = Figure::new("profile.pdf", profile_title(params), "$x$", "$y$");
    figure.series.push(Series::new("profile", contour.x(), contour.y()));
    figure.equal_aspect = true;
    figure
}

pub fn cp_figure(name: &str, point: &SinglePoint, config: &SolverConfig) -> Figure {
    let title = format!(
        r"{}  ($\alpha={:3.1}^\circ$, Re={})",
        name,
        point.alpha,
        reynolds_tex(config)
    );
    let mut figure = Figure::new("cp_distribution.pdf", title, "$x$", "$C_p$");
    figure
        .series
        .push(Series::new("$C_p$", point.cp.x.clone(), point.cp.cp.clone()));
    figure
}

pub fn polar_figure(name: &str, polar: &Polar, config: &SolverConfig) -> Figure {
    let title = format!("{}  (Re={})", name, reynolds_tex(config));
    let mut figure = Figure::new("coefficients.pdf", title, r"Angle of attack [$^\circ$]", "");
    figure.series = vec![
        Series::new("$C_L$", polar.alpha.clone(), polar.cl.clone()),
        Series::new("$C_D$", polar.alpha.clone(), polar.cd.clone()),
        Series::new("$C_p$", polar.alpha.clone(), polar.cp_min.clone()),
    ];
    figure.legend = true;
    figure
}

/// Minimum pressure coefficient against angle of attack, with the pressure axis reversed so
/// that suction increases to the right
pub fn bucket_figure(name: &str, bucket: &BucketDiagram, config: &SolverConfig) -> Figure {
    let title = format!("Bucket Diagram ({} , Re={})", name, reynolds_tex(config));
    let mut figure = Figure::new("bucket_diagram.pdf", title, "$C_p$", r"$\alpha$ [$^\circ$]");
    figure.series.push(Series::new(
        "$C_{p,min}$",
        bucket.cp_min.clone(),
        bucket.alpha.clone(),
    ));
    figure.invert_x = true;
    figure
}
