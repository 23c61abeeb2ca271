use naca_rs::airfoil::common::ShapeParameters;
use naca_rs::airfoil::generate::ProfileGenerator;
use naca_rs::plot::{profile_figure, Figure, FigureSink, PlotConfig};
use ncollide2d::na::Point2;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use tracing::info;

/// Writes figures as JSON documents for an external plotting script to pick up
struct JsonFigures;

impl FigureSink for JsonFigures {
    fn render(&mut self, config: &PlotConfig, figure: &Figure) -> Result<(), Box<dyn Error>> {
        let file_name = format!("{}.json", figure.file_name);
        let document = serde_json::json!({ "config": config, "figure": figure });
        serde_json::to_writer_pretty(File::create(&file_name)?, &document)?;
        info!(file = %file_name, "wrote figure");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let params = ShapeParameters::new(0.05, 0.4, 0.12, 50);
    let profile = ProfileGenerator::new(params)?.generate()?;
    info!(
        designation = ?params.designation(),
        points = profile.contour.len(),
        "generated"
    );

    write_points(profile.contour.points(), "profile.txt")?;
    JsonFigures.render(&PlotConfig::default(), &profile_figure(&params, &profile.contour))?;

    Ok(())
}

fn write_points(v: &[Point2<f64>], file_name: &str) -> std::io::Result<()> {
    let mut file = File::create(file_name)?;
    for p in v.iter() {
        writeln!(file, "{}, {}", &p.x, &p.y)?;
    }

    Ok(())
}
