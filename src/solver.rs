//! The boundary to an external aerodynamic analysis engine. The engine itself is opaque: it
//! takes the contour's coordinate arrays, an angle of attack and a `SolverConfig`, and returns
//! force coefficients and a surface pressure distribution. This module holds the value types
//! that cross that boundary and the sweeps built on top of it.

use crate::errors::SweepError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::{debug, info};

/// Iteration cap used for viscous runs unless one is set explicitly
pub const DEFAULT_VISCOUS_ITERATIONS: usize = 40;

/// Largest number of intervals a sweep may expand into
pub const MAX_SWEEP_INTERVALS: usize = 100_000;

/// Per-run settings for the analysis engine. Passed into every call rather than stored on the
/// engine, so a single engine can serve runs at different conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub reynolds: f64,

    /// Left to the engine when `None`
    pub max_iter: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::inviscid()
    }
}

impl SolverConfig {
    pub fn inviscid() -> Self {
        SolverConfig {
            reynolds: 0.0,
            max_iter: None,
        }
    }

    pub fn viscous(reynolds: f64) -> Self {
        SolverConfig {
            reynolds,
            max_iter: Some(DEFAULT_VISCOUS_ITERATIONS),
        }
    }

    /// A viscous config for a positive Reynolds number, an inviscid one otherwise
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds > 0.0 {
            Self::viscous(reynolds)
        } else {
            Self::inviscid()
        }
    }

    pub fn with_max_iter(self, max_iter: usize) -> Self {
        SolverConfig {
            max_iter: Some(max_iter),
            ..self
        }
    }

    pub fn is_viscous(&self) -> bool {
        self.reynolds > 0.0
    }

    /// The order of magnitude of the Reynolds number, such as "10^6" for 1.2e6
    pub fn reynolds_label(&self) -> String {
        if self.is_viscous() {
            format!("10^{}", self.reynolds.log10().floor() as i32)
        } else {
            "inviscid".to_string()
        }
    }
}

/// A range of angles of attack in degrees, from `start` to `end` inclusive in steps of `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaSweep {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl AlphaSweep {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        AlphaSweep { start, end, step }
    }

    /// Expands the sweep into evenly spaced angles. A step which doesn't divide the range evenly
    /// is rounded to the nearest whole number of intervals so that both ends are always hit.
    pub fn angles(&self) -> Result<Vec<f64>, SweepError> {
        if let Some(v) = [self.start, self.end, self.step].into_iter().find(|v| !v.is_finite()) {
            return Err(SweepError::NonFiniteBound(v));
        }
        if !(self.step > 0.0) {
            return Err(SweepError::NonPositiveStep(self.step));
        }
        if !(self.end >= self.start) {
            return Err(SweepError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }

        // Checked as a float so a saturating cast can't reach the allocation
        let ratio = ((self.end - self.start) / self.step).round();
        if !(ratio <= MAX_SWEEP_INTERVALS as f64) {
            return Err(SweepError::TooManyAngles(ratio));
        }

        let intervals = ratio as usize;
        if intervals == 0 {
            return Ok(vec![self.start]);
        }

        let width = self.end - self.start;
        Ok((0..=intervals)
            .map(|i| {
                if i == intervals {
                    self.end
                } else {
                    self.start + width * (i as f64 / intervals as f64)
                }
            })
            .collect())
    }
}

/// Force and moment coefficients for a single angle of attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,

    pub cp_min: f64,
}

/// The surface pressure coefficient indexed by chordwise position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpDistribution {
    pub x: Vec<f64>,
    pub cp: Vec<f64>,
}

impl CpDistribution {
    pub fn min_cp(&self) -> Option<f64> {
        self.cp.iter().cloned().reduce(f64::min)
    }
}

/// An external aerodynamic analysis engine. Implementations own whatever solution method they
/// use; this crate only guarantees the geometry contract of the arrays passed to `geometry`.
pub trait AeroSolver {
    type Geometry;

    /// Builds the engine's geometry from a closed contour given as separate x and y arrays,
    /// trailing edge to leading edge along the upper surface and back along the lower one
    fn geometry(&self, x: &[f64], y: &[f64]) -> Self::Geometry;

    fn analyze(
        &self,
        geometry: &Self::Geometry,
        alpha: f64,
        config: &SolverConfig,
    ) -> Result<AeroCoefficients, Box<dyn Error>>;

    fn cp_distribution(
        &self,
        geometry: &Self::Geometry,
        alpha: f64,
        config: &SolverConfig,
    ) -> Result<CpDistribution, Box<dyn Error>>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePoint {
    pub alpha: f64,
    pub coefficients: AeroCoefficients,
    pub cp: CpDistribution,
}

/// Coefficients over a sweep of angles, stored as columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub alpha: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    pub cm: Vec<f64>,
    pub cp_min: Vec<f64>,
}

impl Polar {
    pub fn push(&mut self, alpha: f64, c: &AeroCoefficients) {
        self.alpha.push(alpha);
        self.cl.push(c.cl);
        self.cd.push(c.cd);
        self.cm.push(c.cm);
        self.cp_min.push(c.cp_min);
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketDiagram {
    pub alpha: Vec<f64>,
    pub cp_min: Vec<f64>,
}

pub fn run_single<S: AeroSolver>(
    solver: &S,
    geometry: &S::Geometry,
    alpha: f64,
    config: &SolverConfig,
) -> Result<SinglePoint, Box<dyn Error>> {
    let coefficients = solver.analyze(geometry, alpha, config)?;
    let cp = solver.cp_distribution(geometry, alpha, config)?;
    info!(alpha, cl = coefficients.cl, cd = coefficients.cd, "single point");

    Ok(SinglePoint {
        alpha,
        coefficients,
        cp,
    })
}

pub fn run_sweep<S: AeroSolver>(
    solver: &S,
    geometry: &S::Geometry,
    sweep: &AlphaSweep,
    config: &SolverConfig,
) -> Result<Polar, Box<dyn Error>> {
    let mut polar = Polar::default();
    for alpha in sweep.angles()? {
        let c = solver.analyze(geometry, alpha, config)?;
        debug!(alpha, cl = c.cl, "sweep point");
        polar.push(alpha, &c);
    }

    info!(points = polar.len(), re = %config.reynolds_label(), "sweep finished");
    Ok(polar)
}

/// Computes the minimum pressure coefficient of the surface distribution at every angle of the
/// sweep. Angles at which the engine returns an empty distribution are skipped.
pub fn bucket_diagram<S: AeroSolver>(
    solver: &S,
    geometry: &S::Geometry,
    sweep: &AlphaSweep,
    config: &SolverConfig,
) -> Result<BucketDiagram, Box<dyn Error>> {
    let mut bucket = BucketDiagram::default();
    for alpha in sweep.angles()? {
        match solver.cp_distribution(geometry, alpha, config)?.min_cp() {
            Some(cp) => {
                bucket.alpha.push(alpha);
                bucket.cp_min.push(cp);
            }
            None => debug!(alpha, "empty pressure distribution"),
        }
    }

    Ok(bucket)
}
