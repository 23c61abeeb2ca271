use crate::airfoil::common::SYMMETRIC_CAMBER_THRESHOLD;
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberSample {
    pub yc: f64,
    pub dydx: f64,
}

impl CamberSample {
    /// Radians from the chord
    pub fn angle(&self) -> f64 {
        self.dydx.atan()
    }
}

/// The NACA 4-digit mean line: two parabolic arcs meeting with zero slope at the point of max
/// camber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberLine {
    m: f64,
    p: f64,
}

impl CamberLine {
    /// Create a new camber line with max camber `m` located at chord fraction `p`. Both arcs
    /// divide by a function of `p`, so it must be strictly inside (0, 1). Symmetric sections
    /// have no camber line and should not construct one.
    pub fn new(m: f64, p: f64) -> Result<CamberLine, DomainError> {
        if !(m >= 0.0 && m < 1.0) {
            return Err(DomainError::CamberOutOfRange(m));
        }
        if !(p >= SYMMETRIC_CAMBER_THRESHOLD && p < 1.0) {
            return Err(DomainError::CamberPositionOutOfRange(p));
        }

        Ok(CamberLine { m, p })
    }

    pub fn max_camber(&self) -> f64 {
        self.m
    }

    pub fn max_camber_position(&self) -> f64 {
        self.p
    }

    pub fn at(&self, x: f64) -> CamberSample {
        let (m, p) = (self.m, self.p);
        if x < p {
            let k = m / p.powi(2);
            CamberSample {
                yc: k * (2.0 * p * x - x.powi(2)),
                dydx: 2.0 * k * (p - x),
            }
        } else {
            let k = m / (1.0 - p).powi(2);
            CamberSample {
                yc: k * (1.0 - 2.0 * p + 2.0 * p * x - x.powi(2)),
                dydx: 2.0 * k * (p - x),
            }
        }
    }

    pub fn sample(&self, x: &[f64]) -> Vec<CamberSample> {
        x.iter().map(|v| self.at(*v)).collect()
    }
}
