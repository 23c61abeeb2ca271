use super::assemble::assemble;
use super::common::{ProfileKind, ShapeParameters};
use super::sampling::cosine_spacing;
use super::thickness::ThicknessDistribution;
use super::{Airfoil, Contour};
use crate::errors::DomainError;
use crate::solver::AeroSolver;
use serde::Serialize;
use tracing::debug;

/// Everything produced for one set of shape parameters. The contour is the output handed to
/// plotting and analysis; the sampled chord fractions and the per-surface airfoil are kept for
/// inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub params: ShapeParameters,
    pub kind: ProfileKind,
    pub abscissas: Vec<f64>,
    pub airfoil: Airfoil,
    pub contour: Contour,
}

impl Profile {
    pub fn solver_geometry<S: AeroSolver>(&self, solver: &S) -> S::Geometry {
        solver.geometry(&self.contour.x(), &self.contour.y())
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber, P is
/// the location of the maximum camber, and TT is the maximum thickness of the airfoil as a
/// fraction of the chord. For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord
/// and a max thickness which is 12% of the chord length.
///
/// Parameters are validated when the generator is created, and the symmetric or cambered
/// construction is picked at that point, so generating can't fail on the inputs themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileGenerator {
    params: ShapeParameters,
    kind: ProfileKind,
}

impl ProfileGenerator {
    pub fn new(params: ShapeParameters) -> Result<ProfileGenerator, DomainError> {
        let kind = params.validate().map_err(|e| {
            debug!(error = %e, "rejected shape parameters");
            e
        })?;

        Ok(ProfileGenerator { params, kind })
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    pub fn generate(&self) -> Result<Profile, DomainError> {
        let abscissas = cosine_spacing(self.params.n)?;
        let thickness = ThicknessDistribution::new(self.params.t);
        let airfoil = assemble(self.kind, &abscissas, &thickness)?;
        let contour = airfoil.to_contour();

        debug!(
            designation = ?self.params.designation(),
            kind = ?self.kind,
            points = contour.len(),
            "generated profile"
        );

        Ok(Profile {
            params: self.params,
            kind: self.kind,
            abscissas,
            airfoil,
            contour,
        })
    }

    pub fn generate_for<S: AeroSolver>(
        &self,
        solver: &S,
    ) -> Result<(Profile, S::Geometry), DomainError> {
        let profile = self.generate()?;
        let geometry = profile.solver_geometry(solver);
        Ok((profile, geometry))
    }
}

/// Validates the parameters and generates the closed contour of the section in one step
pub fn generate_profile(params: &ShapeParameters) -> Result<Profile, DomainError> {
    ProfileGenerator::new(*params)?.generate()
}
