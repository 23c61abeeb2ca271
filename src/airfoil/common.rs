use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Below this max camber fraction a section is generated as symmetric and the camber line is
/// never evaluated.
pub const SYMMETRIC_CAMBER_THRESHOLD: f64 = 1e-8;

/// Selects which surface construction is used for a profile. This is decided once per profile,
/// never per sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Zero camber, the surfaces are the thickness distribution mirrored about the chord
    Symmetric,

    /// A two-parabola mean line with max camber `m` at chord fraction `p`
    Cambered { m: f64, p: f64 },
}

/// The four inputs describing a NACA 4-digit section and how densely it is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Max camber as a fraction of the chord, for example 0.02 on a NACA 2412
    pub m: f64,

    /// Chord fraction at which the max camber occurs, for example 0.4 on a NACA 2412
    pub p: f64,

    /// Max thickness as a fraction of the chord, for example 0.12 on a NACA 2412
    pub t: f64,

    /// Number of sample points along each surface
    pub n: usize,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        ShapeParameters::symmetric(0.12, 50)
    }
}

impl ShapeParameters {
    pub fn new(m: f64, p: f64, t: f64, n: usize) -> Self {
        ShapeParameters { m, p, t, n }
    }

    pub fn symmetric(t: f64, n: usize) -> Self {
        Self::new(0.0, 0.0, t, n)
    }

    /// Parses a four digit designation such as "2412", "naca0012" or "NACA 4415". The first
    /// digit is the max camber in percent of the chord, the second the camber position in tenths
    /// of the chord, and the last two the thickness in percent.
    pub fn from_designation(designation: &str, n: usize) -> Result<Self, DomainError> {
        let trimmed = designation.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };

        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::BadDesignation(designation.to_string()));
        }

        let values: Vec<f64> = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(f64::from)
            .collect();

        Ok(Self::new(
            values[0] / 100.0,
            values[1] / 10.0,
            (values[2] * 10.0 + values[3]) / 100.0,
            n,
        ))
    }

    /// The standard designation of this section, for example "NACA2412". Sections whose camber,
    /// camber position or thickness round past the digits available have no designation.
    pub fn designation(&self) -> Option<String> {
        let m = (self.m * 100.0).round();
        let p = (self.p * 10.0).round();
        let t = (self.t * 100.0).round();
        if !(m >= 0.0 && m <= 9.0 && p >= 0.0 && p <= 9.0 && t >= 0.0 && t <= 99.0) {
            return None;
        }

        Some(format!("NACA{}{}{:02}", m as u32, p as u32, t as u32))
    }

    /// Checks every parameter against its valid range and determines the profile kind. Nothing
    /// downstream of this check re-validates.
    pub fn validate(&self) -> Result<ProfileKind, DomainError> {
        if self.n < 2 {
            return Err(DomainError::TooFewSamples(self.n));
        }

        if !(self.t > 0.0 && self.t < 1.0) {
            return Err(DomainError::ThicknessOutOfRange(self.t));
        }

        if !(self.m >= 0.0 && self.m < 1.0) {
            return Err(DomainError::CamberOutOfRange(self.m));
        }

        if !(self.p >= 0.0 && self.p < 1.0) {
            return Err(DomainError::CamberPositionOutOfRange(self.p));
        }

        if self.m < SYMMETRIC_CAMBER_THRESHOLD {
            Ok(ProfileKind::Symmetric)
        } else if self.p < SYMMETRIC_CAMBER_THRESHOLD {
            // A cambered section with its peak on the leading edge would divide by p^2
            Err(DomainError::CamberPositionOutOfRange(self.p))
        } else {
            Ok(ProfileKind::Cambered {
                m: self.m,
                p: self.p,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("0012", 0.0, 0.0, 0.12)]
    #[test_case("NACA4415", 0.04, 0.4, 0.15)]
    #[test_case("naca 6409", 0.06, 0.4, 0.09)]
    #[test_case("  9999 ", 0.09, 0.9, 0.99)]
    fn test_from_designation(s: &str, m: f64, p: f64, t: f64) {
        let params = ShapeParameters::from_designation(s, 50).unwrap();
        assert_relative_eq!(m, params.m, epsilon = 1e-12);
        assert_relative_eq!(p, params.p, epsilon = 1e-12);
        assert_relative_eq!(t, params.t, epsilon = 1e-12);
        assert_eq!(50, params.n);
    }

    #[test_case("241")]
    #[test_case("24120")]
    #[test_case("NACA")]
    #[test_case("24a2")]
    #[test_case("" ; "empty")]
    fn test_bad_designation(s: &str) {
        let result = ShapeParameters::from_designation(s, 50);
        assert_eq!(Err(DomainError::BadDesignation(s.to_string())), result);
    }

    #[test_case(0.02, 0.4, 0.12, "NACA2412")]
    #[test_case(0.0, 0.0, 0.12, "NACA0012")]
    #[test_case(0.05, 0.4, 0.12, "NACA5412")]
    #[test_case(0.04, 0.4, 0.09, "NACA4409")]
    fn test_designation(m: f64, p: f64, t: f64, e: &str) {
        let designation = ShapeParameters::new(m, p, t, 10).designation();
        assert_eq!(Some(e.to_string()), designation);
    }

    #[test_case(0.1, 0.4, 0.12)]
    #[test_case(0.05, 0.96, 0.12)]
    #[test_case(0.099, 0.4, 0.12)]
    #[test_case(0.02, 0.4, 0.996)]
    fn test_designation_overflows(m: f64, p: f64, t: f64) {
        let params = ShapeParameters::new(m, p, t, 10);
        assert!(params.validate().is_ok());
        assert_eq!(None, params.designation());
    }

    #[test]
    fn test_designation_round_trips() {
        let params = ShapeParameters::from_designation("2412", 20).unwrap();
        assert_eq!(Some("NACA2412".to_string()), params.designation());
    }

    #[test]
    fn test_validate_kinds() {
        assert_eq!(Ok(ProfileKind::Symmetric), ShapeParameters::default().validate());
        assert_eq!(
            Ok(ProfileKind::Symmetric),
            ShapeParameters::new(0.0, 0.4, 0.12, 10).validate()
        );
        assert_eq!(
            Ok(ProfileKind::Cambered { m: 0.05, p: 0.4 }),
            ShapeParameters::new(0.05, 0.4, 0.12, 10).validate()
        );
    }

    #[test_case(0.0, 0.0, 0.12, 1, DomainError::TooFewSamples(1))]
    #[test_case(0.0, 0.0, 0.12, 0, DomainError::TooFewSamples(0))]
    #[test_case(0.0, 0.0, 0.0, 10, DomainError::ThicknessOutOfRange(0.0))]
    #[test_case(0.0, 0.0, -0.1, 10, DomainError::ThicknessOutOfRange(-0.1))]
    #[test_case(0.0, 0.0, 1.0, 10, DomainError::ThicknessOutOfRange(1.0))]
    #[test_case(-0.01, 0.4, 0.12, 10, DomainError::CamberOutOfRange(-0.01))]
    #[test_case(1.0, 0.4, 0.12, 10, DomainError::CamberOutOfRange(1.0))]
    #[test_case(0.02, -0.4, 0.12, 10, DomainError::CamberPositionOutOfRange(-0.4))]
    #[test_case(0.02, 1.0, 0.12, 10, DomainError::CamberPositionOutOfRange(1.0))]
    #[test_case(0.02, 0.0, 0.12, 10, DomainError::CamberPositionOutOfRange(0.0))]
    #[test_case(0.02, 1e-9, 0.12, 10, DomainError::CamberPositionOutOfRange(1e-9))]
    fn test_validate_rejects(m: f64, p: f64, t: f64, n: usize, e: DomainError) {
        assert_eq!(Err(e), ShapeParameters::new(m, p, t, n).validate());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let result = ShapeParameters::new(0.0, 0.0, f64::NAN, 10).validate();
        assert!(matches!(result, Err(DomainError::ThicknessOutOfRange(_))));

        let result = ShapeParameters::new(f64::NAN, 0.4, 0.12, 10).validate();
        assert!(matches!(result, Err(DomainError::CamberOutOfRange(_))));
    }

    #[test]
    fn test_parameters_deserialize() {
        let params: ShapeParameters =
            serde_json::from_str(r#"{"m": 0.02, "p": 0.4, "t": 0.12, "n": 80}"#).unwrap();
        assert_eq!(ShapeParameters::new(0.02, 0.4, 0.12, 80), params);
    }
}
