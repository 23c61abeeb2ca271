use super::camber::CamberLine;
use super::common::ProfileKind;
use super::thickness::ThicknessDistribution;
use super::{Airfoil, Station};
use crate::errors::DomainError;
use itertools::izip;
use ncollide2d::na::Point2;

/// Combines the thickness distribution with the camber line selected by `kind` at each of the
/// chord fractions in `x`, producing the upper and lower surfaces of the section.
pub fn assemble(
    kind: ProfileKind,
    x: &[f64],
    thickness: &ThicknessDistribution,
) -> Result<Airfoil, DomainError> {
    let stations = match kind {
        ProfileKind::Symmetric => symmetric_stations(x, thickness),
        ProfileKind::Cambered { m, p } => {
            cambered_stations(x, thickness, &CamberLine::new(m, p)?)
        }
    };

    Ok(Airfoil::from_stations(&stations))
}

/// With no camber the surfaces are the half-thickness mirrored about the chord line.
pub fn symmetric_stations(x: &[f64], thickness: &ThicknessDistribution) -> Vec<Station> {
    x.iter()
        .zip(thickness.sample(x))
        .map(|(&xi, yt)| {
            Station::new(
                Point2::new(xi, 0.0),
                Point2::new(xi, yt),
                Point2::new(xi, -yt),
            )
        })
        .collect()
}

/// Offsets the camber line by the half-thickness along its local normal. Offsetting vertically
/// instead would thin the section wherever the camber line is sloped.
pub fn cambered_stations(
    x: &[f64],
    thickness: &ThicknessDistribution,
    camber: &CamberLine,
) -> Vec<Station> {
    izip!(x.iter(), thickness.sample(x), camber.sample(x))
        .map(|(&xi, yt, c)| {
            let (sin, cos) = c.angle().sin_cos();
            Station::new(
                Point2::new(xi, c.yc),
                Point2::new(xi - yt * sin, c.yc + yt * cos),
                Point2::new(xi + yt * sin, c.yc - yt * cos),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.1, 0.096511, 0.055276, 0.103489, -0.037776)]
    #[test_case(0.3, 0.298508, 0.078438, 0.301492, -0.040938)]
    #[test_case(0.5, 0.500583, 0.071932, 0.499417, -0.033043)]
    fn test_naca_2412_surfaces(x: f64, xu: f64, yu: f64, xl: f64, yl: f64) {
        let thk = ThicknessDistribution::new(0.12);
        let camber = CamberLine::new(0.02, 0.4).unwrap();
        let s = cambered_stations(&[x], &thk, &camber)[0];

        assert_relative_eq!(xu, s.upper.x, epsilon = 1e-6);
        assert_relative_eq!(yu, s.upper.y, epsilon = 1e-6);
        assert_relative_eq!(xl, s.lower.x, epsilon = 1e-6);
        assert_relative_eq!(yl, s.lower.y, epsilon = 1e-6);
    }

    #[test]
    fn test_offset_is_normal_to_camber() {
        let thk = ThicknessDistribution::new(0.15);
        let camber = CamberLine::new(0.06, 0.3).unwrap();
        let x = [0.05, 0.2, 0.3, 0.6, 0.95];
        for s in cambered_stations(&x, &thk, &camber).iter() {
            let slope = camber.at(s.camber.x).dydx;
            let tangent = ncollide2d::na::Vector2::new(1.0, slope);
            let offset = s.upper - s.camber;
            let yt = thk.half_thickness(s.camber.x);

            assert_relative_eq!(0.0, tangent.dot(&offset), epsilon = 1e-12);
            assert_relative_eq!(yt, offset.norm(), epsilon = 1e-12);
            assert_relative_eq!(s.camber.x, (s.upper.x + s.lower.x) / 2.0, epsilon = 1e-12);
            assert_relative_eq!(s.camber.y, (s.upper.y + s.lower.y) / 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symmetric_mirrors() {
        let thk = ThicknessDistribution::new(0.12);
        let x = [0.0, 0.25, 0.5, 1.0];
        for s in symmetric_stations(&x, &thk).iter() {
            assert_eq!(s.upper.x, s.lower.x);
            assert_eq!(s.upper.y, -s.lower.y);
            assert_eq!(0.0, s.camber.y);
        }
    }

    #[test]
    fn test_assemble_routes_on_kind() {
        let thk = ThicknessDistribution::new(0.12);
        let x = [0.0, 0.5, 1.0];

        let symmetric = assemble(ProfileKind::Symmetric, &x, &thk).unwrap();
        assert!(symmetric.camber.iter().all(|p| p.y == 0.0));

        let cambered = assemble(ProfileKind::Cambered { m: 0.02, p: 0.4 }, &x, &thk).unwrap();
        assert!(cambered.camber[1].y > 0.0);
        assert_eq!(3, cambered.upper.len());
        assert_eq!(3, cambered.lower.len());
    }

    #[test]
    fn test_assemble_rejects_unroutable_camber() {
        let thk = ThicknessDistribution::new(0.12);
        let result = assemble(ProfileKind::Cambered { m: 0.02, p: 0.0 }, &[0.0, 1.0], &thk);
        assert_eq!(Err(DomainError::CamberPositionOutOfRange(0.0)), result);
    }
}
