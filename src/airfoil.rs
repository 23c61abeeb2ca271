use crate::serialize::{point_pairs, Point2f64};
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub mod assemble;
pub mod camber;
pub mod common;
pub mod generate;
pub mod sampling;
pub mod thickness;

/// The three points produced at a single sampled chord fraction: the point on the mean camber
/// line and the upper and lower surface points offset from it along the local normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    #[serde(with = "Point2f64")]
    pub camber: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

impl Station {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> Station {
        Station {
            camber,
            upper,
            lower,
        }
    }
}

/// The camber line and both surfaces of a section, each ordered from the leading edge to the
/// trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "point_pairs")]
    pub camber: Vec<Point2<f64>>,

    #[serde(serialize_with = "point_pairs")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "point_pairs")]
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[Station]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Builds the closed outer contour, starting at the trailing edge, running forward along the
    /// upper surface to the leading edge and then back along the lower surface.
    pub fn to_contour(&self) -> Contour {
        let mut points: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        points.extend(self.lower.iter().cloned());
        Contour::new(points)
    }
}

/// The ordered boundary of a chord-normalized section. Holds 2N points for N samples: the first
/// half is the upper surface from trailing to leading edge, the second half the lower surface
/// from leading to trailing edge. The leading edge point appears twice, once in each half, and
/// the trailing edge is left open by the thickness distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point2<f64>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<f64>>) -> Contour {
        Contour { points }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Trailing edge first
    pub fn upper(&self) -> &[Point2<f64>] {
        &self.points[..self.points.len() / 2]
    }

    pub fn lower(&self) -> &[Point2<f64>] {
        &self.points[self.points.len() / 2..]
    }

    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Builds a polyline through the contour with adjacent points closer than `tol` merged,
    /// which removes the doubled leading edge point. The contour itself is left untouched.
    pub fn to_polyline(&self, tol: f64) -> Polyline<f64> {
        let mut vertices = self.points.to_vec();
        vertices.dedup_by(|a, b| (*a - *b).norm() <= tol);
        Polyline::new(vertices, Option::None)
    }
}

impl Serialize for Contour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Contour", 2)?;
        state.serialize_field("x", &self.x())?;
        state.serialize_field("y", &self.y())?;
        state.end()
    }
}
