use ncollide2d::na::Point2;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a slice of points as a sequence of `[x, y]` pairs, for use with
/// `#[serde(serialize_with = "...")]` on point vectors
pub fn point_pairs<S: Serializer>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(points.len()))?;
    for p in points.iter() {
        seq.serialize_element(&[p.x, p.y])?;
    }
    seq.end()
}
