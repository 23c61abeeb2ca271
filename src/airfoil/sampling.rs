use crate::errors::DomainError;
use std::f64::consts::PI;

/// Generates `n` chord fractions from 0.0 to 1.0 with a cosine distribution, which clusters the
/// samples at the leading and trailing edges where the surface curvature is highest. The end
/// points are exactly 0.0 and 1.0.
pub fn cosine_spacing(n: usize) -> Result<Vec<f64>, DomainError> {
    if n < 2 {
        return Err(DomainError::TooFewSamples(n));
    }

    let last = n - 1;
    Ok((0..n)
        .map(|i| {
            if i == 0 {
                0.0
            } else if i == last {
                1.0
            } else {
                0.5 * (1.0 - (i as f64 / last as f64 * PI).cos())
            }
        })
        .collect())
}
