/// Coefficients of the NACA 4-digit thickness polynomial, for the sqrt(x), x, x^2, x^3 and x^4
/// terms respectively.
const COEFFICIENTS: [f64; 5] = [0.2960, -0.1260, -0.3516, 0.2834, -0.1015];

/// The symmetric half-thickness envelope of a NACA 4-digit section. With these coefficients the
/// trailing edge is left slightly open, and that gap is kept as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessDistribution {
    t: f64,
}

impl ThicknessDistribution {
    pub fn new(t: f64) -> ThicknessDistribution {
        ThicknessDistribution { t }
    }

    /// The distance from the camber line to either surface at chord fraction `x`
    pub fn half_thickness(&self, x: f64) -> f64 {
        let [a0, a1, a2, a3, a4] = COEFFICIENTS;
        5.0 * self.t
            * (a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3) + a4 * x.powi(4))
    }

    pub fn sample(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|v| self.half_thickness(*v)).collect()
    }

    /// The full opening between the upper and lower surfaces at the trailing edge
    pub fn trailing_edge_gap(&self) -> f64 {
        2.0 * self.half_thickness(1.0)
    }
}
