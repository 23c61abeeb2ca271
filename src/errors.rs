use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when a set of shape parameters cannot describe a NACA 4-digit section. Validation
/// happens before any sampling, so no partial geometry is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The sample count must be at least 2 so that both the leading and trailing edge exist
    TooFewSamples(usize),

    /// The thickness fraction must lie in (0, 1)
    ThicknessOutOfRange(f64),

    /// The max camber fraction must lie in [0, 1)
    CamberOutOfRange(f64),

    /// The camber position must lie in [0, 1), and strictly above zero for a cambered section
    CamberPositionOutOfRange(f64),

    /// A designation string which isn't four decimal digits
    BadDesignation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::TooFewSamples(n) => {
                write!(f, "sample count must be at least 2, got {}", n)
            }
            DomainError::ThicknessOutOfRange(t) => {
                write!(f, "thickness fraction must be in (0, 1), got {}", t)
            }
            DomainError::CamberOutOfRange(m) => {
                write!(f, "max camber fraction must be in [0, 1), got {}", m)
            }
            DomainError::CamberPositionOutOfRange(p) => {
                write!(f, "camber position fraction is invalid for this section: {}", p)
            }
            DomainError::BadDesignation(s) => {
                write!(f, "'{}' is not a NACA 4-digit designation", s)
            }
        }
    }
}

impl Error for DomainError {}

/// Raised when an angle of attack sweep doesn't describe at least one angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepError {
    NonPositiveStep(f64),
    EmptyRange { start: f64, end: f64 },
    NonFiniteBound(f64),
    TooManyAngles(f64),
}

impl Display for SweepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for SweepError {}
