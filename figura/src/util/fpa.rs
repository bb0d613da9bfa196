use std::cmp::Ordering;
use std::fmt::Display;

use float_cmp::{ApproxEq, F64Margin};

/// Wrapper around [`float_cmp::ApproxEq`] for easy comparison of floats with a certain tolerance.
/// Two FPAs are considered equal if they are within [`FPA::MARGIN`] of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Tolerance for coordinates and areas that went through a few moves and scales
    pub const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };
}

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(other.0, FPA::MARGIN)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
