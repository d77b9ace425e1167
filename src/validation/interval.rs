//! Numeric intervals used as validation constraints.

use std::fmt;

/// One end of an [`Interval`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// The end value itself is excluded.
    Open(f64),
    /// The end value itself is included.
    Closed(f64),
    /// No limit on this side.
    Unbounded,
}

/// A real interval with open, closed or missing ends.
///
/// `NaN` is never contained in any interval.
///
/// # Example
///
/// ```
/// use revetment_rs::validation::Interval;
///
/// let slope = Interval::open(0.0, 1.0);
/// assert!(slope.contains(0.25));
/// assert!(!slope.contains(1.0));
///
/// let gamma_b = Interval::closed(0.6, 1.0);
/// assert!(gamma_b.contains(0.6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower end
    pub lower: Bound,
    /// Upper end
    pub upper: Bound,
}

impl Interval {
    /// `(lower, upper)`
    pub const fn open(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Open(upper),
        }
    }

    /// `[lower, upper]`
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Closed(lower),
            upper: Bound::Closed(upper),
        }
    }

    /// `(lower, upper]`
    pub const fn open_closed(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Closed(upper),
        }
    }

    /// `[lower, upper)`
    pub const fn closed_open(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Closed(lower),
            upper: Bound::Open(upper),
        }
    }

    /// `(lower, ∞)`
    pub const fn greater_than(lower: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Unbounded,
        }
    }

    /// `[lower, ∞)`
    pub const fn at_least(lower: f64) -> Self {
        Self {
            lower: Bound::Closed(lower),
            upper: Bound::Unbounded,
        }
    }

    /// `(-∞, upper)`
    pub const fn less_than(upper: f64) -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Open(upper),
        }
    }

    /// Check whether `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }

        let above_lower = match self.lower {
            Bound::Open(lower) => value > lower,
            Bound::Closed(lower) => value >= lower,
            Bound::Unbounded => true,
        };
        let below_upper = match self.upper {
            Bound::Open(upper) => value < upper,
            Bound::Closed(upper) => value <= upper,
            Bound::Unbounded => true,
        };

        above_lower && below_upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Bound::Unbounded, Bound::Unbounded) => write!(f, "any value"),
            (Bound::Open(lower), Bound::Unbounded) => write!(f, "larger than {lower}"),
            (Bound::Closed(lower), Bound::Unbounded) => {
                write!(f, "equal to or larger than {lower}")
            }
            (Bound::Unbounded, Bound::Open(upper)) => write!(f, "smaller than {upper}"),
            (Bound::Unbounded, Bound::Closed(upper)) => {
                write!(f, "equal to or smaller than {upper}")
            }
            (lower, upper) => {
                match lower {
                    Bound::Open(value) => write!(f, "in range ({value}, ")?,
                    Bound::Closed(value) => write!(f, "in range [{value}, ")?,
                    Bound::Unbounded => write!(f, "in range (-inf, ")?,
                }
                match upper {
                    Bound::Open(value) => write!(f, "{value})"),
                    Bound::Closed(value) => write!(f, "{value}]"),
                    Bound::Unbounded => write!(f, "inf)"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_interval_excludes_ends() {
        let interval = Interval::open(0.0, 1.0);
        assert!(!interval.contains(0.0));
        assert!(interval.contains(1e-12));
        assert!(interval.contains(0.5));
        assert!(!interval.contains(1.0));
    }

    #[test]
    fn test_closed_interval_includes_ends() {
        let interval = Interval::closed(0.5, 1.0);
        assert!(interval.contains(0.5));
        assert!(interval.contains(1.0));
        assert!(!interval.contains(0.5 - 1e-9));
        assert!(!interval.contains(1.0 + 1e-9));
    }

    #[test]
    fn test_half_bounded() {
        assert!(Interval::greater_than(0.0).contains(f64::MAX));
        assert!(!Interval::greater_than(0.0).contains(0.0));
        assert!(Interval::at_least(0.0).contains(0.0));
        assert!(Interval::less_than(0.0).contains(-1.0));
        assert!(!Interval::less_than(0.0).contains(0.0));
    }

    #[test]
    fn test_nan_never_contained() {
        assert!(!Interval::at_least(0.0).contains(f64::NAN));
        assert!(!Interval::closed(-1.0, 1.0).contains(f64::NAN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::open(0.0, 1.0).to_string(), "in range (0, 1)");
        assert_eq!(Interval::closed(0.6, 1.0).to_string(), "in range [0.6, 1]");
        assert_eq!(Interval::open_closed(-180.0, 180.0).to_string(), "in range (-180, 180]");
        assert_eq!(Interval::greater_than(0.0).to_string(), "larger than 0");
        assert_eq!(Interval::at_least(0.0).to_string(), "equal to or larger than 0");
    }
}
