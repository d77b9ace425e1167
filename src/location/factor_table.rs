//! Tabulated factor distributions.

use crate::validation::{ValidationIssue, rules};

/// Ordered `(value, probability)` pairs with piecewise linear interpolation.
///
/// ```
/// use revetment_rs::location::FactorTable;
///
/// let table = FactorTable::new(vec![(0.0, 0.2), (1.0, 0.6)]);
/// assert!((table.interpolate(0.5) - 0.4).abs() < 1e-12);
/// assert_eq!(table.interpolate(2.0), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorTable {
    entries: Vec<(f64, f64)>,
}

impl FactorTable {
    pub fn new(entries: Vec<(f64, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(f64, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Probability at `value`; zero outside the tabulated range.
    ///
    /// Assumes strictly increasing values, which [`validate`](Self::validate) checks.
    pub fn interpolate(&self, value: f64) -> f64 {
        let (Some(&(first, first_p)), Some(&(last, _))) =
            (self.entries.first(), self.entries.last())
        else {
            return 0.0;
        };
        if value < first || value > last {
            return 0.0;
        }
        if value == first {
            return first_p;
        }

        self.entries
            .windows(2)
            .find(|pair| value <= pair[1].0)
            .map_or(0.0, |pair| {
                let (x0, y0) = pair[0];
                let (x1, y1) = pair[1];
                y0 + (value - x0) / (x1 - x0) * (y1 - y0)
            })
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|&(_, probability)| probability).sum()
    }

    pub fn validate(&self, name: &str) -> Vec<Option<ValidationIssue>> {
        rules::factor_table(name, &self.entries)
    }
}

impl From<&[(f64, f64)]> for FactorTable {
    fn from(entries: &[(f64, f64)]) -> Self {
        Self::new(entries.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_at_nodes_and_between() {
        let table = FactorTable::new(vec![(-1.0, 0.1), (0.0, 0.5), (1.0, 0.3)]);
        assert_relative_eq!(table.interpolate(-1.0), 0.1);
        assert_relative_eq!(table.interpolate(0.0), 0.5);
        assert_relative_eq!(table.interpolate(1.0), 0.3);
        assert_relative_eq!(table.interpolate(-0.5), 0.3);
        assert_relative_eq!(table.interpolate(0.25), 0.45);
    }

    #[test]
    fn test_interpolate_outside_is_zero() {
        let table = FactorTable::new(vec![(0.0, 0.5), (1.0, 0.5)]);
        assert_eq!(table.interpolate(-0.1), 0.0);
        assert_eq!(table.interpolate(1.1), 0.0);
        assert_eq!(FactorTable::default().interpolate(0.0), 0.0);
    }

    #[test]
    fn test_single_entry() {
        let table = FactorTable::new(vec![(2.0, 1.0)]);
        assert_eq!(table.interpolate(2.0), 1.0);
        assert_eq!(table.interpolate(2.5), 0.0);
    }

    #[test]
    fn test_non_monotonic_table_is_an_error() {
        let table = FactorTable::new(vec![(0.0, 0.5), (0.0, 0.5)]);
        let issues: Vec<_> = table.validate("WidthFactors").into_iter().flatten().collect();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
