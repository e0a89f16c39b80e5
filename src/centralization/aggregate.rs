//! Reduction of per-node centralities to one centralization score

use serde::{Serialize, Serializer};

use crate::centralization::CentralityMap;

/// Graph-level centralization
///
/// `Undefined` is returned when the theoretical maximum is zero, which is
/// distinct from a genuine score of `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Centralization {
    Defined(f64),
    Undefined,
}

impl Centralization {
    pub fn value(self) -> Option<f64> {
        match self {
            Centralization::Defined(value) => Some(value),
            Centralization::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Centralization::Undefined)
    }
}

impl Serialize for Centralization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Sum of each node's shortfall from the most central node, over the
/// theoretical maximum of that sum
pub fn centralization(centralities: &CentralityMap, theoretical_max: f64) -> Centralization {
    if theoretical_max == 0.0 {
        return Centralization::Undefined;
    }

    let centrality_max = centralities
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let spread: f64 = centralities.values().map(|&v| centrality_max - v).sum();

    Centralization::Defined(spread / theoretical_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(values: &[(&str, f64)]) -> CentralityMap {
        values.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn sums_shortfall_from_maximum() {
        let centralities = map(&[("A", 0.0), ("B", 1.0), ("C", 1.0)]);
        assert_eq!(
            centralization(&centralities, 4.0),
            Centralization::Defined(0.25)
        );
    }

    #[test]
    fn zero_maximum_is_undefined_not_zero() {
        let centralities = map(&[("A", 1.0), ("B", 1.0)]);
        let result = centralization(&centralities, 0.0);
        assert!(result.is_undefined());
        assert_eq!(result.value(), None);
    }

    #[test]
    fn equal_centralities_give_zero() {
        let centralities = map(&[("A", 2.0), ("B", 2.0), ("C", 2.0)]);
        assert_eq!(centralization(&centralities, 2.0).value(), Some(0.0));
    }

    #[test]
    fn serializes_undefined_as_null() {
        assert_eq!(serde_json::to_string(&Centralization::Undefined).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Centralization::Defined(0.5)).unwrap(), "0.5");
    }
}
