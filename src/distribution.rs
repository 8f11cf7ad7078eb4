use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::iter::Zip;
use std::slice;

pub type Iter<'a> = Zip<slice::Iter<'a, u32>, slice::Iter<'a, f64>>;

/// Discrete distribution over a number of successes.
///
/// Keys are kept in ascending order. Generators in [`crate::binomial`] always
/// produce every key in `0..=n`, but the type itself accepts any mapping and
/// does not require the values to sum to one: cumulative distributions are
/// stored in it as well.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityDistribution {
    successes: Vec<u32>,
    probabilities: Vec<f64>,
}

impl ProbabilityDistribution {
    #[must_use]
    pub fn new(map: BTreeMap<u32, f64>) -> Self {
        let (successes, probabilities) = map.into_iter().unzip();
        Self {
            successes,
            probabilities,
        }
    }

    /// Keys `0..probabilities.len()`.
    pub(crate) fn from_dense(probabilities: Vec<f64>) -> Self {
        let successes = (0..probabilities.len() as u32).collect();
        Self {
            successes,
            probabilities,
        }
    }

    #[must_use]
    pub fn successes(&self) -> &[u32] {
        &self.successes
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn iter(&self) -> Iter<'_> {
        self.successes.iter().zip(self.probabilities.iter())
    }

    #[must_use]
    pub fn get(&self, successes: u32) -> Option<f64> {
        self.successes
            .binary_search(&successes)
            .ok()
            .map(|i| self.probabilities[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.successes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successes.is_empty()
    }

    /// Sum of all stored probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

impl FromIterator<(u32, f64)> for ProbabilityDistribution {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (k, p) in iter {
            *map.entry(k).or_insert(0.0) += p;
        }
        Self::new(map)
    }
}

impl<'a> IntoIterator for &'a ProbabilityDistribution {
    type Item = (&'a u32, &'a f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ProbabilityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, p) in self {
            writeln!(f, "P({k}) = {:.2}%", p * 100.0)?;
        }
        Ok(())
    }
}
