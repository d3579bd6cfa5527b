// Copyright (c) 2022. Sebastien Soudan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http:www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use num_traits::Float;
use rand::prelude::*;

use crate::stats::{mean, standardized_mean_diff};
use crate::Error;

// FUTURE(ssoudan) studentized statistic with per-resample variance

/// Part of the statistic distribution to use for the p-value
/// https://en.wikipedia.org/wiki/P-value#Probability_of_obtaining_a_real-valued_test_statistic_at_least_as_extreme_as_the_one_actually_obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PValueType {
    /// Two-sided test - strict on both tails
    /// Pr(|T| > |t| | H0)
    TwoSided,
    /// One-sided test (right tail)
    /// Pr(T >= t | H0)
    OneSidedRightTail,
    /// One-sided test (left tail)
    /// Pr(T <= t | H0)
    OneSidedLeftTail,
}

impl std::str::FromStr for PValueType {
    type Err = Error;

    /// Parse the textual tail tokens: `"both"`, `"right"` and `"left"`.
    /// Anything else is rejected - there is no fallback tail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(PValueType::TwoSided),
            "right" => Ok(PValueType::OneSidedRightTail),
            "left" => Ok(PValueType::OneSidedLeftTail),
            _ => Err(Error::UnknownPValueType(s.to_string())),
        }
    }
}

/// Bootstrap comparator for the means of two independent sample groups.
///
/// # Description
///
/// The null hypothesis is that the two groups are drawn from populations with
/// the same mean. The test statistic is the standardized difference of the
/// group means, `(mean(g1) - mean(g2)) / pooled_spread(g1, g2)` - see the
/// `stats` module for the exact denominator.
///
/// The statistic distribution under H0 is obtained by pooling the two groups
/// into a master sample, centering it on its grand mean (which makes the null
/// hypothesis true by construction), and resampling pairs of groups from it
/// with replacement `rep` times. Each resampled pair keeps the original group
/// sizes so its statistic is comparable to the observed one.
///
/// The p-value is the fraction of resampled statistics at least as extreme as
/// the observed one, in the direction selected by [`PValueType`].
///
/// `rep` and the tail mode are fixed at construction. The random source is
/// injected per call, so results are reproducible with a seeded generator and
/// two comparators never race on shared state.
#[derive(Debug, Clone)]
pub struct MeanComparator {
    /// number of resampled pairs used to build the null distribution
    rep: usize,
    /// which tail(s) of the null distribution count as extreme
    pvalue_type: PValueType,
}

impl Default for MeanComparator {
    /// 1000 repetitions, two-sided.
    fn default() -> Self {
        Self {
            rep: 1000,
            pvalue_type: PValueType::TwoSided,
        }
    }
}

impl MeanComparator {
    /// Build a comparator with the given repetition count and tail mode.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroRepetitions`] if `rep` is 0.
    pub fn new(rep: usize, pvalue_type: PValueType) -> Result<Self, Error> {
        if rep == 0 {
            return Err(Error::ZeroRepetitions);
        }

        Ok(Self { rep, pvalue_type })
    }

    /// Number of resampling repetitions.
    pub fn rep(&self) -> usize {
        self.rep
    }

    /// Tail mode used for the p-value.
    pub fn pvalue_type(&self) -> PValueType {
        self.pvalue_type
    }

    /// Compare the means of `g1` and `g2` and return the p-value for the
    /// difference under the null hypothesis that both groups come from the
    /// same population.
    ///
    /// Note `g1` and `g2` need not be of the same size. Neither is mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bootstrap_mc::prelude::*;
    /// use rand::prelude::Distribution;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use rand_distr::StandardNormal;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    ///
    /// let a = StandardNormal
    ///     .sample_iter(&mut rng)
    ///     .take(100)
    ///     .collect::<Vec<f64>>();
    /// let b = StandardNormal
    ///     .sample_iter(&mut rng)
    ///     .take(40)
    ///     .map(|x: f64| x + 2.0)
    ///     .collect::<Vec<f64>>();
    ///
    /// let comparator = comparator::MeanComparator::new(
    ///     10_000,
    ///     comparator::PValueType::TwoSided,
    /// )
    /// .unwrap();
    ///
    /// let p_value = comparator.compare_means(&mut rng, &a, &b).unwrap();
    /// assert!(p_value < 0.05);
    /// // the means differ by two standard deviations - reject H0
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NotEnoughSamples`] if either group is empty,
    /// [`Error::DegenerateSpread`] if a pooled spread evaluates to zero -
    /// from the observed pair or from a resampled one.
    pub fn compare_means<R: Rng + ?Sized, F: Float + std::iter::Sum>(
        &self,
        mut rng: &mut R,
        g1: &[F],
        g2: &[F],
    ) -> Result<F, Error> {
        let n1 = g1.len();
        if n1 == 0 {
            return Err(Error::NotEnoughSamples);
        }
        let n2 = g2.len();
        if n2 == 0 {
            return Err(Error::NotEnoughSamples);
        }

        // the test statistic for the observed data - computed from the
        // original, uncentered groups
        let t_stat = standardized_mean_diff(g1, g2)?;

        // master sample: both groups pooled, then centered on the grand mean
        // so that H0 (equal population means) holds by construction
        let mut master = [g1, g2].concat();
        let grand_mean = mean(&master);
        for x in master.iter_mut() {
            *x = *x - grand_mean;
        }

        // the test statistic distribution under the null hypothesis
        let mut t_stat_dist = vec![F::zero(); self.rep];

        // resampled pairs keep the original group sizes
        let mut sample_1 = vec![F::zero(); n1];
        let mut sample_2 = vec![F::zero(); n2];

        for t_stat_dist_ in t_stat_dist.iter_mut() {
            for s in sample_1.iter_mut() {
                *s = *master.choose(&mut rng).unwrap();
            }

            for s in sample_2.iter_mut() {
                *s = *master.choose(&mut rng).unwrap();
            }

            *t_stat_dist_ = standardized_mean_diff(&sample_1, &sample_2)?;
        }

        // the p-value
        let count = match self.pvalue_type {
            PValueType::TwoSided => t_stat_dist
                .iter()
                .filter(|t| t.abs() > t_stat.abs())
                .count(),
            PValueType::OneSidedRightTail => {
                t_stat_dist.iter().filter(|&&t| t >= t_stat).count()
            }
            PValueType::OneSidedLeftTail => {
                t_stat_dist.iter().filter(|&&t| t <= t_stat).count()
            }
        };

        Ok(F::from(count).unwrap() / F::from(self.rep).unwrap())
    }
}
