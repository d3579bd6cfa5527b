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

//! Bootstrap Mean Comparison
//!
//! When we want to know whether two groups of measurements have different
//! means, and we have no idea what the distribution of the test statistic is,
//! we can still perform a hypothesis test if we are willing to assume the
//! samples we have are representative of their populations.
//!
//! This is where the bootstrap comes in. Pool the two groups into a master
//! sample and center it on its grand mean - on the centered sample the null
//! hypothesis (equal population means) is true by construction. Then draw a
//! large number of group pairs from it with replacement, keeping the original
//! group sizes, and compute the standardized mean difference of each pair.
//! This gives the sampling distribution of the test statistic under H0.
//!
//! The p-value is the fraction of these resampled statistics that are more
//! 'extreme' than the statistic of the original groups - on one tail or on
//! both, depending on the configured [`comparator::PValueType`].
//!
//! # References
//! - [Bootstrap Hypothesis Testing](https://en.wikipedia.org/wiki/Bootstrapping_(statistics)#Bootstrap_hypothesis_testing)
//! - [P-value](https://en.wikipedia.org/wiki/P-value)
//! - [Pooled variance](https://en.wikipedia.org/wiki/Pooled_variance)
//!
//! # Example
//!
//! ```rust
//! use bootstrap_mc::prelude::comparator::{MeanComparator, PValueType};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let g1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let g2 = vec![6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let comparator = MeanComparator::new(2_000, PValueType::TwoSided).unwrap();
//! let p_value = comparator.compare_means(&mut rng, &g1, &g2).unwrap();
//!
//! assert!(p_value < 0.05);
//! // the group means differ by far more than the within-group spread -
//! // reject the null hypothesis that the means are equal
//! ```

/// bootstrap mean-comparison test
pub mod comparator {
    pub use crate::comparator::{MeanComparator, PValueType};
}

pub use crate::Error;
