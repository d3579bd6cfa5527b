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

//! Numeric building blocks for the mean-comparison statistic.
use num_traits::Float;

use crate::Error;

/// Arithmetic mean of `xs`.
///
/// Callers guarantee `xs` is non-empty.
pub fn mean<F: Float + std::iter::Sum>(xs: &[F]) -> F {
    xs.iter().copied().sum::<F>() / F::from(xs.len()).unwrap()
}

/// Population standard deviation of `xs` - the divide-by-n form, not the
/// Bessel-corrected divide-by-(n-1) form.
///
/// Callers guarantee `xs` is non-empty.
pub fn std_dev<F: Float + std::iter::Sum>(xs: &[F]) -> F {
    let m = mean(xs);
    let var = xs.iter().map(|&x| (x - m) * (x - m)).sum::<F>() / F::from(xs.len()).unwrap();
    var.sqrt()
}

/// Pooled spread of two groups: the average of their standard deviations
/// weighted by degrees of freedom,
/// `[(n1-1)*std(g1) + (n2-1)*std(g2)] / (n1+n2-2)`.
///
/// Despite the family resemblance, this is not the textbook pooled variance:
/// it averages standard deviations, not squared ones. The test statistic uses
/// it directly as its denominator.
///
/// # Errors
///
/// [`Error::NotEnoughSamples`] if either group is empty,
/// [`Error::DegenerateSpread`] if both groups are singletons (no degrees of
/// freedom to weight by).
pub fn pooled_spread<F: Float + std::iter::Sum>(g1: &[F], g2: &[F]) -> Result<F, Error> {
    if g1.is_empty() || g2.is_empty() {
        return Err(Error::NotEnoughSamples);
    }

    let dof = (g1.len() - 1) + (g2.len() - 1);
    if dof == 0 {
        return Err(Error::DegenerateSpread);
    }

    let numerator = F::from(g1.len() - 1).unwrap() * std_dev(g1)
        + F::from(g2.len() - 1).unwrap() * std_dev(g2);

    Ok(numerator / F::from(dof).unwrap())
}

/// Standardized difference of the group means:
/// `(mean(g1) - mean(g2)) / pooled_spread(g1, g2)`.
///
/// # Errors
///
/// [`Error::DegenerateSpread`] if the pooled spread is zero or undefined -
/// constant-valued groups produce no scale to standardize against.
pub fn standardized_mean_diff<F: Float + std::iter::Sum>(g1: &[F], g2: &[F]) -> Result<F, Error> {
    let spread = pooled_spread(g1, g2)?;
    if spread == F::zero() {
        return Err(Error::DegenerateSpread);
    }

    Ok((mean(g1) - mean(g2)) / spread)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_relative_eq!(mean(&[2.5f32]), 2.5f32);
    }

    #[test]
    fn test_std_dev_is_population_form() {
        // divide-by-n: var([1,2,3,4]) = 5/4, not 5/3
        assert_relative_eq!(
            std_dev(&[1.0, 2.0, 3.0, 4.0]),
            1.118_033_988_749_895,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_std_dev_constant_group_is_zero() {
        assert_relative_eq!(std_dev(&[7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn test_pooled_spread() {
        let g1 = [1.0, 2.0, 3.0];
        let g2 = [4.0, 5.0, 6.0, 7.0];

        // (2 * sqrt(2/3) + 3 * sqrt(5/4)) / 5
        assert_relative_eq!(
            pooled_spread(&g1, &g2).unwrap(),
            0.997_419_025_621_027_5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_pooled_spread_equal_stds_is_that_std() {
        // both groups have std sqrt(8/3); the weighted average collapses to it
        let g1 = [10.0, 12.0, 14.0];
        let g2 = [0.0, 2.0, 4.0];

        assert_relative_eq!(
            pooled_spread(&g1, &g2).unwrap(),
            1.632_993_161_855_452,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_pooled_spread_two_singletons() {
        let r: Result<f64, _> = pooled_spread(&[5.0], &[5.0]);
        assert!(matches!(r, Err(Error::DegenerateSpread)));
    }

    #[test]
    fn test_standardized_mean_diff() {
        let g1 = [1.0, 2.0, 3.0];
        let g2 = [4.0, 5.0, 6.0, 7.0];

        // (2 - 5.5) / 0.99741902562102751
        assert_relative_eq!(
            standardized_mean_diff(&g1, &g2).unwrap(),
            -3.509_056_785_658_143,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_standardized_mean_diff_negates_on_swap() {
        let g1 = [1.0, 2.0, 3.0];
        let g2 = [4.0, 5.0, 6.0, 7.0];

        assert_relative_eq!(
            standardized_mean_diff(&g1, &g2).unwrap(),
            -standardized_mean_diff(&g2, &g1).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_standardized_mean_diff_constant_groups() {
        let r: Result<f64, _> = standardized_mean_diff(&[2.0, 2.0, 2.0], &[2.0, 2.0, 2.0]);
        assert!(matches!(r, Err(Error::DegenerateSpread)));
    }
}
