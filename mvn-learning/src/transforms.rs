//! # Value Encoders
//!
//! Turn raw labels into points of the unit circle:
//!
//! - **discrete**: value `n` of k-valued logic → `e^{i·2πn/k}`
//! - **continuous**: phase `x ∈ [0, 2π)` → `e^{ix}`

use crate::error::{LearningError, LearningResult};
use crate::sample::Sample;
use mvn_core::{root_of_unity, CVector, Cmplx, TWO_PI};

/// Encodes value `n` of k-valued logic
pub fn discrete(n: usize, k: usize) -> LearningResult<Cmplx> {
    if k == 0 || n >= k {
        return Err(LearningError::Encoding(format!(
            "value {n} is outside {k}-valued logic"
        )));
    }
    Ok(root_of_unity(n, k)?)
}

pub fn discrete_vector(values: &[usize], k: usize) -> LearningResult<CVector> {
    values.iter().map(|&n| discrete(n, k)).collect()
}

/// Sample for a single discrete neuron
pub fn discrete_sample(inputs: &[usize], desired: usize, k: usize) -> LearningResult<Sample<Cmplx>> {
    Ok(Sample::new(discrete_vector(inputs, k)?, discrete(desired, k)?))
}

/// Sample for a network with discrete outputs
pub fn discrete_vector_sample(
    inputs: &[usize],
    desired: &[usize],
    k: usize,
) -> LearningResult<Sample<CVector>> {
    Ok(Sample::new(discrete_vector(inputs, k)?, discrete_vector(desired, k)?))
}

/// Encodes a phase in `[0, 2π)`
pub fn continuous(x: f64) -> LearningResult<Cmplx> {
    if !(0.0..TWO_PI).contains(&x) {
        return Err(LearningError::Encoding(format!("phase {x} is outside [0, 2π)")));
    }
    Ok(Cmplx::from_polar(1.0, x))
}

pub fn continuous_vector(xs: &[f64]) -> LearningResult<CVector> {
    xs.iter().map(|&x| continuous(x)).collect()
}

/// Sample for a single continuous neuron
pub fn continuous_scalar_sample(inputs: &[f64], desired: f64) -> LearningResult<Sample<Cmplx>> {
    Ok(Sample::new(continuous_vector(inputs)?, continuous(desired)?))
}

/// Sample for a network with continuous outputs
pub fn continuous_sample(inputs: &[f64], desired: &[f64]) -> LearningResult<Sample<CVector>> {
    Ok(Sample::new(continuous_vector(inputs)?, continuous_vector(desired)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvn_core::{phase, sector_number};

    #[test]
    fn test_discrete_lands_in_its_sector() {
        for k in 1..8 {
            for n in 0..k {
                assert_eq!(sector_number(k, discrete(n, k).unwrap()), n);
            }
        }
    }

    #[test]
    fn test_discrete_rejects_out_of_range() {
        assert!(matches!(discrete(3, 3), Err(LearningError::Encoding(_))));
        assert!(matches!(discrete(0, 0), Err(LearningError::Encoding(_))));
        assert!(discrete_vector(&[0, 1, 5], 3).is_err());
    }

    #[test]
    fn test_discrete_sample() {
        let sample = discrete_sample(&[0, 2], 1, 3).unwrap();
        assert_eq!(sample.input.len(), 2);
        assert_eq!(sector_number(3, sample.input[1]), 2);
        assert_eq!(sector_number(3, sample.desired), 1);
    }

    #[test]
    fn test_continuous_keeps_phase() {
        for x in [0.0, 0.76, 3.0, 6.2] {
            let z = continuous(x).unwrap();
            assert!((phase(z) - x).abs() < 1e-12);
            assert!((z.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_continuous_rejects_out_of_range() {
        assert!(continuous(-0.1).is_err());
        assert!(continuous(TWO_PI).is_err());
        assert!(continuous(f64::NAN).is_err());
        assert!(continuous_sample(&[1.0, 7.0], &[0.5]).is_err());
    }

    #[test]
    fn test_continuous_sample() {
        let sample = continuous_sample(&[4.23, 2.10], &[0.76]).unwrap();
        assert_eq!(sample.input.len(), 2);
        assert_eq!(sample.desired.len(), 1);
        assert!((phase(sample.desired[0]) - 0.76).abs() < 1e-12);
    }
}
