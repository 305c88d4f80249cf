//! Predicates used by the teacher: matching, sample picking and square error.
//!
//! Each capability is a small trait with a blanket implementation for
//! closures, so ad-hoc rules can be written inline:
//!
//! ```
//! use mvn_learning::{Match, Picker, Sample};
//! use mvn_core::Cmplx;
//!
//! let close = |o: &Cmplx, d: &Cmplx| (o - d).norm() < 0.1;
//! assert!(close.matches(&Cmplx::new(1.0, 0.0), &Cmplx::new(1.0, 0.05)));
//!
//! let far = |s: &Sample<Cmplx>, o: &Cmplx| (s.desired - o).norm() > 0.5;
//! let sample = Sample::new(vec![], Cmplx::new(1.0, 0.0));
//! assert!(!far.pick(&sample, &Cmplx::new(1.0, 0.0)));
//! ```

use crate::sample::Sample;
use mvn_core::{phase_distance, sector_number, CVector, Cmplx};

/// Does an output count as a hit for its desired value?
pub trait Match<D> {
    fn matches(&self, output: &D, desired: &D) -> bool;
}

impl<D, F> Match<D> for F
where
    F: Fn(&D, &D) -> bool,
{
    fn matches(&self, output: &D, desired: &D) -> bool {
        self(output, desired)
    }
}

/// Should the learner be corrected on this sample during the current epoch?
pub trait Picker<D> {
    fn pick(&self, sample: &Sample<D>, output: &D) -> bool;
}

impl<D, F> Picker<D> for F
where
    F: Fn(&Sample<D>, &D) -> bool,
{
    fn pick(&self, sample: &Sample<D>, output: &D) -> bool {
        self(sample, output)
    }
}

/// Square error of one sample, averaged by [`Teacher::mse`](crate::Teacher::mse)
pub trait SquareError<D> {
    fn square_error(&self, sample: &Sample<D>, output: &D) -> f64;
}

impl<D, F> SquareError<D> for F
where
    F: Fn(&Sample<D>, &D) -> f64,
{
    fn square_error(&self, sample: &Sample<D>, output: &D) -> f64 {
        self(sample, output)
    }
}

/// Hit when output and desired value fall in the same sector of k-valued
/// logic (every component, for vectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorMatch {
    pub k: usize,
}

impl SectorMatch {
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl Match<Cmplx> for SectorMatch {
    fn matches(&self, output: &Cmplx, desired: &Cmplx) -> bool {
        sector_number(self.k, *output) == sector_number(self.k, *desired)
    }
}

impl Match<CVector> for SectorMatch {
    fn matches(&self, output: &CVector, desired: &CVector) -> bool {
        output.len() == desired.len()
            && output.iter().zip(desired).all(|(o, d)| Match::<Cmplx>::matches(self, o, d))
    }
}

/// Picks every sample
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPick;

impl<D> Picker<D> for AlwaysPick {
    fn pick(&self, _sample: &Sample<D>, _output: &D) -> bool {
        true
    }
}

/// Picks samples whose output phase is further than `tolerance` radians
/// from the desired phase.
///
/// Distances wrap around the circle, so phases 6.26 and 0.01 are 0.033 rad
/// apart rather than the 6.25 a plain difference of phases would give.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTolerancePicker {
    pub tolerance: f64,
}

impl PhaseTolerancePicker {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Picker<Cmplx> for PhaseTolerancePicker {
    fn pick(&self, sample: &Sample<Cmplx>, output: &Cmplx) -> bool {
        phase_distance(sample.desired, *output) > self.tolerance
    }
}

impl Picker<CVector> for PhaseTolerancePicker {
    fn pick(&self, sample: &Sample<CVector>, output: &CVector) -> bool {
        sample
            .desired
            .iter()
            .zip(output)
            .any(|(d, o)| phase_distance(*d, *o) > self.tolerance)
    }
}

/// Squared angular distance between output and desired phases, summed over
/// components.
///
/// Uses the wrap-around distance of [`phase_distance`], never the plain
/// `|arg(d) - arg(o)|`, so an output just past 0 is close to a desired
/// phase just below 2π.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseSquareError;

impl SquareError<Cmplx> for PhaseSquareError {
    fn square_error(&self, sample: &Sample<Cmplx>, output: &Cmplx) -> f64 {
        phase_distance(sample.desired, *output).powi(2)
    }
}

impl SquareError<CVector> for PhaseSquareError {
    fn square_error(&self, sample: &Sample<CVector>, output: &CVector) -> f64 {
        sample
            .desired
            .iter()
            .zip(output)
            .map(|(d, o)| phase_distance(*d, *o).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvn_core::{root_of_unity, TWO_PI};

    #[test]
    fn test_sector_match() {
        let m = SectorMatch::new(3);
        let one = root_of_unity(1, 3).unwrap();
        assert!(m.matches(&one, &Cmplx::from_polar(0.4, 2.5)));
        assert!(!m.matches(&one, &root_of_unity(2, 3).unwrap()));

        let v = vec![one, root_of_unity(0, 3).unwrap()];
        assert!(m.matches(&v, &v.clone()));
        assert!(!m.matches(&v, &vec![one]));
    }

    #[test]
    fn test_phase_tolerance_picker() {
        let picker = PhaseTolerancePicker::new(0.05);
        let sample = Sample::new(vec![], Cmplx::from_polar(1.0, 6.26));
        // 6.26 and 0.01 are 0.033 rad apart across the 0/2π seam
        assert!(!picker.pick(&sample, &Cmplx::from_polar(1.0, 0.01)));
        assert!(picker.pick(&sample, &Cmplx::from_polar(1.0, 0.2)));
    }

    #[test]
    fn test_phase_square_error_sums_components() {
        let sample = Sample::new(vec![], vec![Cmplx::from_polar(1.0, 1.0), Cmplx::from_polar(1.0, 2.0)]);
        let output = vec![Cmplx::from_polar(1.0, 1.5), Cmplx::from_polar(1.0, 1.0)];
        let err = PhaseSquareError.square_error(&sample, &output);
        assert!((err - (0.25 + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_phase_square_error_wraps_at_seam() {
        let sample = Sample::new(vec![], Cmplx::from_polar(1.0, 6.26));
        let err = PhaseSquareError.square_error(&sample, &Cmplx::from_polar(1.0, 0.01));
        let gap = TWO_PI - 6.26 + 0.01;
        assert!((err - gap * gap).abs() < 1e-12);
    }

    #[test]
    fn test_always_pick() {
        let sample = Sample::new(vec![], Cmplx::new(0.0, 0.0));
        assert!(AlwaysPick.pick(&sample, &Cmplx::new(1.0, 0.0)));
    }
}
