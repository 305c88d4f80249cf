//! # k-Valued Logic on the Unit Circle
//!
//! Roots of unity, phase normalization and the two activation modes of a
//! multi-valued neuron.
//!
//! | Function | Description |
//! |----------|-------------|
//! | `root_of_unity` | `e^{i·2πn/k}`, the n-th vertex of k-valued logic |
//! | `phase` | `arg(z)` folded into `[0, 2π)` |
//! | `sector_number` | index of the sector containing `z` |
//! | `activation` | sector snapping (k > 0) or phase normalization (k = 0) |
//! | `phase_distance` | wrap-aware angular distance between two points |

use crate::error::{MvnError, Result};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::PI;

/// Complex value used for states, weights and errors
pub type Cmplx = Complex<f64>;

/// Fixed-length sequence of complex values
pub type CVector = Vec<Cmplx>;

/// 2π
pub const TWO_PI: f64 = 2.0 * PI;

/// Tolerance used to snap a sector coordinate onto a nearby integer boundary.
///
/// Roots of unity computed through `sin`/`cos` land a few ulps away from their
/// exact phase, so `phase/2π·k` may come out as `n - 1e-16` instead of `n`.
pub const SECTOR_EPSILON: f64 = 1e-10;

/// n-th power of the primitive k-th root of unity.
///
/// Requires `k > 0` and `n < k`.
#[inline]
pub fn root_of_unity(n: usize, k: usize) -> Result<Cmplx> {
    if k == 0 || n >= k {
        return Err(MvnError::InvalidArgument(format!(
            "root of unity needs 0 <= n < k, got n={n}, k={k}"
        )));
    }
    Ok(Complex::from_polar(1.0, TWO_PI * n as f64 / k as f64))
}

/// Argument of `z` in `[0, 2π)`
#[inline]
pub fn phase(z: Cmplx) -> f64 {
    let phi = z.arg();
    if phi < 0.0 {
        // -0.0 and tiny negatives can round up to exactly 2π
        let folded = phi + TWO_PI;
        if folded >= TWO_PI { 0.0 } else { folded }
    } else {
        phi
    }
}

/// Sector of `z` in k-valued logic, using [`SECTOR_EPSILON`]
#[inline]
pub fn sector_number(k: usize, z: Cmplx) -> usize {
    sector_number_with_epsilon(k, z, SECTOR_EPSILON)
}

/// Sector of `z` in k-valued logic.
///
/// The coordinate `phase(z)/2π·k` is rounded to the nearest integer when it
/// lies within `epsilon` of it (on either side), floored otherwise, and then
/// wrapped into `[0, k)`. Returns 0 for `k == 0`.
pub fn sector_number_with_epsilon(k: usize, z: Cmplx, epsilon: f64) -> usize {
    if k == 0 {
        return 0;
    }
    let coordinate = phase(z) / TWO_PI * k as f64;
    let nearest = coordinate.round();
    let sector = if (coordinate - nearest).abs() < epsilon {
        nearest
    } else {
        coordinate.floor()
    };
    (sector as usize) % k
}

/// Activation function of a multi-valued neuron.
///
/// `k == 0` projects `z` onto the unit circle and fails on `z == 0`.
/// `k > 0` snaps `z` to the root of unity of its sector.
pub fn activation(k: usize, z: Cmplx) -> Result<Cmplx> {
    if k == 0 {
        if z.is_zero() {
            return Err(MvnError::SingularActivation);
        }
        Ok(z / z.norm())
    } else {
        root_of_unity(sector_number(k, z), k)
    }
}

/// Angular distance between the phases of `a` and `b`, in `[0, π]`
#[inline]
pub fn phase_distance(a: Cmplx, b: Cmplx) -> f64 {
    let d = (phase(a) - phase(b)).abs();
    if d > PI { TWO_PI - d } else { d }
}
