// Durand-Kerner simultaneous iteration
//
// All roots are refined together. Guesses are updated in place during a
// sweep so later corrections in the same sweep already see the new values.

use num::complex::Complex;
use num::One;

use crate::complex::{self, evaluate_polynomial};

// Off axis and off the unit circle so successive powers stay distinct
pub const SEED : Complex<f64> = Complex { re: 0.4, im: 0.9 };
pub const MAX_ITERATIONS : usize = 1000;
pub const TOLERANCE : f64 = 1e-12;

pub struct Iteration {
    pub roots : Vec<Complex<f64>>,
    pub converged : bool,
    pub iterations : usize
}

pub fn initial_guesses(degree : usize) -> Vec<Complex<f64>> {
    let mut guesses = Vec::with_capacity(degree);
    let mut guess = Complex::one();
    for _ in 0..degree {
        guesses.push(guess);
        guess = complex::multiply(guess, SEED);
    }
    guesses
}

// Coefficients must be monic and ascending
pub fn solve(monic : &[Complex<f64>]) -> Iteration {
    let degree = monic.len().saturating_sub(1);
    let mut roots = initial_guesses(degree);
    for iteration in 0..MAX_ITERATIONS {
        let mut max_correction : f64 = 0.0;
        // NaN never compares below the tolerance, keep it from being lost
        let mut finite = true;
        for k in 0..degree {
            let numerator = evaluate_polynomial(monic, roots[k]);
            let denominator = (0..degree).filter(|j| *j != k).fold(
                Complex::one(),
                |acc, j| complex::multiply(acc, roots[k] - roots[j])
            );
            let correction = numerator / denominator;
            roots[k] -= correction;
            let size = correction.norm();
            finite &= size.is_finite();
            max_correction = max_correction.max(size);
        }
        if finite && max_correction < TOLERANCE {
            return Iteration { roots, converged: true, iterations: iteration + 1 };
        }
    }
    Iteration { roots, converged: false, iterations: MAX_ITERATIONS }
}
