// Arithmetic on complex values and Horner evaluation of polynomials
//
// Values are plain num complex numbers, nothing here rounds. Snapping tiny
// components to zero is a separate explicit step the callers choose to take.

use num::complex::Complex;
use num::Zero;

use crate::error::ComplexError;

// Below this a component counts as zero
pub const ZERO_EPSILON : f64 = 1e-10;

pub fn add(a : Complex<f64>, b : Complex<f64>) -> Complex<f64> {
    Complex::new(a.re + b.re, a.im + b.im)
}

pub fn subtract(a : Complex<f64>, b : Complex<f64>) -> Complex<f64> {
    Complex::new(a.re - b.re, a.im - b.im)
}

pub fn multiply(a : Complex<f64>, b : Complex<f64>) -> Complex<f64> {
    Complex::new(
        a.re * b.re - a.im * b.im,
        a.re * b.im + a.im * b.re
    )
}

// Checked division, the solver loop uses the unchecked operator instead and
// lets NaN / infinity through
pub fn divide(a : Complex<f64>, b : Complex<f64>) -> Result<Complex<f64>, ComplexError> {
    let denom = b.norm_sqr();
    if denom == 0.0 {
        return Err(ComplexError::DivisionByZero);
    }
    Ok(Complex::new(
        (a.re * b.re + a.im * b.im) / denom,
        (a.im * b.re - a.re * b.im) / denom
    ))
}

pub fn magnitude(a : Complex<f64>) -> f64 {
    a.re.hypot(a.im)
}

// Phase in (-pi, pi]
pub fn argument(a : Complex<f64>) -> f64 {
    a.im.atan2(a.re)
}

// Coefficients are ascending, index 0 is the constant term
pub fn evaluate_polynomial(coefficients : &[Complex<f64>], z : Complex<f64>) -> Complex<f64> {
    coefficients.iter().rev().fold(
        Complex::zero(),
        |acc, coeff| multiply(acc, z) + coeff
    )
}

pub fn is_zero(a : Complex<f64>) -> bool {
    a.re.abs() < ZERO_EPSILON && a.im.abs() < ZERO_EPSILON
}

// Each component is snapped independently
pub fn snap_to_zero(a : Complex<f64>) -> Complex<f64> {
    let snap = |v : f64| if v.abs() < ZERO_EPSILON { 0.0 } else { v };
    Complex::new(snap(a.re), snap(a.im))
}
