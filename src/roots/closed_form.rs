// Closed form roots for real linear, quadratic and cubic polynomials
//
// Anything these formulas can't handle cleanly comes back as Fallback so the
// caller drops through to the iterative solver.

use std::f64::consts::PI;

use num::complex::Complex;

pub enum ClosedForm {
    Solved(Vec<Complex<f64>>),
    Fallback
}

fn real(v : f64) -> Complex<f64> {
    Complex::new(v, 0.0)
}

fn finite_or_fallback(roots : Vec<Complex<f64>>) -> ClosedForm {
    if roots.iter().all(|r| r.re.is_finite() && r.im.is_finite()) {
        ClosedForm::Solved(roots)
    } else {
        ClosedForm::Fallback
    }
}

// Coefficients ascending, real parts only
pub fn solve(coefficients : &[f64]) -> ClosedForm {
    match coefficients {
        [c0, c1] => linear(*c0, *c1),
        [c0, c1, c2] => quadratic(*c0, *c1, *c2),
        [c0, c1, c2, c3] => cubic(*c0, *c1, *c2, *c3),
        _ => ClosedForm::Fallback
    }
}

fn linear(c0 : f64, c1 : f64) -> ClosedForm {
    if c1 == 0.0 {
        return ClosedForm::Fallback;
    }
    finite_or_fallback(vec![real(-c0 / c1)])
}

// a z^2 + b z + c
fn quadratic(c : f64, b : f64, a : f64) -> ClosedForm {
    if a == 0.0 {
        return ClosedForm::Fallback;
    }
    let disc = b * b - 4.0 * a * c;
    let roots = if disc >= 0.0 {
        // Avoid cancellation by taking the larger magnitude root first
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        if q == 0.0 {
            vec![real(0.0), real(0.0)]
        } else {
            vec![real(q / a), real(c / q)]
        }
    } else {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a);
        vec![Complex::new(re, im), Complex::new(re, -im)]
    };
    finite_or_fallback(roots)
}

// Cardano for one real root, trigonometric form for three
fn cubic(d : f64, c : f64, b : f64, a : f64) -> ClosedForm {
    if a == 0.0 {
        return ClosedForm::Fallback;
    }
    let (b, c, d) = (b / a, c / a, d / a);
    // z = t - b/3 gives t^3 + p t + q
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let roots = if disc > 0.0 {
        let sq = disc.sqrt();
        // Pick the sign that avoids cancellation then get v from u v = -p/3
        let w = if q > 0.0 { -q / 2.0 - sq } else { -q / 2.0 + sq };
        let u = w.cbrt();
        let v = if u == 0.0 { 0.0 } else { -p / (3.0 * u) };
        let re = -(u + v) / 2.0 - shift;
        let im = (u - v) * 3.0_f64.sqrt() / 2.0;
        vec![real(u + v - shift), Complex::new(re, im), Complex::new(re, -im)]
    } else if p == 0.0 {
        // disc <= 0 with p = 0 forces q = 0, a triple root
        vec![real(-shift); 3]
    } else {
        let m = 2.0 * (-p / 3.0).sqrt();
        let cos_arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        let theta = cos_arg.acos() / 3.0;
        (0..3).map(
            |k| real(m * (theta - 2.0 * PI * k as f64 / 3.0).cos() - shift)
        ).collect()
    };
    finite_or_fallback(roots)
}
