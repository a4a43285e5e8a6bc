// Find every root of a polynomial
//
// Real polynomials up to cubic go through the closed form formulas, anything
// else (or anything the formulas give up on) goes through Durand-Kerner.

use log::{debug, warn};
use num::complex::Complex;

use crate::complex::snap_to_zero;
use crate::error::RootError;
use crate::polynomial::Polynomial;

mod closed_form;
mod durand_kerner;

use closed_form::ClosedForm;

const CLOSED_FORM_MAX_DEGREE : usize = 3;

// Roots in no particular order, repeated roots may come back as close but
// distinct values
#[derive(Clone, Debug)]
pub struct RootSet {
    pub roots : Vec<Complex<f64>>,
    pub converged : bool
}

impl RootSet {
    fn snapped(roots : Vec<Complex<f64>>, converged : bool) -> RootSet {
        RootSet {
            roots : roots.into_iter().map(snap_to_zero).collect(),
            converged
        }
    }
}

pub fn find_roots(polynomial : &Polynomial) -> Result<RootSet, RootError> {
    let polynomial = polynomial.trimmed();
    let degree = polynomial.degree();
    if degree == 0 {
        return Err(RootError::InvalidDegree(degree));
    }
    if degree <= CLOSED_FORM_MAX_DEGREE && polynomial.is_real() {
        let real_coefficients : Vec<f64> = polynomial.coefficients().iter().map(|c| c.re).collect();
        match closed_form::solve(&real_coefficients) {
            ClosedForm::Solved(roots) => {
                debug!("Closed form roots for degree {}", degree);
                return Ok(RootSet::snapped(roots, true));
            },
            ClosedForm::Fallback => {
                debug!("Closed form declined degree {}, iterating", degree);
            }
        }
    }
    Ok(iterate(&polynomial))
}

// Durand-Kerner regardless of degree or coefficient type
pub fn iterate(polynomial : &Polynomial) -> RootSet {
    let result = durand_kerner::solve(&polynomial.monic());
    if result.converged {
        debug!("Durand-Kerner converged after {} iterations", result.iterations);
    } else {
        warn!("Durand-Kerner did not converge in {} iterations", result.iterations);
    }
    RootSet::snapped(result.roots, result.converged)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use num::Zero;

    use crate::polynomial::roots_to_coefficients;

    use super::*;

    fn real(v : f64) -> Complex<f64> {
        Complex::new(v, 0.0)
    }

    // Every expected root is matched by a distinct found root
    fn assert_same_roots(found : &[Complex<f64>], expected : &[Complex<f64>], tol : f64) {
        assert_eq!(found.len(), expected.len());
        let mut unused : Vec<Complex<f64>> = found.to_vec();
        for root in expected {
            let best = unused.iter().enumerate().min_by(
                |(_, a), (_, b)| (*a - root).norm().partial_cmp(&(*b - root).norm()).unwrap()
            ).map(|(i, _)| i).unwrap();
            assert!((unused[best] - root).norm() < tol, "{} not found in {:?}", root, found);
            unused.remove(best);
        }
    }

    #[test]
    fn test_cube_roots_of_unity() {
        let poly = Polynomial::new(vec![real(-1.0), real(0.0), real(0.0), real(1.0)]);
        let result = find_roots(&poly).unwrap();
        assert!(result.converged);
        let h = 3.0_f64.sqrt() / 2.0;
        assert_same_roots(
            &result.roots,
            &[real(1.0), Complex::new(-0.5, h), Complex::new(-0.5, -h)],
            1e-9
        );
    }

    #[test]
    fn test_z_squared_plus_one() {
        let poly = Polynomial::new(vec![real(1.0), real(0.0), real(1.0)]);
        let result = find_roots(&poly).unwrap();
        assert!(result.converged);
        assert_same_roots(&result.roots, &[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)], 1e-12);
        // Real parts snapped to exactly zero
        assert!(result.roots.iter().all(|r| r.re == 0.0));
    }

    #[test]
    fn test_degree_zero_refused() {
        let poly = Polynomial::new(vec![real(5.0)]);
        assert_eq!(find_roots(&poly).unwrap_err(), RootError::InvalidDegree(0));
        // The edit floor keeps a zero linear slot but it still has no roots
        let edited = Polynomial::from_edit(vec![real(5.0)]);
        assert!(find_roots(&edited).is_err());
    }

    #[test]
    fn test_closed_form_agrees_with_iteration() {
        let cases : Vec<Vec<f64>> = vec![
            vec![3.0, -2.0],
            vec![1.0, 0.0, 1.0],
            vec![-6.0, 1.0, 1.0],
            vec![2.0, 3.0, -1.0, 0.5],
            vec![6.0, -7.0, 0.0, 1.0],
            vec![-1.0, 0.0, 0.0, 1.0],
        ];
        for case in cases {
            let poly = Polynomial::new(case.iter().map(|c| real(*c)).collect());
            let closed = find_roots(&poly).unwrap();
            let iterated = iterate(&poly);
            assert!(iterated.converged);
            assert_same_roots(&iterated.roots, &closed.roots, 1e-6);
        }
    }

    #[test]
    fn test_roots_are_valid() {
        let poly = Polynomial::new(vec![
            Complex::new(1.0, -2.0), real(0.5), Complex::new(0.0, 3.0), real(-1.0), real(2.0)
        ]);
        let result = find_roots(&poly).unwrap();
        assert!(result.converged);
        assert_eq!(result.roots.len(), 4);
        for root in result.roots.iter() {
            assert!(poly.evaluate(*root).norm() < 1e-6);
        }
    }

    #[test]
    fn test_round_trip_random_roots() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for degree in 1..=4 {
            for _ in 0..25 {
                let roots : Vec<Complex<f64>> = (0..degree).map(
                    |_| Complex::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0))
                ).collect();
                let leading = Complex::new(rng.gen_range(0.5..3.0), rng.gen_range(-1.0..1.0));
                let poly = Polynomial::new(roots_to_coefficients(&roots, leading));
                let result = find_roots(&poly).unwrap();
                assert_same_roots(&result.roots, &roots, 1e-6);
            }
        }
    }

    #[test]
    fn test_round_trip_real_roots_closed_form() {
        let roots = [real(1.0), real(-2.0), real(0.25)];
        let poly = Polynomial::new(roots_to_coefficients(&roots, real(-3.0)));
        assert!(poly.is_real());
        let result = find_roots(&poly).unwrap();
        assert_same_roots(&result.roots, &roots, 1e-9);
    }

    #[test]
    fn test_repeated_quartic_root_not_converged() {
        // (z - 1)^4 only converges linearly, the correction stalls above tolerance
        let poly = Polynomial::new(roots_to_coefficients(&[real(1.0); 4], real(1.0)));
        let result = find_roots(&poly).unwrap();
        assert!(!result.converged);
        assert_eq!(result.roots.len(), 4);
        for root in result.roots.iter() {
            assert!(root.re.is_finite() && root.im.is_finite());
            assert!((root - real(1.0)).norm() < 1e-3);
        }
    }

    #[test]
    fn test_non_finite_roots_not_converged() {
        let poly = Polynomial::new(vec![real(1e308), real(0.0), real(0.0), real(0.0), real(1.0)]);
        let result = find_roots(&poly).unwrap();
        assert!(!result.converged);
        assert_eq!(result.roots.len(), 4);
    }

    #[test]
    fn test_root_at_origin_snapped() {
        // z^2 - z has a root at exactly zero
        let poly = Polynomial::new(vec![Complex::zero(), Complex::new(-1.0, 1e-3), real(1.0)]);
        let result = find_roots(&poly).unwrap();
        assert!(result.roots.iter().any(|r| *r == Complex::zero()));
    }
}
