// Complex polynomials stored as ascending coefficients
//
// Index 0 is the constant term. Trailing coefficients that are zero in both
// components are trimmed so the last stored coefficient is the leading term.

use std::fmt;
use std::io::{Error, ErrorKind};

use json::JsonValue;
use num::complex::Complex;
use num::{One, Zero};

use crate::complex::{self, is_zero};

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients : Vec<Complex<f64>>,
    variable : String
}

// Trim trailing zero coefficients but never below `floor` entries
fn trim(coefficients : &mut Vec<Complex<f64>>, floor : usize) {
    while coefficients.len() > floor.max(1) && coefficients.last().map_or(false, |c| is_zero(*c)) {
        coefficients.pop();
    }
    while coefficients.len() < floor.max(1) {
        coefficients.push(Complex::zero());
    }
}

impl Polynomial {
    pub fn new(coefficients : Vec<Complex<f64>>) -> Polynomial {
        let mut coefficients = coefficients;
        trim(&mut coefficients, 1);
        Polynomial { coefficients, variable: "z".to_string() }
    }

    // Coefficients coming from an interactive edit always keep a linear
    // term slot, even if it is currently zero
    pub fn from_edit(coefficients : Vec<Complex<f64>>) -> Polynomial {
        let mut coefficients = coefficients;
        trim(&mut coefficients, 2);
        Polynomial { coefficients, variable: "z".to_string() }
    }

    pub fn from_roots(roots : &[Complex<f64>], leading : Complex<f64>) -> Polynomial {
        Polynomial::new(roots_to_coefficients(roots, leading))
    }

    pub fn with_variable(self, variable : &str) -> Polynomial {
        Polynomial { variable: variable.to_string(), ..self }
    }

    pub fn from_json(input : &JsonValue) -> std::io::Result<Polynomial> {
        let variable = input["variable"].as_str().unwrap_or("z");
        let polynomial = if input["coefficients"].is_array() {
            Polynomial::new(complex_list_from_json(&input["coefficients"])?)
        } else if input["roots"].is_array() {
            let roots = complex_list_from_json(&input["roots"])?;
            let leading = if input["leading"].is_null() {
                Complex::one()
            } else {
                complex_from_json(&input["leading"]).ok_or_else(
                    || Error::new(ErrorKind::InvalidData, "Bad leading coefficient")
                )?
            };
            Polynomial::from_roots(&roots, leading)
        } else {
            return Err(Error::new(ErrorKind::InvalidData, "Missing coefficients or roots"))
        };
        Ok(polynomial.with_variable(variable))
    }

    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn leading(&self) -> Complex<f64> {
        self.coefficients[self.degree()]
    }

    // Copy with any zero leading terms the edit floor kept removed
    pub fn trimmed(&self) -> Polynomial {
        let mut coefficients = self.coefficients.clone();
        trim(&mut coefficients, 1);
        Polynomial { coefficients, variable: self.variable.clone() }
    }

    pub fn is_real(&self) -> bool {
        self.coefficients.iter().all(|c| c.im.abs() < complex::ZERO_EPSILON)
    }

    pub fn evaluate(&self, z : Complex<f64>) -> Complex<f64> {
        complex::evaluate_polynomial(&self.coefficients, z)
    }

    // Divide through by the leading coefficient
    pub fn monic(&self) -> Vec<Complex<f64>> {
        let leading = self.leading();
        self.coefficients.iter().map(|c| c / leading).collect()
    }
}

// Multiply an ascending polynomial by (z - root), the leading term carries
// through unchanged
pub fn multiply_linear(coefficients : &[Complex<f64>], root : Complex<f64>) -> Vec<Complex<f64>> {
    let n = coefficients.len();
    if n == 0 {
        return Vec::new();
    }
    let mut product = Vec::with_capacity(n + 1);
    product.push(-complex::multiply(root, coefficients[0]));
    for i in 1..n {
        product.push(coefficients[i - 1] - complex::multiply(root, coefficients[i]));
    }
    product.push(coefficients[n - 1]);
    product
}

// Expand leading * prod(z - r) applying the roots in the order given
pub fn roots_to_coefficients(roots : &[Complex<f64>], leading : Complex<f64>) -> Vec<Complex<f64>> {
    roots.iter().fold(
        vec![leading],
        |acc, root| multiply_linear(&acc, *root)
    )
}

pub fn complex_from_json(input : &JsonValue) -> Option<Complex<f64>> {
    if let Some(re) = input.as_f64() {
        return Some(Complex::new(re, 0.0));
    }
    if input.is_array() && input.len() == 2 {
        return Some(Complex::new(input[0].as_f64()?, input[1].as_f64()?));
    }
    if input.is_object() {
        return Some(Complex::new(input["re"].as_f64()?, input["im"].as_f64().unwrap_or(0.0)));
    }
    None
}

pub fn complex_list_from_json(input : &JsonValue) -> std::io::Result<Vec<Complex<f64>>> {
    input.members().map(
        |value| complex_from_json(value).ok_or_else(
            || Error::new(ErrorKind::InvalidData, "Expected a number or [re, im] pair")
        )
    ).collect()
}

pub fn complex_list_to_json(values : &[Complex<f64>]) -> JsonValue {
    JsonValue::Array(
        values.iter().map(|c| json::array![c.re, c.im]).collect()
    )
}

fn format_coefficient(c : &Complex<f64>) -> String {
    if c.im == 0.0 {
        format!("{}", c.re)
    } else if c.re == 0.0 {
        format!("{}i", c.im)
    } else {
        format!("{}", c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms : Vec<String> = self.coefficients.iter().enumerate().rev().filter(
            |(i, c)| !is_zero(**c) || (*i == 0 && self.degree() == 0)
        ).map(
            |(i, c)| {
                let text = format_coefficient(c);
                // Bracket anything with its own sign so the joins stay readable
                let coeff = if (c.im != 0.0 && c.re != 0.0) || text.starts_with('-') {
                    format!("({})", text)
                } else {
                    text
                };
                match i {
                    0 => coeff,
                    1 if *c == Complex::one() => self.variable.clone(),
                    1 => format!("{}{}", coeff, self.variable),
                    _ if *c == Complex::one() => format!("{}^{}", self.variable, i),
                    _ => format!("{}{}^{}", coeff, self.variable, i)
                }
            }
        ).collect();
        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}
