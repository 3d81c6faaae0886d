//! # Polynomial leaf
//!
//! `Polynomial` stores its coefficients highest degree first: `[c_n, ..., c_1, c_0]` is
//! `c_n x^n + ... + c_1 x + c_0`. Affine, scale and constant functions are not separate types,
//! just factories building the matching coefficient vector.
//!
//! Polynomials are closed under addition and multiplication, so `+` and `*` between two of them
//! return a new `Polynomial` (right-aligned coefficient sum, coefficient convolution) instead of
//! a generic `Sum`/`Product` node.
use crate::symbolic::value::{Coefficient, PLACEHOLDER, Value, fill_template};
use itertools::{EitherOrBoth, Itertools};
use nalgebra::{DMatrix, DVector};
use std::ops::{Add, Mul};

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Coefficient>,
}

impl Polynomial {
    /// Polynomial from numeric coefficients, highest degree first.
    /// # Panics
    /// if `coefficients` is empty
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial::from_coefficients(coefficients.into_iter().map(Coefficient::Numeric).collect())
    }

    /// Polynomial from possibly symbolic coefficients, highest degree first.
    pub fn from_coefficients(coefficients: Vec<Coefficient>) -> Polynomial {
        assert!(
            !coefficients.is_empty(),
            "Polynomial should have at least one coefficient."
        );
        Polynomial { coefficients }
    }
    /// a*x + b
    pub fn affine(a: f64, b: f64) -> Polynomial {
        Polynomial::new(vec![a, b])
    }
    /// a*x
    pub fn scale(a: f64) -> Polynomial {
        Polynomial::new(vec![a, 0.0])
    }

    pub fn constant(c: f64) -> Polynomial {
        Polynomial::new(vec![c])
    }

    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// the coefficients as plain numbers, `None` if any of them is symbolic
    pub fn numeric_coefficients(&self) -> Option<Vec<f64>> {
        self.coefficients.iter().map(Coefficient::as_numeric).collect()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn has_symbolic_coefficients(&self) -> bool {
        self.coefficients.iter().any(Coefficient::is_symbolic)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Coefficient::is_zero)
    }

    /// Evaluates at a point (Horner), over a vector of points (Vandermonde product) or renders
    /// the template around a text argument.
    pub fn evaluate(&self, x: &Value) -> Value {
        match x {
            Value::Numeric(x) => self.horner(*x).into(),
            Value::Array(xs) => match self.numeric_coefficients() {
                Some(coefficients) => Value::Array(vandermonde(xs, &coefficients)),
                None => Value::Symbolic(format!(
                    "[{}]",
                    xs.iter().map(|&x| self.horner(x)).join(", ")
                )),
            },
            Value::Symbolic(s) => Value::Symbolic(fill_template(&self.template(), s)),
        }
    }

    fn horner(&self, x: f64) -> Coefficient {
        self.coefficients
            .iter()
            .fold(Coefficient::Numeric(0.0), |acc, c| {
                acc * Coefficient::Numeric(x) + c.clone()
            })
    }

    /// Term-wise derivative; the constant term drops out and a constant differentiates to
    /// `Polynomial(0)`.
    pub fn derivative(&self) -> Polynomial {
        let deg = self.degree();
        if deg == 0 {
            return Polynomial::constant(0.0);
        }
        let coefficients = self.coefficients[..deg]
            .iter()
            .enumerate()
            .map(|(i, c)| c.clone() * Coefficient::Numeric((deg - i) as f64))
            .collect();
        Polynomial { coefficients }
    }

    /// self^n by repeated multiplication
    pub fn powi(&self, n: usize) -> Polynomial {
        (0..n).fold(Polynomial::constant(1.0), |acc, _| &acc * self)
    }

    /// Template with one `{0}` slot, leading term first. Zero terms are dropped, unit
    /// coefficients are not printed and an all-zero polynomial renders as `0`.
    pub fn template(&self) -> String {
        let deg = self.degree();
        let mut terms: Vec<String> = Vec::with_capacity(self.coefficients.len());
        for (i, c) in self.coefficients.iter().enumerate() {
            let power = deg - i;
            if power == 0 {
                if c.is_zero() && !terms.is_empty() {
                    continue;
                }
                terms.push(c.to_string());
                continue;
            }
            if c.is_zero() {
                continue;
            }
            let factor = if c.is_one() { String::new() } else { c.as_factor() };
            let term = match (power, c.is_one()) {
                (1, true) => PLACEHOLDER.to_string(),
                (1, false) => format!("{}({})", factor, PLACEHOLDER),
                _ => format!("{}({})^{}", factor, PLACEHOLDER, power),
            };
            terms.push(term);
        }
        terms.join(" + ")
    }
}

/// V(xs) * c where V is the Vandermonde matrix with decreasing powers
fn vandermonde(xs: &DVector<f64>, coefficients: &[f64]) -> DVector<f64> {
    let n = coefficients.len();
    let v = DMatrix::from_fn(xs.len(), n, |i, j| xs[i].powi((n - 1 - j) as i32));
    v * DVector::from_column_slice(coefficients)
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        // aligned at the constant term, result goes into fresh storage
        let mut coefficients: Vec<Coefficient> = self
            .coefficients
            .iter()
            .rev()
            .zip_longest(rhs.coefficients.iter().rev())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.clone() + b.clone(),
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => c.clone(),
            })
            .collect();
        coefficients.reverse();
        Polynomial { coefficients }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        let len = self.coefficients.len() + rhs.coefficients.len() - 1;
        let mut coefficients = vec![Coefficient::Numeric(0.0); len];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j].clone() + a.clone() * b.clone();
            }
        }
        Polynomial { coefficients }
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum_is_right_aligned() {
        let p = Polynomial::new(vec![1.0, 0.0, 0.0]);
        let q = Polynomial::new(vec![2.0, 3.0]);
        assert_eq!(&p + &q, Polynomial::new(vec![1.0, 2.0, 3.0]));
        assert_eq!(&q + &p, Polynomial::new(vec![1.0, 2.0, 3.0]));
        // operands untouched
        assert_eq!(q, Polynomial::new(vec![2.0, 3.0]));
    }

    #[test]
    fn test_product_is_convolution() {
        let p = Polynomial::new(vec![1.0, 1.0]);
        assert_eq!(p.powi(2), Polynomial::new(vec![1.0, 2.0, 1.0]));
        assert_eq!(p.powi(0), Polynomial::constant(1.0));
    }

    #[test]
    fn test_vandermonde_matches_horner() {
        let p = Polynomial::new(vec![2.0, -1.0, 0.5, 3.0]);
        let xs = DVector::from_vec(vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.5]);
        let ys = p.evaluate(&Value::Array(xs.clone()));
        let ys = ys.as_array().unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            let expected = p.evaluate(&Value::Numeric(*x)).as_numeric().unwrap();
            assert_relative_eq!(*y, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_template() {
        assert_eq!(Polynomial::new(vec![3.0, 2.0, 1.0]).template(), "3({0})^2 + 2({0}) + 1");
        assert_eq!(Polynomial::new(vec![1.0, 1.0, 0.0]).template(), "({0})^2 + {0}");
        assert_eq!(Polynomial::new(vec![0.0, 2.0, 1.0]).template(), "2({0}) + 1");
        assert_eq!(Polynomial::new(vec![0.0, 0.0, 0.0]).template(), "0");
        assert_eq!(Polynomial::constant(5.0).template(), "5");
    }

    #[test]
    fn test_symbolic_coefficients() {
        let p = Polynomial::from_coefficients(vec!["a".into(), 0.0.into(), "b".into()]);
        assert!(p.has_symbolic_coefficients());
        assert_eq!(p.template(), "(a)({0})^2 + b");
        // zero coefficients and a zero argument do not absorb the text
        assert_eq!(
            p.evaluate(&Value::Numeric(0.0)),
            Value::Symbolic("((a)*0)*0+b".to_string())
        );
        assert_eq!(p.evaluate(&Value::Numeric(1.0)), Value::Symbolic("a+b".to_string()));
        assert_eq!(p.derivative().template(), "((a)*2)({0})");
    }
}
