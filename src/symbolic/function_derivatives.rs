//! # Derivatives and derived constructions
//!
//! Differentiation of every node kind, plus the routines that are nothing more than repeated
//! differentiation and evaluation: higher derivatives, Taylor polynomials, sampling and a check
//! of the analytic derivative against a central difference.
//!
//! ## Differentiation rules
//! | node            | derivative                          |
//! |-----------------|-------------------------------------|
//! | Polynomial      | term-wise, constant term dropped    |
//! | Sum(f, g)       | Sum(f', g')                         |
//! | Product(f, g)   | Sum(Product(f', g), Product(f, g')) |
//! | Compose(f, g)   | Product(f'(g), g')                  |
//! | Power(n)        | Scale(n)(Power(n - 1))              |
//! | Log             | Power(-1)                           |
//! | Exponential     | Exponential                         |
//! | Sin             | Cos                                 |
//! | Cos             | Scale(-1)(Sin)                      |
//! | Symbolic(f)     | Symbolic(f') - notation only        |
//!
//! No simplification is attempted: the derivative tree is exactly what the rule builds.
use crate::symbolic::errors::FunctionError;
use crate::symbolic::function_node::{Combinator, Function, Leaf};
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::utils::{factorial, linspace, norm, numerical_derivative};
use crate::symbolic::value::{Coefficient, Value};
use log::debug;
use nalgebra::DVector;

impl Leaf {
    pub fn derivative(&self) -> Function {
        match self {
            Leaf::Power(n) => Function::compose(Function::scale(*n), Function::power(n - 1.0)),
            Leaf::Log => Function::power(-1.0),
            Leaf::Exponential => Function::exponential(),
            Leaf::Sin => Function::cos(),
            Leaf::Cos => Function::compose(Function::scale(-1.0), Function::sin()),
        }
    }
}

impl Combinator {
    pub fn derivative(&self) -> Function {
        match self {
            Combinator::Sum(f, g) => Function::sum(f.derivative(), g.derivative()),
            // product rule
            Combinator::Product(f, g) => Function::sum(
                Function::product(f.derivative(), g.as_ref().clone()),
                Function::product(f.as_ref().clone(), g.derivative()),
            ),
            // chain rule
            Combinator::Compose(f, g) => {
                Function::product(f.derivative().of(g.as_ref().clone()), g.derivative())
            }
        }
    }
}

impl Function {
    /// DIFFERENTIATION

    /// Exact derivative as a new tree; the receiver is left untouched.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Function::sin() * Function::exponential();
    /// let df = f.derivative(); // cos(x)*exp(x) + sin(x)*exp(x)
    /// ```
    pub fn derivative(&self) -> Function {
        match self {
            Function::Polynomial(p) => Function::Polynomial(p.derivative()),
            Function::Leaf(l) => l.derivative(),
            Function::Combinator(c) => c.derivative(),
            Function::Symbolic(name) => Function::Symbolic(format!("{}'", name)),
        }
    }

    /// n-th derivative, `n == 0` gives a copy of `self`
    pub fn n_th_derivative(&self, n: usize) -> Function {
        (0..n).fold(self.clone(), |f, _| f.derivative())
    }

    /// TAYLOR SERIES

    /// Taylor polynomial of degree `degree` around `x0`:
    /// f(x0) + sum over i of f^(i)(x0)/i! * (x - x0)^i.
    ///
    /// Terms whose derivative vanishes at `x0` are skipped. When `f(x0)` evaluates to text (the
    /// tree holds symbolic functions) the coefficients are kept as text, `"f''(0)/2"`, and no
    /// term is skipped.
    ///
    /// Fails with `NotImplemented` if `x0` is not a number.
    pub fn taylor_series(
        &self,
        x0: impl Into<Value>,
        degree: usize,
    ) -> Result<Polynomial, FunctionError> {
        let x0 = match x0.into() {
            Value::Numeric(x0) => x0,
            other => {
                return Err(FunctionError::NotImplemented(format!(
                    "taylor series around non-numeric point {}",
                    other
                )));
            }
        };
        let fun_at_x0 = self.evaluate(x0);
        let shift = Polynomial::affine(1.0, -x0);
        let mut derivative = self.clone();

        match fun_at_x0 {
            Value::Symbolic(text) => {
                let mut taylor = Polynomial::from_coefficients(vec![Coefficient::Symbolic(text)]);
                for i in 1..=degree {
                    derivative = derivative.derivative();
                    let coefficient = Coefficient::Symbolic(format!(
                        "{}/{}",
                        derivative.evaluate(x0),
                        factorial(i)
                    ));
                    debug!("Taylor term {}: coefficient {}", i, coefficient);
                    let term = Polynomial::from_coefficients(vec![coefficient]);
                    taylor = &taylor + &(&term * &shift.powi(i));
                }
                Ok(taylor)
            }
            Value::Numeric(value) => {
                let mut taylor = Polynomial::constant(value);
                for i in 1..=degree {
                    derivative = derivative.derivative();
                    let value = derivative.evaluate(x0);
                    if value.is_zero() {
                        debug!("Taylor term {} vanishes at x0 = {}, skipped", i, x0);
                        continue;
                    }
                    let value = value.as_numeric().ok_or_else(|| {
                        FunctionError::InvalidArgument(format!(
                            "derivative {} of {} is not numeric at {}",
                            i, self, x0
                        ))
                    })?;
                    let term = Polynomial::constant(value / factorial(i));
                    debug!("Taylor term {}: coefficient {}", i, value / factorial(i));
                    taylor = &taylor + &(&term * &shift.powi(i));
                }
                Ok(taylor)
            }
            Value::Array(_) => Err(FunctionError::NotImplemented(
                "taylor series of a vector-valued evaluation".to_string(),
            )),
        }
    }

    /// SAMPLING AND CONTROL

    /// Evaluates on `num_values` evenly spaced points of `[start, end]` and returns the points and
    /// the values - what a plotting routine consumes.
    pub fn sample(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
    ) -> Result<(DVector<f64>, DVector<f64>), FunctionError> {
        let xs = DVector::from_vec(linspace(start, end, num_values));
        match self.evaluate_value(&Value::Array(xs.clone())) {
            Value::Array(ys) => Ok((xs, ys)),
            other => Err(FunctionError::InvalidArgument(format!(
                "{} cannot be sampled numerically, got {}",
                self, other
            ))),
        }
    }

    /// Compares the analytic derivative with a central difference on a linspace.
    /// Returns the norm of the difference and whether it is below `max_norm`.
    pub fn compare_num(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), FunctionError> {
        if self.result_is_symbolic() {
            return Err(FunctionError::InvalidArgument(format!(
                "{} has no numeric derivative",
                self
            )));
        }
        let (xs, analytical) = self.derivative().sample(start, end, num_values)?;
        let numerical = numerical_derivative(
            |x| self.evaluate_f64(x).unwrap_or(f64::NAN),
            xs.as_slice().to_vec(),
            1e-6,
        );
        let norm = norm(analytical.as_slice().to_vec(), numerical);
        debug!("derivative of {}: norm of difference {}", self, norm);
        Ok((norm, norm < max_norm))
    }
}
