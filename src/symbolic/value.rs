//! # Values flowing through the function tree
//!
//! Every evaluation returns a [`Value`]: a number, a vector of numbers (vectorized evaluation
//! over sample points) or a formatted string (symbolic evaluation). Polynomial coefficients use
//! the narrower [`Coefficient`], which is either a number or a string - the latter appears when a
//! Taylor series is built around a symbolic function.
//!
//! Arithmetic on both types falls back to text concatenation as soon as one side is text, so
//! `Sum`/`Product` of symbolic children give `"f(1)+g(1)"` and `"f(1)*g(1)"`.
use itertools::Itertools;
use nalgebra::DVector;
use std::fmt;
use std::ops::{Add, Mul};

/// the single substitution slot of every template
pub const PLACEHOLDER: &str = "{0}";

/// substitutes `argument` into the slot of `template`
pub fn fill_template(template: &str, argument: &str) -> String {
    template.replace(PLACEHOLDER, argument)
}

/// Result (and argument) of an evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Numeric(f64),
    Array(DVector<f64>),
    Symbolic(String),
}

impl Value {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DVector<f64>> {
        match self {
            Value::Array(xs) => Some(xs),
            _ => None,
        }
    }

    pub fn as_symbolic(&self) -> Option<&str> {
        match self {
            Value::Symbolic(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// exact numeric zero; arrays and text are never zero
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Numeric(x) if *x == 0.0)
    }

    /// Applies a scalar function element-wise. Text arguments are substituted into `template`
    /// instead, which is how leaves render themselves around a symbolic inner value.
    pub fn map<F>(self, op: F, template: &str) -> Value
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Value::Numeric(x) => Value::Numeric(op(x)),
            Value::Array(xs) => Value::Array(xs.map(|x| op(x))),
            Value::Symbolic(s) => Value::Symbolic(fill_template(template, &s)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Numeric(x) => write!(f, "{}", x),
            Value::Array(xs) => write!(f, "[{}]", xs.iter().join(", ")),
            Value::Symbolic(s) => write!(f, "{}", s),
        }
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Numeric(a), Value::Numeric(b)) => Value::Numeric(a + b),
            (Value::Array(a), Value::Array(b)) => Value::Array(a + b),
            (Value::Array(a), Value::Numeric(b)) | (Value::Numeric(b), Value::Array(a)) => {
                Value::Array(a.add_scalar(b))
            }
            (lhs, rhs) => Value::Symbolic(format!("{}+{}", lhs, rhs)),
        }
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Numeric(a), Value::Numeric(b)) => Value::Numeric(a * b),
            (Value::Array(a), Value::Array(b)) => Value::Array(a.component_mul(&b)),
            (Value::Array(a), Value::Numeric(b)) | (Value::Numeric(b), Value::Array(a)) => {
                Value::Array(a * b)
            }
            (lhs, rhs) => Value::Symbolic(format!("{}*{}", lhs, rhs)),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Numeric(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Numeric(x as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbolic(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Symbolic(s)
    }
}

impl From<DVector<f64>> for Value {
    fn from(xs: DVector<f64>) -> Self {
        Value::Array(xs)
    }
}

impl From<Vec<f64>> for Value {
    fn from(xs: Vec<f64>) -> Self {
        Value::Array(DVector::from_vec(xs))
    }
}

impl From<Coefficient> for Value {
    fn from(c: Coefficient) -> Self {
        match c {
            Coefficient::Numeric(x) => Value::Numeric(x),
            Coefficient::Symbolic(s) => Value::Symbolic(s),
        }
    }
}

/// Polynomial coefficient: a number, or a formatted string in symbolic Taylor series.
#[derive(Clone, Debug, PartialEq)]
pub enum Coefficient {
    Numeric(f64),
    Symbolic(String),
}

impl Coefficient {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Coefficient::Numeric(x) => Some(*x),
            Coefficient::Symbolic(_) => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Coefficient::Symbolic(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Coefficient::Numeric(x) if *x == 0.0)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Coefficient::Numeric(x) if *x == 1.0)
    }

    /// form used in front of a power of the variable; text gets bracketed
    pub fn as_factor(&self) -> String {
        match self {
            Coefficient::Numeric(x) => format!("{}", x),
            Coefficient::Symbolic(s) => format!("({})", s),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Coefficient::Numeric(x) => write!(f, "{}", x),
            Coefficient::Symbolic(s) => write!(f, "{}", s),
        }
    }
}

impl Add for Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: Coefficient) -> Coefficient {
        match (self, rhs) {
            (Coefficient::Numeric(a), Coefficient::Numeric(b)) => Coefficient::Numeric(a + b),
            (Coefficient::Numeric(z), other) | (other, Coefficient::Numeric(z)) if z == 0.0 => {
                other
            }
            (lhs, rhs) => Coefficient::Symbolic(format!("{}+{}", lhs, rhs)),
        }
    }
}

impl Mul for Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: Coefficient) -> Coefficient {
        match (self, rhs) {
            (Coefficient::Numeric(a), Coefficient::Numeric(b)) => Coefficient::Numeric(a * b),
            // a text operand keeps the product text, zero factor included
            (Coefficient::Numeric(one), other) | (other, Coefficient::Numeric(one))
                if one == 1.0 =>
            {
                other
            }
            (lhs, rhs) => Coefficient::Symbolic(format!("{}*{}", lhs.as_factor(), rhs.as_factor())),
        }
    }
}

impl From<f64> for Coefficient {
    fn from(x: f64) -> Self {
        Coefficient::Numeric(x)
    }
}

impl From<&str> for Coefficient {
    fn from(s: &str) -> Self {
        Coefficient::Symbolic(s.to_string())
    }
}

impl From<String> for Coefficient {
    fn from(s: String) -> Self {
        Coefficient::Symbolic(s)
    }
}
