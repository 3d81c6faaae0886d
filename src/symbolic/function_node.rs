//! # Function tree
//!
//! This module defines [`Function`], the expression tree at the heart of the crate. A tree is
//! built once from factories and operators and never mutated afterwards; every operation
//! (evaluation, differentiation, rendering) walks it and returns fresh values or fresh trees.
//!
//! ## Shape of the tree
//! - **Polynomial** leaves hold a coefficient vector (affine, scale and constant functions are
//!   polynomials built by factories)
//! - **Leaf** nodes are the closed-form functions `x^n`, `log`, `exp`, `sin`, `cos`
//! - **Combinator** nodes own two children: `Sum`, `Product` and `Compose` (`f(g(x))`)
//! - **Symbolic** nodes are named placeholders `f(x)` that only ever evaluate to text
//!
//! ## Evaluation modes
//! [`Function::evaluate`] takes a number, a vector of numbers or a string:
//! - numbers and vectors give the numeric result (vectors element-wise)
//! - a string is substituted into the node's template: `sin(x)` called with `"t"` gives `"sin(t)"`
//! - symbolic subtrees turn numeric evaluation into text: `Sum(f, Sin)` at `1` gives
//!   `"f(1)+0.8414709848078965"`
//!
//! ## Templates
//! Every node renders into a template with a single `{0}` slot standing for the argument.
//! `Compose` nests the inner template into the outer one, `Sum` joins with `+` and `Product`
//! brackets both factors: `(sin({0}))*(cos({0}))`.
use crate::symbolic::errors::FunctionError;
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::value::{PLACEHOLDER, Value, fill_template};
use nalgebra::DVector;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Closed-form terminal functions.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    /// x^n, n may be negative or fractional
    Power(f64),
    /// natural logarithm
    Log,
    Exponential,
    Sin,
    Cos,
}

impl Leaf {
    pub fn template(&self) -> String {
        match self {
            Leaf::Power(n) => format!("({})^{}", PLACEHOLDER, n),
            Leaf::Log => format!("log({})", PLACEHOLDER),
            Leaf::Exponential => format!("exponential({})", PLACEHOLDER),
            Leaf::Sin => format!("sin({})", PLACEHOLDER),
            Leaf::Cos => format!("cos({})", PLACEHOLDER),
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Leaf::Power(n) => x.powf(*n),
            Leaf::Log => x.ln(),
            Leaf::Exponential => x.exp(),
            Leaf::Sin => x.sin(),
            Leaf::Cos => x.cos(),
        }
    }

    pub fn evaluate(&self, x: &Value) -> Value {
        x.clone().map(|v| self.apply(v), &self.template())
    }
}

/// Nodes combining two owned children.
#[derive(Clone, Debug, PartialEq)]
pub enum Combinator {
    /// f(x) + g(x)
    Sum(Box<Function>, Box<Function>),
    /// f(x) * g(x)
    Product(Box<Function>, Box<Function>),
    /// f(g(x))
    Compose(Box<Function>, Box<Function>),
}

impl Combinator {
    /// outer/left child first
    pub fn children(&self) -> (&Function, &Function) {
        match self {
            Combinator::Sum(f, g) | Combinator::Product(f, g) | Combinator::Compose(f, g) => {
                (f.as_ref(), g.as_ref())
            }
        }
    }

    pub fn template(&self) -> String {
        match self {
            Combinator::Sum(f, g) => format!("{}+{}", f.template(), g.template()),
            Combinator::Product(f, g) => format!("({})*({})", f.template(), g.template()),
            Combinator::Compose(f, g) => fill_template(&f.template(), &g.template()),
        }
    }

    pub fn evaluate(&self, x: &Value) -> Value {
        match self {
            Combinator::Sum(f, g) => f.evaluate_value(x) + g.evaluate_value(x),
            Combinator::Product(f, g) => f.evaluate_value(x) * g.evaluate_value(x),
            Combinator::Compose(f, g) => f.evaluate_value(&g.evaluate_value(x)),
        }
    }
}

/// Flat tag of a node, handy for logging and for iterating over every kind of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum FunctionKind {
    Polynomial,
    Sum,
    Product,
    Compose,
    Power,
    Log,
    Exponential,
    Sin,
    Cos,
    Symbolic,
}

/// A function of one variable represented as an immutable expression tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedFunctions::symbolic::function_node::Function;
/// // sin(x^2 + 1)
/// let f = Function::sin().of(Function::polynomial(vec![1.0, 0.0, 1.0]));
/// let y = f.evaluate(0.5).as_numeric().unwrap();
/// let df = f.derivative(); // cos(x^2 + 1) * 2x
/// println!("{} -> {}", f, df);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Polynomial(Polynomial),
    Leaf(Leaf),
    Combinator(Combinator),
    /// named placeholder function, name is never empty
    Symbolic(String),
}

/// What a function can be called with.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// another function: the call builds a composition
    Function(Function),
    /// number, vector of numbers or text: the call evaluates
    Value(Value),
}

/// Outcome of [`Function::call`].
#[derive(Clone, Debug, PartialEq)]
pub enum Called {
    Function(Function),
    Value(Value),
}

impl Called {
    pub fn into_function(self) -> Option<Function> {
        match self {
            Called::Function(f) => Some(f),
            Called::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Called::Value(v) => Some(v),
            Called::Function(_) => None,
        }
    }
}

impl From<Function> for Argument {
    fn from(f: Function) -> Self {
        Argument::Function(f)
    }
}

impl From<Value> for Argument {
    fn from(v: Value) -> Self {
        Argument::Value(v)
    }
}

impl From<f64> for Argument {
    fn from(x: f64) -> Self {
        Argument::Value(Value::Numeric(x))
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Value(Value::from(s))
    }
}

impl From<DVector<f64>> for Argument {
    fn from(xs: DVector<f64>) -> Self {
        Argument::Value(Value::Array(xs))
    }
}

impl Function {
    ////////////////////////////////////CONSTRUCTORS////////////////////////////////////////
    /// c_n x^n + ... + c_0, coefficients highest degree first
    pub fn polynomial(coefficients: Vec<f64>) -> Function {
        Function::Polynomial(Polynomial::new(coefficients))
    }

    /// a*x + b
    pub fn affine(a: f64, b: f64) -> Function {
        Function::Polynomial(Polynomial::affine(a, b))
    }

    /// a*x
    pub fn scale(a: f64) -> Function {
        Function::Polynomial(Polynomial::scale(a))
    }

    pub fn constant(c: f64) -> Function {
        Function::Polynomial(Polynomial::constant(c))
    }

    pub fn power(n: f64) -> Function {
        Function::Leaf(Leaf::Power(n))
    }

    pub fn log() -> Function {
        Function::Leaf(Leaf::Log)
    }

    pub fn exponential() -> Function {
        Function::Leaf(Leaf::Exponential)
    }

    pub fn sin() -> Function {
        Function::Leaf(Leaf::Sin)
    }

    pub fn cos() -> Function {
        Function::Leaf(Leaf::Cos)
    }

    /// Named symbolic function `name(x)`.
    ///
    /// Fails with `InvalidArgument` when `name` is not text or is empty:
    /// ```rust, ignore
    /// assert!(Function::symbolic("f").is_ok());
    /// assert!(Function::symbolic(5).is_err());
    /// ```
    pub fn symbolic(name: impl Into<Value>) -> Result<Function, FunctionError> {
        match name.into() {
            Value::Symbolic(name) if !name.is_empty() => Ok(Function::Symbolic(name)),
            Value::Symbolic(_) => Err(FunctionError::InvalidArgument(
                "name of a symbolic function must not be empty".to_string(),
            )),
            other => Err(FunctionError::InvalidArgument(format!(
                "name of a symbolic function must be a string, got {}",
                other
            ))),
        }
    }

    /// generic sum node, never fused
    pub fn sum(f: Function, g: Function) -> Function {
        Function::Combinator(Combinator::Sum(Box::new(f), Box::new(g)))
    }

    /// generic product node, never fused
    pub fn product(f: Function, g: Function) -> Function {
        Function::Combinator(Combinator::Product(Box::new(f), Box::new(g)))
    }

    /// f(g(x))
    pub fn compose(f: Function, g: Function) -> Function {
        Function::Combinator(Combinator::Compose(Box::new(f), Box::new(g)))
    }

    /// `self` applied to `inner`: `f.of(g)` is `f(g(x))`
    pub fn of(&self, inner: Function) -> Function {
        Function::compose(self.clone(), inner)
    }

    ////////////////////////////////CAPABILITY QUERIES/////////////////////////////////////
    pub fn kind(&self) -> FunctionKind {
        match self {
            Function::Polynomial(_) => FunctionKind::Polynomial,
            Function::Leaf(Leaf::Power(_)) => FunctionKind::Power,
            Function::Leaf(Leaf::Log) => FunctionKind::Log,
            Function::Leaf(Leaf::Exponential) => FunctionKind::Exponential,
            Function::Leaf(Leaf::Sin) => FunctionKind::Sin,
            Function::Leaf(Leaf::Cos) => FunctionKind::Cos,
            Function::Combinator(Combinator::Sum(..)) => FunctionKind::Sum,
            Function::Combinator(Combinator::Product(..)) => FunctionKind::Product,
            Function::Combinator(Combinator::Compose(..)) => FunctionKind::Compose,
            Function::Symbolic(_) => FunctionKind::Symbolic,
        }
    }

    pub fn is_polynomial(&self) -> bool {
        matches!(self, Function::Polynomial(_))
    }

    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            Function::Polynomial(p) => Some(p),
            _ => None,
        }
    }

    /// true if numeric evaluation of this tree yields text: it contains a symbolic node or a
    /// polynomial with symbolic coefficients
    pub fn result_is_symbolic(&self) -> bool {
        match self {
            Function::Symbolic(_) => true,
            Function::Polynomial(p) => p.has_symbolic_coefficients(),
            Function::Leaf(_) => false,
            Function::Combinator(c) => {
                let (f, g) = c.children();
                f.result_is_symbolic() || g.result_is_symbolic()
            }
        }
    }

    ///////////////////////////////////RENDERING///////////////////////////////////////////
    /// template with a single `{0}` slot standing for the argument
    pub fn template(&self) -> String {
        match self {
            Function::Polynomial(p) => p.template(),
            Function::Leaf(l) => l.template(),
            Function::Combinator(c) => c.template(),
            Function::Symbolic(name) => format!("{}({})", name, PLACEHOLDER),
        }
    }

    /// the template with `x` substituted: `Function::sin().format_with("t") == "sin(t)"`
    pub fn format_with(&self, x: &str) -> String {
        fill_template(&self.template(), x)
    }

    ///////////////////////////////////EVALUATION//////////////////////////////////////////
    /// Evaluates at a number, a vector of numbers or a string (see module docs).
    pub fn evaluate(&self, x: impl Into<Value>) -> Value {
        self.evaluate_value(&x.into())
    }

    pub fn evaluate_value(&self, x: &Value) -> Value {
        if let Some(s) = x.as_symbolic() {
            return Value::Symbolic(self.format_with(s));
        }
        match self {
            Function::Polynomial(p) => p.evaluate(x),
            Function::Leaf(l) => l.evaluate(x),
            Function::Combinator(c) => c.evaluate(x),
            Function::Symbolic(name) => Value::Symbolic(format!("{}({})", name, x)),
        }
    }

    /// Numeric evaluation at a point; `InvalidArgument` if the tree answers with text.
    pub fn evaluate_f64(&self, x: f64) -> Result<f64, FunctionError> {
        match self.evaluate_value(&Value::Numeric(x)) {
            Value::Numeric(y) => Ok(y),
            other => Err(FunctionError::InvalidArgument(format!(
                "{} does not evaluate to a number at {}: got {}",
                self, x, other
            ))),
        }
    }

    /// Calling a function: with another function builds `Compose(self, g)`, with a value
    /// evaluates (text renders the template).
    pub fn call(&self, argument: impl Into<Argument>) -> Called {
        match argument.into() {
            Argument::Function(g) => Called::Function(self.of(g)),
            Argument::Value(x) => Called::Value(self.evaluate_value(&x)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format_with("x"))
    }
}
