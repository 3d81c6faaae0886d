//! Operator overloads building new trees out of existing ones.
//!
//! `+` and `*` fuse two polynomials into a polynomial; every other pair of operands gets a
//! generic `Sum`/`Product` node. Negation, division and powers are expressed through
//! composition, the same way the derivative rules are: `-f` is `Scale(-1)(f)`, `f / g` is
//! `f * g^-1` and `f.pow(n)` is `Power(n)(f)`.
use crate::symbolic::function_node::Function;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Function {
    type Output = Function;

    fn add(self, rhs: Function) -> Function {
        match (self, rhs) {
            (Function::Polynomial(p), Function::Polynomial(q)) => Function::Polynomial(p + q),
            (f, g) => Function::sum(f, g),
        }
    }
}

impl Mul for Function {
    type Output = Function;

    fn mul(self, rhs: Function) -> Function {
        match (self, rhs) {
            (Function::Polynomial(p), Function::Polynomial(q)) => Function::Polynomial(p * q),
            (f, g) => Function::product(f, g),
        }
    }
}

impl Neg for Function {
    type Output = Function;

    fn neg(self) -> Function {
        Function::compose(Function::scale(-1.0), self)
    }
}

impl Sub for Function {
    type Output = Function;

    fn sub(self, rhs: Function) -> Function {
        self + (-rhs)
    }
}

impl Div for Function {
    type Output = Function;

    fn div(self, rhs: Function) -> Function {
        self * rhs.pow(-1.0)
    }
}

impl Add for &Function {
    type Output = Function;

    fn add(self, rhs: Self) -> Function {
        self.clone() + rhs.clone()
    }
}

impl Mul for &Function {
    type Output = Function;

    fn mul(self, rhs: Self) -> Function {
        self.clone() * rhs.clone()
    }
}

impl Neg for &Function {
    type Output = Function;

    fn neg(self) -> Function {
        -self.clone()
    }
}

impl Function {
    /// `Power(n)` applied to `self`
    pub fn pow(&self, n: f64) -> Function {
        Function::power(n).of(self.clone())
    }
}
