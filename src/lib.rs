// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod numerical;
pub mod symbolic;

/// Builds a polynomial function from numeric literals, highest degree first.
/// ```
/// use RustedFunctions::poly;
/// let p = poly![1, 0, -2]; // x^2 - 2
/// assert_eq!(p.evaluate(3.0).as_numeric(), Some(7.0));
/// ```
#[macro_export]
macro_rules! poly {
    ($($c:expr),+ $(,)?) => {
        $crate::symbolic::function_node::Function::polynomial(vec![$(($c) as f64),+])
    };
}
