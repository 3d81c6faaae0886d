#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Function tree
/// a module
/// 1) builds functions of one variable as immutable expression trees (polynomials, powers, log, exp, sin, cos,
///    named symbolic functions and their sums, products and compositions)
/// 2) evaluates them at a number, over a vector of numbers or symbolically at a string
/// 3) renders them as human-readable strings
///# Example#
/// ```
/// use RustedFunctions::symbolic::function_node::Function;
/// use RustedFunctions::poly;
/// // x^2 - 2
/// let p = poly![1, 0, -2];
/// assert_eq!(p.evaluate(2.0).as_numeric(), Some(2.0));
/// // sin(x^2 - 2)
/// let f = Function::sin().of(p.clone());
/// println!("f = {}", f);
/// // symbolic evaluation: substitute a string into the template
/// assert_eq!(Function::sin().format_with("t"), "sin(t)");
/// // polynomials are closed under + and *
/// let q = poly![1, 0] * poly![1, 1];
/// assert!(q.is_polynomial());
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod function_node;
/// operator overloads: + * - / and pow
pub mod function_ops;
///________________________________________________________________________________________________________________________________________________
/// derivatives, n-th derivatives, Taylor series, sampling and numeric control of derivatives
/// Example#
/// ```
/// use RustedFunctions::symbolic::function_node::Function;
/// let f = Function::exponential();
/// // Maclaurin polynomial of degree 4
/// let taylor = f.taylor_series(0.0, 4).unwrap();
/// let approx_e = taylor.evaluate(&1.0.into()).as_numeric().unwrap();
/// assert!((approx_e - std::f64::consts::E).abs() < 0.05);
/// // analytic derivative against a central difference
/// let (norm, ok) = Function::sin().compare_num(0.0, 1.0, 50, 1e-6).unwrap();
/// println!("norm = {}, ok = {}", norm, ok);
/// ```
pub mod function_derivatives;
/// polynomial leaf with fused sum and product
pub mod polynomial;
/// numeric, vector and text values produced by evaluation
pub mod value;
/// error type of the crate
pub mod errors;
///______________________________________________________________________________________________________________
/// the collection of small numeric helpers
/// _____________________________________________________________________________________________________________
pub mod utils;
