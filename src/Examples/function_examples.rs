// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::{save_samples_to_csv, timestamped_filename};
use crate::numerical::newton_scalar::{NewtonScalar, NewtonTarget, newton_extremum, newton_root};
use crate::poly;
use crate::symbolic::function_node::{Function, FunctionKind};
use strum::IntoEnumIterator;
#[allow(dead_code)]
pub fn function_examples(example: usize) {
    match example {
        0 => {
            // BUILDING AND EVALUATING FUNCTIONS
            // x^2 - 2 from its coefficients, highest degree first
            let p = poly![1, 0, -2];
            println!("p(x) = {}, p(3) = {}", p, p.evaluate(3.0));
            // sin(x^2 - 2): composition
            let f = Function::sin().of(p.clone());
            println!("f(x) = {}, f(1) = {}", f, f.evaluate(1.0));
            // the same function evaluated over a vector of points
            let ys = f.evaluate(vec![0.0, 0.5, 1.0]);
            println!("f([0, 0.5, 1]) = {}", ys);
            // or with a string: the template gets rendered
            println!("f(t) = {}", f.evaluate("t"));
            // polynomials stay polynomials under + and *
            let q = poly![1, 0] * poly![1, 1] + Function::constant(3.0);
            println!("q(x) = {}, kind = {}", q, q.kind());
            // anything else becomes a sum/product node
            let g = Function::exponential() * Function::cos() - Function::log() / poly![1, 0];
            println!("g(x) = {}, g(2) = {}", g, g.evaluate(2.0));
        }
        1 => {
            // DERIVATIVES
            let f = Function::sin() * Function::exponential();
            let df = f.derivative();
            println!("f = {} \n df/dx = {}", f, df);
            println!("d3f/dx3 at 1 = {}", f.n_th_derivative(3).evaluate(1.0));
            for kind in FunctionKind::iter() {
                println!("kind of node: {}", kind);
            }
            // compare analytical and numerical derivatives on a linspace:
            // the norm of the difference is returned, and true if it is below max_norm
            let (norm, res) = f.compare_num(0.0, 3.0, 100, 1e-6).unwrap();
            println!("norm = {}, res = {}", norm, res);
            // symbolic functions differentiate in notation only
            let h = Function::symbolic("h").unwrap();
            println!("h' = {}, (h*sin)' = {}", h.derivative(), (h * Function::sin()).derivative());
        }
        2 => {
            // TAYLOR SERIES
            let f = Function::exponential();
            let taylor = f.taylor_series(0.0, 5).unwrap();
            println!("taylor series of {} around 0: {}", f, Function::Polynomial(taylor.clone()));
            println!("exp(1) = {}, taylor(1) = {}", 1f64.exp(), taylor.evaluate(&1.0.into()));
            // around a symbolic function the coefficients stay symbolic
            let g = Function::symbolic("g").unwrap();
            let taylor = g.taylor_series(1.0, 3).unwrap();
            println!("taylor series of {} around 1: {}", g, Function::Polynomial(taylor));
        }
        3 => {
            // ROOTS AND EXTREMA
            let root = newton_root(&poly![1, 0, -2], 1.0, 1e-10).unwrap();
            println!("root of x^2 - 2: {}", root);
            let x = newton_extremum(&(Function::cos() + poly![0.5, 0]), 2.0, 1e-10).unwrap();
            println!("extremum of cos(x) + x/2: {}", x);
            // the same with iteration cap, logging and statistics
            let mut solver = NewtonScalar::new();
            solver
                .set_problem(Function::exponential() - poly![2, 0], 0.0)
                .unwrap();
            solver.set_solver_params(Some(1e-12), Some(100), Some("info".to_string()));
            let x = solver.solve(NewtonTarget::Extremum);
            println!("minimum of exp(x) - 2x: {:?}", x);
        }
        4 => {
            // SAMPLING AND SAVING
            let f = Function::sin().of(poly![1, 0, 0]);
            let (xs, ys) = f.sample(0.0, 2.0, 50).unwrap();
            let filename = timestamped_filename("sin_x2");
            save_samples_to_csv(&xs, &ys, ("x", "sin(x^2)"), &filename).unwrap();
            println!("saved {} samples of {} to {}", xs.len(), f, filename);
        }
        _ => {
            println!("example {} not found", example);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_examples() {
        for example in 0..4 {
            function_examples(example);
        }
    }
}
