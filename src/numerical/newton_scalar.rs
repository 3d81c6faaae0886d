///  Example#1
/// ```
/// use RustedFunctions::numerical::newton_scalar::newton_root;
/// use RustedFunctions::poly;
/// // root of x^2 - 2 starting from 1.0
/// let root = newton_root(&poly![1, 0, -2], 1.0, 1e-8).unwrap();
/// assert!((root - 2f64.sqrt()).abs() < 1e-6);
/// ```
/// Example#2
///  ```
///     // or more verbose way with an iteration cap, logging and statistics
///     use RustedFunctions::numerical::newton_scalar::{NewtonScalar, NewtonTarget};
///     use RustedFunctions::symbolic::function_node::Function;
///     let mut solver = NewtonScalar::new();
///     solver.set_problem(Function::sin(), 1.0).unwrap();
///     solver.set_solver_params(Some(1e-10), Some(100), Some("off".to_string()));
///     // maximum of sin near 1.0
///     let x = solver.solve(NewtonTarget::Extremum).unwrap();
///     assert!((x - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
///     println!("result = {:?} \n", solver.get_result());
///  ```
use crate::Utils::logger::init_logger;
use crate::symbolic::errors::FunctionError;
use crate::symbolic::function_node::Function;
use log::{error, info, warn};
use std::collections::HashMap;
use std::time::Instant;
use tabled::{builder::Builder, settings::Style};

pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// What the iteration drives to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonTarget {
    /// f(x) = 0: x <- x - f(x)/f'(x)
    Root,
    /// f'(x) = 0: x <- x - f'(x)/f''(x)
    Extremum,
}

/// Newton's method for a scalar function given as a function tree.
///
/// Derivative trees are rebuilt from the function on every step; nodes are immutable so nothing
/// is cached. Without `max_iterations` the loop only ends once the residual drops below the
/// tolerance, so a diverging or oscillating problem never returns.
pub struct NewtonScalar {
    pub function: Function,
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: Option<usize>,
    pub loglevel: Option<String>,
    /// iteration counter
    pub i: usize,
    pub result: Option<f64>,
    evaluations: usize,
    calc_statistics: HashMap<String, usize>,
}

impl NewtonScalar {
    pub fn new() -> NewtonScalar {
        NewtonScalar {
            function: Function::constant(0.0),
            initial_guess: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: None,
            loglevel: None,
            i: 0,
            result: None,
            evaluations: 0,
            calc_statistics: HashMap::new(),
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// Symbolic functions have no numeric fixed point and are rejected.
    pub fn set_problem(
        &mut self,
        function: Function,
        initial_guess: f64,
    ) -> Result<(), FunctionError> {
        if function.result_is_symbolic() {
            return Err(FunctionError::InvalidArgument(format!(
                "function must not be symbolic: {}",
                function
            )));
        }
        self.function = function;
        self.initial_guess = initial_guess;
        self.result = None;
        Ok(())
    }

    pub fn set_solver_params(
        &mut self,
        tolerance: Option<f64>,
        max_iterations: Option<usize>,
        loglevel: Option<String>,
    ) {
        if let Some(tolerance) = tolerance {
            assert!(tolerance > 0.0, "Tolerance should be a positive number.");
            self.tolerance = tolerance;
        }
        if let Some(max_iterations) = max_iterations {
            assert!(
                max_iterations > 0,
                "Max iterations should be a positive number."
            );
            self.max_iterations = Some(max_iterations);
        }
        if let Some(level) = loglevel {
            assert!(
                ["debug", "info", "warn", "error", "off", "none"].contains(&level.as_str()),
                "loglevel must be debug, info, warn, error or off"
            );
            self.loglevel = Some(level);
        }
    }
    /////////////////////////////////////////////////////////////////////////////////////////////
    //                ITERATIONS
    /////////////////////////////////////////////////////////////////////////////////////////////
    /// the quantity driven to zero: f(x) for roots, f'(x) for extrema
    fn residual(&mut self, target: NewtonTarget, x: f64) -> Result<f64, FunctionError> {
        self.evaluations += 1;
        match target {
            NewtonTarget::Root => self.function.evaluate_f64(x),
            NewtonTarget::Extremum => self.function.derivative().evaluate_f64(x),
        }
    }

    fn slope(&mut self, target: NewtonTarget, x: f64) -> Result<f64, FunctionError> {
        self.evaluations += 1;
        match target {
            NewtonTarget::Root => self.function.derivative().evaluate_f64(x),
            NewtonTarget::Extremum => self.function.derivative().derivative().evaluate_f64(x),
        }
    }

    /// one Newton step from x
    pub fn iteration(&mut self, target: NewtonTarget, x: f64) -> Result<f64, FunctionError> {
        let residual = self.residual(target, x)?;
        let slope = self.slope(target, x)?;
        Ok(x - residual / slope)
    }

    pub fn main_loop(&mut self, target: NewtonTarget) -> Result<f64, FunctionError> {
        let mut x0 = self.initial_guess;
        let mut last_residual = f64::INFINITY;
        self.i = 0;
        self.evaluations = 0;
        loop {
            if let Some(max_iterations) = self.max_iterations {
                if self.i >= max_iterations {
                    error!("Maximum number of iterations reached. No solution found.");
                    return Err(FunctionError::MaxIterationsReached(max_iterations));
                }
            }
            let x1 = self.iteration(target, x0)?;
            self.i += 1;
            let residual = self.residual(target, x1)?.abs();
            if residual < self.tolerance {
                info!("converged after {} iterations, x = {}", self.i, x1);
                self.result = Some(x1);
                return Ok(x1);
            }
            if residual > last_residual {
                warn!("Residual is increasing");
            }
            info!("iteration = {}, x = {}, residual = {}", self.i, x1, residual);
            last_residual = residual;
            x0 = x1;
        }
    }
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main functions to start the solver and caclulate statistics
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    /// main_loop wrapped with logger initialisation, timing and a statistics table
    pub fn solve(&mut self, target: NewtonTarget) -> Result<f64, FunctionError> {
        init_logger(self.loglevel.clone());
        info!(
            "Newton's method ({:?}) for {} from x0 = {}",
            target, self.function, self.initial_guess
        );
        let begin = Instant::now();
        let res = self.main_loop(target);
        let end = begin.elapsed();
        self.calc_statistics
            .insert("time elapsed, ms".to_string(), end.as_millis() as usize);
        self.calc_statistics();
        res
    }

    pub fn get_result(&self) -> Option<f64> {
        self.result
    }

    fn calc_statistics(&self) {
        let mut stats = self.calc_statistics.clone();
        stats.insert("number of iterations".to_string(), self.i);
        stats.insert("number of evaluations".to_string(), self.evaluations);
        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }
}

impl Default for NewtonScalar {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds x with |f(x)| < tol by Newton's method starting at `x0`.
///
/// There is no iteration cap: use [`NewtonScalar`] with `max_iterations` when the problem may
/// not converge.
pub fn newton_root(f: &Function, x0: f64, tol: f64) -> Result<f64, FunctionError> {
    let mut solver = NewtonScalar::new();
    solver.set_problem(f.clone(), x0)?;
    solver.set_solver_params(Some(tol), None, None);
    solver.main_loop(NewtonTarget::Root)
}

/// Finds x with |f'(x)| < tol, i.e. Newton's method applied to the derivative.
pub fn newton_extremum(f: &Function, x0: f64, tol: f64) -> Result<f64, FunctionError> {
    let mut solver = NewtonScalar::new();
    solver.set_problem(f.clone(), x0)?;
    solver.set_solver_params(Some(tol), None, None);
    solver.main_loop(NewtonTarget::Extremum)
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, SQRT_2};

    #[test]
    fn test_newton_root_sqrt_2() {
        let root = newton_root(&poly![1, 0, -2], 1.0, 1e-8).unwrap();
        assert_abs_diff_eq!(root, SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_newton_extremum_parabola() {
        let x = newton_extremum(&poly![1, 0, 0], 1.0, 1e-8).unwrap();
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_newton_root_cos() {
        let root = newton_root(&Function::cos(), 1.0, 1e-10).unwrap();
        assert_abs_diff_eq!(root, FRAC_PI_2, epsilon = 1e-8);
    }

    #[test]
    fn test_newton_extremum_of_composition() {
        // (x - 3)^2 + 1 written as a composition, minimum at 3
        let f = Function::power(2.0).of(Function::affine(1.0, -3.0)) + Function::constant(1.0);
        let x = newton_extremum(&f, 0.0, 1e-10).unwrap();
        assert_abs_diff_eq!(x, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_symbolic_function_is_rejected() {
        let f = Function::symbolic("f").unwrap();
        assert!(matches!(
            newton_root(&f, 1.0, DEFAULT_TOLERANCE),
            Err(FunctionError::InvalidArgument(_))
        ));
        assert!(matches!(
            newton_extremum(&f, 1.0, DEFAULT_TOLERANCE),
            Err(FunctionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tree_with_symbolic_subtree_is_rejected() {
        let f = Function::sin() + Function::symbolic("g").unwrap();
        assert!(matches!(
            newton_root(&f, 1.0, DEFAULT_TOLERANCE),
            Err(FunctionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_iteration_cap() {
        // x^2 + 1 has no real root
        let mut solver = NewtonScalar::new();
        solver.set_problem(poly![1, 0, 1], 1.0).unwrap();
        solver.set_solver_params(None, Some(50), Some("off".to_string()));
        let res = solver.main_loop(NewtonTarget::Root);
        assert_eq!(res, Err(FunctionError::MaxIterationsReached(50)));
        assert_eq!(solver.i, 50);
        assert_eq!(solver.get_result(), None);
    }

    #[test]
    fn test_solve_with_statistics() {
        let mut solver = NewtonScalar::new();
        solver.set_problem(poly![1, 0, -2], 1.0).unwrap();
        solver.set_solver_params(Some(1e-12), Some(100), Some("info".to_string()));
        let root = solver.solve(NewtonTarget::Root).unwrap();
        assert_abs_diff_eq!(root, SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.get_result(), Some(root));
        assert!(solver.i > 0 && solver.i < 100);
    }

    #[test]
    #[should_panic]
    fn test_negative_tolerance_panics() {
        let mut solver = NewtonScalar::new();
        solver.set_solver_params(Some(-1.0), None, None);
    }
}
