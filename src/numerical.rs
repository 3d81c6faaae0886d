/// Newton's method for scalar functions built as function trees: roots (f(x) = 0) and
/// extrema (f'(x) = 0), with an optional iteration cap, logging and statistics
pub mod newton_scalar;
