//! examples of usage of RustedFunctions
/// building, evaluating, differentiating functions, Taylor series and Newton's method
pub mod function_examples;
