//! different utility modules used throughout the project
/// tiny module to set up logging and to save sampled functions into files
pub mod logger;
