// Shared Kernel - cross-module error types and utilities

pub mod errors;
pub mod utils;

pub use errors::{AppError, AppResult};
