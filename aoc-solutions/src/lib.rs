//! Advent of Code puzzle solutions with automatic registration
//!
//! [`utils`] holds the reusable building blocks (the view-based
//! [`Matrix`](utils::matrix::Matrix) grid). Solutions are organized by year
//! and use the `AutoRegisterSolver` derive macro to register with the
//! solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
