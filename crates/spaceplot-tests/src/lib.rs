//! Shared test suite for spaceplot
//!
//! These tests drive the public APIs across crates, the way a caller
//! embedding the renderer would.

pub mod matrix;
pub mod render;
pub mod server;
pub mod vector;

/// Test utilities
pub mod utils {
    use spaceplot_core::Vector;

    /// Check if two f64 values are approximately equal
    pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    /// Check that a vector holds the expected values
    pub fn vector_approx_eq(v: &Vector, expected: &[f64], tol: f64) -> bool {
        let values = v.values();
        values.len() == expected.len()
            && values.iter().zip(expected).all(|(&x, &y)| approx_eq(x, y, tol))
    }

    /// Lines of a printed tensor that carry a value
    pub fn value_lines(printed: &str) -> usize {
        printed
            .lines()
            .filter(|l| l.trim().parse::<f64>().is_ok())
            .count()
    }

    /// Default tolerance for floating point comparisons
    pub const DEFAULT_TOL: f64 = 1e-10;
}
