//! Mesh-screen sieve for rock sizes
//!
//! Two screens are applied independently:
//! - 1" x 1" mesh: rocks of at least 1 inch pass
//! - 3/8" x 3/8" mesh: rocks under 0.375 inch pass
//!
//! A rock between the two thresholds passes neither.

use serde::{Deserialize, Serialize};

/// Rocks at or above this size pass the large screen
pub const LARGE_SCREEN: f64 = 1.0;

/// Rocks strictly below this size pass the small screen
pub const SMALL_SCREEN: f64 = 0.375;

/// Rocks that passed each screen, in input order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SieveResult {
    pub passed_large: Vec<f64>,
    pub passed_small: Vec<f64>,
}

/// Sort rock sizes through both screens
///
/// # Example
/// ```
/// use rockstat::sieve::sieve;
///
/// let result = sieve(&[0.3, 1.2, 0.9, 0.37]);
/// assert_eq!(result.passed_large, vec![1.2]);
/// assert_eq!(result.passed_small, vec![0.3, 0.37]);
/// ```
pub fn sieve(sizes: &[f64]) -> SieveResult {
    let passed_large = sizes.iter().copied().filter(|&s| s >= LARGE_SCREEN).collect();
    let passed_small = sizes.iter().copied().filter(|&s| s < SMALL_SCREEN).collect();

    SieveResult {
        passed_large,
        passed_small,
    }
}
