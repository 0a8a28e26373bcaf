//! Initial value problem y'' = x + y
//!
//! The second-order equation is integrated as the first-order system
//! y' = z, z' = x + y, starting from x = 0. Improved Euler (Heun) and
//! classic fourth-order Runge-Kutta run side by side so their endpoints
//! can be compared.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// Steps shorter than this fraction of the step size are not taken
const STEP_EPSILON: f64 = 1e-9;

/// Largest number of steps `solve` will take
pub const MAX_STEPS: usize = 10_000_000;

/// (y, y') at some x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdeState {
    pub y: f64,
    pub dy: f64,
}

/// Endpoints of both integrators at the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdeSolution {
    pub target_x: f64,
    pub steps: usize,
    pub improved_euler: OdeState,
    pub runge_kutta: OdeState,
}

/// y'' as a function of x and y
fn acceleration(x: f64, y: f64) -> f64 {
    x + y
}

/// One Improved Euler step of size `h` from `x`
///
/// Predicts with a forward Euler step, then averages the slopes at both
/// ends of the interval.
pub fn improved_euler_step(x: f64, state: OdeState, h: f64) -> OdeState {
    let OdeState { y, dy: z } = state;

    let a0 = acceleration(x, y);
    let y_pred = y + h * z;
    let z_pred = z + h * a0;
    let a1 = acceleration(x + h, y_pred);

    OdeState {
        y: y + h * (z + z_pred) / 2.0,
        dy: z + h * (a0 + a1) / 2.0,
    }
}

/// One classic RK4 step of size `h` from `x`
pub fn runge_kutta_step(x: f64, state: OdeState, h: f64) -> OdeState {
    let OdeState { y, dy: z } = state;
    let half = 0.5 * h;

    let k1 = h * z;
    let l1 = h * acceleration(x, y);
    let k2 = h * (z + 0.5 * l1);
    let l2 = h * acceleration(x + half, y + 0.5 * k1);
    let k3 = h * (z + 0.5 * l2);
    let l3 = h * acceleration(x + half, y + 0.5 * k2);
    let k4 = h * (z + l3);
    let l4 = h * acceleration(x + h, y + k3);

    OdeState {
        y: y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0,
        dy: z + (l1 + 2.0 * l2 + 2.0 * l3 + l4) / 6.0,
    }
}

/// Integrate from x = 0 to `target_x` with both methods
///
/// The step count is fixed up front and step `i` starts at `i * step_size`.
/// The final step is shortened so both integrators land on `target_x`.
///
/// # Errors
/// - `InvalidStepSize` when `step_size` is not finite and positive
/// - `InvalidTarget` when `target_x` is negative or not finite
/// - `StepLimitExceeded` when reaching `target_x` takes more than `MAX_STEPS`
///
/// # Example
/// ```
/// use rockstat::ode::solve;
///
/// let solution = solve(1.0, 0.0, 0.1, 1.0).unwrap();
/// assert_eq!(solution.steps, 10);
/// ```
pub fn solve(
    initial_y: f64,
    initial_dy: f64,
    step_size: f64,
    target_x: f64,
) -> Result<OdeSolution, StatsError> {
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(StatsError::InvalidStepSize(step_size));
    }
    if !target_x.is_finite() || target_x < 0.0 {
        return Err(StatsError::InvalidTarget(target_x));
    }

    let ratio = (target_x / step_size - STEP_EPSILON).ceil().max(0.0);
    if !ratio.is_finite() || ratio > MAX_STEPS as f64 {
        return Err(StatsError::StepLimitExceeded { limit: MAX_STEPS });
    }
    let steps = ratio as usize;

    let initial = OdeState {
        y: initial_y,
        dy: initial_dy,
    };
    let mut euler = initial;
    let mut rk = initial;

    for i in 0..steps {
        let x = i as f64 * step_size;
        let h = if i + 1 == steps {
            target_x - x
        } else {
            step_size
        };
        euler = improved_euler_step(x, euler, h);
        rk = runge_kutta_step(x, rk, h);
    }

    tracing::debug!(target_x, steps, "ode integrated");

    Ok(OdeSolution {
        target_x,
        steps,
        improved_euler: euler,
        runge_kutta: rk,
    })
}
