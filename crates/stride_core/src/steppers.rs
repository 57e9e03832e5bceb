//! Fixed-step explicit integration methods.
//!
//! Each step function advances `(x, y)` by `h` with one or more evaluator
//! calls combined through the vector algebra. The steppers are pure and
//! stateless: inputs are never mutated, the result is freshly allocated,
//! and nothing is remembered between calls. Callers own the iteration
//! loop, feeding each result back in as the next call's input.

use serde::{Deserialize, Serialize};

use crate::algebra::{add, combine, scale};
use crate::error::{StepError, StepResult};
use crate::system::{evaluate, Frame};
use crate::traits::{Derivative, Scalar};

/// Integration method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Euler,
    ModifiedEuler,
    Rk4,
}

impl Method {
    /// Advances `(x, y)` by `h` with the selected method.
    pub fn step<T: Scalar>(
        self,
        system: &[Box<dyn Derivative<T>>],
        x: T,
        y: &[T],
        context: &[Frame<T>],
        h: T,
    ) -> StepResult<(T, Vec<T>)> {
        match self {
            Method::Euler => euler_step(system, x, y, context, h),
            Method::ModifiedEuler => modified_euler_step(system, x, y, context, h),
            Method::Rk4 => rk4_step(system, x, y, context, h),
        }
    }
}

/// Forward Euler. One evaluator call; first-order accurate, local
/// truncation error O(h²).
pub fn euler_step<T: Scalar>(
    system: &[Box<dyn Derivative<T>>],
    x: T,
    y: &[T],
    context: &[Frame<T>],
    h: T,
) -> StepResult<(T, Vec<T>)> {
    if !h.is_finite() {
        return Err(StepError::InvalidStep);
    }

    // k = f(x, y)
    let k = evaluate(system, x, y, context)?;

    // y_next = y + h*k
    let next = add(y, &scale(&k, h))?;
    Ok((x + h, next))
}

/// Modified Euler (Heun). Predictor-corrector with two evaluator calls;
/// second-order accurate.
pub fn modified_euler_step<T: Scalar>(
    system: &[Box<dyn Derivative<T>>],
    x: T,
    y: &[T],
    context: &[Frame<T>],
    h: T,
) -> StepResult<(T, Vec<T>)> {
    if !h.is_finite() {
        return Err(StepError::InvalidStep);
    }
    let half = T::from_f64(0.5).unwrap();

    // k1 = f(x, y)
    let k1 = evaluate(system, x, y, context)?;

    // k2 = f(x + h, y + h*k1)
    let predictor = add(y, &scale(&k1, h))?;
    let k2 = evaluate(system, x + h, &predictor, context)?;

    // y_next = y + h*(k1 + k2)/2
    let avg = scale(&add(&k1, &k2)?, half);
    let next = add(y, &scale(&avg, h))?;
    Ok((x + h, next))
}

/// Classic fourth-order Runge-Kutta. Four evaluator calls; local
/// truncation error O(h⁵).
pub fn rk4_step<T: Scalar>(
    system: &[Box<dyn Derivative<T>>],
    x: T,
    y: &[T],
    context: &[Frame<T>],
    h: T,
) -> StepResult<(T, Vec<T>)> {
    if !h.is_finite() {
        return Err(StepError::InvalidStep);
    }
    let half = T::from_f64(0.5).unwrap();
    let two = T::from_f64(2.0).unwrap();
    let sixth = T::from_f64(1.0 / 6.0).unwrap();
    let one = T::one();

    // k1 = f(x, y)
    let k1 = evaluate(system, x, y, context)?;

    // k2 = f(x + h/2, y + h*k1/2)
    let mid = add(y, &scale(&k1, h * half))?;
    let k2 = evaluate(system, x + h * half, &mid, context)?;

    // k3 = f(x + h/2, y + h*k2/2)
    let mid = add(y, &scale(&k2, h * half))?;
    let k3 = evaluate(system, x + h * half, &mid, context)?;

    // k4 = f(x + h, y + h*k3)
    let end = add(y, &scale(&k3, h))?;
    let k4 = evaluate(system, x + h, &end, context)?;

    // y_next = y + h/6 * (k1 + 2k2 + 2k3 + k4)
    let weighted = combine(&[
        (k1.as_slice(), one),
        (k2.as_slice(), two),
        (k3.as_slice(), two),
        (k4.as_slice(), one),
    ])?;
    let next = add(y, &scale(&weighted, h * sixth))?;
    Ok((x + h, next))
}
