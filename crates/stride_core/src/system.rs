//! Derivative systems and their evaluation.

use std::collections::HashMap;

use crate::error::{StepError, StepResult};
use crate::traits::{Derivative, Scalar};

/// One frame of auxiliary named values, opaque to the stepper.
///
/// Frames let derivatives reference other components' values or external
/// parameters without the stepper interpreting them. The stepper passes
/// the frames through unchanged to every derivative call within a step.
pub type Frame<T> = HashMap<String, T>;

/// An ordered sequence of derivatives, one per state-vector component.
/// Its length defines the system's dimensionality.
pub type DerivativeSystem<T> = Vec<Box<dyn Derivative<T>>>;

/// Boxes a closure as a system component derivative.
pub fn derivative<T, F>(f: F) -> Box<dyn Derivative<T>>
where
    T: Scalar,
    F: Fn(T, T, &[Frame<T>]) -> T + 'static,
{
    Box::new(f)
}

/// Evaluates the derivative vector at `x` for state `y`.
///
/// Calls `system[i]` with `y[i]` for each index and collects the results
/// into a fresh vector. Components are evaluated in index order, but
/// derivatives must not rely on observing side effects from sibling
/// evaluations within one call; the loop may be evaluated independently
/// per component.
pub fn evaluate<T: Scalar>(
    system: &[Box<dyn Derivative<T>>],
    x: T,
    y: &[T],
    context: &[Frame<T>],
) -> StepResult<Vec<T>> {
    if system.len() != y.len() {
        return Err(StepError::DimensionMismatch {
            expected: system.len(),
            actual: y.len(),
        });
    }
    Ok(system
        .iter()
        .zip(y.iter())
        .map(|(f, &y_i)| f.eval(x, y_i, context))
        .collect())
}
