//! Multi-step integration driver.
//!
//! The steppers themselves are single-shot; this module owns the loop the
//! UI layer would otherwise write by hand, feeding each step result back
//! in as the next call's input and collecting the `(x, y)` trajectory.

use anyhow::{bail, Context as _, Result};

use crate::steppers::Method;
use crate::system::Frame;
use crate::traits::{Derivative, Scalar};

/// Drives `steps` repeated step calls from `(x0, y0)` and returns the full
/// trajectory, including the initial point.
///
/// The context frames are passed through unchanged on every step; a caller
/// that couples components through the context must instead run its own
/// loop and refresh the frames between steps.
pub fn integrate<T: Scalar>(
    system: &[Box<dyn Derivative<T>>],
    method: Method,
    x0: T,
    y0: &[T],
    context: &[Frame<T>],
    h: T,
    steps: usize,
) -> Result<Vec<(T, Vec<T>)>> {
    if y0.is_empty() {
        bail!("Initial state must not be empty.");
    }
    if system.len() != y0.len() {
        bail!(
            "System dimension mismatch. Expected {}, got {}.",
            system.len(),
            y0.len()
        );
    }
    if steps == 0 {
        bail!("Integration requires at least one step.");
    }

    let mut points = Vec::with_capacity(steps + 1);
    let mut x = x0;
    let mut y = y0.to_vec();
    points.push((x, y.clone()));

    for n in 0..steps {
        let (next_x, next_y) = method
            .step(system, x, &y, context, h)
            .with_context(|| format!("Integration failed at step {} of {}.", n + 1, steps))?;
        x = next_x;
        y = next_y;
        points.push((x, y.clone()));
    }

    Ok(points)
}
