use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

use crate::system::Frame;

/// A trait for types that can be used as scalars in our systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// The derivative of a single state-vector component.
///
/// A derivative sees the independent variable, its OWN component's current
/// value, and the opaque context frames. It never sees the full state
/// vector; coupling between components must flow through the context.
/// Widening this signature would change the system's semantics, so keep it
/// narrow.
pub trait Derivative<T: Scalar> {
    /// Evaluates dy_i/dx at `x` given the component value `y_i`.
    fn eval(&self, x: T, y_i: T, context: &[Frame<T>]) -> T;
}

impl<T, F> Derivative<T> for F
where
    T: Scalar,
    F: Fn(T, T, &[Frame<T>]) -> T,
{
    fn eval(&self, x: T, y_i: T, context: &[Frame<T>]) -> T {
        self(x, y_i, context)
    }
}
