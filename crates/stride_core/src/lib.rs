//! The `stride_core` crate provides the numerical engine for Stride: a
//! stateless set of fixed-step explicit ODE steppers over a shared vector
//! algebra.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `Derivative` (one
//!   component's derivative, seeing only its own value plus context).
//! - **Algebra**: elementwise vector operations with dimension checking.
//! - **System**: derivative-system evaluation and context frames.
//! - **Steppers**: Euler, Modified Euler (Heun), and classic RK4.
//! - **Trajectory**: the multi-step driver callers would otherwise write.

pub mod algebra;
pub mod error;
pub mod formula;
pub mod steppers;
pub mod system;
pub mod trajectory;
pub mod traits;
