// statespace_core/src/models/motion/mod.rs

use crate::models::{Controllable, Differentiable, Stateful};

mod brownian;
mod controllable_linear;
mod controllable_nonlinear;
mod linear;
mod nonlinear;
mod zero;

pub use brownian::BrownianMotionModel;
pub use controllable_linear::ControllableLinearMotionModel;
pub use controllable_nonlinear::ControllableNonlinearMotionModel;
pub use linear::LinearMotionModel;
pub use nonlinear::NonlinearMotionModel;
pub use zero::ZeroMotionModel;

/// An uncontrolled motion (process) model.
///
/// Predicts the next state from the current state alone:
///
/// ```text
/// x'(k) = A * x(k-1)        (linear case)
/// x'(k) = f(x(k-1))         (nonlinear case)
/// ```
///
/// Models hold only fixed coefficients or functions; the evolving state is
/// owned by the caller and threaded through successive `apply` calls.
pub trait MotionModel: Stateful {
    fn apply(&self, state: &Self::State) -> Self::State;
}

/// A motion model driven by a control input.
///
/// ```text
/// x'(k) = A * x(k-1) + B * u(k)    (linear case)
/// x'(k) = f(x(k-1), u(k))          (nonlinear case)
/// ```
pub trait ControllableMotionModel: Stateful + Controllable {
    fn apply_with_control(&self, state: &Self::State, control: &Self::Control) -> Self::State;
}

/// A motion model that can be linearized at a state.
///
/// ```text
/// F(k) = df |
///        -- |
///        dx |x=X
/// ```
pub trait DifferentiableMotionModel: MotionModel + Differentiable {
    fn jacobian(&self, state: &Self::State) -> Self::Jacobian;
}

/// A controllable motion model that can be linearized at a state and control.
pub trait ControllableDifferentiableMotionModel: ControllableMotionModel + Differentiable {
    fn jacobian_with_control(
        &self,
        state: &Self::State,
        control: &Self::Control,
    ) -> Self::Jacobian;
}
