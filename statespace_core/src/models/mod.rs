// statespace_core/src/models/mod.rs

use crate::dimensions::Dimensions;
use crate::error::ValidationError;
use crate::jacobian::NumericJacobian;
use crate::types::{Control, Jacobian, Observation, State};

pub mod control;
pub mod motion;
pub mod observation;

// --- Capability Traits ---
//
// Each capability associates one semantic type with a model. Roles (motion,
// observation, control model) are intersections of these, declared in the
// `motion`, `observation` and `control` submodules.

/// The model produces or consumes state vectors.
pub trait Stateful {
    type State;
}

/// The model consumes control input vectors.
pub trait Controllable {
    type Control;
}

/// The model produces observation vectors.
pub trait Observable {
    type Observation;
}

/// The model can be linearized at a point.
pub trait Differentiable {
    type Jacobian;
}

/// The single checked boundary of the library.
///
/// Every model validates its fixed coefficients and declared sizes against
/// the caller's [`Dimensions`] once, before use. The first violation found is
/// returned; composite models delegate to their wrapped models first and then
/// check only their own local shape constraints. `apply` and `jacobian` are
/// unchecked fast paths: calling them on a model that was never validated is
/// a programming error, not a recoverable condition.
pub trait Validate {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError>;
}

// --- Function-Defined Model Plumbing ---

/// A user-supplied state-transition function `x' = f(x)`.
pub type StateFn = Box<dyn Fn(&State) -> State + Send + Sync>;

/// A user-supplied state-transition function `x' = f(x, u)`.
pub type ControlledStateFn = Box<dyn Fn(&State, &Control) -> State + Send + Sync>;

/// A user-supplied observation function `z = h(x)`.
pub type ObservationFn = Box<dyn Fn(&State) -> Observation + Send + Sync>;

/// An analytically supplied Jacobian function of state.
pub type JacobianFn = Box<dyn Fn(&State) -> Jacobian + Send + Sync>;

/// An analytically supplied Jacobian function of state and control.
pub type ControlledJacobianFn = Box<dyn Fn(&State, &Control) -> Jacobian + Send + Sync>;

/// How a function-defined model obtains its Jacobian. Resolved once at
/// construction: an analytic function always takes precedence and is never
/// cross-checked against the numeric engine.
pub(crate) enum JacobianSource {
    Analytic(JacobianFn),
    Numeric(NumericJacobian),
}

pub(crate) enum ControlledJacobianSource {
    Analytic(ControlledJacobianFn),
    Numeric(NumericJacobian),
}
