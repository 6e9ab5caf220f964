// statespace_core/src/models/observation/mod.rs

use crate::models::{Differentiable, Observable, Stateful};

mod linear;
mod nonlinear;
mod transparent;

pub use linear::LinearObservationModel;
pub use nonlinear::NonlinearObservationModel;
pub use transparent::TransparentObservationModel;

/// An observation (measurement) model, mapping state to the measurement an
/// ideal sensor would produce:
///
/// ```text
/// z'(k) = H * x'(k)       (linear case)
/// z'(k) = h(x'(k))        (nonlinear case)
/// ```
pub trait ObservationModel: Stateful + Observable {
    fn apply(&self, state: &Self::State) -> Self::Observation;
}

/// An observation model that can be linearized at a state.
///
/// ```text
/// H(k) = dh |
///        -- |
///        dx |x=X
/// ```
pub trait DifferentiableObservationModel: ObservationModel + Differentiable {
    fn jacobian(&self, state: &Self::State) -> Self::Jacobian;
}
