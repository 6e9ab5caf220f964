// statespace_core/src/models/control/mod.rs

use crate::models::{Controllable, Stateful};

mod linear;

pub use linear::LinearControlModel;

/// A control model, mapping a control input to its additive effect on state:
///
/// ```text
/// x'(k) = B * u(k)
/// ```
pub trait ControlModel: Stateful + Controllable {
    fn apply(&self, control: &Self::Control) -> Self::State;
}
