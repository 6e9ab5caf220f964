// statespace_core/src/models/motion/zero.rs

use std::sync::OnceLock;

use crate::dimensions::Dimensions;
use crate::error::{DimensionsError, ValidationError};
use crate::models::motion::{DifferentiableMotionModel, MotionModel};
use crate::models::{Differentiable, Stateful, Validate};
use crate::types::{Jacobian, State};

/// Motion model with no dynamics: `x'(k) = x(k-1)`.
///
/// Useful as the motion plane of a filter tracking a quantity assumed
/// constant between observations. Its Jacobian is the identity matrix,
/// computed once and reused since re-deriving it every step is pure overhead.
#[derive(Debug)]
pub struct ZeroMotionModel {
    state_dim: usize,
    // Idempotent cache; a redundant recomputation under a race is wasteful
    // but not a hazard.
    identity: OnceLock<Jacobian>,
}

impl ZeroMotionModel {
    pub fn new(state_dim: usize) -> Self {
        assert!(state_dim >= 1, "state dimension must be at least 1");
        Self {
            state_dim,
            identity: OnceLock::new(),
        }
    }

    pub fn state_dim(&self) -> usize {
        self.state_dim
    }
}

impl Stateful for ZeroMotionModel {
    type State = State;
}

impl MotionModel for ZeroMotionModel {
    fn apply(&self, state: &State) -> State {
        state.clone()
    }
}

impl Differentiable for ZeroMotionModel {
    type Jacobian = Jacobian;
}

impl DifferentiableMotionModel for ZeroMotionModel {
    fn jacobian(&self, _state: &State) -> Jacobian {
        self.identity
            .get_or_init(|| Jacobian::identity(self.state_dim, self.state_dim))
            .clone()
    }
}

impl Validate for ZeroMotionModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        if self.state_dim != dimensions.state() {
            return Err(DimensionsError::InvalidValue {
                context: "state dimension",
                expected: dimensions.state(),
                found: self.state_dim,
            }
            .into());
        }

        Ok(())
    }
}
