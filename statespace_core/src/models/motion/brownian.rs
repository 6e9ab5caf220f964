// statespace_core/src/models/motion/brownian.rs

use std::sync::Mutex;

use nalgebra::DVector;

use crate::dimensions::Dimensions;
use crate::error::{ValidationError, VectorError};
use crate::models::motion::{ControllableMotionModel, MotionModel};
use crate::models::{Controllable, Stateful, Validate};
use crate::noise::NoiseSource;
use crate::types::State;

/// Wraps any motion model and adds zero-mean Gaussian noise after each step:
///
/// ```text
/// x'(k) = model.apply(x(k-1)) + N(0, diag(std_deviations))
/// ```
///
/// One independent sample is drawn per state dimension, scaled by that
/// dimension's standard deviation. The noise source is injected at
/// construction so tests can substitute a deterministic sequence. The source
/// sits behind a `Mutex` so the wrapper stays shareable across threads like
/// every other model; the lock is the only mutation `apply` performs.
pub struct BrownianMotionModel<M, S> {
    model: M,
    std_deviations: DVector<f64>,
    source: Mutex<S>,
}

impl<M, S: NoiseSource> BrownianMotionModel<M, S> {
    pub fn new(model: M, std_deviations: DVector<f64>, source: S) -> Self {
        Self {
            model,
            std_deviations,
            source: Mutex::new(source),
        }
    }

    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn std_deviations(&self) -> &DVector<f64> {
        &self.std_deviations
    }

    fn displace(&self, mut state: State) -> State {
        let mut source = self
            .source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for i in 0..self.std_deviations.len() {
            state[i] += source.sample(self.std_deviations[i]);
        }
        state
    }
}

impl<M: Stateful, S> Stateful for BrownianMotionModel<M, S> {
    type State = M::State;
}

impl<M: Controllable, S> Controllable for BrownianMotionModel<M, S> {
    type Control = M::Control;
}

impl<M, S> MotionModel for BrownianMotionModel<M, S>
where
    M: MotionModel<State = State>,
    S: NoiseSource,
{
    fn apply(&self, state: &State) -> State {
        self.displace(self.model.apply(state))
    }
}

impl<M, S> ControllableMotionModel for BrownianMotionModel<M, S>
where
    M: ControllableMotionModel<State = State>,
    S: NoiseSource,
{
    fn apply_with_control(&self, state: &State, control: &M::Control) -> State {
        self.displace(self.model.apply_with_control(state, control))
    }
}

impl<M: Validate, S> Validate for BrownianMotionModel<M, S> {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        self.model.validate(dimensions)?;

        if self.std_deviations.len() != dimensions.state() {
            return Err(VectorError::InvalidDimensionCount {
                context: "self.std_deviations",
                expected: dimensions.state(),
                found: self.std_deviations.len(),
            }
            .into());
        }

        Ok(())
    }
}
