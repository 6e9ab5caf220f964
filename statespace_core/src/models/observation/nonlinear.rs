// statespace_core/src/models/observation/nonlinear.rs

use crate::dimensions::Dimensions;
use crate::error::{DimensionsError, ValidationError, VectorError};
use crate::jacobian::NumericJacobian;
use crate::models::observation::{DifferentiableObservationModel, ObservationModel};
use crate::models::{
    Differentiable, JacobianSource, Observable, ObservationFn, Stateful, Validate,
};
use crate::types::{Jacobian, Observation, State};

/// Observation model defined by an opaque function `z'(k) = h(x'(k))`.
///
/// Unless an analytic Jacobian function is supplied, the Jacobian is
/// synthesized numerically with shape `observation x state`.
pub struct NonlinearObservationModel {
    state_dim: usize,
    observation_dim: usize,
    function: ObservationFn,
    jacobian: JacobianSource,
}

impl NonlinearObservationModel {
    pub fn new<F>(state_dim: usize, observation_dim: usize, function: F) -> Self
    where
        F: Fn(&State) -> Observation + Send + Sync + 'static,
    {
        Self {
            state_dim,
            observation_dim,
            function: Box::new(function),
            jacobian: JacobianSource::Numeric(NumericJacobian::new(observation_dim, state_dim)),
        }
    }

    /// A model with an analytically supplied Jacobian, which always takes
    /// precedence over the numeric engine.
    pub fn with_jacobian<F, J>(
        state_dim: usize,
        observation_dim: usize,
        function: F,
        jacobian: J,
    ) -> Self
    where
        F: Fn(&State) -> Observation + Send + Sync + 'static,
        J: Fn(&State) -> Jacobian + Send + Sync + 'static,
    {
        Self {
            state_dim,
            observation_dim,
            function: Box::new(function),
            jacobian: JacobianSource::Analytic(Box::new(jacobian)),
        }
    }

    pub fn state_dim(&self) -> usize {
        self.state_dim
    }

    pub fn observation_dim(&self) -> usize {
        self.observation_dim
    }
}

impl Stateful for NonlinearObservationModel {
    type State = State;
}

impl Observable for NonlinearObservationModel {
    type Observation = Observation;
}

impl ObservationModel for NonlinearObservationModel {
    fn apply(&self, state: &State) -> Observation {
        (self.function)(state)
    }
}

impl Differentiable for NonlinearObservationModel {
    type Jacobian = Jacobian;
}

impl DifferentiableObservationModel for NonlinearObservationModel {
    fn jacobian(&self, state: &State) -> Jacobian {
        match &self.jacobian {
            JacobianSource::Analytic(f) => f(state),
            JacobianSource::Numeric(engine) => engine.numeric(state, |x| (self.function)(x)),
        }
    }
}

impl Validate for NonlinearObservationModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        let observation = dimensions.require_observation()?;

        if self.state_dim != dimensions.state() {
            return Err(DimensionsError::InvalidValue {
                context: "state dimension",
                expected: dimensions.state(),
                found: self.state_dim,
            }
            .into());
        }

        if self.observation_dim != observation {
            return Err(DimensionsError::InvalidValue {
                context: "observation dimension",
                expected: observation,
                found: self.observation_dim,
            }
            .into());
        }

        // Best-effort zero-vector probe, debug builds only; see
        // `NonlinearMotionModel::validate`.
        if cfg!(debug_assertions) {
            let state = State::zeros(dimensions.state());
            let probe = self.apply(&state);

            if probe.len() != observation {
                return Err(VectorError::InvalidDimensionCount {
                    context: "observation function output",
                    expected: observation,
                    found: probe.len(),
                }
                .into());
            }
        }

        Ok(())
    }
}
