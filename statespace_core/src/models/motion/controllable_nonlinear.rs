// statespace_core/src/models/motion/controllable_nonlinear.rs

use crate::dimensions::Dimensions;
use crate::error::{DimensionsError, ValidationError, VectorError};
use crate::jacobian::NumericJacobian;
use crate::models::motion::{ControllableDifferentiableMotionModel, ControllableMotionModel};
use crate::models::{
    Controllable, ControlledJacobianSource, ControlledStateFn, Differentiable, Stateful, Validate,
};
use crate::types::{Control, Jacobian, State};

/// Motion model defined by an opaque function of state and control:
/// `x'(k) = f(x(k-1), u(k))`.
///
/// The numeric Jacobian fallback differentiates with respect to the state
/// only, holding the control fixed at its per-call value.
pub struct ControllableNonlinearMotionModel {
    state_dim: usize,
    function: ControlledStateFn,
    jacobian: ControlledJacobianSource,
}

impl ControllableNonlinearMotionModel {
    pub fn new<F>(state_dim: usize, function: F) -> Self
    where
        F: Fn(&State, &Control) -> State + Send + Sync + 'static,
    {
        Self {
            state_dim,
            function: Box::new(function),
            jacobian: ControlledJacobianSource::Numeric(NumericJacobian::new(
                state_dim, state_dim,
            )),
        }
    }

    /// A model with an analytically supplied Jacobian, which always takes
    /// precedence over the numeric engine.
    pub fn with_jacobian<F, J>(state_dim: usize, function: F, jacobian: J) -> Self
    where
        F: Fn(&State, &Control) -> State + Send + Sync + 'static,
        J: Fn(&State, &Control) -> Jacobian + Send + Sync + 'static,
    {
        Self {
            state_dim,
            function: Box::new(function),
            jacobian: ControlledJacobianSource::Analytic(Box::new(jacobian)),
        }
    }

    pub fn state_dim(&self) -> usize {
        self.state_dim
    }
}

impl Stateful for ControllableNonlinearMotionModel {
    type State = State;
}

impl Controllable for ControllableNonlinearMotionModel {
    type Control = Control;
}

impl ControllableMotionModel for ControllableNonlinearMotionModel {
    fn apply_with_control(&self, state: &State, control: &Control) -> State {
        (self.function)(state, control)
    }
}

impl Differentiable for ControllableNonlinearMotionModel {
    type Jacobian = Jacobian;
}

impl ControllableDifferentiableMotionModel for ControllableNonlinearMotionModel {
    fn jacobian_with_control(&self, state: &State, control: &Control) -> Jacobian {
        match &self.jacobian {
            ControlledJacobianSource::Analytic(f) => f(state, control),
            ControlledJacobianSource::Numeric(engine) => {
                engine.numeric(state, |x| (self.function)(x, control))
            }
        }
    }
}

impl Validate for ControllableNonlinearMotionModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        if self.state_dim != dimensions.state() {
            return Err(DimensionsError::InvalidValue {
                context: "state dimension",
                expected: dimensions.state(),
                found: self.state_dim,
            }
            .into());
        }

        let control = dimensions.require_control()?;

        // Best-effort zero-vector probe, debug builds only; see
        // `NonlinearMotionModel::validate`.
        if cfg!(debug_assertions) {
            let state_before = State::zeros(dimensions.state());
            let zero_control = Control::zeros(control);
            let state_after = self.apply_with_control(&state_before, &zero_control);

            if state_after.len() != dimensions.state() {
                return Err(VectorError::InvalidDimensionCount {
                    context: "state function output",
                    expected: dimensions.state(),
                    found: state_after.len(),
                }
                .into());
            }
        }

        Ok(())
    }
}
