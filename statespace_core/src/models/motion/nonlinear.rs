// statespace_core/src/models/motion/nonlinear.rs

use crate::dimensions::Dimensions;
use crate::error::{DimensionsError, ValidationError, VectorError};
use crate::jacobian::NumericJacobian;
use crate::models::motion::{DifferentiableMotionModel, MotionModel};
use crate::models::{Differentiable, JacobianSource, StateFn, Stateful, Validate};
use crate::types::{Jacobian, State};

/// Motion model defined by an opaque function `x'(k) = f(x(k-1))`.
///
/// Unless an analytic Jacobian function is supplied, the Jacobian is
/// synthesized by [`NumericJacobian`] on every call.
pub struct NonlinearMotionModel {
    state_dim: usize,
    function: StateFn,
    jacobian: JacobianSource,
}

impl NonlinearMotionModel {
    /// A model whose Jacobian falls back to central finite differences seeded
    /// with the declared state dimension.
    pub fn new<F>(state_dim: usize, function: F) -> Self
    where
        F: Fn(&State) -> State + Send + Sync + 'static,
    {
        Self {
            state_dim,
            function: Box::new(function),
            jacobian: JacobianSource::Numeric(NumericJacobian::new(state_dim, state_dim)),
        }
    }

    /// A model with an analytically supplied Jacobian. The analytic function
    /// always takes precedence over the numeric engine and is never
    /// cross-checked against it.
    pub fn with_jacobian<F, J>(state_dim: usize, function: F, jacobian: J) -> Self
    where
        F: Fn(&State) -> State + Send + Sync + 'static,
        J: Fn(&State) -> Jacobian + Send + Sync + 'static,
    {
        Self {
            state_dim,
            function: Box::new(function),
            jacobian: JacobianSource::Analytic(Box::new(jacobian)),
        }
    }

    pub fn state_dim(&self) -> usize {
        self.state_dim
    }
}

impl Stateful for NonlinearMotionModel {
    type State = State;
}

impl MotionModel for NonlinearMotionModel {
    fn apply(&self, state: &State) -> State {
        (self.function)(state)
    }
}

impl Differentiable for NonlinearMotionModel {
    type Jacobian = Jacobian;
}

impl DifferentiableMotionModel for NonlinearMotionModel {
    fn jacobian(&self, state: &State) -> Jacobian {
        match &self.jacobian {
            JacobianSource::Analytic(f) => f(state),
            JacobianSource::Numeric(engine) => engine.numeric(state, |x| (self.function)(x)),
        }
    }
}

impl Validate for NonlinearMotionModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        if self.state_dim != dimensions.state() {
            return Err(DimensionsError::InvalidValue {
                context: "state dimension",
                expected: dimensions.state(),
                found: self.state_dim,
            }
            .into());
        }

        // Validating a function-defined model requires actually running it on
        // dummy data. Given the overhead, the probe only runs in debug builds,
        // and a single zero-vector probe is a best-effort sanity check, not a
        // guarantee over the whole input domain.
        if cfg!(debug_assertions) {
            let state_before = State::zeros(dimensions.state());
            let state_after = self.apply(&state_before);

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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{DMatrix, DVector};

    fn pendulum_like() -> NonlinearMotionModel {
        NonlinearMotionModel::new(2, |x: &State| {
            DVector::from_vec(vec![x[0] + 0.1 * x[1], x[1] - 0.1 * x[0].sin()])
        })
    }

    #[test]
    fn test_apply_evaluates_the_function() {
        let model = pendulum_like();
        let x = DVector::from_vec(vec![0.5, 1.0]);
        let expected = DVector::from_vec(vec![0.6, 1.0 - 0.1 * 0.5f64.sin()]);
        assert_eq!(model.apply(&x), expected);
    }

    #[test]
    fn test_numeric_jacobian_fallback() {
        let model = pendulum_like();
        let x = DVector::from_vec(vec![0.5, 1.0]);

        let expected = DMatrix::from_row_slice(
            2,
            2,
            &[1.0, 0.1, -0.1 * 0.5f64.cos(), 1.0],
        );

        assert_abs_diff_eq!(model.jacobian(&x), expected, epsilon = 1e-8);
    }

    #[test]
    fn test_analytic_jacobian_takes_precedence() {
        // The analytic function deliberately disagrees with the state
        // function; it must win without any cross-check.
        let marker = DMatrix::from_element(2, 2, 42.0);
        let expected = marker.clone();
        let model = NonlinearMotionModel::with_jacobian(
            2,
            |x: &State| x.clone(),
            move |_: &State| marker.clone(),
        );

        let x = DVector::zeros(2);
        assert_eq!(model.jacobian(&x), expected);
    }

    #[test]
    fn test_validate_rejects_mismatched_declared_size() {
        let model = pendulum_like();
        let result = model.validate(&Dimensions::state_only(3));
        assert_eq!(
            result,
            Err(DimensionsError::InvalidValue {
                context: "state dimension",
                expected: 3,
                found: 2,
            }
            .into())
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_probe_rejects_wrong_output_length() {
        // Declares 2 state dimensions but produces 3.
        let model = NonlinearMotionModel::new(2, |_: &State| DVector::zeros(3));
        let result = model.validate(&Dimensions::state_only(2));
        assert_eq!(
            result,
            Err(VectorError::InvalidDimensionCount {
                context: "state function output",
                expected: 2,
                found: 3,
            }
            .into())
        );
    }
}
