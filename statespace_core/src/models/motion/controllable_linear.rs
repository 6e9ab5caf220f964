// statespace_core/src/models/motion/controllable_linear.rs

use nalgebra::DMatrix;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, ValidationError};
use crate::models::motion::{
    ControllableDifferentiableMotionModel, ControllableMotionModel, DifferentiableMotionModel,
    LinearMotionModel, MotionModel,
};
use crate::models::{Controllable, Differentiable, Stateful, Validate};
use crate::types::{Control, Jacobian, State};

/// Linear motion model with an additive control contribution:
///
/// ```text
/// x'(k) = A * x(k-1) + B * u(k)
/// ```
///
/// Wraps an uncontrolled [`LinearMotionModel`] and augments it with a control
/// matrix `B` of shape `state x control`. The state-Jacobian passes through
/// to the wrapped model; a linear control contribution does not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllableLinearMotionModel {
    motion: LinearMotionModel,
    b: DMatrix<f64>,
}

impl ControllableLinearMotionModel {
    /// # Panics
    /// Panics if `a` is not square or `b` has a row count other than `a`'s size.
    pub fn new(a: DMatrix<f64>, b: DMatrix<f64>) -> Self {
        assert_eq!(
            a.ncols(),
            b.nrows(),
            "state and control matrices are not compatible"
        );
        Self {
            motion: LinearMotionModel::new(a),
            b,
        }
    }

    pub fn state_matrix(&self) -> &DMatrix<f64> {
        self.motion.state_matrix()
    }

    pub fn control_matrix(&self) -> &DMatrix<f64> {
        &self.b
    }
}

impl Stateful for ControllableLinearMotionModel {
    type State = State;
}

impl Controllable for ControllableLinearMotionModel {
    type Control = Control;
}

impl MotionModel for ControllableLinearMotionModel {
    fn apply(&self, state: &State) -> State {
        self.motion.apply(state)
    }
}

impl ControllableMotionModel for ControllableLinearMotionModel {
    fn apply_with_control(&self, state: &State, control: &Control) -> State {
        self.motion.apply(state) + &self.b * control
    }
}

impl Differentiable for ControllableLinearMotionModel {
    type Jacobian = Jacobian;
}

impl DifferentiableMotionModel for ControllableLinearMotionModel {
    fn jacobian(&self, state: &State) -> Jacobian {
        self.motion.jacobian(state)
    }
}

impl ControllableDifferentiableMotionModel for ControllableLinearMotionModel {
    fn jacobian_with_control(&self, state: &State, _control: &Control) -> Jacobian {
        self.motion.jacobian(state)
    }
}

impl Validate for ControllableLinearMotionModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        self.motion.validate(dimensions)?;

        let control = dimensions.require_control()?;

        if self.b.ncols() != control {
            return Err(MatrixError::InvalidColumnCount {
                context: "self.b",
                expected: control,
                found: self.b.ncols(),
            }
            .into());
        }

        if self.b.nrows() != dimensions.state() {
            return Err(MatrixError::InvalidRowCount {
                context: "self.b",
                expected: dimensions.state(),
                found: self.b.nrows(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DimensionsError;
    use crate::models::control::{ControlModel, LinearControlModel};
    use nalgebra::DVector;

    fn double_integrator() -> ControllableLinearMotionModel {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.1, 0.0, 1.0]);
        let b = DMatrix::from_row_slice(2, 1, &[0.005, 0.1]);
        ControllableLinearMotionModel::new(a, b)
    }

    #[test]
    fn test_control_composition_is_additive() {
        let model = double_integrator();
        let motion = LinearMotionModel::new(model.state_matrix().clone());
        let control = LinearControlModel::new(DMatrix::from_row_slice(2, 1, &[0.005, 0.1]));

        let x = DVector::from_vec(vec![1.0, -0.5]);
        let u = DVector::from_vec(vec![2.0]);

        // Bit-for-bit equality: the composite is exactly the sum of its parts.
        assert_eq!(
            model.apply_with_control(&x, &u),
            motion.apply(&x) + control.apply(&u)
        );
    }

    #[test]
    fn test_state_jacobian_passes_through() {
        let model = double_integrator();
        let x = DVector::from_vec(vec![1.0, -0.5]);
        let u = DVector::from_vec(vec![2.0]);
        assert_eq!(model.jacobian(&x), *model.state_matrix());
        assert_eq!(model.jacobian_with_control(&x, &u), *model.state_matrix());
    }

    #[test]
    fn test_validate_requires_control_capability() {
        let model = double_integrator();
        let result = model.validate(&Dimensions::state_only(2));
        assert_eq!(
            result,
            Err(DimensionsError::InvalidType {
                capability: "control"
            }
            .into())
        );
    }

    #[test]
    fn test_validate_checks_control_matrix_shape() {
        let model = double_integrator();
        assert!(model
            .validate(&Dimensions::state_only(2).with_control(1))
            .is_ok());

        let result = model.validate(&Dimensions::state_only(2).with_control(2));
        assert_eq!(
            result,
            Err(MatrixError::InvalidColumnCount {
                context: "self.b",
                expected: 2,
                found: 1,
            }
            .into())
        );
    }
}
