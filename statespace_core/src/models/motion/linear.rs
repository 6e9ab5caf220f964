// statespace_core/src/models/motion/linear.rs

use nalgebra::DMatrix;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, ValidationError};
use crate::models::motion::{DifferentiableMotionModel, MotionModel};
use crate::models::{Differentiable, Stateful, Validate};
use crate::types::{Jacobian, State};

/// Linear motion model `x'(k) = A * x(k-1)`.
///
/// The Jacobian of a linear model is its coefficient matrix, independent of
/// the state it is evaluated at.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMotionModel {
    a: DMatrix<f64>,
}

impl LinearMotionModel {
    /// # Panics
    /// Panics if `a` is not square.
    pub fn new(a: DMatrix<f64>) -> Self {
        assert!(a.is_square(), "expected square state matrix");
        Self { a }
    }

    pub fn state_matrix(&self) -> &DMatrix<f64> {
        &self.a
    }
}

impl Stateful for LinearMotionModel {
    type State = State;
}

impl MotionModel for LinearMotionModel {
    fn apply(&self, state: &State) -> State {
        &self.a * state
    }
}

impl Differentiable for LinearMotionModel {
    type Jacobian = Jacobian;
}

impl DifferentiableMotionModel for LinearMotionModel {
    fn jacobian(&self, _state: &State) -> Jacobian {
        self.a.clone()
    }
}

impl Validate for LinearMotionModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        if self.a.ncols() != dimensions.state() {
            return Err(MatrixError::InvalidColumnCount {
                context: "self.a",
                expected: dimensions.state(),
                found: self.a.ncols(),
            }
            .into());
        }

        if self.a.nrows() != dimensions.state() {
            return Err(MatrixError::InvalidRowCount {
                context: "self.a",
                expected: dimensions.state(),
                found: self.a.nrows(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    #[test]
    fn test_identity_round_trip() {
        let model = LinearMotionModel::new(DMatrix::identity(3, 3));
        let x = DVector::from_vec(vec![1.5, -2.0, 0.25]);
        assert_eq!(model.apply(&x), x);
    }

    #[test]
    fn test_jacobian_is_the_coefficient_matrix() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.1, 0.0, 1.0]);
        let model = LinearMotionModel::new(a.clone());

        // The Jacobian of a linear model does not depend on the state.
        let x = DVector::from_vec(vec![3.0, 4.0]);
        let y = DVector::from_vec(vec![-1.0, 0.0]);
        assert_eq!(model.jacobian(&x), a);
        assert_eq!(model.jacobian(&y), a);
    }

    #[test]
    fn test_validate_accepts_matching_state_size() {
        let model = LinearMotionModel::new(DMatrix::identity(3, 3));
        assert!(model.validate(&Dimensions::state_only(3)).is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_state_size() {
        let model = LinearMotionModel::new(DMatrix::identity(3, 3));
        let result = model.validate(&Dimensions::state_only(4));
        assert_eq!(
            result,
            Err(MatrixError::InvalidColumnCount {
                context: "self.a",
                expected: 4,
                found: 3,
            }
            .into())
        );
    }

    #[test]
    #[should_panic(expected = "expected square state matrix")]
    fn test_non_square_matrix_rejected_at_construction() {
        let _ = LinearMotionModel::new(DMatrix::zeros(2, 3));
    }
}
