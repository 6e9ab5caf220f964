// statespace_core/src/models/control/linear.rs

use nalgebra::DMatrix;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, ValidationError};
use crate::models::control::ControlModel;
use crate::models::{Controllable, Stateful, Validate};
use crate::types::{Control, State};

/// Linear control model `x'(k) = B * u(k)`.
///
/// Usable standalone or as the control contribution inside a
/// control-augmented motion model. Control acts additively in state space,
/// so validation checks `B` square against the state size.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearControlModel {
    b: DMatrix<f64>,
}

impl LinearControlModel {
    pub fn new(b: DMatrix<f64>) -> Self {
        Self { b }
    }

    pub fn control_matrix(&self) -> &DMatrix<f64> {
        &self.b
    }
}

impl Stateful for LinearControlModel {
    type State = State;
}

impl Controllable for LinearControlModel {
    type Control = Control;
}

impl ControlModel for LinearControlModel {
    fn apply(&self, control: &Control) -> State {
        &self.b * control
    }
}

impl Validate for LinearControlModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        if self.b.ncols() != dimensions.state() {
            return Err(MatrixError::InvalidColumnCount {
                context: "self.b",
                expected: dimensions.state(),
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
