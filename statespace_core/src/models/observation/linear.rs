// statespace_core/src/models/observation/linear.rs

use nalgebra::DMatrix;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, ValidationError};
use crate::models::observation::{DifferentiableObservationModel, ObservationModel};
use crate::models::{Differentiable, Observable, Stateful, Validate};
use crate::types::{Jacobian, Observation, State};

/// Linear observation model `z'(k) = H * x'(k)` with `H` of shape
/// `observation x state`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearObservationModel {
    h: DMatrix<f64>,
}

impl LinearObservationModel {
    pub fn new(h: DMatrix<f64>) -> Self {
        Self { h }
    }

    pub fn observation_matrix(&self) -> &DMatrix<f64> {
        &self.h
    }
}

impl Stateful for LinearObservationModel {
    type State = State;
}

impl Observable for LinearObservationModel {
    type Observation = Observation;
}

impl ObservationModel for LinearObservationModel {
    fn apply(&self, state: &State) -> Observation {
        &self.h * state
    }
}

impl Differentiable for LinearObservationModel {
    type Jacobian = Jacobian;
}

impl DifferentiableObservationModel for LinearObservationModel {
    fn jacobian(&self, _state: &State) -> Jacobian {
        self.h.clone()
    }
}

impl Validate for LinearObservationModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        let observation = dimensions.require_observation()?;

        if self.h.ncols() != dimensions.state() {
            return Err(MatrixError::InvalidColumnCount {
                context: "self.h",
                expected: dimensions.state(),
                found: self.h.ncols(),
            }
            .into());
        }

        if self.h.nrows() != observation {
            return Err(MatrixError::InvalidRowCount {
                context: "self.h",
                expected: observation,
                found: self.h.nrows(),
            }
            .into());
        }

        Ok(())
    }
}
