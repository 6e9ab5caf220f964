// statespace_core/src/models/observation/transparent.rs

use std::sync::Mutex;

use crate::dimensions::Dimensions;
use crate::error::{DimensionsError, ValidationError};
use crate::models::observation::{DifferentiableObservationModel, ObservationModel};
use crate::models::{Differentiable, Observable, Stateful, Validate};
use crate::types::{Jacobian, Observation, State};

/// Observation model that reports the state itself: `z'(k) = x'(k)`.
///
/// Only valid in contexts where the state and observation spaces have the
/// same size. Its Jacobian is the identity matrix, memoized per distinct
/// state size since it is reused every step.
#[derive(Debug, Default)]
pub struct TransparentObservationModel {
    // Idempotent cache keyed by the size of the last query; recomputing it
    // redundantly is wasteful but not a hazard.
    identity: Mutex<Option<Jacobian>>,
}

impl TransparentObservationModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stateful for TransparentObservationModel {
    type State = State;
}

impl Observable for TransparentObservationModel {
    type Observation = Observation;
}

impl ObservationModel for TransparentObservationModel {
    fn apply(&self, state: &State) -> Observation {
        state.clone()
    }
}

impl Differentiable for TransparentObservationModel {
    type Jacobian = Jacobian;
}

impl DifferentiableObservationModel for TransparentObservationModel {
    fn jacobian(&self, state: &State) -> Jacobian {
        let mut cache = self
            .identity
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match cache.as_ref() {
            Some(identity) if identity.nrows() == state.len() => identity.clone(),
            _ => {
                let identity = Jacobian::identity(state.len(), state.len());
                *cache = Some(identity.clone());
                identity
            }
        }
    }
}

impl Validate for TransparentObservationModel {
    fn validate(&self, dimensions: &Dimensions) -> Result<(), ValidationError> {
        let observation = dimensions.require_observation()?;

        if dimensions.state() != observation {
            return Err(DimensionsError::InvalidValue {
                context: "observation dimension",
                expected: dimensions.state(),
                found: observation,
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
    fn test_apply_is_identity() {
        let model = TransparentObservationModel::new();
        let x = DVector::from_vec(vec![1.0, -2.0, 3.5]);
        assert_eq!(model.apply(&x), x);
    }

    #[test]
    fn test_jacobian_is_identity_and_follows_size() {
        let model = TransparentObservationModel::new();
        assert_eq!(model.jacobian(&DVector::zeros(2)), Jacobian::identity(2, 2));
        // Memoized value is refreshed when the query size changes.
        assert_eq!(model.jacobian(&DVector::zeros(4)), Jacobian::identity(4, 4));
        assert_eq!(model.jacobian(&DVector::zeros(4)), Jacobian::identity(4, 4));
    }

    #[test]
    fn test_validate_requires_matching_spaces() {
        let model = TransparentObservationModel::new();
        assert!(model
            .validate(&Dimensions::state_only(3).with_observation(3))
            .is_ok());

        let result = model.validate(&Dimensions::state_only(3).with_observation(2));
        assert_eq!(
            result,
            Err(DimensionsError::InvalidValue {
                context: "observation dimension",
                expected: 3,
                found: 2,
            }
            .into())
        );

        // No observation capability at all.
        assert_eq!(
            model.validate(&Dimensions::state_only(3)),
            Err(DimensionsError::InvalidType {
                capability: "observation"
            }
            .into())
        );
    }
}
