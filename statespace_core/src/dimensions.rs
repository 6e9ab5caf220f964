// statespace_core/src/dimensions.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DimensionsError;

/// Describes the sizes of the state, control and observation spaces of a
/// state-space modeling context.
///
/// "In control engineering, a state-space representation is a mathematical
/// model of a physical system as a set of input, output and state variables
/// related by first-order differential equations or difference equations."
/// – [Wikipedia](https://en.wikipedia.org/wiki/State-space_representation)
///
/// The descriptor is an immutable value: construct it once per modeling
/// context and pass it to [`Validate::validate`](crate::models::Validate::validate)
/// for every model used in that context. A `control` or `observation` size
/// of zero means the context does not carry that capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    state: usize,
    control: usize,
    observation: usize,
}

impl Dimensions {
    /// A state-only context. `state` must be at least 1.
    pub fn state_only(state: usize) -> Self {
        assert!(state >= 1, "state dimension must be at least 1");
        Self {
            state,
            control: 0,
            observation: 0,
        }
    }

    /// Adds a control space of the given size. `control` must be at least 1.
    #[must_use]
    pub fn with_control(mut self, control: usize) -> Self {
        assert!(control >= 1, "control dimension must be at least 1");
        self.control = control;
        self
    }

    /// Adds an observation space of the given size. `observation` must be at least 1.
    #[must_use]
    pub fn with_observation(mut self, observation: usize) -> Self {
        assert!(observation >= 1, "observation dimension must be at least 1");
        self.observation = observation;
        self
    }

    /// The size of the state space. Always at least 1.
    pub fn state(&self) -> usize {
        self.state
    }

    /// The size of the control space, or zero when the context is uncontrolled.
    pub fn control(&self) -> usize {
        self.control
    }

    /// The size of the observation space, or zero when the context is unobserved.
    pub fn observation(&self) -> usize {
        self.observation
    }

    /// The control size, or [`DimensionsError::InvalidType`] when the context
    /// carries no control capability. This is the runtime boundary models use
    /// during validation; everywhere else capabilities are expressed through
    /// the role traits.
    pub fn require_control(&self) -> Result<usize, DimensionsError> {
        if self.control == 0 {
            return Err(DimensionsError::InvalidType {
                capability: "control",
            });
        }
        Ok(self.control)
    }

    /// The observation size, or [`DimensionsError::InvalidType`] when the
    /// context carries no observation capability.
    pub fn require_observation(&self) -> Result<usize, DimensionsError> {
        if self.observation == 0 {
            return Err(DimensionsError::InvalidType {
                capability: "observation",
            });
        }
        Ok(self.observation)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ state: {}", self.state)?;
        if self.control > 0 {
            write!(f, ", control: {}", self.control)?;
        }
        if self.observation > 0 {
            write!(f, ", observation: {}", self.observation)?;
        }
        write!(f, " }}")
    }
}
