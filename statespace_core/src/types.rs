// statespace_core/src/types.rs

use nalgebra::{DMatrix, DVector};

// --- Core Type Aliases ---
pub type State = DVector<f64>;
pub type Control = DVector<f64>;
pub type Observation = DVector<f64>;
pub type Jacobian = DMatrix<f64>;
