// statespace_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::dimensions::Dimensions;
pub use crate::error::{DimensionsError, MatrixError, ValidationError, VectorError};
pub use crate::models::control::ControlModel;
pub use crate::models::motion::{
    ControllableDifferentiableMotionModel, ControllableMotionModel, DifferentiableMotionModel,
    MotionModel,
};
pub use crate::models::observation::{DifferentiableObservationModel, ObservationModel};
pub use crate::models::{Controllable, Differentiable, Observable, Stateful, Validate};
pub use crate::noise::{GaussianNoise, NoiseSource};
pub use crate::types::{Control, Jacobian, Observation, State};

// --- Concrete Model Implementations (Export common ones for convenience) ---
pub use crate::jacobian::NumericJacobian;
pub use crate::models::control::LinearControlModel;
pub use crate::models::motion::{
    BrownianMotionModel, ControllableLinearMotionModel, ControllableNonlinearMotionModel,
    LinearMotionModel, NonlinearMotionModel, ZeroMotionModel,
};
pub use crate::models::observation::{
    LinearObservationModel, NonlinearObservationModel, TransparentObservationModel,
};
