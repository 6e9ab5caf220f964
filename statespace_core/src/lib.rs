// statespace_core/src/lib.rs

// This file defines the public modules of the library.
pub mod dimensions;
pub mod error;
pub mod jacobian;
pub mod models;
pub mod noise;
pub mod prelude;
pub mod types;
