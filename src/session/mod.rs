//! Session lifecycle and errors

pub mod controller;
pub mod error;

pub use controller::GestureSession;
pub use error::{GestureError, GestureResult};
