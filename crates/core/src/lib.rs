#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod timing;

pub use error::ModelError;
