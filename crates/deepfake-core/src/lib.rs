//! Deepfake Core Library
//!
//! Domain models, the scoring capability and request handling for the
//! deepfake analysis service.

pub mod analysis;
pub mod config;
pub mod error;
pub mod scorer;

pub use config::Settings;
pub use error::{CoreError, CoreResult};
pub use scorer::{MockScorer, Scorer};
