pub mod client;
pub mod fallback;
pub mod models;

pub use client::{InferenceClient, InferenceError};
pub use fallback::FallbackPredictor;
pub use models::PredictionResult;
