//! Interpretation side of a tarot reading.
//!
//! Builds the structured request describing a finished spread and sends it
//! to a text-generation service through the [`Interpreter`] trait. A Gemini
//! client is provided; anything else can plug in behind the same trait.

pub mod config;
pub mod error;
pub mod gemini;
pub mod interpreter;
pub mod request;

pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use gemini::GeminiInterpreter;
pub use interpreter::Interpreter;
pub use request::{InterpretationRequest, build_request};
