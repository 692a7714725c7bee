//! # Deep - Activation Functions for Neural Networks
//!
//! Per-neuron activation functions with their derivatives, and the lookups a network
//! uses to pick them: from the learning task to the output layer activation, and from
//! an activation tag to its implementation.
//!
//! Every function here is pure and total. Unknown tags fall back to a default instead
//! of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use deep::activations::Differentiable;
//! use deep::types::Mode;
//!
//! let output = Mode::Regression.output_activation().activation();
//! assert_eq!(output.f(3.5), 3.5);
//! assert_eq!(output.df(3.5), 1.0);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions (Sigmoid, Tanh, ReLU, Linear) and resolvers
//! - [`error`] - Error types and result handling
//! - [`types`] - `Mode` and `ActivationType` tags

#[macro_use]
extern crate log;

pub mod activations;
pub mod error;
pub mod types;

pub use activations::{
    get_activation, get_activation_raw, logistic, output_activation, output_activation_raw,
    Activation, Differentiable,
};
pub use error::{DeepError, Result};
pub use types::{ActivationType, Mode};

#[cfg(test)]
mod tests;
