//! # Activation Functions Module
//!
//! Scalar activation functions and their derivatives, plus the lookups that pick one
//! for a layer.
//!
//! ## Available Activations
//!
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Tanh**: `(1 - e^(-2x)) / (1 + e^(-2x))` - Outputs between -1 and 1
//! - **ReLU** (Rectified Linear Unit): `max(0, x)`
//! - **Linear**: Identity function - No transformation
//!
//! Derivatives of Sigmoid, Tanh and ReLU are expressed in terms of the forward output,
//! so pass the cached activation value to `df`, not the input.
//!
//! ## Usage Example
//!
//! ```rust
//! use deep::activations::{get_activation, output_activation, Differentiable};
//! use deep::types::{ActivationType, Mode};
//!
//! let act = output_activation(Mode::Binary);
//! assert_eq!(act, ActivationType::Sigmoid);
//!
//! let sigmoid = get_activation(act);
//! let y = sigmoid.f(0.0);
//! assert_eq!(y, 0.5);
//! assert_eq!(sigmoid.df(y), 0.25);
//! ```
//!
//! ## Choosing an Output Activation
//!
//! - Multi-class classification: Softmax (applied externally, element-wise it is Linear)
//! - Regression: Linear
//! - Binary classification and multi-label: Sigmoid

pub mod functions;
mod resolve;

pub use functions::{logistic, Activation, Differentiable, Linear, Relu, Sigmoid, Tanh};
pub use resolve::{get_activation, get_activation_raw, output_activation, output_activation_raw};
