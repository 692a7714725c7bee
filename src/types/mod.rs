//! Tags describing what a network is trained for and which activation a layer uses.
//!
//! Both tags have stable integer values. Converting from an integer is total:
//! anything outside the known range maps to the default tag instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DeepError, Result};

/// The learning task of a network, which decides its output layer activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
#[repr(i32)]
pub enum Mode {
    /// Use default output layer activations
    #[default]
    Default = 0,
    /// Softmax output layer for multiclass classification
    MultiClass = 1,
    /// Linear output layer
    Regression = 2,
    /// Sigmoid output layer for binary classification
    Binary = 3,
    /// Sigmoid output layer with multiclass cross entropy, no softmax
    MultiLabel = 4,
}

impl Mode {
    /// Every mode, in tag order.
    pub const ALL: [Mode; 5] = [
        Mode::Default,
        Mode::MultiClass,
        Mode::Regression,
        Mode::Binary,
        Mode::MultiLabel,
    ];

    /// The stable integer value of this tag.
    #[inline]
    pub fn as_raw(self) -> i64 {
        self as i64
    }

    /// The activation the output layer should use for this task.
    #[inline]
    pub fn output_activation(self) -> ActivationType {
        crate::activations::output_activation(self)
    }

    fn name(self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::MultiClass => "multiclass",
            Mode::Regression => "regression",
            Mode::Binary => "binary",
            Mode::MultiLabel => "multilabel",
        }
    }
}

impl From<i64> for Mode {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Mode::Default,
            1 => Mode::MultiClass,
            2 => Mode::Regression,
            3 => Mode::Binary,
            4 => Mode::MultiLabel,
            _ => {
                debug!("unknown mode tag {}, falling back to {:?}", raw, Mode::Default);
                Mode::Default
            }
        }
    }
}

impl From<Mode> for i64 {
    fn from(mode: Mode) -> Self {
        mode.as_raw()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = DeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Mode::Default),
            "multiclass" | "multi_class" => Ok(Mode::MultiClass),
            "regression" => Ok(Mode::Regression),
            "binary" => Ok(Mode::Binary),
            "multilabel" | "multi_label" => Ok(Mode::MultiLabel),
            _ => Err(DeepError::unknown_mode(s)),
        }
    }
}

/// Identifies a family of activation functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
#[repr(i32)]
pub enum ActivationType {
    /// No dedicated activation
    #[default]
    None = 0,
    /// Logistic function
    Sigmoid = 1,
    /// Hyperbolic tangent
    Tanh = 2,
    /// Rectified linear unit
    Relu = 3,
    /// Identity
    Linear = 4,
    /// Softmax, applied across the layer by the caller
    Softmax = 5,
}

impl ActivationType {
    /// Every activation type, in tag order.
    pub const ALL: [ActivationType; 6] = [
        ActivationType::None,
        ActivationType::Sigmoid,
        ActivationType::Tanh,
        ActivationType::Relu,
        ActivationType::Linear,
        ActivationType::Softmax,
    ];

    /// The stable integer value of this tag.
    #[inline]
    pub fn as_raw(self) -> i64 {
        self as i64
    }

    /// The element-wise implementation used for this tag.
    #[inline]
    pub fn activation(self) -> crate::activations::Activation {
        crate::activations::get_activation(self)
    }

    fn name(self) -> &'static str {
        match self {
            ActivationType::None => "none",
            ActivationType::Sigmoid => "sigmoid",
            ActivationType::Tanh => "tanh",
            ActivationType::Relu => "relu",
            ActivationType::Linear => "linear",
            ActivationType::Softmax => "softmax",
        }
    }
}

impl From<i64> for ActivationType {
    fn from(raw: i64) -> Self {
        match raw {
            0 => ActivationType::None,
            1 => ActivationType::Sigmoid,
            2 => ActivationType::Tanh,
            3 => ActivationType::Relu,
            4 => ActivationType::Linear,
            5 => ActivationType::Softmax,
            _ => {
                debug!(
                    "unknown activation tag {}, falling back to {:?}",
                    raw,
                    ActivationType::None
                );
                ActivationType::None
            }
        }
    }
}

impl From<ActivationType> for i64 {
    fn from(act: ActivationType) -> Self {
        act.as_raw()
    }
}

impl fmt::Display for ActivationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationType {
    type Err = DeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ActivationType::None),
            "sigmoid" => Ok(ActivationType::Sigmoid),
            "tanh" => Ok(ActivationType::Tanh),
            "relu" => Ok(ActivationType::Relu),
            "linear" => Ok(ActivationType::Linear),
            "softmax" => Ok(ActivationType::Softmax),
            _ => Err(DeepError::unknown_activation_type(s)),
        }
    }
}
