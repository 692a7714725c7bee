use serde::{Deserialize, Serialize};

use crate::types::ActivationType;

/// A scalar activation with a derivative usable during backpropagation.
///
/// `df` takes the cached output of `f` for `Sigmoid`, `Tanh` and `Relu`, not the raw input.
pub trait Differentiable: Send + Sync {
    /// Forward transform.
    fn f(&self, x: f64) -> f64;

    /// Local gradient.
    fn df(&self, y: f64) -> f64;
}

/// Logistic function with steepness `a`.
#[inline]
pub fn logistic(x: f64, a: f64) -> f64 {
    1.0 / (1.0 + (-a * x).exp())
}

/// Standard logistic function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Differentiable for Sigmoid {
    #[inline]
    fn f(&self, x: f64) -> f64 {
        logistic(x, 1.0)
    }

    #[inline]
    fn df(&self, y: f64) -> f64 {
        y * (1.0 - y)
    }
}

/// Hyperbolic tangent, computed from exponentials rather than `f64::tanh`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tanh;

impl Differentiable for Tanh {
    #[inline]
    fn f(&self, x: f64) -> f64 {
        (1.0 - (-2.0 * x).exp()) / (1.0 + (-2.0 * x).exp())
    }

    #[inline]
    fn df(&self, y: f64) -> f64 {
        1.0 - y.powi(2)
    }
}

/// Rectified linear unit. The gradient at zero is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Relu;

impl Differentiable for Relu {
    #[inline]
    fn f(&self, x: f64) -> f64 {
        x.max(0.0)
    }

    #[inline]
    fn df(&self, y: f64) -> f64 {
        if y > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

/// Identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Differentiable for Linear {
    #[inline]
    fn f(&self, x: f64) -> f64 {
        x
    }

    #[inline]
    fn df(&self, _x: f64) -> f64 {
        1.0
    }
}

/// An enumeration of the element-wise activations a layer can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    Tanh,
    Relu,
    #[default]
    Linear,
}

impl Activation {
    /// The tag naming this implementation.
    ///
    /// `Softmax` and `None` both resolve to `Linear`, so this is not an inverse of
    /// [`get_activation`](super::get_activation) for those tags.
    pub fn activation_type(&self) -> ActivationType {
        match self {
            Activation::Sigmoid => ActivationType::Sigmoid,
            Activation::Tanh => ActivationType::Tanh,
            Activation::Relu => ActivationType::Relu,
            Activation::Linear => ActivationType::Linear,
        }
    }
}

impl Differentiable for Activation {
    #[inline]
    fn f(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => Sigmoid.f(x),
            Activation::Tanh => Tanh.f(x),
            Activation::Relu => Relu.f(x),
            Activation::Linear => Linear.f(x),
        }
    }

    #[inline]
    fn df(&self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => Sigmoid.df(y),
            Activation::Tanh => Tanh.df(y),
            Activation::Relu => Relu.df(y),
            Activation::Linear => Linear.df(y),
        }
    }
}

impl From<Sigmoid> for Activation {
    fn from(_: Sigmoid) -> Self {
        Activation::Sigmoid
    }
}

impl From<Tanh> for Activation {
    fn from(_: Tanh) -> Self {
        Activation::Tanh
    }
}

impl From<Relu> for Activation {
    fn from(_: Relu) -> Self {
        Activation::Relu
    }
}

impl From<Linear> for Activation {
    fn from(_: Linear) -> Self {
        Activation::Linear
    }
}
