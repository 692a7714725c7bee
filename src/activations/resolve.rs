use super::functions::Activation;
use crate::types::{ActivationType, Mode};

/// Output layer activation for a learning task.
///
/// `Default` and any tag without a dedicated output layer resolve to `ActivationType::None`.
pub fn output_activation(mode: Mode) -> ActivationType {
    match mode {
        Mode::MultiClass => ActivationType::Softmax,
        Mode::Regression => ActivationType::Linear,
        Mode::Binary | Mode::MultiLabel => ActivationType::Sigmoid,
        _ => ActivationType::None,
    }
}

/// Same as [`output_activation`], for a raw integer tag.
pub fn output_activation_raw(mode: i64) -> ActivationType {
    output_activation(Mode::from(mode))
}

/// Element-wise implementation for an activation tag.
///
/// Softmax maps to `Linear`: its gradient is folded into the cross entropy loss by the
/// caller, so the per-element derivative is the identity's. `None` and anything
/// unrecognized also map to `Linear`.
pub fn get_activation(act: ActivationType) -> Activation {
    match act {
        ActivationType::Sigmoid => Activation::Sigmoid,
        ActivationType::Tanh => Activation::Tanh,
        ActivationType::Relu => Activation::Relu,
        ActivationType::Linear => Activation::Linear,
        ActivationType::Softmax | ActivationType::None => Activation::Linear,
    }
}

/// Same as [`get_activation`], for a raw integer tag.
pub fn get_activation_raw(act: i64) -> Activation {
    get_activation(ActivationType::from(act))
}
