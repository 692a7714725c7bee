use crate::activations::{logistic, Activation, Differentiable, Linear, Relu, Sigmoid, Tanh};

#[test]
fn test_sigmoid_activation() {
    assert_eq!(Sigmoid.f(0.0), 0.5);
    assert!(Sigmoid.f(10.0) > 0.99 && Sigmoid.f(10.0) < 1.0);
    assert!(Sigmoid.f(-10.0) > 0.0 && Sigmoid.f(-10.0) < 0.01);
}

#[test]
fn test_sigmoid_saturates() {
    assert_eq!(Sigmoid.f(1000.0), 1.0);
    assert_eq!(Sigmoid.f(-1000.0), 0.0);
}

#[test]
fn test_sigmoid_derivative_uses_output() {
    assert_eq!(Sigmoid.df(0.5), 0.25);
    assert_eq!(Sigmoid.df(0.0), 0.0);
    assert_eq!(Sigmoid.df(1.0), 0.0);
    assert!((Sigmoid.df(0.2) - 0.16).abs() < 1e-12);
}

#[test]
fn test_sigmoid_forward_then_backward() {
    let y = Sigmoid.f(0.0);
    assert_eq!(y, 0.5);
    assert_eq!(Sigmoid.df(y), 0.25);
}

#[test]
fn test_logistic_steepness() {
    assert_eq!(logistic(0.0, 3.0), 0.5);
    assert_eq!(logistic(2.0, 1.0), Sigmoid.f(2.0));
    assert!(logistic(1.0, 5.0) > logistic(1.0, 1.0));
    assert_eq!(logistic(7.0, 0.0), 0.5);
}

#[test]
fn test_tanh_activation() {
    assert_eq!(Tanh.f(0.0), 0.0);
    for &x in &[0.1, 0.5, 1.0, 2.5, 7.0] {
        assert!((Tanh.f(x) - x.tanh()).abs() < 1e-12);
        assert!((Tanh.f(-x) + Tanh.f(x)).abs() < 1e-12);
    }
}

#[test]
fn test_tanh_extreme_inputs() {
    // e^(-2x) overflows for very negative x and the quotient is inf/inf
    assert!(Tanh.f(-400.0).is_nan());
    assert_eq!(Tanh.f(400.0), 1.0);
    assert_eq!(Tanh.f(-300.0), -1.0);
}

#[test]
fn test_tanh_derivative_uses_output() {
    assert_eq!(Tanh.df(0.0), 1.0);
    assert_eq!(Tanh.df(0.5), 0.75);
    assert_eq!(Tanh.df(-0.5), 0.75);
    assert_eq!(Tanh.df(1.0), 0.0);
}

#[test]
fn test_relu_activation() {
    assert_eq!(Relu.f(-5.0), 0.0);
    assert_eq!(Relu.f(5.0), 5.0);
    assert_eq!(Relu.f(0.0), 0.0);
}

#[test]
fn test_relu_derivative_at_kink() {
    assert_eq!(Relu.df(0.0), 0.0);
    assert_eq!(Relu.df(0.0001), 1.0);
    assert_eq!(Relu.df(-0.0001), 0.0);
}

#[test]
fn test_linear_activation() {
    for &x in &[-3.25, 0.0, 1e-9, 42.0, f64::MAX] {
        assert_eq!(Linear.f(x), x);
        assert_eq!(Linear.df(x), 1.0);
    }
    assert_eq!(Linear.df(f64::NAN), 1.0);
}

#[test]
fn test_enum_dispatch_matches_unit_types() {
    let inputs = [-2.0, -0.3, 0.0, 0.3, 2.0];
    for &x in &inputs {
        assert_eq!(Activation::Sigmoid.f(x), Sigmoid.f(x));
        assert_eq!(Activation::Tanh.f(x), Tanh.f(x));
        assert_eq!(Activation::Relu.f(x), Relu.f(x));
        assert_eq!(Activation::Linear.f(x), Linear.f(x));

        assert_eq!(Activation::Sigmoid.df(x), Sigmoid.df(x));
        assert_eq!(Activation::Tanh.df(x), Tanh.df(x));
        assert_eq!(Activation::Relu.df(x), Relu.df(x));
        assert_eq!(Activation::Linear.df(x), Linear.df(x));
    }
}

#[test]
fn test_generic_use_of_trait() {
    fn backprop_step<A: Differentiable>(act: &A, x: f64, upstream: f64) -> f64 {
        let y = act.f(x);
        upstream * act.df(y)
    }

    assert_eq!(backprop_step(&Sigmoid, 0.0, 2.0), 0.5);
    assert_eq!(backprop_step(&Relu, -1.0, 2.0), 0.0);
    assert_eq!(backprop_step(&Activation::Linear, 9.0, 2.0), 2.0);

    let boxed: Vec<Box<dyn Differentiable>> = vec![Box::new(Tanh), Box::new(Relu)];
    assert_eq!(boxed[0].f(0.0), 0.0);
    assert_eq!(boxed[1].f(3.0), 3.0);
}

#[test]
fn test_unit_types_convert_into_enum() {
    assert_eq!(Activation::from(Sigmoid), Activation::Sigmoid);
    assert_eq!(Activation::from(Tanh), Activation::Tanh);
    assert_eq!(Activation::from(Relu), Activation::Relu);
    assert_eq!(Activation::from(Linear), Activation::Linear);
    assert_eq!(Activation::default(), Activation::Linear);
}
