use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::autograd::{topological_sort, zero_grad_reachable};
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{classification_loss, LabeledSample, Module};
use scalargrad_core::{ScalarGradError, Value};

mod common;
use common::init_logger;

#[test]
fn test_network_gradient_matches_finite_differences() -> Result<(), ScalarGradError> {
    init_logger();
    let model = Mlp::new(2, &[3, 2], &mut StdRng::seed_from_u64(3))?;
    let samples = [
        LabeledSample::new(vec![0.2, -0.4], 0),
        LabeledSample::new(vec![-0.7, 0.9], 1),
    ];
    let params = model.parameters();
    let point: Vec<f64> = params.iter().map(Value::value).collect();

    classification_loss(&model, &samples)?.backward();
    let analytical: Vec<f64> = params.iter().map(Value::grad).collect();

    // Central differences, one parameter at a time.
    let eps = 1e-6;
    for (i, p) in params.iter().enumerate() {
        p.set_value(point[i] + eps);
        let plus = classification_loss(&model, &samples)?.value();
        p.set_value(point[i] - eps);
        let minus = classification_loss(&model, &samples)?.value();
        p.set_value(point[i]);

        assert_abs_diff_eq!(analytical[i], (plus - minus) / (2.0 * eps), epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_loss_graph_is_rebuilt_each_step() -> Result<(), ScalarGradError> {
    init_logger();
    let model = Mlp::new(2, &[2], &mut StdRng::seed_from_u64(0))?;
    let samples = [LabeledSample::new(vec![1.0, 1.0], 1)];

    let first = classification_loss(&model, &samples)?;
    let second = classification_loss(&model, &samples)?;

    assert_ne!(first.id(), second.id());
    assert_eq!(
        topological_sort(&first).len(),
        topological_sort(&second).len()
    );

    first.backward();
    zero_grad_reachable(&first);
    assert!(model.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}
