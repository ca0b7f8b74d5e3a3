use scalargrad_core::nn::LabeledSample;

// Shared by several test crates; not every helper is used by each.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Two linearly separable classes along a diagonal: label 1 iff x + y > 1.
#[allow(dead_code)]
pub(crate) fn separable_samples(n: usize) -> Vec<LabeledSample> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let x = t;
            let y = (t * 7.0).fract();
            let label = usize::from(x + y > 1.0);
            LabeledSample::new(vec![x, y], label)
        })
        .collect()
}
