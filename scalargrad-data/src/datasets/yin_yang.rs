//! The Yin-Yang dataset: points in the unit disk centred at `(0.5, 0.5)`,
//! labelled as yin (0), yang (1) or one of the two dots (2).

use log::debug;
use rand::Rng;
use scalargrad_core::nn::LabeledSample;
use scalargrad_core::ScalarGradError;

use crate::dataset::Dataset;
use crate::vec_dataset::VecDataset;

/// Radius of the two dots.
pub const R_SMALL: f32 = 0.1;
/// Radius of the disk.
pub const R_BIG: f32 = 0.5;
pub const NUM_CLASSES: usize = 3;

/// A labelled point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub class: usize,
}

impl From<Point> for LabeledSample {
    fn from(point: Point) -> Self {
        LabeledSample::new(vec![f64::from(point.x), f64::from(point.y)], point.class)
    }
}

/// Train/validation/test partitions of a generated dataset, 80/10/10.
#[derive(Debug, Clone)]
pub struct YinYangSplits {
    pub train: VecDataset<Point>,
    pub val: VecDataset<Point>,
    pub test: VecDataset<Point>,
}

impl YinYangSplits {
    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Converts every point of a split into a [`LabeledSample`].
pub fn to_labeled_samples(points: &VecDataset<Point>) -> Vec<LabeledSample> {
    points.iter().copied().map(LabeledSample::from).collect()
}

fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt()
}

/// Class of a point inside the disk.
pub fn classify(x: f32, y: f32) -> usize {
    let d_right = dist(x, y, 1.5 * R_BIG, R_BIG);
    let d_left = dist(x, y, 0.5 * R_BIG, R_BIG);

    let is_circle = d_right < R_SMALL || d_left < R_SMALL;
    let is_yin = d_right <= R_SMALL
        || (d_left > R_SMALL && d_left <= 0.5 * R_BIG)
        || (y > R_BIG && d_right > 0.5 * R_BIG);

    if is_circle {
        2
    } else if is_yin {
        0
    } else {
        1
    }
}

/// Draws a point uniformly from the disk until it falls in `class`.
fn sample_point<R: Rng + ?Sized>(rng: &mut R, class: usize) -> Point {
    loop {
        let x = uniform(rng, 0.0, 2.0 * R_BIG);
        let y = uniform(rng, 0.0, 2.0 * R_BIG);
        if dist(x, y, R_BIG, R_BIG) > R_BIG {
            continue;
        }
        if classify(x, y) == class {
            return Point { x, y, class };
        }
    }
}

// `a + (b - a) * u` with `u` the 24-bit float from `Standard`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    a + (b - a) * rng.gen::<f32>()
}

/// Generates `n` points, the `i`-th forced into class `i % 3`, and splits them
/// 80/10/10 in generation order.
///
/// # Errors
/// `ConfigurationError` if `n == 0`.
pub fn generate_yin_yang<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<YinYangSplits, ScalarGradError> {
    if n == 0 {
        return Err(ScalarGradError::ConfigurationError(
            "Yin-Yang dataset needs at least one point".to_string(),
        ));
    }

    let mut points: Vec<Point> = (0..n).map(|i| sample_point(rng, i % NUM_CLASSES)).collect();

    let train_end = n * 8 / 10;
    let val_end = n * 9 / 10;
    let test = points.split_off(val_end);
    let val = points.split_off(train_end);
    debug!(
        "Yin-Yang: {} points split {}/{}/{}",
        n,
        points.len(),
        val.len(),
        test.len()
    );

    Ok(YinYangSplits {
        train: VecDataset::new(points),
        val: VecDataset::new(val),
        test: VecDataset::new(test),
    })
}

#[cfg(test)]
#[path = "yin_yang_test.rs"]
mod tests;
