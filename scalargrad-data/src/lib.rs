//! Datasets for scalargrad: the `Dataset` trait, an in-memory `VecDataset`, a
//! seedable xorshift generator and the Yin-Yang classification problem.

pub mod dataset;
pub mod datasets;
pub mod rng;
pub mod vec_dataset;

pub use dataset::Dataset;
pub use datasets::yin_yang::{generate_yin_yang, Point, YinYangSplits};
pub use rng::XorShiftRng;
pub use vec_dataset::VecDataset;
