pub mod yin_yang;

pub use yin_yang::{generate_yin_yang, Point, YinYangSplits};
