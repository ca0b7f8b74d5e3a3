pub mod kan;
pub mod linear;
