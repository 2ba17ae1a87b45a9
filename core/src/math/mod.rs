pub mod bounds;
pub mod transform;

pub use bounds::Bounds;
pub use transform::Affine;
