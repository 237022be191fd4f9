pub mod uniform;

pub use uniform::UniformSource;
