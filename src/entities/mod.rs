pub mod params;

pub use params::{params_generator, Params};
