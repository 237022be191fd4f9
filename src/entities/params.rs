use crate::random::UniformSource;
use serde::{Deserialize, Serialize};

/// A point in a two-parameter search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    x: f64,
    y: f64,
}

impl Params {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Draws `x` first, then `y`.
    pub fn random(source: &mut UniformSource) -> Self {
        let x = source.sample();
        let y = source.sample();
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Generator for a [`Population`](crate::generation::Population) of random `Params`.
pub fn params_generator(mut source: UniformSource) -> impl FnMut() -> anyhow::Result<Params> {
    move || Ok(Params::random(&mut source))
}
