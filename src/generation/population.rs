//! A generation's worth of exclusively owned entities.
//!
//! The population is the only owner of its entities: they are created by the
//! generator inside [`Population::regenerate`] and dropped by a deluge
//! ([`Population::clear`]), by the next regeneration, or when the population
//! itself goes out of scope. Nothing can be moved out of it.

use crate::error::{GaError, Result};
use crate::generation::progress::{ProgressCallback, SilentProgress};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Produces one new entity per call, or fails.
pub type Generator<E> = Box<dyn FnMut() -> anyhow::Result<E>>;

pub struct Population<E> {
    entities: Vec<E>,
    generator: Generator<E>,
    generation: usize,
    progress: Box<dyn ProgressCallback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopulationSummary {
    pub generation: usize,
    pub size: usize,
}

impl<E> Population<E> {
    /// Build a population of `size` entities, calling `generator` once per slot.
    pub fn new<G>(size: usize, generator: G) -> Result<Self>
    where
        G: FnMut() -> anyhow::Result<E> + 'static,
    {
        Self::with_progress(size, generator, SilentProgress)
    }

    pub fn with_progress<G, C>(size: usize, generator: G, progress: C) -> Result<Self>
    where
        G: FnMut() -> anyhow::Result<E> + 'static,
        C: ProgressCallback + 'static,
    {
        let mut population = Self {
            entities: Vec::with_capacity(size),
            generator: Box::new(generator),
            generation: 0,
            progress: Box::new(progress),
        };
        population.regenerate(size)?;
        Ok(population)
    }

    /// Drop every entity, then refill with `size` fresh ones in slot order.
    ///
    /// If the generator fails, whatever this pass already produced is dropped
    /// as well and the population is left empty.
    pub fn regenerate(&mut self, size: usize) -> Result<()> {
        self.clear();
        self.entities.reserve(size);

        for index in 0..size {
            match (self.generator)() {
                Ok(entity) => {
                    self.entities.push(entity);
                    self.progress.on_entity_created(index, size);
                }
                Err(source) => {
                    warn!(
                        "Generator failed on slot {} of {}: {:#}",
                        index + 1,
                        size,
                        source
                    );
                    self.progress.on_generation_failed(index, &source);
                    self.clear();
                    return Err(GaError::EntityCreation { index, source });
                }
            }
        }

        self.generation += 1;
        debug!(
            "Generation {} filled with {} entities",
            self.generation, size
        );
        self.progress.on_generation_complete(self.generation, size);
        Ok(())
    }

    /// Deluge: drop every owned entity. A no-op on an empty population.
    pub fn clear(&mut self) {
        if self.entities.is_empty() {
            return;
        }
        let released = self.entities.len();
        // Vec::clear drops each element exactly once and forgets it.
        self.entities.clear();
        debug!("Deluge released {} entities", released);
        self.progress.on_deluge(released);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of successful fills so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.entities.get(index)
    }

    /// Mutable access for in-place edits of a live entity.
    ///
    /// Callers must not swap in a value of their own (e.g. `std::mem::replace`):
    /// every slot is expected to hold something the generator produced, and
    /// only a regeneration may put new entities in.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.entities.get_mut(index)
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities.iter()
    }

    /// In-place edits of every entity; the same rule as [`Population::get_mut`] applies.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.entities.iter_mut()
    }

    pub fn summary(&self) -> PopulationSummary {
        PopulationSummary {
            generation: self.generation,
            size: self.entities.len(),
        }
    }
}

impl<E> Drop for Population<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> fmt::Debug for Population<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("generation", &self.generation)
            .field("len", &self.entities.len())
            .finish_non_exhaustive()
    }
}

impl<'a, E> IntoIterator for &'a Population<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// See [`Population::get_mut`] for what callers may do with the references.
impl<'a, E> IntoIterator for &'a mut Population<E> {
    type Item = &'a mut E;
    type IntoIter = std::slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter_mut()
    }
}
