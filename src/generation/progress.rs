use log::{debug, info, warn};

/// Hooks into a population's lifecycle. Every method defaults to a no-op.
pub trait ProgressCallback {
    /// `released` entities were just dropped by a deluge.
    fn on_deluge(&mut self, _released: usize) {}

    /// Slot `index` of a `total`-sized generation was filled.
    fn on_entity_created(&mut self, _index: usize, _total: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _size: usize) {}

    /// The generator failed while filling slot `index`.
    fn on_generation_failed(&mut self, _index: usize, _error: &anyhow::Error) {}
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {}

/// Reports lifecycle events through the `log` facade.
pub struct LogProgressCallback {
    report_every: usize,
}

impl LogProgressCallback {
    pub fn new() -> Self {
        Self { report_every: 10 }
    }

    /// Emit an entity-created line every `n` slots (and on the last one).
    pub fn report_every(mut self, n: usize) -> Self {
        self.report_every = n.max(1);
        self
    }
}

impl Default for LogProgressCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_deluge(&mut self, released: usize) {
        info!("Deluge: released {} entities", released);
    }

    fn on_entity_created(&mut self, index: usize, total: usize) {
        let created = index + 1;
        if created % self.report_every == 0 || created == total {
            debug!("  Created {}/{} entities", created, total);
        }
    }

    fn on_generation_complete(&mut self, generation: usize, size: usize) {
        info!("Generation {} complete with {} entities", generation, size);
    }

    fn on_generation_failed(&mut self, index: usize, error: &anyhow::Error) {
        warn!("Generation aborted at slot {}: {:#}", index, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_interval_is_at_least_one() {
        assert_eq!(LogProgressCallback::new().report_every(0).report_every, 1);
        assert_eq!(LogProgressCallback::default().report_every(25).report_every, 25);
    }

    #[test]
    fn log_callback_handles_every_event() {
        let mut callback = LogProgressCallback::new().report_every(2);
        for index in 0..5 {
            callback.on_entity_created(index, 5);
        }
        callback.on_generation_complete(1, 5);
        callback.on_deluge(5);
        callback.on_generation_failed(0, &anyhow::anyhow!("no entity"));
    }
}
