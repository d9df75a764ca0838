use crate::train::epoch_stats::EpochStats;
use log::{debug, info};
use std::sync::mpsc;

/// Receives the statistics of every completed epoch.
pub trait EpochReporter {
    fn report(&mut self, stats: &EpochStats);
}

/// Reports each epoch through `log::info!` as `"<epoch> Loss : <loss>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl EpochReporter for LogReporter {
    fn report(&mut self, stats: &EpochStats) {
        info!("{} Loss : {}", stats.epoch, stats.loss);
    }
}

/// Adapts a closure into an [`EpochReporter`].
///
/// ```
/// use valuegrad_core::train::{EpochReporter, EpochStats, FnReporter};
///
/// let mut seen = Vec::new();
/// let mut reporter = FnReporter(|s: &EpochStats| seen.push(s.loss));
/// reporter.report(&EpochStats { epoch: 0, total_epochs: 1, loss: 0.5 });
/// drop(reporter);
/// assert_eq!(seen, vec![0.5]);
/// ```
pub struct FnReporter<F>(pub F);

impl<F: FnMut(&EpochStats)> EpochReporter for FnReporter<F> {
    fn report(&mut self, stats: &EpochStats) {
        (self.0)(stats)
    }
}

/// Collects every epoch's statistics.
impl EpochReporter for Vec<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        self.push(*stats);
    }
}

/// Forwards statistics over a channel. A dropped receiver does not stop training.
impl EpochReporter for mpsc::Sender<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        if self.send(*stats).is_err() {
            debug!("epoch {} not delivered: receiver dropped", stats.epoch);
        }
    }
}

#[cfg(test)]
#[path = "reporter_test.rs"]
mod tests;
