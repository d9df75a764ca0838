/// Per-epoch training statistics emitted by [`train`](crate::train::train).
///
/// One value is produced at the end of every completed epoch and handed to the
/// configured [`EpochReporter`](crate::train::EpochReporter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum of squared errors over the whole training set, measured before this epoch's update.
    pub loss: f64,
}

impl EpochStats {
    pub fn is_last(&self) -> bool {
        self.epoch + 1 == self.total_epochs
    }
}
