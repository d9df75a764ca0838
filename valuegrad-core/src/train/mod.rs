//! Full-batch gradient-descent training for [`Mlp`](crate::model::Mlp).

pub mod epoch_stats;
pub mod loop_fn;
pub mod reporter;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use loop_fn::train;
pub use reporter::{EpochReporter, FnReporter, LogReporter};
pub use train_config::TrainConfig;
