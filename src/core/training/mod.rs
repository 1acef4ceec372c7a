pub mod observer;
pub mod trainer;

pub use observer::{EpochProgress, LogObserver, SilentObserver, TrainingObserver};
pub use trainer::TrainingReport;
