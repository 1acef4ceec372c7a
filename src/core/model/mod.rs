pub mod config;
pub mod rbm;
pub mod state;

pub use config::{RbmConfig, DEFAULT_LEARNING_RATE, DEFAULT_MAX_EPOCHS, DEFAULT_WEIGHT_INIT_STD};
pub use rbm::Rbm;
pub use state::RbmState;

#[cfg(test)]
mod __tests__;
