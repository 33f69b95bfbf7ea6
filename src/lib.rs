pub mod activation;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use dataset::{xor_samples, Sample};
pub use error::{Error, Result};
pub use loss::{mean_squared_error, MseLoss};
pub use network::Network;
pub use train::{train, TrainConfig};
