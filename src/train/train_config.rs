/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — scale factor applied to every weight update
/// - `log_every`     — if `Some(n)`, print the training-set loss every `n`
///                     epochs; `None` keeps the trainer silent
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: Option<usize>,
}

impl TrainConfig {
    /// Creates a silent `TrainConfig` (no progress lines).
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: None,
        }
    }

    /// Enables a loss line every `every` epochs.
    pub fn with_log(mut self, every: usize) -> Self {
        self.log_every = Some(every);
        self
    }
}
