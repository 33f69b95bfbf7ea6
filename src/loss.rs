use crate::dataset::Sample;
use crate::error::Result;
use crate::network::Network;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }
}

/// Mean squared error of the network's predictions over a whole dataset.
/// Evaluation only; no weights are touched.
pub fn mean_squared_error(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for sample in samples {
        network.check_target(&sample.target)?;
        let output = network.forward(&sample.input)?;
        total += MseLoss::loss(&output, &sample.target);
    }
    Ok(total / samples.len() as f64)
}
