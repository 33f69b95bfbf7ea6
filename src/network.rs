use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::error::{Error, Result};

/// A fixed-shape perceptron with one sigmoid hidden layer and a sigmoid
/// output layer. The struct owns every weight exclusively; it is both the
/// architecture and the trained state.
///
/// `hidden_weights[i][j]` connects input unit `i` to hidden unit `j`;
/// `output_weights[i][j]` connects hidden unit `i` to output unit `j`.
/// Dimensions never change after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub hidden_weights: Vec<Vec<f64>>,
    pub hidden_bias: Vec<f64>,
    pub output_weights: Vec<Vec<f64>>,
    pub output_bias: Vec<f64>,
}

impl Network {
    /// Builds a network with every weight and bias drawn uniformly from
    /// [-0.5, 0.5). Rejects any zero layer size.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Result<Network> {
        Network::with_rng(input_size, hidden_size, output_size, &mut rand::thread_rng())
    }

    /// Same as `new`, but samples the initial weights from the supplied
    /// generator so construction can be made deterministic under a fixed seed.
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Network> {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(Error::ZeroLayerSize);
        }

        let mut uniform = || rng.gen::<f64>() - 0.5;

        let hidden_weights = (0..input_size)
            .map(|_| (0..hidden_size).map(|_| uniform()).collect())
            .collect();
        let output_weights = (0..hidden_size)
            .map(|_| (0..output_size).map(|_| uniform()).collect())
            .collect();
        let hidden_bias = (0..hidden_size).map(|_| uniform()).collect();
        let output_bias = (0..output_size).map(|_| uniform()).collect();

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            hidden_weights,
            hidden_bias,
            output_weights,
            output_bias,
        })
    }

    /// Forward pass: sigmoid hidden layer, then sigmoid output layer.
    /// Returns the full output vector; the XOR driver reads index 0.
    ///
    /// Pure with respect to the network: no state is touched, so the same
    /// input always yields bit-identical output until the next `train` call.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.check_input(inputs)?;
        let hidden = self.hidden_activations(inputs);
        Ok(self.output_activations(&hidden))
    }

    pub(crate) fn check_input(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_size {
            return Err(Error::DimensionMismatch {
                expected: self.input_size,
                got: inputs.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_target(&self, target: &[f64]) -> Result<()> {
        if target.len() != self.output_size {
            return Err(Error::DimensionMismatch {
                expected: self.output_size,
                got: target.len(),
            });
        }
        Ok(())
    }

    /// Hidden-layer activations for a length-checked input.
    pub(crate) fn hidden_activations(&self, inputs: &[f64]) -> Vec<f64> {
        (0..self.hidden_size)
            .map(|j| {
                let sum: f64 = inputs
                    .iter()
                    .enumerate()
                    .map(|(i, x)| x * self.hidden_weights[i][j])
                    .sum();
                sigmoid(sum + self.hidden_bias[j])
            })
            .collect()
    }

    /// Output-layer activations given the hidden activations.
    pub(crate) fn output_activations(&self, hidden: &[f64]) -> Vec<f64> {
        (0..self.output_size)
            .map(|j| {
                let sum: f64 = hidden
                    .iter()
                    .enumerate()
                    .map(|(i, h)| h * self.output_weights[i][j])
                    .sum();
                sigmoid(sum + self.output_bias[j])
            })
            .collect()
    }

    /// Serializes the network (dimensions + weights) to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
