use crate::activation::sigmoid_derivative;
use crate::dataset::Sample;
use crate::error::Result;
use crate::loss::mean_squared_error;
use crate::network::Network;
use crate::train::train_config::TrainConfig;

/// Trains `network` in place with online gradient descent: one weight update
/// per sample, samples visited in the given order each epoch, no shuffling
/// and no batching. Runs exactly `config.epochs * samples.len()` updates.
///
/// Every sample is dimension-checked before the first update, so a
/// malformed dataset fails the whole call and leaves the weights untouched.
///
/// Returns the mean squared error over `samples` after the final epoch.
pub fn train(network: &mut Network, samples: &[Sample], config: &TrainConfig) -> Result<f64> {
    for sample in samples {
        network.check_input(&sample.input)?;
        network.check_target(&sample.target)?;
    }

    for epoch in 1..=config.epochs {
        for sample in samples {
            train_sample(network, &sample.input, &sample.target, config.learning_rate);
        }

        if let Some(every) = config.log_every {
            if every > 0 && epoch % every == 0 {
                let loss = mean_squared_error(network, samples)?;
                println!("Epoch {epoch}: loss = {loss:.6}");
            }
        }
    }

    mean_squared_error(network, samples)
}

/// One backpropagation step on a single dimension-checked sample.
///
/// The update is the delta rule with the sigmoid derivative shortcut: each
/// error term is scaled by `σ'(y) = y(1 - y)` of the unit's post-activation
/// value. Hidden errors are backpropagated through the output weights as
/// they were for this forward pass, before the output-layer update lands.
fn train_sample(network: &mut Network, inputs: &[f64], target: &[f64], learning_rate: f64) {
    let hidden = network.hidden_activations(inputs);
    let output = network.output_activations(&hidden);

    let output_errors: Vec<f64> = target
        .iter()
        .zip(output.iter())
        .map(|(t, y)| t - y)
        .collect();

    let hidden_errors: Vec<f64> = (0..network.hidden_size)
        .map(|j| {
            (0..network.output_size)
                .map(|k| output_errors[k] * network.output_weights[j][k])
                .sum()
        })
        .collect();

    for j in 0..network.output_size {
        let delta = learning_rate * output_errors[j] * sigmoid_derivative(output[j]);
        for i in 0..network.hidden_size {
            network.output_weights[i][j] += delta * hidden[i];
        }
        network.output_bias[j] += delta;
    }

    for j in 0..network.hidden_size {
        let delta = learning_rate * hidden_errors[j] * sigmoid_derivative(hidden[j]);
        for i in 0..network.input_size {
            network.hidden_weights[i][j] += delta * inputs[i];
        }
        network.hidden_bias[j] += delta;
    }
}
