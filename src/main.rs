use xor_mlp::{train, xor_samples, Network, TrainConfig};

fn main() -> xor_mlp::Result<()> {
    let mut network = Network::new(2, 2, 1)?;

    let samples = xor_samples();
    train(&mut network, &samples, &TrainConfig::new(10_000, 0.1))?;

    for sample in &samples {
        let output = network.forward(&sample.input)?;
        println!("{}", result_line(&sample.input, output[0]));
    }

    Ok(())
}

/// One result line, inputs rendered as doubles (`0.0`, `1.0`) and the
/// output rounded to the nearest integer.
fn result_line(input: &[f64], output: f64) -> String {
    format!(
        "Input: {:.1}, {:.1} => Output: {}",
        input[0],
        input[1],
        output.round() as u8
    )
}
