/// One supervised training pair. Immutable from the network's perspective;
/// the trainer only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }
}

/// The 4-row XOR truth table in (0,0), (0,1), (1,0), (1,1) order.
pub fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_table_is_the_canonical_four_rows() {
        let samples = xor_samples();
        assert_eq!(samples.len(), 4);
        for s in &samples {
            assert_eq!(s.input.len(), 2);
            assert_eq!(s.target.len(), 1);
            let expected = if s.input[0] != s.input[1] { 1.0 } else { 0.0 };
            assert_eq!(s.target[0], expected);
        }
    }
}
