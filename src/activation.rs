use std::f64::consts::E;

/// Logistic sigmoid σ(x) = 1 / (1 + e^-x). Maps any finite x into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its own output:
/// σ'(y) = y * (1 - y), where `y = sigmoid(x)` is the post-activation value.
///
/// Callers must pass the already-sigmoided value, not the pre-activation sum.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        for x in [-30.0, -5.0, -1.0, 0.0, 1.0, 5.0, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y} left (0, 1)");
        }
    }

    #[test]
    fn derivative_shortcut_matches_analytic_form() {
        // d/dx σ(x) = σ(x)(1 - σ(x)); check against a central difference.
        for x in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            let h = 1e-6;
            let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
            let shortcut = sigmoid_derivative(sigmoid(x));
            assert!((numeric - shortcut).abs() < 1e-8);
        }
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert!((sigmoid_derivative(0.5) - 0.25).abs() < 1e-12);
        assert!(sigmoid_derivative(0.9) < 0.25);
        assert!(sigmoid_derivative(0.1) < 0.25);
    }
}
