/// Mean squared error over the output layer.  `loss` is what training
/// reports; `derivative` is the raw error `calculate_delta` scales by the
/// sigmoid derivative.
pub struct MseLoss;

impl MseLoss {
    /// `Σ (output - target)² / n`.  Network construction guarantees `n > 0`.
    pub fn loss(outputs: &[f64], targets: &[f64]) -> f64 {
        let squared: f64 = outputs.iter().zip(targets)
            .map(|(y, t)| (y - t) * (y - t))
            .sum();
        squared / outputs.len() as f64
    }

    /// Output error `output - target`, one per output node.
    pub fn derivative(outputs: &[f64], targets: &[f64]) -> Vec<f64> {
        outputs.iter().zip(targets).map(|(y, t)| y - t).collect()
    }
}
