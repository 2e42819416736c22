use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Paired samples and targets for training or evaluation.
///
/// Every input row has the same width, every target row has the same width,
/// and there is exactly one target per input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawDataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = NetError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.inputs, raw.targets)
    }
}

impl Dataset {
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset> {
        if inputs.is_empty() {
            return Err(NetError::InvalidData("dataset has no samples".to_string()));
        }
        if inputs.len() != targets.len() {
            return Err(NetError::InvalidData(format!(
                "{} samples but {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        check_rows("sample", &inputs)?;
        check_rows("target", &targets)?;

        Ok(Dataset { inputs, targets })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn input_size(&self) -> usize {
        self.inputs[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.targets[0].len()
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Vec<f64>] {
        &self.targets
    }

    /// `(sample, target)` pair at `index`.
    pub fn get(&self, index: usize) -> Option<(&[f64], &[f64])> {
        Some((self.inputs.get(index)?.as_slice(), self.targets.get(index)?.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.inputs.iter().zip(self.targets.iter())
            .map(|(x, y)| (x.as_slice(), y.as_slice()))
    }

    /// Fails unless rows match the given network input and output widths.
    pub fn check_shape(&self, input_size: usize, output_size: usize) -> Result<()> {
        if self.input_size() != input_size || self.output_size() != output_size {
            return Err(NetError::InvalidData(format!(
                "dataset is {}→{} but the network is {}→{}",
                self.input_size(),
                self.output_size(),
                input_size,
                output_size
            )));
        }
        Ok(())
    }

    /// Reads and validates a dataset of the form `{"inputs": [[..]], "targets": [[..]]}`.
    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for Dataset {
    /// Four samples of four features; the target is the first feature.
    fn default() -> Self {
        Dataset {
            inputs: vec![
                vec![0.0, 0.0, 1.0, 1.0],
                vec![1.0, 1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 1.0],
                vec![1.0, 0.0, 1.0, 0.0],
            ],
            targets: vec![vec![0.0], vec![1.0], vec![0.0], vec![1.0]],
        }
    }
}

fn check_rows(what: &str, rows: &[Vec<f64>]) -> Result<()> {
    let width = rows[0].len();
    if width == 0 {
        return Err(NetError::InvalidData(format!("{what} rows are empty")));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(NetError::InvalidData(format!(
                "{what} {i} has {} values, expected {width}",
                row.len()
            )));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(NetError::InvalidData(format!("{what} {i} contains a non-finite value")));
        }
    }
    Ok(())
}
