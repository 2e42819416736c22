use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::layers::Layer;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_samples;

/// Trains `network` for `config.epochs` epochs of online gradient descent and
/// returns the statistics of every completed epoch.
///
/// # Arguments
/// - `network` — modified in place
/// - `dataset` — must match the network's input and output widths
/// - `config`  — hyperparameters
/// - `rng`     — only drawn from when `config.shuffle` is set
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    config.validate()?;
    dataset.check_shape(network.input_layer().len(), network.output_layer().len())?;

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        if config.shuffle {
            order.shuffle(rng);
        }

        let t_start = Instant::now();
        let train_loss = train_samples(network, dataset, &order, config.learning_rate)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if !train_loss.is_finite() {
            warn!(epoch, train_loss, "training loss is not finite");
        }
        if config.log_interval > 0 && (epoch == 1 || epoch % config.log_interval == 0) {
            info!("Epoch {}/{}: loss = {:.6}", epoch, config.epochs, train_loss);
        }

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms,
        });
    }

    Ok(history)
}
