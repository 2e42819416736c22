use crate::{
    data::dataset::Dataset,
    error::Result,
    network::network::Network,
    propagation::backward::{back_propagate, mean_squared_error},
    propagation::forward::forward_propagation,
};

/// One online pass over `dataset` in stored order.  Returns the mean loss
/// measured before each sample's update.
pub fn train_network(network: &mut Network, dataset: &Dataset, learning_rate: f64) -> Result<f64> {
    let order: Vec<usize> = (0..dataset.len()).collect();
    train_samples(network, dataset, &order, learning_rate)
}

/// Forward, measure, back-propagate for each sample index in `order`.
pub(crate) fn train_samples(
    network: &mut Network,
    dataset: &Dataset,
    order: &[usize],
    learning_rate: f64,
) -> Result<f64> {
    let mut total_loss = 0.0;

    for &idx in order {
        let input = &dataset.inputs()[idx];
        let target = &dataset.targets()[idx];

        forward_propagation(network, input)?;
        total_loss += mean_squared_error(network, target)?;
        back_propagate(network, target, learning_rate)?;
    }

    Ok(total_loss / order.len() as f64)
}

/// Mean loss over `dataset` without touching any weight.
pub fn evaluate(network: &mut Network, dataset: &Dataset) -> Result<f64> {
    let mut total_loss = 0.0;
    for (input, target) in dataset.iter() {
        forward_propagation(network, input)?;
        total_loss += mean_squared_error(network, target)?;
    }
    Ok(total_loss / dataset.len() as f64)
}
