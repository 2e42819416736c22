//! Command-line driver: builds a network, trains it on a dataset and prints
//! one prediction per sample.
//!
//! Run with:
//!   cargo run -- --epochs 2000 --seed 7
//!   cargo run -- --spec net.json --dataset data.json --dump

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use nodal_nn::{evaluate, train_loop, Dataset, NetError, Network, NetworkSpec, TrainConfig};

#[derive(Parser)]
#[command(name = "nodal-nn")]
#[command(about = "Train a from-scratch multilayer perceptron", long_about = None)]
struct Cli {
    /// Network topology (JSON); defaults to 6 layers, 4→4→1
    #[arg(long)]
    spec: Option<String>,

    /// Training settings (JSON)
    #[arg(long)]
    train: Option<String>,

    /// Dataset with `inputs` and `targets` (JSON); defaults to the 4×4 toy set
    #[arg(long)]
    dataset: Option<String>,

    /// Overrides the number of epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Overrides the learning rate
    #[arg(short = 'r', long)]
    learning_rate: Option<f64>,

    /// Seed for weight initialization and shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Shuffle samples every epoch
    #[arg(long)]
    shuffle: bool,

    /// Print every layer's nodes after training
    #[arg(long)]
    dump: bool,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match run(&cli) {
        Err(err) if matches!(err.downcast_ref::<NetError>(), Some(NetError::TooFewLayers { .. })) => {
            error!("{err}");
            std::process::exit(1);
        }
        other => other,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let spec = match &cli.spec {
        Some(path) => NetworkSpec::load_json(path).with_context(|| format!("loading spec {path}"))?,
        None => NetworkSpec::default(),
    };
    let mut config = match &cli.train {
        Some(path) => TrainConfig::load_json(path).with_context(|| format!("loading training config {path}"))?,
        None => TrainConfig::default(),
    };
    if let Some(epochs) = cli.epochs {
        config.epochs = epochs;
    }
    if let Some(learning_rate) = cli.learning_rate {
        config.learning_rate = learning_rate;
    }
    config.shuffle |= cli.shuffle;

    let dataset = match &cli.dataset {
        Some(path) => Dataset::load_json(path).with_context(|| format!("loading dataset {path}"))?,
        None => Dataset::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::new(&spec, &mut rng)?;
    info!(
        "Network: {} layers, {} → {} × {} → {}",
        spec.layer_count,
        spec.input_size,
        spec.layer_count.saturating_sub(2),
        spec.hidden_size,
        spec.output_size
    );

    let initial_loss = evaluate(&mut network, &dataset)?;
    let history = train_loop(&mut network, &dataset, &config, &mut rng)?;
    let final_loss = evaluate(&mut network, &dataset)?;
    info!(
        "Trained {} epochs: loss {:.6} → {:.6}",
        history.len(),
        initial_loss,
        final_loss
    );

    for (input, target) in dataset.iter() {
        let output = network.forward(input)?;
        println!("Input: {:?} -> Output: {:.4?} (target {:?})", input, output, target);
    }

    if cli.dump {
        print!("{network}");
    }

    Ok(())
}
