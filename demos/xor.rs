use nodal_nn::{make_network, train_network, ActivationFunction, Dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> nodal_nn::Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut network = make_network(
        3,
        2,
        6,
        1,
        ActivationFunction::ReLU,
        ActivationFunction::Sigmoid,
        &mut rng,
    )?;

    let dataset = Dataset::new(
        vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ],
        vec![
            vec![1.0],
            vec![0.0],
            vec![1.0],
            vec![0.0],
        ],
    )?;

    let learning_rate = 0.1;
    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_network(&mut network, &dataset, learning_rate)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for (input, _) in dataset.iter() {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)?[0]);
    }

    Ok(())
}
