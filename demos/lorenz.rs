// Certifies the two nonzero equilibria of the Lorenz system at the classical
// parameters σ = 10, ρ = 28, β = 8/3.
//
//   cargo run --example lorenz
//   RUST_LOG=debug cargo run --example lorenz   # Newton iterations and bounds

use radii::field::Lorenz;
use radii::proof::{prove_with, ProofSettings};
use radii::DynVector;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let plain = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
    // β = 8/3 is not a float; enclose it instead of rounding it.
    let rigorous = Lorenz::classical();
    let settings = ProofSettings::default();

    for guess in [[8.0, 8.0, 27.0], [-8.0, -8.0, 27.0]] {
        let x0 = DynVector::from_slice(&guess);
        match prove_with(&plain, &rigorous, &x0, &settings) {
            Ok(proof) => {
                println!(
                    "x̄ = [{:.12}, {:.12}, {:.12}] after {} Newton steps",
                    proof.x_bar[0], proof.x_bar[1], proof.x_bar[2], proof.iterations
                );
                println!("{}\n", proof.result);
            }
            Err(e) => println!("guess {:?}: {}\n", guess, e),
        }
    }
}
