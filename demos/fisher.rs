// Certifies a steady state of the Fisher equation u'' + λ u (1 − u) = 0 with
// even periodic symmetry, truncated to N + 1 cosine modes.
//
//   cargo run --release --example fisher              # λ = 50, N = 100
//   cargo run --release --example fisher -- 50 60     # λ, N

use radii::field::Fisher;
use radii::proof::{prove, ProofSettings};
use radii::DynVector;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut args = std::env::args().skip(1);
    let lambda: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(50.0);
    let order: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    let fisher = Fisher::new(lambda, order);
    let mut x0 = DynVector::zeros(order + 1, 0.0);
    x0[0] = 1.0;
    if order > 0 {
        x0[1] = 0.3;
    }

    match prove(&fisher, &x0, &ProofSettings::default()) {
        Ok(proof) => {
            let leading: Vec<String> = proof.x_bar.iter().take(9).map(|v| format!("{v:.4}")).collect();
            println!("λ = {lambda}, N = {order}, {} Newton steps", proof.iterations);
            println!("x̄[0..9] = [{}]", leading.join(", "));
            println!("{}", proof.result);
        }
        Err(e) => {
            eprintln!("λ = {lambda}, N = {order}: {e}");
            std::process::exit(1);
        }
    }
}
