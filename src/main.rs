// Trains every learnable gate, prints the truth tables it reproduces, then
// composes XOR from trained AND/OR/NOT units.
//
//   cargo run -- [train_config.json] [boundary.png]
//
// Log verbosity is read from NEURON_LOG (default "info").
use sigmoid_neuron::gates::train_gate;
use sigmoid_neuron::{evaluate, save_boundary_png, Gate, GateSet, RenderConfig, TrainConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NEURON_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> sigmoid_neuron::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => TrainConfig::load_json(&path)?,
        None => TrainConfig::default(),
    };
    let boundary_path = args.next();

    println!("epochs = {}, learning rate = {}", config.epochs, config.learning_rate);

    for gate in Gate::LEARNABLE {
        let (mut unit, stats) = train_gate(gate, &config);
        let table = gate.truth_table();
        let report = evaluate(&mut unit, &table);

        println!("\n{gate}  ({} corrections in {} samples)", stats.errors, stats.tests);
        for row in &table {
            let output = unit.feed_forward(&row.inputs);
            println!(
                "  {} -> {} (expected {}, output {output:.4})",
                serde_json::to_string(&row.inputs)?,
                unit.answer(),
                row.expectation,
            );
        }
        println!("  weights: {}", serde_json::to_string(unit.weights())?);
        if !report.is_perfect() {
            println!("  {} of {} rows wrong", report.mismatches.len(), report.checked);
        }

        if gate == Gate::Nand {
            if let Some(path) = &boundary_path {
                save_boundary_png(&mut unit, &RenderConfig::default(), path)?;
                println!("  decision boundary written to {path}");
            }
        }
    }

    let mut gates = GateSet::train(&config);
    println!("\nXOR = (NOT a AND b) OR (a AND NOT b)");
    for (a, b) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        println!("  {a} XOR {b} = {}", gates.xor(a, b));
    }
    if !gates.verify() {
        println!("  (sub-gates not fully trained; try more epochs)");
    }

    Ok(())
}
