use sigmoid_neuron::train::{load_patterns_json, save_patterns_json};
use sigmoid_neuron::{render_boundary, save_boundary_png, Error, Gate, Pattern, Perceptron, RenderConfig, TrainConfig, WeightStore, BIAS};

fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn pattern_set_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "nand.json");
    save_patterns_json(&Gate::Nand.truth_table(), &path).unwrap();
    assert_eq!(load_patterns_json(&path).unwrap(), Gate::Nand.truth_table());
}

#[test]
fn hand_written_pattern_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "not.json");
    std::fs::write(
        &path,
        r#"[{ "inputs": { "a": 0 }, "expectation": 1 }, { "inputs": { "a": 1 }, "expectation": 0 }]"#,
    )
    .unwrap();
    let patterns = load_patterns_json(&path).unwrap();
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].inputs, Pattern::from([("a", 0.0)]));
    assert_eq!(patterns[0].expectation, 1.0);
}

#[test]
fn empty_pattern_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "empty.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(matches!(load_patterns_json(&path), Err(Error::EmptyPatternSet)));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(load_patterns_json("/nonexistent/patterns.json"), Err(Error::Io(_))));
}

#[test]
fn config_file_is_loaded_and_validated() {
    let dir = tempfile::tempdir().unwrap();

    let good = path_in(&dir, "good.json");
    TrainConfig::new(300, 0.5).with_seed(9).save_json(&good).unwrap();
    assert_eq!(TrainConfig::load_json(&good).unwrap(), TrainConfig::new(300, 0.5).with_seed(9));

    let bad = path_in(&dir, "bad.json");
    std::fs::write(&bad, r#"{ "epochs": 0 }"#).unwrap();
    assert!(matches!(TrainConfig::load_json(&bad), Err(Error::InvalidConfig { .. })));

    let garbled = path_in(&dir, "garbled.json");
    std::fs::write(&garbled, "{ epochs: ").unwrap();
    assert!(matches!(TrainConfig::load_json(&garbled), Err(Error::Json(_))));
}

#[test]
fn boundary_follows_the_learned_separation() {
    // NAND-like unit: fires unless both inputs are high.
    let weights = WeightStore::from([("a", -4.0), ("b", -4.0), (BIAS, 6.0)]);
    let mut unit = Perceptron::from_weights(weights, 1.0);
    let img = render_boundary(&mut unit, &RenderConfig { size: 16 }).unwrap();
    assert_eq!(img.dimensions(), (16, 16));

    // Bottom-left (a = 0, b ~ 0) answers 1: green channel lit, mostly red.
    let low = img.get_pixel(0, 15);
    assert_eq!(low[1], 63);
    assert!(low[0] > low[2]);

    // Top-right (a ~ 1, b = 1) answers 0: no green, mostly blue.
    let high = img.get_pixel(15, 0);
    assert_eq!(high[1], 0);
    assert!(high[2] > high[0]);
}

#[test]
fn boundary_png_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "boundary.png");
    let mut unit = Perceptron::seeded(2);
    save_boundary_png(&mut unit, &RenderConfig { size: 8 }, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
