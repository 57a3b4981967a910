use chorus::{AlignOptions, Chorus, DataPoint};
use serde_json::json;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with the `tracing` feature to see spans and events.
    // Suggested: RUST_LOG=debug cargo run -p chorus --features tracing --example 00_tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let chorus = Chorus::builder().options(AlignOptions::linear()).build();

    // Typed input
    let a = vec![DataPoint::new(0.0, Some(1.0)), DataPoint::new(20.0, Some(3.0))];
    let b = vec![DataPoint::new(10.0, Some(f64::NAN))];
    let _ = chorus.align(&[Some(a), Some(b), None]);

    // Host JSON with a few malformed points
    let _ = chorus.align_json(&json!([[[0, 1], [5, "x"], [null, 2], [10, 3]]]))?;

    Ok(())
}
