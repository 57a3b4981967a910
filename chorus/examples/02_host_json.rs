use chorus::{AlignOptions, Chorus};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Options exactly as a charting host would send them.
    let options: AlignOptions = serde_json::from_value(json!({
        "interpolation": "previous",
        "extrapolationBefore": "null",
        "extrapolationAfter": "nearest",
    }))?;
    let chorus = Chorus::builder().options(options).build();

    // Series as `[timestamp, value]` pairs; `null` marks an absent series.
    let input = json!([
        [[100, 10], [200, "20"], [400, 40]],
        null,
        [[150, 1.5], [300, 3]],
    ]);
    let table = chorus.align_json(&input)?;

    // Back to the host's row-major shape.
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
