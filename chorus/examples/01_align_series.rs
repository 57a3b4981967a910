use chorus::{Chorus, DataPoint, Extrapolation, Interpolation};

fn main() {
    // 1. Two sensors sampled at different instants (ms since epoch).
    let temperature = vec![
        DataPoint::new(1_000.0, Some(20.5)),
        DataPoint::new(3_000.0, Some(21.0)),
        DataPoint::new(6_000.0, Some(22.5)),
    ];
    let humidity = vec![
        DataPoint::new(2_000.0, Some(40.0)),
        DataPoint::new(4_000.0, None),
        DataPoint::new(5_000.0, Some(43.0)),
    ];

    // 2. Build an aligner: straight lines between samples, hold the edges.
    let chorus = Chorus::builder()
        .interpolation(Interpolation::Linear)
        .extrapolation(Extrapolation::Nearest)
        .build();

    // 3. Align. Absent series still get a column.
    let table = chorus.align(&[Some(temperature), Some(humidity), None]);

    // 4. Print one row per distinct timestamp.
    println!("{:>8} {:>8} {:>8} {:>8}", "ts", "temp", "hum", "absent");
    for row in table.rows() {
        let cells: Vec<String> = row
            .values
            .iter()
            .map(|v| v.map_or_else(|| "-".to_string(), |v| format!("{v:.2}")))
            .collect();
        println!(
            "{:>8} {:>8} {:>8} {:>8}",
            row.ts, cells[0], cells[1], cells[2]
        );
    }
}
