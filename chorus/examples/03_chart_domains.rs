use chorus::{AlignOptions, Chorus, DataPoint, DomainOptions, time_domain, value_domain};

fn main() {
    let chorus = Chorus::with_options(AlignOptions::linear());
    let table = chorus.align_present(&[
        vec![DataPoint::new(0.0, Some(5.0)), DataPoint::new(60.0, Some(15.0))],
        vec![DataPoint::new(30.0, Some(-2.0))],
    ]);

    if let Some((start, end)) = time_domain(&table) {
        println!("x axis: {start} .. {end}");
    }

    let padded = value_domain(&table, &DomainOptions::default());
    let from_zero = value_domain(
        &table,
        &DomainOptions {
            include_zero: true,
            padding_factor: 0.0,
            ..DomainOptions::default()
        },
    );
    println!("y axis (padded): {padded:?}");
    println!("y axis (from zero, unpadded): {from_zero:?}");
}
