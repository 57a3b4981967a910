#[cfg(feature = "dataframe")]
use chorus::{AlignOptions, Chorus, DataPoint, to_dataframe_with_names};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chorus = Chorus::with_options(AlignOptions::step());
    let table = chorus.align_present(&[
        vec![DataPoint::new(1.0, Some(1.0)), DataPoint::new(3.0, Some(3.0))],
        vec![DataPoint::new(2.0, Some(20.0))],
    ]);

    let df = to_dataframe_with_names(&table, &["a", "b"])?;
    println!(
        "DataFrame shape: {} rows x {} cols",
        df.height(),
        df.width()
    );
    println!("{df}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
