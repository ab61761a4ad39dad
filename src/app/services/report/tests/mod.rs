//! Test utilities for the report pipeline

use crate::app::services::data_store::DataStorageObject;
use polars::prelude::*;


/// Container over the given frame
pub fn store(df: DataFrame) -> DataStorageObject {
    DataStorageObject::new(df)
}

/// Two locations with complete rainfall and temperature readings
pub fn weather_frame() -> DataFrame {
    df!(
        "Location" => ["A", "A", "B", "B"],
        "MinTemp" => [10.0, 5.0, 0.0, 2.0],
        "MaxTemp" => [20.0, 25.0, 10.0, 12.0],
        "Rainfall" => [100.0, 150.0, 200.0, 180.0]
    )
    .unwrap()
}

/// Run `f` with a fresh output buffer and return what it printed
pub fn captured<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>),
{
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}
