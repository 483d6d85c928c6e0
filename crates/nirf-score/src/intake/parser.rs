use crate::ranking::InputRecord;
use serde_json::Value;
use std::io::Read;

use super::IntakeError;

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<InputRecord>, IntakeError> {
    let document: Value = serde_json::from_reader(reader)?;
    let records = match document {
        Value::Array(_) => document,
        Value::Object(mut object) => match object.remove("records") {
            Some(records @ Value::Array(_)) => records,
            _ => {
                return Err(IntakeError::InvalidShape(
                    "expected an array of records or an object with a `records` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(IntakeError::InvalidShape(
                "expected an array of records".to_string(),
            ))
        }
    };

    Ok(serde_json::from_value(records)?)
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<InputRecord>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<InputRecord>() {
        records.push(row?);
    }

    Ok(records)
}
