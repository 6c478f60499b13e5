use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::domain::report::ValueRequest;

pub trait ValueRangeFactory {
    fn from_value_request(request: &ValueRequest) -> Self;
}

fn wrap_value(value: &str) -> Value {
    Value::String(value.to_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_value_request(request: &ValueRequest) -> Self {
        let values = request
            .values
            .iter()
            .map(|row| row.iter().map(|cell| wrap_value(cell)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        ValueRange {
            major_dimension: Some(request.major_dimension.to_string()),
            range: None,
            values: Some(values),
        }
    }
}
