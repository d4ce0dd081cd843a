//! Request, result and record types

pub mod prediction;
pub mod shelter;

pub use prediction::{PredictionInput, PredictionRecord, PredictionResult, RiskLabel};
pub use shelter::{Coordinate, RankedShelter, ShelterRecord};

use serde_json::Value;

/// Coerce a JSON value to a finite number.
///
/// Numbers pass through; strings holding a finite decimal are parsed.
/// Everything else (including `null`, booleans and empty strings) is rejected.
/// Loose coercion of `""` to 0 and `true` to 1 is intentionally not supported.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_number(&json!(12)), Some(12.0));
        assert_eq!(coerce_number(&json!(-0.5)), Some(-0.5));
        assert_eq!(coerce_number(&json!(" 7.25 ")), Some(7.25));
    }

    #[test]
    fn test_coerce_number_rejects_empty_and_booleans() {
        for value in [json!(""), json!("   "), json!(true), json!(false), Value::Null] {
            assert_eq!(coerce_number(&value), None, "{}", value);
        }
    }
}
