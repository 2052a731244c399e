use serde_json::{Map, Value};
use crate::error::{FieldError, ValidationError};
use crate::misc::{
    Features, DEFAULT_ATR, DEFAULT_PE, DEFAULT_PEG, DEFAULT_RSI, DEFAULT_SENTIMENT,
};

/// Parses a raw request body into [`Features`].
pub fn parse_features(body: &[u8]) -> Result<Features, ValidationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationError::single("body", format!("invalid JSON: {}", e)))?;
    validate_features(&value)
}

/// Checks every field of a decoded body and reports all failures at once
/// rather than stopping at the first.
///
/// Numeric fields take JSON numbers, booleans (as 1 or 0) and strings
/// holding a finite decimal number, optionally with `_` digit separators.
/// Missing numeric fields fall back to their defaults; unknown fields are
/// ignored.
pub fn validate_features(value: &Value) -> Result<Features, ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::single("body", "expected a JSON object"));
    };

    let mut errors = Vec::new();

    let ticker = match object.get("ticker") {
        Some(Value::String(ticker)) => Some(ticker.clone()),
        Some(_) => {
            errors.push(FieldError::new("ticker", "expected a string"));
            None
        }
        None => {
            errors.push(FieldError::new("ticker", "field required"));
            None
        }
    };

    let rsi = numeric_field(object, "rsi", DEFAULT_RSI, &mut errors);
    let pe = numeric_field(object, "pe", DEFAULT_PE, &mut errors);
    let peg = numeric_field(object, "peg", DEFAULT_PEG, &mut errors);
    let sentiment = numeric_field(object, "sentiment", DEFAULT_SENTIMENT, &mut errors);
    let atr = numeric_field(object, "atr", DEFAULT_ATR, &mut errors);

    match ticker {
        Some(ticker) if errors.is_empty() => Ok(Features {
            ticker,
            rsi,
            pe,
            peg,
            sentiment,
            atr,
        }),
        _ => Err(ValidationError { errors }),
    }
}

fn numeric_field(
    object: &Map<String, Value>,
    name: &str,
    default: f64,
    errors: &mut Vec<FieldError>,
) -> f64 {
    let Some(value) = object.get(name) else {
        return default;
    };

    match coerce_number(value) {
        Ok(v) => v,
        Err(message) => {
            errors.push(FieldError::new(name, message));
            default
        }
    }
}

fn coerce_number(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| "expected a number".to_string()),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_decimal(s),
        Value::Null => Err("expected a number, got null".to_string()),
        Value::Array(_) => Err("expected a number, got an array".to_string()),
        Value::Object(_) => Err("expected a number, got an object".to_string()),
    }
}

fn parse_decimal(raw: &str) -> Result<f64, String> {
    let parsed = strip_digit_separators(raw.trim()).and_then(|s| s.parse::<f64>().ok());
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(format!("expected a finite number, got {:?}", raw)),
        None => Err("expected a number, got a non-numeric string".to_string()),
    }
}

/// Drops `_` separators that sit between two digits (`1_000` -> `1000`).
/// Any other underscore makes the string invalid.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j].is_ascii_digit()).unwrap_or(false);
            let after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !(before && after) {
                return None;
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}
