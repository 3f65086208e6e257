use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d %B %Y", "%B %d, %Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Blank strings and non-string values (numbers, objects, `null`) read as absent.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}

/// Free text that degrades to an empty string when it is not a JSON string.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        _ => String::new(),
    })
}

/// Launch and flight numbers show up as both strings and bare numbers.
pub(crate) fn lenient_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// Accepts a number, a numeric string, or anything else (which maps to `None`).
pub(crate) fn lenient_mass<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let mass = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_float(&text),
        _ => None,
    };
    Ok(mass.filter(|mass| mass.is_finite()))
}

/// Parses the longest numeric prefix of `raw`, so `"1250 kg"` reads as 1250
/// and `"N/A"` reads as nothing.
pub(crate) fn parse_leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - (end + 1);
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    trimmed[..end].parse().ok()
}

pub(crate) fn parse_launch_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
