use super::error::AppError;
use chrono::{DateTime, Locale, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Label shown in place of a timestamp before the first reading arrives.
pub const LOADING_LABEL: &str = "Loading...";

const TIMESTAMP_FORMAT: &str = "%-d %B %Y pukul %H.%M";

// Offset-less layouts some gateways emit; read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// How the newest record is located in an API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// The server sorts by `createdAt` descending and returns the newest first.
    #[default]
    Server,
    /// The server returns an unordered list; the newest is picked locally.
    Client,
}

/// One timestamped snapshot of every soil metric.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Reading {
    pub temperature: f64,
    pub ph: f64,
    pub moisture: f64,
    pub conductivity: f64,
    pub nitrogen: f64,
    pub phosphor: f64,
    pub kalium: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Reading {
    /// Zero-filled reading shown before the first successful poll.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Normalizes one raw API record.
    ///
    /// English keys win over their Indonesian counterparts, and records wrapped in an
    /// `attributes` envelope are unwrapped first.
    pub fn from_record(record: &Value) -> Result<Self, AppError> {
        let fields = record
            .as_object()
            .ok_or_else(|| AppError::DataError(format!("Expected a record object, got {record}")))?;

        let fields = match fields.get("attributes").and_then(Value::as_object) {
            Some(attributes) => attributes,
            None => fields,
        };

        Ok(Self {
            temperature: number_field(fields, &["temperature", "suhu_tanah"]),
            ph: number_field(fields, &["ph", "ph_tanah"]),
            moisture: number_field(fields, &["moisture", "kelembapan_tanah"]),
            conductivity: number_field(fields, &["conductivity", "konduktivitas"]),
            nitrogen: number_field(fields, &["nitrogen"]),
            phosphor: number_field(fields, &["phosphor", "phospor"]),
            kalium: number_field(fields, &["kalium"]),
            created_at: fields.get("createdAt").and_then(parse_timestamp),
        })
    }
}

/// Parses a JSON value as a finite number, falling back to 0.
///
/// Numeric strings are accepted since some sensor gateways post every field as text.
pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn number_field(fields: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| fields.get(*key).filter(|v| !v.is_null()))
        .map_or(0.0, coerce_number)
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    #[serde(default)]
    data: Option<Value>,
}

/// Extracts the newest reading from a `{ "data": [...] }` response body.
pub fn latest_from_response(body: &Value, sort_mode: SortMode) -> Result<Reading, AppError> {
    let response = ApiResponse::deserialize(body)
        .map_err(|e| AppError::DataError(format!("Unexpected response shape: {e}")))?;

    let records = match response.data {
        Some(Value::Array(records)) => records,
        Some(record @ Value::Object(_)) => vec![record],
        Some(other) => {
            return Err(AppError::DataError(format!(
                "Expected a list of readings, got {other}"
            )));
        }
        None => return Err(AppError::DataError("Response has no data field".to_string())),
    };

    match sort_mode {
        SortMode::Server => records
            .first()
            .ok_or_else(|| AppError::DataError("No readings in response".to_string()))
            .and_then(Reading::from_record),
        SortMode::Client => {
            let readings = records
                .iter()
                .map(Reading::from_record)
                .collect::<Result<Vec<_>, _>>()?;

            // Reversed so that ties resolve to the earliest listed record.
            readings
                .into_iter()
                .rev()
                .max_by_key(|r| r.created_at)
                .ok_or_else(|| AppError::DataError("No readings in response".to_string()))
        }
    }
}

/// Renders a reading timestamp for display, e.g. `1 Januari 2024 pukul 10.00`.
pub fn format_timestamp<Tz>(created_at: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    created_at.map_or_else(
        || LOADING_LABEL.to_string(),
        |ts| {
            ts.with_timezone(tz)
                .format_localized(TIMESTAMP_FORMAT, Locale::id_ID)
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_variants() {
        assert_eq!(coerce_number(&json!(6.8)), 6.8);
        assert_eq!(coerce_number(&json!(" 23.5 ")), 23.5);
        assert_eq!(coerce_number(&json!("wet")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 0.0);
    }

    #[test]
    fn test_english_key_wins_over_indonesian() {
        let record = json!({ "temperature": 21, "suhu_tanah": 30 });
        let reading = Reading::from_record(&record).unwrap();
        assert_eq!(reading.temperature, 21.0);
    }

    #[test]
    fn test_null_english_key_falls_back() {
        let record = json!({ "ph": null, "ph_tanah": "7.1" });
        let reading = Reading::from_record(&record).unwrap();
        assert_eq!(reading.ph, 7.1);
    }

    #[test]
    fn test_invalid_timestamp_is_absent() {
        let record = json!({ "createdAt": "yesterday" });
        let reading = Reading::from_record(&record).unwrap();
        assert_eq!(reading.created_at, None);
    }

    #[test]
    fn test_offsetless_timestamp_read_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single();

        for raw in ["2024-01-01T10:00:00", "2024-01-01 10:00:00", "2024-01-01T10:00:00.000"] {
            let reading = Reading::from_record(&json!({ "createdAt": raw })).unwrap();
            assert_eq!(reading.created_at, expected, "failed for {raw}");
        }
    }

    #[test]
    fn test_non_object_record_rejected() {
        assert!(Reading::from_record(&json!(42)).is_err());
    }
}
