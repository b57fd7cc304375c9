use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealNoteError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deal note is not a JSON object")]
    NotAnObject,

    #[error("deal note has no non-empty string `company` field")]
    MissingCompany,
}

/// One company's due-diligence profile.
///
/// The payload is semi-structured: only `company` is required. Every other
/// section is read through accessors that return `None` (or an empty slice)
/// when the key is absent or has an unexpected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DealNote {
    company: String,
    data: Value,
}

impl DealNote {
    /// Builds a note from a parsed JSON record.
    /// Records exported as `{"dealNote": {...}}` are unwrapped first.
    pub fn from_value(value: Value) -> Result<Self, DealNoteError> {
        let value = match value {
            Value::Object(mut map) if matches!(map.get("dealNote"), Some(Value::Object(_))) => {
                map.remove("dealNote").unwrap_or(Value::Null)
            }
            other => other,
        };

        if !value.is_object() {
            return Err(DealNoteError::NotAnObject);
        }

        let company = value
            .get("company")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .ok_or(DealNoteError::MissingCompany)?
            .to_string();

        Ok(Self {
            company,
            data: value,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DealNoteError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// Case-insensitive lookup key.
    pub fn key(&self) -> String {
        fold_case(&self.company)
    }

    pub fn as_value(&self) -> &Value {
        &self.data
    }

    /// Any top-level section by name.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|v| !v.is_null())
    }

    pub fn sector(&self) -> Option<&str> {
        self.section("sector").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.section("description")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// `score.total` exactly as stored, number or string.
    pub fn score_total_raw(&self) -> Option<&Value> {
        self.section("score")?.get("total").filter(|v| !v.is_null())
    }

    /// `score.total`, accepting either a number or a numeric string.
    pub fn score_total(&self) -> Option<f64> {
        let total = self.score_total_raw()?;
        match total {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn facts(&self) -> Option<&Map<String, Value>> {
        self.section("facts").and_then(Value::as_object)
    }

    /// Founders live at the top level in hand-written notes and under `facts`
    /// in generated ones.
    #[allow(dead_code)]
    pub fn founders(&self) -> Option<&Value> {
        self.section("founders")
            .or_else(|| self.facts()?.get("founders").filter(|v| !v.is_null()))
    }

    pub fn traction(&self) -> Option<&Value> {
        self.facts()?.get("traction").filter(|v| !v.is_null())
    }

    /// Year-keyed revenue figures under `facts.traction.revenue`.
    pub fn revenue(&self) -> Option<&Map<String, Value>> {
        self.traction()?.get("revenue")?.as_object()
    }

    #[allow(dead_code)]
    pub fn risks(&self) -> &[Value] {
        self.section("risks")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Canonical indented rendering used as grounding context.
    /// Object keys are emitted in sorted order, so the output is stable for a given note.
    pub fn to_context(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string())
    }
}

/// Folds a company name for lookup. Uppercasing first maps characters such as
/// `ß` to the same key as their uppercase expansion (`SS`).
pub fn fold_case(name: &str) -> String {
    name.to_uppercase().to_lowercase()
}
