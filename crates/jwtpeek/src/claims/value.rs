use std::time::{Duration, SystemTime, UNIX_EPOCH};

use miniserde::json::{Number, Value};

use crate::claims::ClaimKey;

/// Raw JSON shape behind a registered claim
///
/// Closed union of the shapes a claim can usefully carry. Anything else in
/// the payload (booleans, objects, arrays with non-string elements, null)
/// holds no claim data and reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimData {
    String(String),
    Number(f64),
    StringArray(Vec<String>),
}

impl ClaimData {
    /// Extract claim data from a decoded JSON value
    ///
    /// Total over arbitrary JSON: shapes outside the union return `None`
    /// instead of failing.
    pub fn from_json(value: &Value) -> Option<ClaimData> {
        match value {
            Value::String(s) => Some(ClaimData::String(s.clone())),
            Value::Number(n) => Some(ClaimData::Number(number_as_f64(n))),
            Value::Array(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for item in items.iter() {
                    match item {
                        Value::String(s) => strings.push(s.clone()),
                        _ => return None,
                    }
                }
                Some(ClaimData::StringArray(strings))
            }
            _ => None,
        }
    }
}

fn number_as_f64(number: &Number) -> f64 {
    match number {
        Number::U64(n) => *n as f64,
        Number::I64(n) => *n as f64,
        Number::F64(n) => *n,
    }
}

/// One registered claim as derived from a payload
///
/// Wraps the raw claim data together with the [`ClaimKey`] it was derived
/// for, and offers normalized typed views. Every coercion is total: a shape
/// mismatch reads as `None`, never an error, because claims are optional by
/// RFC 7519 itself. A `ClaimValue` whose payload field was absent answers
/// `None` to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimValue {
    key: ClaimKey,
    data: Option<ClaimData>,
}

impl ClaimValue {
    pub(crate) fn new(key: ClaimKey, data: Option<ClaimData>) -> Self {
        Self { key, data }
    }

    /// The registered claim this value belongs to
    pub fn key(&self) -> ClaimKey {
        self.key
    }

    /// Raw claim data, if the payload carried a usable shape
    pub fn data(&self) -> Option<&ClaimData> {
        self.data.as_ref()
    }

    /// Whether the payload carried any usable value for this claim
    pub fn is_present(&self) -> bool {
        self.data.is_some()
    }

    /// Textual view; only a string-shaped claim has one
    pub fn string(&self) -> Option<&str> {
        match &self.data {
            Some(ClaimData::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer view: parsed from a string claim, or a numeric claim
    /// truncated toward zero
    pub fn integer(&self) -> Option<i64> {
        match &self.data {
            Some(ClaimData::String(s)) => s.parse::<i64>().ok(),
            Some(ClaimData::Number(n)) => Some(n.trunc() as i64),
            _ => None,
        }
    }

    /// Floating-point view: parsed from a string claim, or the numeric
    /// claim directly
    pub fn double(&self) -> Option<f64> {
        match &self.data {
            Some(ClaimData::String(s)) => s.parse::<f64>().ok(),
            Some(ClaimData::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// The claim as a point in time: seconds since the Unix epoch, with
    /// sub-second precision
    ///
    /// Builds on [`double`](Self::double), so numeric strings work too.
    /// Magnitudes `SystemTime` cannot represent read as `None`.
    pub fn date(&self) -> Option<SystemTime> {
        let seconds = self.double()?;
        if !seconds.is_finite() {
            return None;
        }
        let offset = Duration::try_from_secs_f64(seconds.abs()).ok()?;
        if seconds < 0.0 {
            UNIX_EPOCH.checked_sub(offset)
        } else {
            UNIX_EPOCH.checked_add(offset)
        }
    }

    /// String-array view: a native array of strings, or a bare string
    /// lifted into a one-element array
    pub fn string_array(&self) -> Option<Vec<String>> {
        match &self.data {
            Some(ClaimData::StringArray(items)) => Some(items.clone()),
            Some(ClaimData::String(s)) => Some(vec![s.clone()]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniserde::json;

    fn value(json: &str) -> Value {
        json::from_str(json).unwrap()
    }

    fn claim(json: &str) -> ClaimValue {
        ClaimValue::new(ClaimKey::Subject, ClaimData::from_json(&value(json)))
    }

    fn absent() -> ClaimValue {
        ClaimValue::new(ClaimKey::Subject, None)
    }

    // ========================================================================
    // ClaimData::from_json
    // ========================================================================

    #[test]
    fn test_from_json_string() {
        assert_eq!(
            ClaimData::from_json(&value("\"abc\"")),
            Some(ClaimData::String("abc".to_string()))
        );
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(
            ClaimData::from_json(&value("1516239022")),
            Some(ClaimData::Number(1516239022.0))
        );
        assert_eq!(
            ClaimData::from_json(&value("-12")),
            Some(ClaimData::Number(-12.0))
        );
        assert_eq!(
            ClaimData::from_json(&value("1.5")),
            Some(ClaimData::Number(1.5))
        );
    }

    #[test]
    fn test_from_json_string_array() {
        assert_eq!(
            ClaimData::from_json(&value(r#"["a","b"]"#)),
            Some(ClaimData::StringArray(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(
            ClaimData::from_json(&value("[]")),
            Some(ClaimData::StringArray(vec![]))
        );
    }

    #[test]
    fn test_from_json_unsupported_shapes() {
        assert_eq!(ClaimData::from_json(&value("true")), None);
        assert_eq!(ClaimData::from_json(&value("null")), None);
        assert_eq!(ClaimData::from_json(&value("{\"a\":1}")), None);
        // A single non-string element disqualifies the whole array.
        assert_eq!(ClaimData::from_json(&value(r#"["a",1]"#)), None);
        assert_eq!(ClaimData::from_json(&value("[[]]")), None);
    }

    // ========================================================================
    // Coercions
    // ========================================================================

    #[test]
    fn test_string_coercion() {
        assert_eq!(claim("\"abc\"").string(), Some("abc"));
        assert_eq!(claim("42").string(), None);
        assert_eq!(claim(r#"["a"]"#).string(), None);
        assert_eq!(absent().string(), None);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(claim("42").integer(), Some(42));
        assert_eq!(claim("-42").integer(), Some(-42));
        // Truncation toward zero, both signs
        assert_eq!(claim("3.9").integer(), Some(3));
        assert_eq!(claim("-3.9").integer(), Some(-3));
        // Parsed from a string claim
        assert_eq!(claim("\"42\"").integer(), Some(42));
        assert_eq!(claim("\"abc\"").integer(), None);
        assert_eq!(claim("\"3.9\"").integer(), None);
        assert_eq!(claim(r#"["1"]"#).integer(), None);
        assert_eq!(absent().integer(), None);
    }

    #[test]
    fn test_double_coercion() {
        assert_eq!(claim("1.5").double(), Some(1.5));
        assert_eq!(claim("42").double(), Some(42.0));
        assert_eq!(claim("\"1.5\"").double(), Some(1.5));
        assert_eq!(claim("\"abc\"").double(), None);
        assert_eq!(claim(r#"["1.5"]"#).double(), None);
        assert_eq!(absent().double(), None);
    }

    #[test]
    fn test_date_coercion() {
        let expected = UNIX_EPOCH + Duration::from_secs(1516239022);
        assert_eq!(claim("1516239022").date(), Some(expected));
        // Numeric strings coerce through double
        assert_eq!(claim("\"1516239022\"").date(), Some(expected));
        // Sub-second precision survives
        assert_eq!(
            claim("1.5").date(),
            Some(UNIX_EPOCH + Duration::from_millis(1500))
        );
        assert_eq!(claim("\"abc\"").date(), None);
        assert_eq!(claim(r#"["x"]"#).date(), None);
        assert_eq!(absent().date(), None);
    }

    #[test]
    fn test_date_before_epoch() {
        assert_eq!(
            claim("-1").date(),
            UNIX_EPOCH.checked_sub(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_date_out_of_range() {
        // Larger than any Duration; must read absent, not panic.
        assert_eq!(claim("1e300").date(), None);
    }

    #[test]
    fn test_string_array_coercion() {
        assert_eq!(
            claim(r#"["x","y"]"#).string_array(),
            Some(vec!["x".to_string(), "y".to_string()])
        );
        // A bare string lifts into a one-element array
        assert_eq!(claim("\"x\"").string_array(), Some(vec!["x".to_string()]));
        assert_eq!(claim("42").string_array(), None);
        assert_eq!(absent().string_array(), None);
    }

    #[test]
    fn test_key_is_recorded() {
        let c = ClaimValue::new(ClaimKey::Audience, None);
        assert_eq!(c.key(), ClaimKey::Audience);
        assert!(!c.is_present());
    }
}
