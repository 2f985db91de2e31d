use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /channels/{id}/feeds.json`.
///
/// The envelope is strict: a payload without a `feeds` array fails to
/// deserialize. Individual entries are tolerant, every field value is kept
/// as raw JSON and interpreted later.
#[derive(Deserialize, Debug, Clone)]
pub struct FeedResponse {
    #[serde(default)]
    pub channel: Option<Value>,
    pub feeds: Vec<FeedEntry>,
}

/// One reading on the channel. `field1` is temperature, `field2` humidity.
///
/// Every field stays raw JSON so one odd value cannot reject the whole feed.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FeedEntry {
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub entry_id: Option<Value>,
    #[serde(default)]
    pub field1: Option<Value>,
    #[serde(default)]
    pub field2: Option<Value>,
}

impl FeedEntry {
    pub fn timestamp(&self) -> Option<&str> {
        self.created_at.as_ref()?.as_str()
    }

    pub fn temperature(&self) -> Option<f64> {
        parse_field(self.field1.as_ref())
    }

    pub fn humidity(&self) -> Option<f64> {
        parse_field(self.field2.as_ref())
    }
}

/// ThingSpeak sends field values as strings, but numbers show up too.
/// Anything that is not a finite number is treated as missing.
pub fn parse_field(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::String(s) => parse_leading_float(s)?,
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };

    parsed.is_finite().then_some(parsed)
}

/// Parse the longest decimal number at the start of `s`, ignoring leading
/// whitespace and whatever follows it (`"20.5 C"` is 20.5, `"50%"` is 50).
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when it carries at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
