use std::fmt;

use serde::Deserialize;

/// A JSON scalar as the client sent it, printed the way it reads inside a prompt.
///
/// Browsers send `null` for figures that came out as `NaN` or `Infinity`, and some
/// forms post numbers where text is expected. Both are interpolated, not rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn blank() -> Self {
        Scalar::Text(String::new())
    }

    /// Text for a free-form request field. `null` counts as absent.
    pub fn into_text(self) -> Option<String> {
        match self {
            Scalar::Null => None,
            Scalar::Text(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Number(0.into())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}
