//! Query parameters sent as the form-encoded request body.

use crate::FodyError;
use serde::Serialize;
use serde_json::Value;

/// Ordered set of key/value parameters for a single request.
///
/// Values are stringified on insertion. A [`Query`] serializes as a sequence of
/// pairs, which is what the form encoder expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

/// Opaque filter forwarded verbatim to event and ticket search endpoints
pub type Subquery = Query;

impl Query {
    /// Create an empty query
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// First value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

impl TryFrom<Value> for Query {
    type Error = FodyError;

    /// Flatten a JSON object into form parameters.
    ///
    /// Strings are taken as-is, numbers and booleans are stringified and
    /// `null` values are left out. An array of scalars becomes one pair per
    /// item under the same key. Nested objects, and arrays inside arrays,
    /// cannot be form-encoded and are rejected.
    ///
    /// Keys are emitted in the map's iteration order, which is alphabetical
    /// unless serde_json's `preserve_order` feature is enabled. Build the
    /// query with [`Query::param`] when the order matters.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(FodyError::invalid_parameter(
                "subquery",
                "expected a JSON object",
            ));
        };

        let mut query = Self::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(item) = scalar(&key, item)? {
                            query.insert(key.as_str(), item);
                        }
                    }
                }
                value => {
                    if let Some(value) = scalar(&key, value)? {
                        query.insert(key, value);
                    }
                }
            }
        }
        Ok(query)
    }
}

/// Form value for a scalar JSON value, `None` for `null`
fn scalar(key: &str, value: Value) -> Result<Option<String>, FodyError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(FodyError::invalid_parameter(
            key,
            "nested values cannot be form-encoded",
        )),
    }
}
