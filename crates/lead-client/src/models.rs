//! Lead records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Value stamped into `source` on every submitted lead
pub const LEAD_SOURCE: &str = "website";

/// Fields owned by the submission path; never taken from caller input
pub const RESERVED_FIELDS: [&str; 4] = ["id", "created_at", "updated_at", "source"];

/// Caller-supplied lead attributes, minus the reserved fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LeadFields(Map<String, Value>);

impl LeadFields {
    /// Build from a JSON map, dropping reserved keys
    pub fn new(mut fields: Map<String, Value>) -> Self {
        for key in RESERVED_FIELDS {
            if fields.remove(key).is_some() {
                warn!("Ignoring reserved lead field supplied by caller: {}", key);
            }
        }
        Self(fields)
    }

    /// Build from an arbitrary JSON value; only objects are accepted
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(Error::InvalidLead(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Set a field. Reserved keys are ignored and `false` is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if RESERVED_FIELDS.contains(&key.as_str()) {
            warn!("Ignoring reserved lead field supplied by caller: {}", key);
            return false;
        }
        self.0.insert(key, value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for LeadFields {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(LeadFields::new)
    }
}

/// Insert payload: caller fields plus the injected defaults
#[derive(Debug, Clone, Serialize)]
pub struct NewLead {
    #[serde(flatten)]
    pub fields: LeadFields,

    pub source: &'static str,

    pub updated_at: DateTime<Utc>,
}

impl NewLead {
    /// Stamp the injected fields onto caller input
    pub fn new(fields: LeadFields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            source: LEAD_SOURCE,
            updated_at: now,
        }
    }
}

/// Server-generated primary key: identity integer, UUID or any other text key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadId {
    Int(i64),
    Uuid(Uuid),
    Text(String),
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadId::Int(id) => write!(f, "{}", id),
            LeadId::Uuid(id) => write!(f, "{}", id),
            LeadId::Text(id) => f.write_str(id),
        }
    }
}

/// Lead row as persisted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Server-generated identifier
    pub id: LeadId,

    /// Server-assigned creation time
    #[serde(deserialize_with = "store_timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "store_timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,

    pub source: String,

    /// Remaining caller-supplied columns
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Store timestamps: RFC 3339 with an offset, or naive (`timestamp` columns), read as UTC
mod store_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", raw)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
