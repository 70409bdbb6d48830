use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the source data. The feed may encode it as a JSON
/// string or an integer; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId(s.to_string())
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        MemberId(s)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => MemberId(s),
            Raw::Int(n) => MemberId(n.to_string()),
        })
    }
}

/// One member record as served by the feed. Unknown fields are kept in
/// `extra` so a round trip does not lose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: &str, email: &str, role: &str) -> Self {
        Member {
            id: id.into(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// Case-insensitive substring match on the name only.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

/// Inline edit values submitted from a row's Save form.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberEditForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub csrf_token: String,
}
