//! Global id encoding and decoding

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separates the type name from the local id before encoding
pub const DELIMITER: char = ':';

/// Encode a type name and a local id into an opaque global id
pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{type_name}{DELIMITER}{id}"))
}

/// Decode a global id back into its type name and local id.
///
/// Returns `None` for invalid base64, non UTF-8 payloads, and payloads that
/// do not hold exactly one delimiter.
pub fn from_global_id(global_id: &str) -> Option<GlobalId> {
    let bytes = STANDARD.decode(global_id).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;

    let mut parts = decoded.split(DELIMITER);
    let (Some(type_name), Some(id), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    Some(GlobalId::new(type_name, id))
}

/// A decoded global id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalId {
    /// Type name (e.g. "User")
    #[serde(rename = "type")]
    pub type_name: String,
    /// Id local to the type
    pub id: String,
}

impl GlobalId {
    /// Create a global id from its parts
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    /// Encode into the opaque wire token
    pub fn encode(&self) -> String {
        to_global_id(&self.type_name, &self.id)
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for GlobalId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_global_id(s).ok_or_else(|| Error::invalid_global_id(s))
    }
}
