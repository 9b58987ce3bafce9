//! Broker ("corretor") domain record.
//!
//! The CVDW API returns wide records with dozens of fields; only the six
//! below survive into the destination table. Every value is coerced to a
//! string on the way in, with null/missing becoming the empty string, so
//! the destination schema stays uniformly text-typed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single broker record as written to the destination table.
///
/// Field names match the API wire names, which are also the destination
/// column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broker {
    #[serde(default, deserialize_with = "stringify")]
    pub idcorretor: String,
    #[serde(default, deserialize_with = "stringify")]
    pub ativo_login: String,
    #[serde(default, deserialize_with = "stringify")]
    pub nome: String,
    #[serde(default, deserialize_with = "stringify")]
    pub documento: String,
    #[serde(default, deserialize_with = "stringify")]
    pub data_cad: String,
    #[serde(default, deserialize_with = "stringify")]
    pub idimobiliaria: String,
}

/// Coerce any JSON scalar to its string form; null becomes `""`.
fn stringify<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
