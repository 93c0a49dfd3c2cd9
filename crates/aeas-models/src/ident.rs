//! Identifier normalisation.
//!
//! The backend emits numeric ids for some resources and string ids for
//! others; every id is carried as a `String` on the client side.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(Into::into)
}

pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(Into::into))
}
