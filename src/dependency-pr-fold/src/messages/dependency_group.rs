//! Wire encoding for the optional `dependency-group` field.
//!
//! In memory the group is a plain `Option<String>`. On the wire it is either
//! `null` or an object carrying only the group name:
//!
//! ```json
//! { "dependency-group": null }
//! { "dependency-group": { "name": "group-name" } }
//! ```
//!
//! Any other shape fails to decode. Use with `#[serde(with = "dependency_group")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct GroupRef<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Group {
    name: String,
}

/// Writes `None` as `null` and `Some(name)` as `{"name": name}`.
pub fn serialize<S>(group: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match group {
        None => serializer.serialize_none(),
        Some(name) => GroupRef { name }.serialize(serializer),
    }
}

/// Reads `null` as `None` and `{"name": name}` as `Some(name)`.
///
/// # Errors
///
/// Fails for objects without a `name` key, objects with extra keys and
/// non-object values.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Group>::deserialize(deserializer)?.map(|group| group.name))
}
