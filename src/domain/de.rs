//! Serde helpers for tracker payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a member that may be JSON `null`, taking the default for it.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
