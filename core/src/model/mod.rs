use serde::{Deserialize, Deserializer};

pub mod event;
pub mod snapshot;
pub mod status;
pub mod task;

/// An explicit `null` reads the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
