use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::LocalStore`] handles the "what" (encoding notes, fail-soft policy).
/// All methods take `&self`; implementations use interior mutability since
/// pocketnotes is single-threaded.
pub trait KeyValueBackend {
    /// Read the value under `key`. `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST NOT leave a partially written value behind on failure.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
