//! Platform abstraction ports
//!
//! Session-scoped key/value storage is the one platform service the client
//! core needs beyond HTTP: the character vault persists through it.

/// Session-scoped storage abstraction (sessionStorage in a browser, an
/// in-memory map elsewhere).
///
/// Values live for the owning tab's session; same-origin tabs may read but
/// nothing synchronizes across them.
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// Kept in the ports layer as they define the contract for what keys are
/// used across the application.
pub mod storage_keys {
    /// JSON array of character records, the session-scoped character store.
    pub const CHARACTERS: &str = "lorekeepr_characters";
}
