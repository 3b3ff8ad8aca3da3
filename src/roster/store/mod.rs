//! # Session Storage
//!
//! A session-scoped key/value slot store, the moral equivalent of a browser's
//! `sessionStorage`. The [`SessionStorage`] trait keeps persistence details
//! out of the CRUD engine:
//!
//! - [`fs::FileStorage`]: one directory per session, one JSON file per key.
//!   Writes go through a temp file and a rename so a slot is never left
//!   half-written.
//! - [`memory::InMemoryStorage`]: no persistence, for tests and throwaway
//!   sessions.
//!
//! ## Layout
//!
//! ```text
//! <data_dir>/
//! ├── config.json
//! └── sessions/
//!     └── <session>/
//!         └── employee-management-data.json
//! ```

use crate::error::{Result, RosterError};

pub mod fs;
pub mod memory;

/// Abstract interface for a session-scoped key/value slot store.
pub trait SessionStorage {
    /// Read a slot. `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    /// MUST be atomic: readers see the old value or the new one, never a mix.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Keys and session names end up as path components.
pub fn validate_slot_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RosterError::Storage("name cannot be empty".to_string()));
    }
    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(RosterError::Storage(format!(
            "invalid character '{}' in '{}' (only alphanumeric, underscore, and hyphen allowed)",
            ch, name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_names() {
        assert!(validate_slot_name("default").is_ok());
        assert!(validate_slot_name("employee-management-data").is_ok());
        assert!(validate_slot_name("team_2").is_ok());
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(validate_slot_name("").is_err());
        assert!(validate_slot_name("../etc").is_err());
        assert!(validate_slot_name("a/b").is_err());
        assert!(validate_slot_name("a b").is_err());
    }
}
