// Store abstraction over credentials, sessions and journal data.
//
// Handlers only see the `Store` trait, so a persistent backing store can be
// substituted for `MemoryStore` without touching handler logic.

pub mod memory;
pub mod reports;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Domain errors surfaced by store operations. Messages match the legacy API
/// word for word since clients display them directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username and password required")]
    EmptyCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Reflection cannot be empty")]
    EmptyReflection,

    #[error("No entries for this date")]
    NoEntries,

    #[error("User not found")]
    UnknownUser,

    #[error("Cannot remove your own admin status")]
    SelfDemotion,

    #[error("Cannot delete your own account")]
    SelfDeletion,
}

/// A registered account. The password hash never leaves the store layer.
#[derive(Debug, Clone)]
pub struct Account {
    pub password_hash: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// A single timestamped reflection, immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// Per-account, per-date container of entries plus derived report text.
/// `summary` and `insights` are overwritten wholesale on regeneration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayRecord {
    pub entries: Vec<Entry>,
    pub summary: String,
    pub insights: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct SessionGrant {
    pub token: String,
    pub username: String,
    pub is_admin: bool,
}

/// Per-account row of the admin user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserOverview {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemStats {
    pub total_users: usize,
    pub total_entries: usize,
    pub total_admins: usize,
}

pub trait Store: Send + Sync {
    /// Create an account with a salted password hash and an empty journal
    /// namespace. No session is created; the caller must log in separately.
    fn register(&self, username: &str, password: &str, email: &str) -> Result<(), StoreError>;

    /// Verify credentials and mint a fresh random session token. Multiple
    /// concurrent sessions per account are allowed.
    fn login(&self, username: &str, password: &str) -> Result<SessionGrant, StoreError>;

    /// Remove a session if present. Idempotent.
    fn logout(&self, token: &str);

    /// Resolve a bearer token to an account identifier.
    fn resolve_session(&self, token: &str) -> Option<String>;

    /// Look up an account by username.
    fn account(&self, username: &str) -> Option<Account>;

    /// Read the day record for an account/date, or an empty default.
    /// Reads never create state.
    fn get_day(&self, username: &str, date: &str) -> DayRecord;

    /// Append a timestamped entry, lazily creating the day record. Returns the
    /// full updated entry list for that date.
    fn add_entry(&self, username: &str, date: &str, text: &str) -> Result<Vec<Entry>, StoreError>;

    /// Render the summary report for a date, overwrite the stored summary and
    /// return it. Fails when the date has no entries.
    fn generate_summary(&self, username: &str, date: &str) -> Result<String, StoreError>;

    /// Render the insights report for a date, overwrite the stored insights
    /// and return it. Fails when the date has no entries.
    fn generate_insights(&self, username: &str, date: &str) -> Result<String, StoreError>;

    /// All accounts with their total entry counts.
    fn list_users(&self) -> Vec<UserOverview>;

    /// Grant or revoke the admin flag. Self-promotion is allowed, self-demotion
    /// is not.
    fn set_admin(&self, caller: &str, target: &str, value: bool) -> Result<(), StoreError>;

    /// Remove an account and its entire journal namespace. Outstanding session
    /// tokens for the account are left dangling, matching the reference
    /// behavior.
    fn delete_user(&self, caller: &str, target: &str) -> Result<(), StoreError>;

    fn stats(&self) -> SystemStats;

    /// Seed or promote the startup admin account. Creates the account when
    /// absent; an existing account just gets the admin flag.
    fn bootstrap_admin(&self, username: &str, password: &str, email: &str)
        -> Result<(), StoreError>;
}
