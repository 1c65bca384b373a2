use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use parking_lot::RwLock;

use super::{
    reports, Account, DayRecord, Entry, SessionGrant, Store, StoreError, SystemStats, UserOverview,
};
use crate::auth;

/// In-memory reference store. A single lock guards all three maps, which keeps
/// cross-store operations (registration, login, account deletion) trivially
/// consistent; see the `Store` docs for the substitution seam.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, String>,
    journals: HashMap<String, BTreeMap<String, DayRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn register(&self, username: &str, password: &str, email: &str) -> Result<(), StoreError> {
        let username = username.trim();
        let password = password.trim();
        let email = email.trim();

        if username.is_empty() || password.is_empty() {
            return Err(StoreError::EmptyCredentials);
        }

        let mut inner = self.inner.write();
        if inner.accounts.contains_key(username) {
            return Err(StoreError::UsernameTaken);
        }

        inner.accounts.insert(
            username.to_string(),
            Account {
                password_hash: auth::hash_password(password),
                email: email.to_string(),
                is_admin: false,
                created_at: Utc::now(),
            },
        );
        inner.journals.insert(username.to_string(), BTreeMap::new());

        tracing::debug!(username, "registered account");
        Ok(())
    }

    fn login(&self, username: &str, password: &str) -> Result<SessionGrant, StoreError> {
        let mut inner = self.inner.write();

        let account = inner
            .accounts
            .get(username)
            .ok_or(StoreError::InvalidCredentials)?;
        if !auth::verify_password(&account.password_hash, password) {
            return Err(StoreError::InvalidCredentials);
        }

        let is_admin = account.is_admin;
        let token = auth::generate_token();
        inner.sessions.insert(token.clone(), username.to_string());

        Ok(SessionGrant {
            token,
            username: username.to_string(),
            is_admin,
        })
    }

    fn logout(&self, token: &str) {
        self.inner.write().sessions.remove(token);
    }

    fn resolve_session(&self, token: &str) -> Option<String> {
        self.inner.read().sessions.get(token).cloned()
    }

    fn account(&self, username: &str) -> Option<Account> {
        self.inner.read().accounts.get(username).cloned()
    }

    fn get_day(&self, username: &str, date: &str) -> DayRecord {
        self.inner
            .read()
            .journals
            .get(username)
            .and_then(|days| days.get(date))
            .cloned()
            .unwrap_or_default()
    }

    fn add_entry(&self, username: &str, date: &str, text: &str) -> Result<Vec<Entry>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyReflection);
        }

        let mut inner = self.inner.write();
        let day = inner
            .journals
            .entry(username.to_string())
            .or_default()
            .entry(date.to_string())
            .or_default();

        day.entries.push(Entry {
            timestamp: Utc::now(),
            text: text.to_string(),
        });

        Ok(day.entries.clone())
    }

    fn generate_summary(&self, username: &str, date: &str) -> Result<String, StoreError> {
        let mut inner = self.inner.write();
        let day = inner
            .journals
            .get_mut(username)
            .and_then(|days| days.get_mut(date))
            .filter(|day| !day.entries.is_empty())
            .ok_or(StoreError::NoEntries)?;

        let summary = reports::render_summary(date, &day.entries);
        day.summary = summary.clone();
        Ok(summary)
    }

    fn generate_insights(&self, username: &str, date: &str) -> Result<String, StoreError> {
        let mut inner = self.inner.write();
        let day = inner
            .journals
            .get_mut(username)
            .and_then(|days| days.get_mut(date))
            .filter(|day| !day.entries.is_empty())
            .ok_or(StoreError::NoEntries)?;

        let insights = reports::render_insights(date, &day.entries);
        day.insights = insights.clone();
        Ok(insights)
    }

    fn list_users(&self) -> Vec<UserOverview> {
        let inner = self.inner.read();
        let mut users: Vec<UserOverview> = inner
            .accounts
            .iter()
            .map(|(username, account)| UserOverview {
                username: username.clone(),
                email: account.email.clone(),
                is_admin: account.is_admin,
                created_at: account.created_at,
                entry_count: inner
                    .journals
                    .get(username)
                    .map(|days| days.values().map(|day| day.entries.len()).sum())
                    .unwrap_or(0),
            })
            .collect();

        // HashMap iteration order is arbitrary; keep the listing stable
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    fn set_admin(&self, caller: &str, target: &str, value: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        if !inner.accounts.contains_key(target) {
            return Err(StoreError::UnknownUser);
        }
        // Self-promotion is harmless; self-demotion would lock the admin out.
        if !value && caller == target {
            return Err(StoreError::SelfDemotion);
        }

        if let Some(account) = inner.accounts.get_mut(target) {
            account.is_admin = value;
        }
        tracing::info!(caller, target, value, "changed admin flag");
        Ok(())
    }

    fn delete_user(&self, caller: &str, target: &str) -> Result<(), StoreError> {
        if caller == target {
            return Err(StoreError::SelfDeletion);
        }

        let mut inner = self.inner.write();
        if inner.accounts.remove(target).is_none() {
            return Err(StoreError::UnknownUser);
        }
        inner.journals.remove(target);
        // Sessions for the deleted account are left dangling on purpose; the
        // reference system never revoked them.

        tracing::info!(caller, target, "deleted account");
        Ok(())
    }

    fn stats(&self) -> SystemStats {
        let inner = self.inner.read();
        SystemStats {
            total_users: inner.accounts.len(),
            total_entries: inner
                .journals
                .values()
                .flat_map(|days| days.values())
                .map(|day| day.entries.len())
                .sum(),
            total_admins: inner.accounts.values().filter(|a| a.is_admin).count(),
        }
    }

    fn bootstrap_admin(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(StoreError::EmptyCredentials);
        }

        let mut inner = self.inner.write();
        if let Some(account) = inner.accounts.get_mut(username) {
            account.is_admin = true;
            return Ok(());
        }

        inner.accounts.insert(
            username.to_string(),
            Account {
                password_hash: auth::hash_password(password),
                email: email.trim().to_string(),
                is_admin: true,
                created_at: Utc::now(),
            },
        );
        inner.journals.insert(username.to_string(), BTreeMap::new());
        Ok(())
    }
}
