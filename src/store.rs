//! UI state store.
//!
//! All mutation of [`UiState`] goes through [`Action`]s. [`reduce`] is the
//! pure transition (state in, state out, plus a list of [`Effect`]s); the
//! [`Store`] runs it and then applies the effects against its storage.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStorage, MemoryStorage, DARK_MODE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// A queued transient message. Only the store creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Suggested auto-dismiss delay in milliseconds. `None` persists until dismissed.
    pub duration: Option<u64>,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Notification {
    /// Whether the auto-dismiss delay has elapsed at `now_ms`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        match self.duration {
            Some(duration) => {
                let duration = i64::try_from(duration).unwrap_or(i64::MAX);
                self.timestamp.saturating_add(duration) <= now_ms
            }
            None => false,
        }
    }
}

/// Caller-supplied part of a notification; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration: Option<u64>,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
    pub loading: bool,
    pub notifications: Vec<Notification>,
    pub current_page: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            dark_mode: false,
            loading: false,
            notifications: Vec::new(),
            current_page: String::new(),
        }
    }
}

impl UiState {
    /// Initial state with the dark-mode flag taken from storage. Only the
    /// literal `"true"` turns it on; a missing key or a failed read leaves it off.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        let dark_mode = match storage.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "could not read dark mode flag, using default");
                false
            }
        };

        Self {
            dark_mode,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleDarkMode,
    SetDarkMode(bool),
    SetLoading(bool),
    AddNotification(NewNotification),
    RemoveNotification(String),
    ClearNotifications,
    SetCurrentPage(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleSidebar => "toggle_sidebar",
            Action::SetSidebarOpen(_) => "set_sidebar_open",
            Action::ToggleDarkMode => "toggle_dark_mode",
            Action::SetDarkMode(_) => "set_dark_mode",
            Action::SetLoading(_) => "set_loading",
            Action::AddNotification(_) => "add_notification",
            Action::RemoveNotification(_) => "remove_notification",
            Action::ClearNotifications => "clear_notifications",
            Action::SetCurrentPage(_) => "set_current_page",
        }
    }
}

/// Side effects requested by a transition, applied by the [`Store`] after `reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistDarkMode(bool),
}

/// Notification id source: creation timestamp plus a per-store sequence
/// number, so two notifications added in the same millisecond stay distinct.
#[derive(Debug, Clone, Default)]
pub struct NotificationIds {
    next_seq: u64,
}

impl NotificationIds {
    pub fn next(&mut self, timestamp: i64) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}", timestamp, seq)
    }
}

pub fn reduce(state: &mut UiState, ids: &mut NotificationIds, now_ms: i64, action: Action) -> Vec<Effect> {
    match action {
        Action::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            Vec::new()
        }
        Action::SetSidebarOpen(open) => {
            state.sidebar_open = open;
            Vec::new()
        }
        Action::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            vec![Effect::PersistDarkMode(state.dark_mode)]
        }
        Action::SetDarkMode(value) => {
            state.dark_mode = value;
            vec![Effect::PersistDarkMode(value)]
        }
        Action::SetLoading(value) => {
            state.loading = value;
            Vec::new()
        }
        Action::AddNotification(new) => {
            state.notifications.push(Notification {
                id: ids.next(now_ms),
                kind: new.kind,
                title: new.title,
                message: new.message,
                duration: new.duration,
                timestamp: now_ms,
            });
            Vec::new()
        }
        Action::RemoveNotification(id) => {
            if let Some(pos) = state.notifications.iter().position(|n| n.id == id) {
                state.notifications.remove(pos);
            }
            Vec::new()
        }
        Action::ClearNotifications => {
            state.notifications.clear();
            Vec::new()
        }
        Action::SetCurrentPage(name) => {
            state.current_page = name;
            Vec::new()
        }
    }
}

/// Owner of the single [`UiState`]. Components get `&Store` to read and
/// `&mut Store` to dispatch; there is no global instance.
pub struct Store {
    state: UiState,
    ids: NotificationIds,
    storage: Box<dyn KeyValueStorage>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        let state = UiState::load(&storage);
        Self {
            state,
            ids: NotificationIds::default(),
            storage: Box::new(storage),
        }
    }

    /// Store backed by a fresh [`MemoryStorage`]; nothing outlives the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(chrono::Utc::now().timestamp_millis(), action);
    }

    /// Dispatch with an explicit clock reading, for deterministic callers.
    pub fn dispatch_at(&mut self, now_ms: i64, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let effects = reduce(&mut self.state, &mut self.ids, now_ms, action);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PersistDarkMode(value) => {
                let value = if value { "true" } else { "false" };
                if let Err(e) = self.storage.set(DARK_MODE_KEY, value) {
                    tracing::warn!(error = %e, "could not persist dark mode flag");
                }
            }
        }
    }

    /// Removes every notification whose auto-dismiss delay has elapsed.
    /// Returns how many were removed.
    pub fn expire_notifications(&mut self, now_ms: i64) -> usize {
        let expired: Vec<String> = self
            .state
            .notifications
            .iter()
            .filter(|n| n.is_expired(now_ms))
            .map(|n| n.id.clone())
            .collect();

        let count = expired.len();
        for id in expired {
            self.dispatch_at(now_ms, Action::RemoveNotification(id));
        }
        count
    }

    // Action shorthands
    pub fn toggle_sidebar(&mut self) {
        self.dispatch(Action::ToggleSidebar);
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.dispatch(Action::SetSidebarOpen(open));
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(Action::ToggleDarkMode);
    }

    pub fn set_dark_mode(&mut self, value: bool) {
        self.dispatch(Action::SetDarkMode(value));
    }

    pub fn set_loading(&mut self, value: bool) {
        self.dispatch(Action::SetLoading(value));
    }

    pub fn add_notification(&mut self, notification: NewNotification) {
        self.dispatch(Action::AddNotification(notification));
    }

    pub fn remove_notification(&mut self, id: &str) {
        self.dispatch(Action::RemoveNotification(id.to_string()));
    }

    pub fn clear_notifications(&mut self) {
        self.dispatch(Action::ClearNotifications);
    }

    pub fn set_current_page(&mut self, name: &str) {
        self.dispatch(Action::SetCurrentPage(name.to_string()));
    }

    // Selectors
    pub fn state(&self) -> UiState {
        self.state.clone()
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.sidebar_open
    }

    pub fn dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    pub fn current_page(&self) -> &str {
        &self.state.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::NoConfigDir)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::NoConfigDir)
        }
    }

    fn info(title: &str) -> NewNotification {
        NewNotification::new(NotificationKind::Info, title, "M")
    }

    #[test]
    fn test_defaults() {
        let store = Store::in_memory();
        assert_eq!(store.state(), UiState::default());
        assert!(store.sidebar_open());
        assert!(!store.dark_mode());
        assert!(!store.loading());
        assert!(store.notifications().is_empty());
        assert_eq!(store.current_page(), "");
    }

    #[test]
    fn test_dark_mode_read_from_storage() {
        assert!(Store::new(MemoryStorage::with_entry(DARK_MODE_KEY, "true")).dark_mode());
        assert!(!Store::new(MemoryStorage::with_entry(DARK_MODE_KEY, "false")).dark_mode());
        // Only the exact literal counts
        assert!(!Store::new(MemoryStorage::with_entry(DARK_MODE_KEY, "TRUE")).dark_mode());
        assert!(!Store::new(MemoryStorage::with_entry(DARK_MODE_KEY, "1")).dark_mode());
    }

    #[test]
    fn test_toggle_sidebar_parity() {
        for n in 0..6 {
            let mut store = Store::in_memory();
            for _ in 0..n {
                store.toggle_sidebar();
            }
            assert_eq!(store.sidebar_open(), n % 2 == 0, "after {} toggles", n);
        }
    }

    #[test]
    fn test_set_sidebar_open_idempotent() {
        let mut once = Store::in_memory();
        once.set_sidebar_open(false);

        let mut twice = Store::in_memory();
        twice.set_sidebar_open(false);
        twice.set_sidebar_open(false);

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_dark_mode_write_through() {
        let storage = MemoryStorage::new();
        let mut store = Store::new(storage.clone());

        store.set_dark_mode(true);
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        store.toggle_dark_mode();
        assert!(!store.dark_mode());
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_reduce_reports_persist_effect() {
        let mut state = UiState::default();
        let mut ids = NotificationIds::default();

        let effects = reduce(&mut state, &mut ids, 0, Action::ToggleDarkMode);
        assert_eq!(effects, vec![Effect::PersistDarkMode(true)]);

        let effects = reduce(&mut state, &mut ids, 0, Action::SetLoading(true));
        assert!(effects.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn test_add_notification() {
        let mut store = Store::in_memory();
        let before = chrono::Utc::now().timestamp_millis();
        store.add_notification(NewNotification::new(NotificationKind::Info, "T", "M"));
        let after = chrono::Utc::now().timestamp_millis();

        let notifications = store.notifications();
        assert_eq!(notifications.len(), 1);
        let n = &notifications[0];
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.title, "T");
        assert_eq!(n.message, "M");
        assert_eq!(n.duration, None);
        assert!(!n.id.is_empty());
        assert!(n.timestamp >= before && n.timestamp <= after);
    }

    #[test]
    fn test_same_millisecond_ids_are_unique() {
        let mut store = Store::in_memory();
        store.dispatch_at(1_000, Action::AddNotification(info("a")));
        store.dispatch_at(1_000, Action::AddNotification(info("b")));

        let ids: Vec<&str> = store.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_notifications_keep_insertion_order() {
        let mut store = Store::in_memory();
        for title in ["first", "second", "third"] {
            store.add_notification(info(title));
        }
        let titles: Vec<&str> = store.notifications().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_notification() {
        let mut store = Store::in_memory();
        store.add_notification(info("keep"));
        store.add_notification(info("drop"));
        let drop_id = store.notifications()[1].id.clone();

        store.remove_notification(&drop_id);
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(store.notifications()[0].title, "keep");
    }

    #[test]
    fn test_remove_unknown_notification_is_noop() {
        let mut store = Store::in_memory();
        store.add_notification(info("a"));
        store.add_notification(info("b"));
        let before = store.notifications().to_vec();

        store.remove_notification("no-such-id");
        assert_eq!(store.notifications(), before.as_slice());
    }

    #[test]
    fn test_clear_notifications() {
        let mut store = Store::in_memory();
        store.clear_notifications();
        assert!(store.notifications().is_empty());

        for _ in 0..4 {
            store.add_notification(info("x"));
        }
        store.clear_notifications();
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_set_current_page() {
        let mut store = Store::in_memory();
        store.set_current_page("analytics");
        assert_eq!(store.current_page(), "analytics");
    }

    #[test]
    fn test_expire_notifications() {
        let mut store = Store::in_memory();
        store.dispatch_at(1_000, Action::AddNotification(info("short").with_duration(500)));
        store.dispatch_at(1_000, Action::AddNotification(info("long").with_duration(5_000)));
        store.dispatch_at(1_000, Action::AddNotification(info("sticky")));

        assert_eq!(store.expire_notifications(1_499), 0);
        assert_eq!(store.expire_notifications(1_500), 1);

        let titles: Vec<&str> = store.notifications().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["long", "sticky"]);

        assert_eq!(store.expire_notifications(i64::MAX), 1);
        assert_eq!(store.notifications()[0].title, "sticky");
    }

    #[test]
    fn test_broken_storage_is_not_fatal() {
        let mut store = Store::new(BrokenStorage);
        assert!(!store.dark_mode());
        store.toggle_dark_mode();
        assert!(store.dark_mode());
    }

    #[test]
    fn test_end_to_end_session() {
        let storage = MemoryStorage::new();
        let mut store = Store::new(storage.clone());
        assert_eq!(store.state(), UiState::default());

        store.toggle_dark_mode();
        assert!(store.dark_mode());
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        store.add_notification(NewNotification::new(NotificationKind::Success, "Saved", "Done"));
        assert_eq!(store.notifications().len(), 1);

        store.clear_notifications();
        assert!(store.notifications().is_empty());
        assert!(store.dark_mode());
    }
}
