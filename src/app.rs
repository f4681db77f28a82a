use ratatui::widgets::ListState;

use crate::config::Config;
use crate::router::{Navigator, Page, Resolution, RouteTable};
use crate::store::{NewNotification, NotificationKind, Store};

/// How long the confirmation toasts raised by the app itself stay up.
pub const TOAST_DURATION_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a path into the location bar
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,

    // Location bar
    pub path_input: String,
    pub path_cursor: usize,

    // Notifications panel
    pub show_notifications: bool,
    pub notification_state: ListState,

    // Loading spinner frame
    pub animation_frame: u8,

    /// Mirror each navigation into the store's `current_page`
    pub sync_current_page: bool,

    pub store: Store,
    pub navigator: Navigator,
}

impl App {
    pub fn new(store: Store, navigator: Navigator, sync_current_page: bool) -> Self {
        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            path_input: String::new(),
            path_cursor: 0,
            show_notifications: false,
            notification_state: ListState::default(),
            animation_frame: 0,
            sync_current_page,
            store,
            navigator,
        };
        app.sync_page();
        app
    }

    pub fn from_config(config: &Config, store: Store) -> Self {
        let navigator = Navigator::new(RouteTable::new(), &config.initial_path);
        Self::new(store, navigator, config.sync_current_page)
    }

    pub fn current(&self) -> &Resolution {
        self.navigator.current()
    }

    fn sync_page(&mut self) {
        if self.sync_current_page {
            let name = self.navigator.current().page.name();
            if self.store.current_page() != name {
                self.store.set_current_page(name);
            }
        }
    }

    // Navigation
    pub fn navigate(&mut self, path: &str) {
        self.navigator.navigate(path);
        self.sync_page();
    }

    pub fn open(&mut self, page: Page) {
        if let Some(path) = page.path() {
            self.navigate(path);
        }
    }

    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.sync_page();
        }
    }

    // Location bar editing
    pub fn start_editing(&mut self) {
        self.path_input = self.navigator.location().to_string();
        self.path_cursor = self.path_input.chars().count();
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_editing(&mut self) {
        self.path_input.clear();
        self.path_cursor = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_path(&mut self) {
        let path = std::mem::take(&mut self.path_input);
        self.path_cursor = 0;
        self.input_mode = InputMode::Normal;
        self.navigate(&path);
    }

    // Store-backed toggles with feedback
    pub fn toggle_dark_mode(&mut self) {
        self.store.toggle_dark_mode();
        let title = if self.store.dark_mode() { "Dark mode on" } else { "Dark mode off" };
        self.store.add_notification(
            NewNotification::new(NotificationKind::Success, title, "Theme preference saved")
                .with_duration(TOAST_DURATION_MS),
        );
    }

    pub fn toggle_loading(&mut self) {
        let loading = !self.store.loading();
        self.store.set_loading(loading);
    }

    // Notifications panel
    pub fn toggle_notifications_panel(&mut self) {
        self.show_notifications = !self.show_notifications;
        self.clamp_notification_selection();
    }

    pub fn notifications_nav_down(&mut self) {
        let len = self.store.notifications().len();
        if len > 0 {
            let i = self.notification_state.selected().unwrap_or(0);
            self.notification_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn notifications_nav_up(&mut self) {
        let i = self.notification_state.selected().unwrap_or(0);
        self.notification_state.select(Some(i.saturating_sub(1)));
    }

    /// Dismisses the selected notification in the panel, or the newest one
    /// when the panel is closed.
    pub fn dismiss_notification(&mut self) {
        let target = if self.show_notifications {
            self.notification_state
                .selected()
                .and_then(|i| self.store.notifications().get(i))
        } else {
            self.store.notifications().last()
        };

        if let Some(id) = target.map(|n| n.id.clone()) {
            self.store.remove_notification(&id);
        }
        self.clamp_notification_selection();
    }

    pub fn clear_notifications(&mut self) {
        self.store.clear_notifications();
        self.clamp_notification_selection();
    }

    fn clamp_notification_selection(&mut self) {
        let len = self.store.notifications().len();
        if len == 0 {
            self.notification_state.select(None);
        } else {
            let i = self.notification_state.selected().unwrap_or(0);
            self.notification_state.select(Some(i.min(len - 1)));
        }
    }

    /// Called on every Tick event
    pub fn tick(&mut self, now_ms: i64) {
        if self.store.expire_notifications(now_ms) > 0 {
            self.clamp_notification_selection();
        }
        if self.store.loading() {
            self.animation_frame = (self.animation_frame + 1) % 4;
        }
    }
}
