//! TutorLMS terminal front-end.
//!
//! A navigation shell over a fixed route table, plus a small UI state store
//! (sidebar, theme, loading flag, notifications, current page).

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod pages;
pub mod router;
pub mod storage;
pub mod store;
pub mod tui;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Config;
pub use error::StorageError;
pub use router::{Navigator, Page, Resolution, RouteTable};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Action, NewNotification, Notification, NotificationKind, Store, UiState};
