use ratatui::{backend::TestBackend, Terminal};
use tutorlms::router::{Navigator, Page, RouteTable};
use tutorlms::{ui, App, NewNotification, NotificationKind, Store};

fn app_at(path: &str) -> App {
    App::new(Store::in_memory(), Navigator::new(RouteTable::new(), path), true)
}

fn draw(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn root_renders_the_dashboard() {
    let mut root = app_at("/");
    let mut dashboard = app_at("/dashboard");

    assert_eq!(root.current().page, Page::Dashboard);

    let root_term = draw(&mut root);
    let dashboard_term = draw(&mut dashboard);
    assert_eq!(root_term.backend().buffer(), dashboard_term.backend().buffer());
}

#[test]
fn layout_chrome_present_on_dashboard() {
    let mut app = app_at("/dashboard");
    let text = screen_text(&draw(&mut app));

    assert!(text.contains(ui::PRODUCT_NAME));
    assert!(text.contains("1 Dashboard"));
    assert!(text.contains("4 Analytics"));
    assert!(text.contains("[n] notifications"));
    assert!(text.contains("Welcome back!"));
}

#[test]
fn login_renders_without_chrome() {
    let mut app = app_at("/login");
    let text = screen_text(&draw(&mut app));

    assert!(text.contains("Sign In"));
    assert!(!text.contains("1 Dashboard"));
    assert!(!text.contains("[n] notifications"));
}

#[test]
fn unknown_path_renders_not_found() {
    let mut app = app_at("/nonexistent-path");
    let text = screen_text(&draw(&mut app));

    assert_eq!(app.current().page, Page::NotFound);
    assert!(text.contains("404"));
    assert!(text.contains("Page Not Found"));
    assert!(!text.contains("[n] notifications"));
}

#[test]
fn closed_sidebar_hides_page_list() {
    let mut app = app_at("/practice");
    let open = screen_text(&draw(&mut app));
    assert!(open.contains("/profile"));

    app.store.set_sidebar_open(false);
    let closed = screen_text(&draw(&mut app));
    assert!(!closed.contains("/profile"));
    assert!(closed.contains("Practice Sessions"));
}

#[test]
fn toasts_show_newest_notification() {
    let mut app = app_at("/analytics");
    app.store
        .add_notification(NewNotification::new(NotificationKind::Error, "Sync failed", "Try again"));

    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Sync failed"));
    assert!(text.contains("[error]"));
}

#[test]
fn notifications_panel_lists_entries() {
    let mut app = app_at("/dashboard");
    app.store
        .add_notification(NewNotification::new(NotificationKind::Info, "First", "one"));
    app.store
        .add_notification(NewNotification::new(NotificationKind::Warning, "Second", "two"));
    app.toggle_notifications_panel();

    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Notifications (2)"));
    assert!(text.contains("First"));
    assert!(text.contains("Second"));

    app.clear_notifications();
    let text = screen_text(&draw(&mut app));
    assert!(text.contains("No notifications"));
}

#[test]
fn profile_reflects_dark_mode() {
    let mut app = app_at("/profile");
    let light = draw(&mut app);

    app.store.set_dark_mode(true);
    let dark = draw(&mut app);

    assert_ne!(light.backend().buffer(), dark.backend().buffer());
    assert!(screen_text(&dark).contains("[x] Dark mode"));
}
