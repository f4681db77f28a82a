use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use crate::app::{App, InputMode};
use crate::pages;
use crate::router::{Page, Resolution, NAV_LINKS};
use crate::store::{Notification, NotificationKind, UiState};

pub const PRODUCT_NAME: &str = "TutorLMS";

const SIDEBAR_WIDTH: u16 = 22;
const MAX_TOASTS: usize = 3;
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Colors for one display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub header_bg: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        bg: Color::White,
        fg: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        border: Color::Gray,
        header_bg: Color::Gray,
        success: Color::Green,
        error: Color::Red,
        warning: Color::Yellow,
        info: Color::Blue,
    };

    pub const DARK: Theme = Theme {
        bg: Color::Black,
        fg: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        header_bg: Color::DarkGray,
        success: Color::LightGreen,
        error: Color::LightRed,
        warning: Color::LightYellow,
        info: Color::LightCyan,
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Warning => self.warning,
            NotificationKind::Info => self.info,
        }
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let state = app.store.state();
    let theme = Theme::for_mode(state.dark_mode);
    let resolution = app.current().clone();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)), area);

    // Main layout: page, location/footer bar
    let [page_area, footer_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if resolution.layout {
        render_layout(app, frame, page_area, &resolution, &state, &theme);
    } else {
        pages::render(frame, page_area, &resolution, &state, &theme);
    }

    render_footer(app, frame, footer_area, &theme);

    if app.show_notifications {
        render_notifications_panel(app, frame, area, &state, &theme);
    } else {
        render_toasts(frame, page_area, &state.notifications, &theme);
    }
}

/// Header chrome, optional sidebar, and the nested page.
fn render_layout(app: &App, frame: &mut Frame, area: Rect, resolution: &Resolution, state: &UiState, theme: &Theme) {
    let [header_area, body_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    render_header(app, frame, header_area, resolution, state, theme);

    let content_area = if state.sidebar_open {
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body_area);
        render_sidebar(frame, sidebar_area, resolution, theme);
        content_area
    } else {
        body_area
    };

    pages::render(frame, content_area, resolution, state, theme);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect, resolution: &Resolution, state: &UiState, theme: &Theme) {
    let base = Style::default().bg(theme.header_bg).fg(theme.fg);
    let mut spans = vec![
        Span::styled(format!(" {} ", PRODUCT_NAME), base.fg(theme.accent).bold()),
        Span::styled(" ", base),
    ];

    // Active link follows the route, not `current_page`
    for (i, page) in NAV_LINKS.iter().enumerate() {
        let style = if *page == resolution.page {
            base.fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, page.title()), style));
    }

    if state.loading {
        spans.push(Span::styled(
            format!("  {} loading", SPINNER[app.animation_frame as usize % SPINNER.len()]),
            base.fg(theme.warning),
        ));
    }

    let count = state.notifications.len();
    let bell = if count > 0 {
        format!(" [n] notifications ({}) ", count)
    } else {
        " [n] notifications ".to_string()
    };
    let right = Line::from(vec![
        Span::styled(bell, base),
        Span::styled(" [p] U ", base.fg(theme.accent).bold()),
    ]);
    let right_width = right.width() as u16;

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);
    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), left_area);
    frame.render_widget(Paragraph::new(right).style(base), right_area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, resolution: &Resolution, theme: &Theme) {
    let pages = NAV_LINKS.iter().copied().chain(std::iter::once(Page::Profile));
    let items: Vec<ListItem> = pages
        .map(|page| {
            let path = page.path().unwrap_or_default();
            let style = if page == resolution.page {
                Style::default().fg(theme.accent).bold()
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(if page == resolution.page { "> " } else { "  " }, style),
                Span::styled(path, style),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(List::new(items).block(block), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(theme.bg).fg(theme.fg);

    let line = match app.input_mode {
        InputMode::Editing => {
            let cursor_style = Style::default().bg(theme.accent).fg(theme.bg);
            let chars: Vec<char> = app.path_input.chars().collect();
            let before: String = chars[..app.path_cursor.min(chars.len())].iter().collect();
            let (at, after): (String, String) = match chars.get(app.path_cursor) {
                Some(c) => (c.to_string(), chars[app.path_cursor + 1..].iter().collect()),
                None => (" ".to_string(), String::new()),
            };
            Line::from(vec![
                Span::styled(" GO ", Style::default().bg(Color::Yellow).fg(Color::Black)),
                Span::styled(" ", label_style),
                Span::styled(before, label_style),
                Span::styled(at, cursor_style),
                Span::styled(after, label_style),
                Span::styled("   Enter ", key_style),
                Span::styled(" go ", label_style),
                Span::styled(" Esc ", key_style),
                Span::styled(" cancel ", label_style),
            ])
        }
        InputMode::Normal => {
            let mut spans = vec![
                Span::styled(format!(" {} ", app.navigator.location()), Style::default().bg(Color::Blue).fg(Color::White)),
                Span::styled(" ", label_style),
            ];
            let hints: [(&str, &str); 8] = [
                (" : ", " go to "),
                (" b ", " back "),
                (" s ", " sidebar "),
                (" d ", " theme "),
                (" n ", " notifications "),
                (" c ", " clear "),
                (" r ", " refresh "),
                (" q ", " quit "),
            ];
            for (key, label) in hints {
                spans.push(Span::styled(key, key_style));
                spans.push(Span::styled(label, label_style));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).style(label_style), area);
}

fn notification_lines(n: &Notification, theme: &Theme) -> Vec<Line<'static>> {
    let color = theme.notification_color(n.kind);
    vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", n.kind.label()), Style::default().fg(color).bold()),
            Span::styled(n.title.clone(), Style::default().fg(theme.fg).bold()),
        ]),
        Line::from(Span::styled(n.message.clone(), Style::default().fg(theme.muted))),
    ]
}

/// Newest notifications stacked in the top-right corner
fn render_toasts(frame: &mut Frame, area: Rect, notifications: &[Notification], theme: &Theme) {
    let width = 40.min(area.width);
    let height = 4;
    let mut y = area.y + 1;

    for n in notifications.iter().rev().take(MAX_TOASTS) {
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.notification_color(n.kind)))
            .style(Style::default().bg(theme.bg));
        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(notification_lines(n, theme)).wrap(Wrap { trim: true }).block(block),
            toast_area,
        );
        y += height;
    }
}

fn render_notifications_panel(app: &mut App, frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 16.min(area.height.saturating_sub(4));
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" Notifications ({}) ", state.notifications.len()))
        .title_bottom(" j/k select  Enter dismiss  c clear  Esc close ")
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    if state.notifications.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No notifications", Style::default().fg(theme.muted))).block(block),
            popup_area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .notifications
        .iter()
        .map(|n| ListItem::new(notification_lines(n, theme)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.border).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, popup_area, &mut app.notification_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_for_mode() {
        assert_eq!(Theme::for_mode(false), Theme::LIGHT);
        assert_eq!(Theme::for_mode(true), Theme::DARK);
        assert_ne!(Theme::LIGHT.bg, Theme::DARK.bg);
    }

    #[test]
    fn test_notification_colors_are_distinct() {
        let theme = Theme::DARK;
        let kinds = [
            NotificationKind::Success,
            NotificationKind::Error,
            NotificationKind::Warning,
            NotificationKind::Info,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(theme.notification_color(*a), theme.notification_color(*b));
            }
        }
    }
}
