//! Page views.
//!
//! Every page shows fixed sample content. Pages only read the UI state and the
//! current route; they never dispatch.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::router::{Page, Resolution};
use crate::store::UiState;
use crate::ui::Theme;

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Activity {
    pub title: &'static str,
    pub when: &'static str,
    pub outcome: &'static str,
}

pub struct SectionScore {
    pub section: &'static str,
    pub score: u16,
    pub max: u16,
}

impl SectionScore {
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.max)
        }
    }
}

pub struct PracticeMode {
    pub title: &'static str,
    pub topics: &'static str,
    pub action: &'static str,
}

pub struct TestResult {
    pub name: &'static str,
    pub completed: &'static str,
    pub score: u16,
    pub change: &'static str,
}

pub struct SkillAccuracy {
    pub skill: &'static str,
    pub accuracy: u8,
}

pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
    pub action: &'static str,
}

pub const DASHBOARD_STATS: [Stat; 4] = [
    Stat { label: "Practice Sessions", value: "24" },
    Stat { label: "Average Score", value: "1420" },
    Stat { label: "Study Time", value: "32h" },
    Stat { label: "Accuracy", value: "87%" },
];

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity { title: "Completed Math Practice", when: "2 hours ago", outcome: "+12 points" },
    Activity { title: "Started Reading Section", when: "1 day ago", outcome: "In Progress" },
    Activity { title: "Full Practice Test", when: "3 days ago", outcome: "1380" },
];

pub const SECTION_SCORES: [SectionScore; 2] = [
    SectionScore { section: "Math", score: 780, max: 800 },
    SectionScore { section: "Reading & Writing", score: 640, max: 800 },
];

pub const PRACTICE_MODES: [PracticeMode; 3] = [
    PracticeMode {
        title: "Math Practice",
        topics: "Algebra, Geometry, Statistics & Data Analysis",
        action: "Start Math Practice",
    },
    PracticeMode {
        title: "Reading Practice",
        topics: "Reading Comprehension & Analysis",
        action: "Start Reading Practice",
    },
    PracticeMode {
        title: "Writing Practice",
        topics: "Grammar, Usage & Expression of Ideas",
        action: "Start Writing Practice",
    },
];

pub const TEST_DETAILS: [&str; 4] = [
    "Duration: 2 hours 14 minutes",
    "Math Section: 64 questions",
    "Reading & Writing: 54 questions",
    "Adaptive testing format",
];

pub const TEST_CHECKLIST: [&str; 4] = [
    "Find a quiet environment",
    "Have scratch paper ready",
    "Ensure stable internet connection",
    "Allow full time commitment",
];

pub const TEST_HISTORY: [TestResult; 3] = [
    TestResult { name: "Practice Test #3", completed: "2 days ago", score: 1420, change: "+30 points" },
    TestResult { name: "Practice Test #2", completed: "1 week ago", score: 1390, change: "+10 points" },
    TestResult { name: "Practice Test #1", completed: "2 weeks ago", score: 1380, change: "Baseline" },
];

pub const STRENGTHS: [SkillAccuracy; 3] = [
    SkillAccuracy { skill: "Algebra", accuracy: 95 },
    SkillAccuracy { skill: "Geometry", accuracy: 92 },
    SkillAccuracy { skill: "Data Analysis", accuracy: 88 },
];

pub const WEAKNESSES: [SkillAccuracy; 3] = [
    SkillAccuracy { skill: "Reading Comprehension", accuracy: 72 },
    SkillAccuracy { skill: "Grammar & Usage", accuracy: 68 },
    SkillAccuracy { skill: "Expression of Ideas", accuracy: 75 },
];

pub const STUDY_TIME: [Stat; 4] = [
    Stat { label: "Total study time", value: "32h" },
    Stat { label: "This week", value: "8h 30m" },
    Stat { label: "Average per day", value: "1h 12m" },
    Stat { label: "Goal progress", value: "85%" },
];

pub const RECOMMENDATIONS: [Recommendation; 2] = [
    Recommendation {
        title: "Focus on Reading Comprehension",
        detail: "Your reading accuracy is below target. Practice with more complex passages.",
        action: "Start Reading Practice",
    },
    Recommendation {
        title: "Improve Grammar Skills",
        detail: "Work on grammar rules and sentence structure to boost your writing score.",
        action: "Practice Grammar",
    },
];

pub const PROFILE_STATS: [Stat; 4] = [
    Stat { label: "Member since", value: "Jan 2024" },
    Stat { label: "Practice sessions", value: "24" },
    Stat { label: "Study streak", value: "7 days" },
    Stat { label: "Best score", value: "1420" },
];

pub const TARGET_SCORES: [u16; 5] = [1400, 1450, 1500, 1550, 1600];

/// Preference rows on the profile page. Dark mode is filled in from the store.
pub fn preferences(state: &UiState) -> [(&'static str, bool); 4] {
    [
        ("Email notifications", true),
        ("Study reminders", true),
        ("Progress reports", false),
        ("Dark mode", state.dark_mode),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, resolution: &Resolution, state: &UiState, theme: &Theme) {
    match resolution.page {
        Page::Login => render_login(frame, area, theme),
        Page::Register => render_register(frame, area, theme),
        Page::Dashboard => render_dashboard(frame, area, theme),
        Page::Practice => render_practice(frame, area, theme),
        Page::Test => render_test(frame, area, theme),
        Page::Analytics => render_analytics(frame, area, theme),
        Page::Profile => render_profile(frame, area, state, theme),
        Page::NotFound => render_not_found(frame, area, resolution, theme),
    }
}

fn card(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(theme.accent).bold()))
        .style(Style::default().bg(theme.bg).fg(theme.fg))
}

fn page_heading(title: &'static str, subtitle: &'static str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Text::from(vec![
        Line::from(Span::styled(title, Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(subtitle, Style::default().fg(theme.muted))),
    ]))
    .style(Style::default().bg(theme.bg))
}

fn stat_lines(stats: &[Stat], theme: &Theme) -> Vec<Line<'static>> {
    stats
        .iter()
        .map(|stat| {
            Line::from(vec![
                Span::styled(format!("{:<20}", stat.label), Style::default().fg(theme.muted)),
                Span::styled(stat.value, Style::default().fg(theme.fg).bold()),
            ])
        })
        .collect()
}

fn render_scores(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = card("Your Progress", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(2); 2]).split(inner);
    for (score, row) in SECTION_SCORES.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent).bg(theme.border))
            .label(format!("{} {}/{}", score.section, score.score, score.max))
            .ratio(score.ratio());
        let [gauge_area, _] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, theme: &Theme) {
    let [heading, stats, middle, progress] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Min(5),
        Constraint::Length(6),
    ])
    .areas(area);

    frame.render_widget(
        page_heading("Welcome back!", "Ready to continue your SAT preparation journey?", theme),
        heading,
    );

    frame.render_widget(
        Paragraph::new(stat_lines(&DASHBOARD_STATS, theme)).block(card("Statistics", theme)),
        stats,
    );

    let [quick, recent] = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(middle);

    let quick_items: Vec<ListItem> = PRACTICE_MODES
        .iter()
        .map(|mode| ListItem::new(format!("> {}", mode.title)))
        .collect();
    frame.render_widget(List::new(quick_items).block(card("Quick Practice", theme)), quick);

    let recent_items: Vec<ListItem> = RECENT_ACTIVITY
        .iter()
        .map(|activity| {
            ListItem::new(Line::from(vec![
                Span::styled(activity.title, Style::default().fg(theme.fg)),
                Span::styled(format!("  {}  ", activity.when), Style::default().fg(theme.muted)),
                Span::styled(activity.outcome, Style::default().fg(theme.success)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(recent_items).block(card("Recent Activity", theme)), recent);

    render_scores(frame, progress, theme);
}

fn render_practice(frame: &mut Frame, area: Rect, theme: &Theme) {
    let [heading, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        page_heading("Practice Sessions", "Choose a practice mode to improve your SAT skills", theme),
        heading,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(body);
    for (mode, column) in PRACTICE_MODES.iter().zip(columns.iter()) {
        let text = Text::from(vec![
            Line::from(Span::styled(mode.topics, Style::default().fg(theme.muted))),
            Line::default(),
            Line::from(Span::styled(format!("[ {} ]", mode.action), Style::default().fg(theme.accent).bold())),
        ]);
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).block(card(mode.title, theme)),
            *column,
        );
    }
}

fn render_test(frame: &mut Frame, area: Rect, theme: &Theme) {
    let [heading, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        page_heading("SAT Practice Tests", "Take full-length practice tests to prepare for the real SAT", theme),
        heading,
    );

    let [details, history] = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    let mut lines = vec![Line::from(Span::styled("Test Details", Style::default().fg(theme.fg).bold()))];
    lines.extend(TEST_DETAILS.iter().map(|d| Line::from(format!("  - {}", d))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Before You Begin", Style::default().fg(theme.fg).bold())));
    lines.extend(
        TEST_CHECKLIST
            .iter()
            .map(|item| Line::from(Span::styled(format!("  [x] {}", item), Style::default().fg(theme.success)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[ Start Practice Test ]", Style::default().fg(theme.accent).bold()),
        Span::raw("  "),
        Span::styled("[ View Previous Results ]", Style::default().fg(theme.muted)),
    ]));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(card("Full-Length Practice Test", theme)),
        details,
    );

    let items: Vec<ListItem> = TEST_HISTORY
        .iter()
        .map(|result| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(result.name, Style::default().fg(theme.fg).bold()),
                    Span::styled(format!("  {}", result.score), Style::default().fg(theme.accent)),
                ]),
                Line::from(vec![
                    Span::styled(format!("Completed {}", result.completed), Style::default().fg(theme.muted)),
                    Span::styled(format!("  {}", result.change), Style::default().fg(theme.success)),
                ]),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(card("Test History", theme)), history);
}

fn skill_lines(skills: &[SkillAccuracy], theme: &Theme, good: bool) -> Vec<Line<'static>> {
    let color = if good { theme.success } else { theme.warning };
    skills
        .iter()
        .map(|skill| {
            Line::from(vec![
                Span::styled(format!("{:<24}", skill.skill), Style::default().fg(theme.fg)),
                Span::styled(format!("{}% accuracy", skill.accuracy), Style::default().fg(color)),
            ])
        })
        .collect()
}

fn render_analytics(frame: &mut Frame, area: Rect, theme: &Theme) {
    let [heading, top, skills, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Min(4),
    ])
    .areas(area);

    frame.render_widget(
        page_heading("Performance Analytics", "Track your progress and identify areas for improvement", theme),
        heading,
    );

    let [trend, breakdown] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    frame.render_widget(
        Paragraph::new("Score trend chart will be displayed here")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(card("Score Progress", theme)),
        trend,
    );

    let breakdown_lines: Vec<Line> = SECTION_SCORES
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("{:<20}", s.section), Style::default().fg(theme.fg)),
                Span::styled(
                    format!("{}/{} ({}%)", s.score, s.max, (s.ratio() * 1000.0).round() / 10.0),
                    Style::default().fg(theme.accent),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(breakdown_lines).block(card("Subject Breakdown", theme)), breakdown);

    let [strengths, weaknesses, study] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(skills);
    frame.render_widget(Paragraph::new(skill_lines(&STRENGTHS, theme, true)).block(card("Strengths", theme)), strengths);
    frame.render_widget(
        Paragraph::new(skill_lines(&WEAKNESSES, theme, false)).block(card("Areas to Improve", theme)),
        weaknesses,
    );
    frame.render_widget(Paragraph::new(stat_lines(&STUDY_TIME, theme)).block(card("Study Time", theme)), study);

    let mut lines = Vec::new();
    for rec in &RECOMMENDATIONS {
        lines.push(Line::from(Span::styled(rec.title, Style::default().fg(theme.fg).bold())));
        lines.push(Line::from(Span::styled(rec.detail, Style::default().fg(theme.muted))));
        lines.push(Line::from(Span::styled(format!("[ {} ]", rec.action), Style::default().fg(theme.accent))));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(card("Personalized Recommendations", theme)),
        bottom,
    );
}

fn render_profile(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme) {
    let [heading, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        page_heading("Profile Settings", "Manage your account information and preferences", theme),
        heading,
    );

    let [left, right] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [account, targets] = Layout::vertical([Constraint::Length(8), Constraint::Min(3)]).areas(left);
    let [prefs, actions] = Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(right);

    let mut account_lines = vec![
        Line::from(Span::styled("John Doe", Style::default().fg(theme.fg).bold())),
        Line::from(Span::styled("Student", Style::default().fg(theme.muted))),
    ];
    account_lines.extend(stat_lines(&PROFILE_STATS, theme));
    frame.render_widget(Paragraph::new(account_lines).block(card("Account Stats", theme)), account);

    let target_line = Line::from(
        TARGET_SCORES
            .iter()
            .map(|score| Span::styled(format!(" {} ", score), Style::default().fg(theme.accent)))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(
        Paragraph::new(vec![Line::from("Target score"), target_line]).block(card("Personal Information", theme)),
        targets,
    );

    let pref_lines: Vec<Line> = preferences(state)
        .iter()
        .map(|(label, on)| {
            let (mark, color) = if *on { ("[x]", theme.success) } else { ("[ ]", theme.muted) };
            Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::styled(*label, Style::default().fg(theme.fg)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(pref_lines).block(card("Preferences", theme)), prefs);

    let action_lines = vec![
        Line::from(Span::styled("[ Change Password ]", Style::default().fg(theme.accent))),
        Line::from(Span::styled("[ Export Data ] Download your practice history and progress data.", Style::default().fg(theme.fg))),
        Line::from(Span::styled(
            "[ Delete Account ] Permanently delete your account and all associated data.",
            Style::default().fg(theme.error),
        )),
    ];
    frame.render_widget(
        Paragraph::new(action_lines).wrap(Wrap { trim: true }).block(card("Account Actions", theme)),
        actions,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_auth_stub(frame: &mut Frame, area: Rect, title: &'static str, hint: &'static str, theme: &Theme) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);
    let text = Text::from(vec![
        Line::from(Span::styled("TutorLMS", Style::default().fg(theme.accent).bold())),
        Line::default(),
        Line::from(Span::styled(hint, Style::default().fg(theme.muted))),
        Line::default(),
        Line::from(Span::styled("Press 1 to continue to the dashboard", Style::default().fg(theme.fg))),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(card(title, theme)),
        centered(area, 50, 9),
    );
}

fn render_login(frame: &mut Frame, area: Rect, theme: &Theme) {
    render_auth_stub(frame, area, "Sign In", "Sign in is not available yet", theme);
}

fn render_register(frame: &mut Frame, area: Rect, theme: &Theme) {
    render_auth_stub(frame, area, "Create Account", "Registration is not available yet", theme);
}

fn render_not_found(frame: &mut Frame, area: Rect, resolution: &Resolution, theme: &Theme) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);
    let text = Text::from(vec![
        Line::from(Span::styled("404", Style::default().fg(theme.accent).bold())),
        Line::from(Span::styled("Page Not Found", Style::default().fg(theme.fg).bold())),
        Line::default(),
        Line::from(Span::styled(
            format!("Sorry, we couldn't find {}. It might have been moved or doesn't exist.", resolution.path),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[1] Go to Dashboard", Style::default().fg(theme.accent)),
            Span::raw("   "),
            Span::styled("[2] Start Practice", Style::default().fg(theme.accent)),
        ]),
        Line::default(),
        Line::from(Span::styled("Need help? Contact Support", Style::default().fg(theme.muted))),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        centered(area, 70, 10),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_score_ratio() {
        assert_eq!(SECTION_SCORES[0].ratio(), 0.975);
        assert_eq!(SECTION_SCORES[1].ratio(), 0.8);
        let empty = SectionScore { section: "x", score: 0, max: 0 };
        assert_eq!(empty.ratio(), 0.0);
    }

    #[test]
    fn test_preferences_follow_dark_mode() {
        let mut state = UiState::default();
        assert_eq!(preferences(&state)[3], ("Dark mode", false));
        state.dark_mode = true;
        assert_eq!(preferences(&state)[3], ("Dark mode", true));
    }
}
