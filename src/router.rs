//! Route table and navigation history.
//!
//! Routes are an ordered list of (matcher, target, layout) entries checked top
//! to bottom. Anything that falls through renders [`Page::NotFound`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Practice,
    Test,
    Analytics,
    Profile,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Practice,
        Page::Test,
        Page::Analytics,
        Page::Profile,
        Page::NotFound,
    ];

    /// Identifier used for `current_page` in the UI store.
    pub fn name(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Practice => "practice",
            Page::Test => "test",
            Page::Analytics => "analytics",
            Page::Profile => "profile",
            Page::NotFound => "not-found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Register => "Create Account",
            Page::Dashboard => "Dashboard",
            Page::Practice => "Practice",
            Page::Test => "Tests",
            Page::Analytics => "Analytics",
            Page::Profile => "Profile",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Canonical path for the page. `NotFound` has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Login => Some("/login"),
            Page::Register => Some("/register"),
            Page::Dashboard => Some("/dashboard"),
            Page::Practice => Some("/practice"),
            Page::Test => Some("/test"),
            Page::Analytics => Some("/analytics"),
            Page::Profile => Some("/profile"),
            Page::NotFound => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header navigation links, in display order.
pub const NAV_LINKS: [Page; 4] = [Page::Dashboard, Page::Practice, Page::Test, Page::Analytics];

/// Path of the index redirect target.
pub const HOME_PATH: &str = "/dashboard";

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Normalized path this route matches exactly.
    pub path: &'static str,
    pub target: RouteTarget,
    /// Whether the view is wrapped in the header/navigation chrome.
    pub layout: bool,
}

impl Route {
    const fn page(path: &'static str, page: Page, layout: bool) -> Self {
        Self {
            path,
            target: RouteTarget::Page(page),
            layout,
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.path.eq_ignore_ascii_case(normalized)
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The path as the user entered it.
    pub requested: String,
    /// Normalized path after following redirects.
    pub path: String,
    pub page: Page,
    pub layout: bool,
    /// Normalized path of the redirect that was followed, if any.
    pub redirected_from: Option<String>,
}

/// Strips query and fragment, collapses trailing slashes and guarantees a
/// leading slash. The empty path is the root.
pub fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// The application's routes, in priority order.
    pub fn new() -> Self {
        Self {
            routes: vec![
                // Authentication stubs render standalone
                Route::page("/login", Page::Login, false),
                Route::page("/register", Page::Register, false),
                // Everything under "/" is wrapped in the layout
                Route {
                    path: "/",
                    target: RouteTarget::Redirect(HOME_PATH),
                    layout: true,
                },
                Route::page("/dashboard", Page::Dashboard, true),
                Route::page("/practice", Page::Practice, true),
                Route::page("/test", Page::Test, true),
                Route::page("/analytics", Page::Analytics, true),
                Route::page("/profile", Page::Profile, true),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First route matching the normalized path, if any.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        let normalized = normalize(path);
        self.routes.iter().find(|route| route.matches(&normalized))
    }

    /// Resolves a path to exactly one page, following redirects. Unmatched
    /// paths resolve to the standalone not-found view.
    pub fn resolve(&self, path: &str) -> Resolution {
        let mut current = normalize(path);
        let mut redirected_from = None;

        for _ in 0..MAX_REDIRECTS {
            match self.routes.iter().find(|route| route.matches(&current)) {
                Some(Route {
                    target: RouteTarget::Page(page),
                    layout,
                    ..
                }) => {
                    return Resolution {
                        requested: path.to_string(),
                        path: current,
                        page: *page,
                        layout: *layout,
                        redirected_from,
                    };
                }
                Some(Route {
                    target: RouteTarget::Redirect(to),
                    ..
                }) => {
                    let to = normalize(to);
                    redirected_from = Some(std::mem::replace(&mut current, to));
                }
                None => break,
            }
        }

        Resolution {
            requested: path.to_string(),
            path: current,
            page: Page::NotFound,
            layout: false,
            redirected_from,
        }
    }
}

/// Current location plus a back stack. Navigation is never refused.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    current: Resolution,
    history: Vec<Resolution>,
}

impl Navigator {
    pub fn new(table: RouteTable, initial_path: &str) -> Self {
        let current = table.resolve(initial_path);
        Self {
            table,
            current,
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> &Resolution {
        &self.current
    }

    pub fn location(&self) -> &str {
        &self.current.path
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Navigates to `path`. Re-entering the current location does not grow
    /// the history.
    pub fn navigate(&mut self, path: &str) -> &Resolution {
        let next = self.table.resolve(path);
        tracing::debug!(
            requested = %next.requested,
            path = %next.path,
            page = %next.page,
            "navigate"
        );

        if next.path != self.current.path {
            let previous = std::mem::replace(&mut self.current, next);
            self.history.push(previous);
        } else {
            self.current = next;
        }
        &self.current
    }

    /// Returns to the previous location. `false` when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!(path = %previous.path, "navigate back");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize("/dashboard/"), "/dashboard");
        assert_eq!(normalize("practice"), "/practice");
        assert_eq!(normalize("/test?section=math#q3"), "/test");
        assert_eq!(normalize("  /profile  "), "/profile");
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        let table = RouteTable::new();
        let root = table.resolve("/");
        let dashboard = table.resolve("/dashboard");

        assert_eq!(root.page, dashboard.page);
        assert_eq!(root.path, "/dashboard");
        assert!(root.layout);
        assert_eq!(root.redirected_from.as_deref(), Some("/"));
        assert_eq!(dashboard.redirected_from, None);
    }

    #[test]
    fn test_layout_pages() {
        let table = RouteTable::new();
        for (path, page) in [
            ("/dashboard", Page::Dashboard),
            ("/practice", Page::Practice),
            ("/test", Page::Test),
            ("/analytics", Page::Analytics),
            ("/profile", Page::Profile),
        ] {
            let resolution = table.resolve(path);
            assert_eq!(resolution.page, page, "{}", path);
            assert!(resolution.layout, "{} should use the layout", path);
        }
    }

    #[test]
    fn test_auth_pages_are_standalone() {
        let table = RouteTable::new();
        let login = table.resolve("/login");
        assert_eq!(login.page, Page::Login);
        assert!(!login.layout);

        let register = table.resolve("/register");
        assert_eq!(register.page, Page::Register);
        assert!(!register.layout);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        let table = RouteTable::new();
        for path in ["/nonexistent-path", "/dashboard/extra", "/login/again", "/settings"] {
            let resolution = table.resolve(path);
            assert_eq!(resolution.page, Page::NotFound, "{}", path);
            assert!(!resolution.layout);
        }
    }

    #[test]
    fn test_matching_ignores_case_and_trailing_slash() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/Dashboard/").page, Page::Dashboard);
        assert_eq!(table.resolve("/LOGIN").page, Page::Login);
    }

    #[test]
    fn test_every_page_path_resolves_to_itself() {
        let table = RouteTable::new();
        for page in Page::ALL {
            if let Some(path) = page.path() {
                assert_eq!(table.resolve(path).page, page);
            }
        }
    }

    #[test]
    fn test_navigator_history() {
        let mut nav = Navigator::new(RouteTable::new(), "/");
        assert_eq!(nav.current().page, Page::Dashboard);
        assert!(!nav.can_go_back());

        nav.navigate("/practice");
        nav.navigate("/practice/");
        assert_eq!(nav.history_len(), 1);

        nav.navigate("/nowhere");
        assert_eq!(nav.current().page, Page::NotFound);

        assert!(nav.back());
        assert_eq!(nav.current().page, Page::Practice);
        assert!(nav.back());
        assert_eq!(nav.current().page, Page::Dashboard);
        assert!(!nav.back());
        assert_eq!(nav.location(), "/dashboard");
    }

    #[test]
    fn test_navigating_to_root_from_dashboard_keeps_history_flat() {
        let mut nav = Navigator::new(RouteTable::new(), "/dashboard");
        nav.navigate("/");
        assert_eq!(nav.history_len(), 0);
        assert_eq!(nav.current().redirected_from.as_deref(), Some("/"));
    }
}
