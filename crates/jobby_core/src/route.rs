use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::JobId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Jobs,
    JobDetails(JobId),
    NotFound(String),
}

impl Route {
    /// Parses an application path such as `/jobs/42`. Query strings and
    /// fragments are ignored; percent-encoded ids are decoded. Leading
    /// slashes collapse to one, so `//jobs` is never read as a host.
    pub fn parse(path: &str) -> Route {
        let relative = format!("/{}", path.trim().trim_start_matches('/'));
        let Ok(url) = Url::parse("app://jobby").and_then(|base| base.join(&relative)) else {
            return Route::NotFound(path.to_string());
        };
        let segments: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Route::Home,
            [first] if first == "login" => Route::Login,
            [first] if first == "jobs" => Route::Jobs,
            [first, id] if first == "jobs" => Route::JobDetails(id.clone()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Home => "/".to_string(),
            Route::Jobs => "/jobs".to_string(),
            Route::JobDetails(id) => format!("/jobs/{}", utf8_percent_encode(id, PATH_SEGMENT)),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Routes that need a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::Jobs | Route::JobDetails(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Characters escaped inside a single path segment.
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    Push,
    Replace,
}

/// In-memory navigation stack. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // `entries` always holds at least one route.
        &self.entries[self.entries.len() - 1]
    }

    pub fn navigate(&mut self, route: Route, mode: NavigationMode) {
        match mode {
            NavigationMode::Push => self.entries.push(route),
            NavigationMode::Replace => {
                if let Some(last) = self.entries.last_mut() {
                    *last = route;
                }
            }
        }
    }

    /// Pops the current entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/jobs"), Route::Jobs);
        assert_eq!(Route::parse("/jobs/"), Route::Jobs);
        assert_eq!(Route::parse("/jobs?search=x"), Route::Jobs);
        assert_eq!(
            Route::parse("/jobs/123"),
            Route::JobDetails("123".to_string())
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/about"),
            Route::NotFound("/about".to_string())
        );
        assert_eq!(
            Route::parse("/jobs/1/extra"),
            Route::NotFound("/jobs/1/extra".to_string())
        );
    }

    #[test]
    fn repeated_leading_slashes_collapse() {
        assert_eq!(Route::parse("//jobs"), Route::Jobs);
        assert_eq!(
            Route::parse("//jobs/42"),
            Route::JobDetails("42".to_string())
        );
        assert_eq!(Route::parse("///login"), Route::Login);
        assert_eq!(Route::parse("//"), Route::Home);
    }

    #[test]
    fn job_ids_are_encoded_in_paths() {
        let route = Route::JobDetails("a b/c".to_string());
        assert_eq!(route.path(), "/jobs/a%20b%2Fc");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut history = History::new(Route::Login);
        history.navigate(Route::Home, NavigationMode::Replace);
        assert_eq!(history.current(), &Route::Home);
        assert!(!history.can_go_back());

        history.navigate(Route::Jobs, NavigationMode::Push);
        assert!(history.can_go_back());
        assert!(history.back());
        assert_eq!(history.current(), &Route::Home);
        assert!(!history.back());
    }
}
