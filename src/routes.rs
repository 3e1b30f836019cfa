//! Client-side route table

use std::fmt;

/// A navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Upload,
    MediaPlayer,
}

/// Every path the router answers to, with its page
const TABLE: &[(&str, Route)] = &[
    ("/", Route::Login),
    ("/login", Route::Login),
    ("/signup", Route::Signup),
    ("/dashboard", Route::Dashboard),
    ("/upload-media", Route::Upload),
    ("/upload", Route::Upload),
    ("/media-player", Route::MediaPlayer),
];

impl Route {
    /// Resolve a path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        TABLE.iter().find(|(p, _)| *p == path).map(|(_, r)| *r)
    }

    /// Canonical path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Upload => "/upload-media",
            Self::MediaPlayer => "/media-player",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign up",
            Self::Dashboard => "Dashboard",
            Self::Upload => "Upload",
            Self::MediaPlayer => "Media Player",
        }
    }

    /// Whether `path` shows this page
    pub fn is_active(&self, path: &str) -> bool {
        Route::from_path(path) == Some(*self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Pages listed in the header navigation
pub const NAV_ITEMS: [Route; 3] = [Route::Dashboard, Route::Upload, Route::MediaPlayer];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_page_sets_resolve() {
        assert_eq!(Route::from_path("/"), Some(Route::Login));
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
        assert_eq!(Route::from_path("/signup"), Some(Route::Signup));
        assert_eq!(Route::from_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/upload-media"), Some(Route::Upload));
        assert_eq!(Route::from_path("/upload"), Some(Route::Upload));
        assert_eq!(Route::from_path("/media-player"), Some(Route::MediaPlayer));
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::Upload,
            Route::MediaPlayer,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn legacy_upload_path_highlights_upload() {
        assert!(Route::Upload.is_active("/upload"));
        assert!(!Route::Dashboard.is_active("/upload"));
        let labels: Vec<_> = NAV_ITEMS.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Dashboard", "Upload", "Media Player"]);
    }
}
