use crate::upload::FormConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    TranslateJson,
    TranslateDocument,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::TranslateJson => "/translate-json",
            Route::TranslateDocument => "/translate-document",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "" | "/" => Some(Route::Landing),
            "/translate-json" => Some(Route::TranslateJson),
            "/translate-document" => Some(Route::TranslateDocument),
            _ => None,
        }
    }

    /// The form mounted on this screen, if any.
    pub fn form(self) -> Option<FormConfig> {
        match self {
            Route::Landing => None,
            Route::TranslateJson => Some(FormConfig::json()),
            Route::TranslateDocument => Some(FormConfig::document()),
        }
    }
}

/// Screen history with back and forward, like a browser tab.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
    back: Vec<Route>,
    forward: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Returns false when already on `route`.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        log::debug!("Navigating {} -> {}", self.current.path(), route.path());
        self.back.push(self.current);
        self.forward.clear();
        self.current = route;
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                self.forward.push(self.current);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                self.back.push(self.current);
                self.current = next;
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
    fn test_paths_round_trip() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path("/translate-json/"), Some(Route::TranslateJson));
        assert_eq!(
            Route::from_path(Route::TranslateDocument.path()),
            Some(Route::TranslateDocument)
        );
        assert_eq!(Route::from_path("/pricing"), None);
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = Navigator::new(Route::Landing);
        assert!(!nav.can_go_back());

        nav.navigate(Route::TranslateJson);
        nav.navigate(Route::TranslateDocument);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::TranslateJson);
        assert!(nav.can_go_forward());

        assert!(nav.forward());
        assert_eq!(nav.current(), Route::TranslateDocument);
        assert!(!nav.forward());
    }

    #[test]
    fn test_navigate_clears_forward() {
        let mut nav = Navigator::new(Route::Landing);
        nav.navigate(Route::TranslateJson);
        nav.back();

        nav.navigate(Route::TranslateDocument);
        assert!(!nav.can_go_forward());
        assert!(!nav.navigate(Route::TranslateDocument));
    }

    #[test]
    fn test_only_form_screens_have_forms() {
        assert!(Route::Landing.form().is_none());
        assert_eq!(Route::TranslateJson.form(), Some(FormConfig::json()));
        assert_eq!(Route::TranslateDocument.form(), Some(FormConfig::document()));
    }
}
