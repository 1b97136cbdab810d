//! Page routing between the home page and the resume

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Resume,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Resume => "/resume",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/resume" => Some(Route::Resume),
            _ => None,
        }
    }
}

/// Current route plus back history
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `path`. Unknown paths and the current route are ignored.
    pub fn navigate(&mut self, path: &str) -> bool {
        let Some(route) = Route::from_path(path) else {
            tracing::debug!(path, "Ignoring unknown route");
            return false;
        };
        if route == self.current {
            return false;
        }

        self.history.push(self.current);
        self.current = route;
        tracing::debug!(route = route.path(), "Navigated");
        true
    }

    /// Return to the previous route. Going back from a start page with no
    /// history lands on home.
    pub fn back(&mut self) -> bool {
        let previous = self.history.pop().unwrap_or(Route::Home);
        if previous == self.current {
            return false;
        }
        self.current = previous;
        true
    }
}
