//! The navigation boundary.
//!
//! The engine never touches routing or windows itself. Commands produce
//! [`NavRequest`]s, and the session hands them to the host's [`Navigator`].

use std::cell::RefCell;

/// Host-side collaborator that performs navigation.
pub trait Navigator {
    /// Client-side route change to an internal path.
    fn route_to(&self, path: &str);

    /// Open a URI in a new browsing context.
    fn open_external(&self, uri: &str);

    /// Hide and unmount the terminal.
    fn close(&self);
}

/// A navigation side effect requested by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Route(String),
    External(String),
    Close,
}

impl NavRequest {
    /// Forward this request to a navigator.
    pub fn dispatch(&self, navigator: &dyn Navigator) {
        match self {
            Self::Route(path) => navigator.route_to(path),
            Self::External(uri) => navigator.open_external(uri),
            Self::Close => navigator.close(),
        }
    }
}

/// Navigator that records requests instead of performing them.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: RefCell<Vec<NavRequest>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<NavRequest> {
        self.requests.borrow().clone()
    }

    /// Drain the recorded requests.
    pub fn take(&self) -> Vec<NavRequest> {
        self.requests.take()
    }
}

impl Navigator for RecordingNavigator {
    fn route_to(&self, path: &str) {
        self.requests
            .borrow_mut()
            .push(NavRequest::Route(path.to_string()));
    }

    fn open_external(&self, uri: &str) {
        self.requests
            .borrow_mut()
            .push(NavRequest::External(uri.to_string()));
    }

    fn close(&self) {
        self.requests.borrow_mut().push(NavRequest::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_navigator() {
        let nav = RecordingNavigator::new();
        NavRequest::Route("/homelab".to_string()).dispatch(&nav);
        NavRequest::External("https://github.com".to_string()).dispatch(&nav);
        NavRequest::Close.dispatch(&nav);

        assert_eq!(
            nav.take(),
            vec![
                NavRequest::Route("/homelab".to_string()),
                NavRequest::External("https://github.com".to_string()),
                NavRequest::Close,
            ]
        );
        assert!(nav.requests().is_empty());
    }
}
