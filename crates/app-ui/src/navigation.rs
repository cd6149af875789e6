//! Navigation for QR Studio
//!
//! Screens are reached by tapping home-screen cards, so navigation is a
//! single stack rooted at [`Route::Home`]. The renderer owns transitions;
//! this module only records where the user is and how they got there.

use app_core::QrType;
use serde::{Deserialize, Serialize};

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Home screen with the QR type cards
    #[default]
    Home,
    /// Generator form for one QR type
    Generator {
        /// Content type being generated
        qr_type: QrType,
    },
    /// App settings
    Settings,
    /// About page
    About,
}

impl Route {
    /// Generator route for `qr_type`
    pub fn generator(qr_type: QrType) -> Self {
        Route::Generator { qr_type }
    }

    /// Path representation, used as a stable key by the renderer
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Generator { qr_type } => format!("/create/{}", qr_type.slug()),
            Route::Settings => "/settings".to_string(),
            Route::About => "/about".to_string(),
        }
    }

    /// App bar title
    pub fn title(&self) -> String {
        match self {
            Route::Home => app_core::branding::APP_NAME.to_string(),
            Route::Generator { qr_type } => format!("{} QR Code", qr_type.title()),
            Route::Settings => "Settings".to_string(),
            Route::About => "About".to_string(),
        }
    }
}

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Slide in from the right
    #[default]
    Push,
    /// Slide out to the right
    Pop,
    /// Cross-fade
    Fade,
    /// Instant
    None,
}

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
    /// Transition used to reach this entry
    #[serde(default)]
    pub animation: NavigationAnimation,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route, animation: NavigationAnimation) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
            animation,
        }
    }
}

/// Navigation stack rooted at the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Root entry, never popped
    root: StackEntry,
    /// Entries above the root (bottom to top)
    entries: Vec<StackEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root, NavigationAnimation::None),
            entries: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.push_with_animation(route, NavigationAnimation::Push);
    }

    /// Push a route with a specific transition
    pub fn push_with_animation(&mut self, route: Route, animation: NavigationAnimation) {
        tracing::debug!(path = %route.to_path(), "navigate");
        self.entries.push(StackEntry::new(route, animation));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.clear();
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        match self.entries.last_mut() {
            Some(last) => *last = StackEntry::new(route, NavigationAnimation::Fade),
            None => self.root = StackEntry::new(route, NavigationAnimation::Fade),
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth, including the root
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = StackEntry::new(route, NavigationAnimation::None);
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::generator(QrType::Wifi).to_path(), "/create/wifi");
        assert_eq!(Route::Settings.to_path(), "/settings");
    }

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Home.title(), "QR Studio");
        assert_eq!(Route::generator(QrType::Wifi).title(), "WiFi QR Code");
        assert_eq!(Route::About.title(), "About");
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::default();
        assert_eq!(stack.current(), &Route::Home);
        assert!(!stack.can_go_back());

        stack.push(Route::generator(QrType::Url));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_entry().animation, NavigationAnimation::Push);

        assert!(stack.pop());
        assert!(!stack.pop());
        assert_eq!(stack.current(), &Route::Home);
    }

    #[test]
    fn test_stack_replace_and_reset() {
        let mut stack = NavigationStack::default();
        stack.push(Route::Settings);
        stack.replace(Route::About);
        assert_eq!(stack.current(), &Route::About);
        assert_eq!(stack.depth(), 2);

        stack.reset(Route::Settings);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), &Route::Settings);
    }

    #[test]
    fn test_entry_keys_are_unique() {
        let a = StackEntry::new(Route::Home, NavigationAnimation::None);
        let b = StackEntry::new(Route::Home, NavigationAnimation::None);
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_value(Route::generator(QrType::Sms)).unwrap();
        assert_eq!(json["route"], "Generator");
        assert_eq!(json["params"]["qr_type"], "sms");

        let home = serde_json::to_value(Route::Home).unwrap();
        assert_eq!(home["route"], "Home");
    }
}
