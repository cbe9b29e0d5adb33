use std::sync::Arc;

use shared::domain::Theme;
use tokio::sync::watch;

/// Process-wide light/dark toggle, handed to renderers explicitly instead
/// of being reached through a global.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    current: Arc<watch::Sender<Theme>>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (current, _) = watch::channel(initial);
        Self {
            current: Arc::new(current),
        }
    }

    pub fn get(&self) -> Theme {
        *self.current.borrow()
    }

    pub fn set(&self, theme: Theme) {
        self.current.send_replace(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = match self.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
