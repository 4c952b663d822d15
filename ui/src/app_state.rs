use fiscal::settings::Settings;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    /// Settings read at start-up; the reset action restores these.
    pub settings: Settings,
}

/// Immutable application state shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self(Arc::new(AppStateData { settings }))
    }
}
