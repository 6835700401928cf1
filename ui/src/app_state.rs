use std::ops::Deref;
use std::sync::Arc;

use crate::contributor::Contributor;

/// Immutable data shared across the whole component tree.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    /// Smallest accepted funding goal, in rupees.
    pub min_goal: f64,
    /// Smallest accepted contribution, in rupees.
    pub min_donation: f64,
    /// The static top-contributor leaderboard.
    pub contributors: Vec<Contributor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            min_goal: 1000.0,
            min_donation: 100.0,
            contributors: Contributor::seed(),
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
