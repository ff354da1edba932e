//! State types and enums for the UI

use webcheck::Report;

/// Lifecycle of a website quick-check run
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckState {
    #[default]
    Idle,
    Running,
    Done(Report),
}

impl CheckState {
    pub fn is_running(&self) -> bool {
        matches!(self, CheckState::Running)
    }
}
