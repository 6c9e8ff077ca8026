pub mod resource;
pub mod session;

pub use resource::{Announcements, Quizzes, Resource, ResourceState};
pub use session::SessionState;

/// Progress of the most recent network-backed operation on a store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}
