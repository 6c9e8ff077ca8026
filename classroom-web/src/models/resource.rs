//! One CRUD collection store, instantiated per backend resource.

use super::LoadStatus;
use classroom_shared::models::{Announcement, Quiz};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use yewdux::{Context, Store};

/// A server-owned record that lives in a [`ResourceState`] list.
pub trait Resource: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    /// Collection path, e.g. `/quizzes`.
    const ENDPOINT: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    /// Server-assigned identifier. Unsaved records have none and can't be
    /// targeted by update or delete.
    fn id(&self) -> Option<&str>;
}

impl Resource for Announcement {
    const ENDPOINT: &'static str = "/announcements";
    const SINGULAR: &'static str = "announcement";
    const PLURAL: &'static str = "announcements";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Quiz {
    const ENDPOINT: &'static str = "/quizzes";
    const SINGULAR: &'static str = "quiz";
    const PLURAL: &'static str = "quizzes";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Cached list of one resource plus the outcome of the last request.
///
/// Nothing is applied optimistically: every transition below runs after the
/// backend has answered, so failures never need a rollback.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub list: Vec<T>,
    pub status: LoadStatus,
    pub error: Option<String>,
}

pub type Announcements = ResourceState<Announcement>;
pub type Quizzes = ResourceState<Quiz>;

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            status: LoadStatus::Idle,
            error: None,
        }
    }
}

impl<T: Resource> Store for ResourceState<T> {
    fn new(_cx: &Context) -> Self {
        Self::default()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl<T: Resource> ResourceState<T> {
    pub fn fetch_started(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// Replaces the list with the server's order.
    pub fn fetch_succeeded(&mut self, items: Vec<T>) {
        self.status = LoadStatus::Succeeded;
        self.list = items;
    }

    /// Keeps whatever list was loaded before.
    pub fn fetch_failed(&mut self, message: String) {
        self.status = LoadStatus::Failed;
        self.error = Some(message);
    }

    /// Newest first.
    pub fn created(&mut self, item: T) {
        self.list.insert(0, item);
    }

    /// Swaps in `item` wherever its identifier matches, keeping positions.
    pub fn updated(&mut self, item: T) {
        let Some(id) = item.id().map(str::to_string) else {
            return;
        };
        for slot in &mut self.list {
            if slot.id() == Some(id.as_str()) {
                *slot = item.clone();
            }
        }
    }

    /// Drops every entry with identifier `id`. Unknown ids are a no-op.
    pub fn deleted(&mut self, id: &str) {
        self.list.retain(|item| item.id() != Some(id));
    }

    /// Create, update and delete failures only record the message.
    pub fn mutation_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Prepends without a backend round trip.
    pub fn add_local(&mut self, item: T) {
        self.created(item);
    }

    pub fn remove_local(&mut self, id: &str) {
        self.deleted(id);
    }

    /// Back to the never-fetched state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.list.iter().find(|item| item.id() == Some(id))
    }
}
