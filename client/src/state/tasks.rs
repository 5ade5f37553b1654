//! Tasks widget: a per-instance to-do list.
//!
//! DESIGN
//! ======
//! The list is saved after every edit under the widget's own key, mirroring
//! the layout store's mutate-then-flush contract.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::registry::WidgetKind;
use crate::util::storage::{KeyValueStore, load_json, persist_json};

/// One to-do entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Which tasks the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Tasks of one widget instance, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn load(store: &impl KeyValueStore, widget_id: &str) -> Self {
        let tasks = load_json(store, &WidgetKind::Tasks.config_key(widget_id)).unwrap_or_default();
        Self { tasks }
    }

    pub fn save(&self, store: &impl KeyValueStore, widget_id: &str) {
        persist_json(store, &WidgetKind::Tasks.config_key(widget_id), &self.tasks);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Append a task. Blank titles are refused. Returns the new id.
    pub fn add(&mut self, title: &str, created_at: String) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_owned(),
            completed: false,
            created_at,
        });
        Some(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| t.completed = !t.completed)
            .is_some()
    }

    /// Rename a task. Blank titles are refused.
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| t.title = title.to_owned())
            .is_some()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}
