//! Task model: the work items clock-in events are booked against.

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// `None` until the task has been stored.
    pub id: Option<i64>,
    pub name: String,
    pub active: bool,
    pub ordering: i64,
    /// At most one task is the default; automatic clock-ins book on it.
    pub is_default: bool,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            active: true,
            ordering: 0,
            is_default: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Active,
    ById(i64),
    ByName(String),
}
