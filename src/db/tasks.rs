//! Task store.
//!
//! Task deletion is not guarded here; callers check the event store for
//! references first. Setting a default clears the previous default inside
//! one transaction so at most one row ever carries the flag.

use super::db::Db;
use crate::libs::task::{Task, TaskFilter};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use std::error::Error;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    active INTEGER NOT NULL DEFAULT 1,
    ordering INTEGER NOT NULL DEFAULT 0,
    is_default INTEGER NOT NULL DEFAULT 0
);";
const INSERT_TASK: &str = "INSERT INTO tasks (name, active, ordering, is_default) VALUES (?1, ?2, ?3, ?4)";
const INSERT_TASK_WITH_ID: &str = "INSERT INTO tasks (id, name, active, ordering, is_default) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?1, active = ?2, ordering = ?3 WHERE id = ?4";
const SELECT_TASKS: &str = "SELECT id, name, active, ordering, is_default FROM tasks";
const ORDER_TASKS: &str = "ORDER BY ordering, name";
const CLEAR_DEFAULT: &str = "UPDATE tasks SET is_default = 0 WHERE is_default = 1";
const SET_DEFAULT: &str = "UPDATE tasks SET is_default = 1 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks, Box<dyn Error>> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Stores a task (ignoring any id on it) and returns the record with
    /// the assigned id.
    pub fn insert(&mut self, task: &Task) -> Result<Task, Box<dyn Error>> {
        self.conn
            .execute(INSERT_TASK, params![task.name, task.active, task.ordering, task.is_default])?;
        Ok(Task {
            id: Some(self.conn.last_insert_rowid()),
            ..task.clone()
        })
    }

    /// Stores a task under its existing id; restore path, where events
    /// reference task ids from the backup.
    pub fn insert_with_id(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        self.conn
            .execute(INSERT_TASK_WITH_ID, params![task.id, task.name, task.active, task.ordering, task.is_default])?;
        Ok(())
    }

    pub fn update(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        self.conn.execute(UPDATE_TASK, params![task.name, task.active, task.ordering, task.id])?;
        Ok(())
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>, Box<dyn Error>> {
        let (sql, params): (String, Vec<Box<dyn rusqlite::ToSql>>) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_TASKS), vec![]),
            TaskFilter::Active => (format!("{} WHERE active = 1 {}", SELECT_TASKS, ORDER_TASKS), vec![]),
            TaskFilter::ById(id) => (format!("{} WHERE id = ?1", SELECT_TASKS), vec![Box::new(id)]),
            TaskFilter::ByName(name) => (format!("{} WHERE name = ?1 {}", SELECT_TASKS, ORDER_TASKS), vec![Box::new(name)]),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(rusqlite::params_from_iter(params.iter()), row_to_task)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Task>, Box<dyn Error>> {
        Ok(self.fetch(TaskFilter::ById(id))?.into_iter().next())
    }

    pub fn find_by_name(&mut self, name: &str) -> Result<Option<Task>, Box<dyn Error>> {
        Ok(self.fetch(TaskFilter::ByName(name.to_string()))?.into_iter().next())
    }

    /// The task automatic clock-ins are booked on, if one is flagged.
    pub fn default_task(&mut self) -> Result<Option<Task>, Box<dyn Error>> {
        let sql = format!("{} WHERE is_default = 1 LIMIT 1", SELECT_TASKS);
        let task = self.conn.query_row(&sql, [], row_to_task).optional()?;
        Ok(task)
    }

    /// Flags `id` as the default, clearing any previous default in the
    /// same transaction.
    pub fn set_default(&mut self, id: i64) -> Result<(), Box<dyn Error>> {
        let transaction = self.conn.transaction()?;
        transaction.execute(CLEAR_DEFAULT, [])?;
        transaction.execute(SET_DEFAULT, params![id])?;
        transaction.commit()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), Box<dyn Error>> {
        self.conn.execute(DELETE_TASK, params![id])?;
        Ok(())
    }

    pub fn delete_all(&mut self) -> Result<(), Box<dyn Error>> {
        self.conn.execute(DELETE_ALL_TASKS, [])?;
        Ok(())
    }
}

fn row_to_task(row: &Row) -> Result<Task> {
    Ok(Task {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        active: row.get(2)?,
        ordering: row.get(3)?,
        is_default: row.get(4)?,
    })
}
