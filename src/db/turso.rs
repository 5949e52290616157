//! libsql/Turso client implementation.

use crate::types::{AppError, Label, Result, Status, Task, UpdateTaskRequest, User};
use async_trait::async_trait;
use chrono::Utc;
use libsql::{Builder, Connection, Database, Row};

use super::traits::DatabaseClient;

/// libsql-backed store. Works against in-memory SQLite, a local database
/// file, or a remote Turso instance.
pub struct TursoClient {
    conn: Connection,
}

impl TursoClient {
    fn connect(db: &Database) -> Result<Connection> {
        db.connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))
    }

    /// Opens an ephemeral in-memory database (used for development and tests).
    pub async fn new_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory db: {}", e)))?;

        // Each `connect()` to a `:memory:` libsql database opens a separate
        // empty database, so the client holds a single connection and
        // `connection()` hands out clones of it.
        let client = Self {
            conn: Self::connect(&db)?,
        };
        client.initialize_schema().await?;

        Ok(client)
    }

    /// Opens a local SQLite database file.
    pub async fn new_local(path: &str) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database {}: {}", path, e)))?;

        let client = Self {
            conn: Self::connect(&db)?,
        };
        client.initialize_schema().await?;

        Ok(client)
    }

    /// Connects to a remote Turso database.
    #[cfg(feature = "turso")]
    pub async fn new_remote(url: String, auth_token: String) -> Result<Self> {
        let db = Builder::new_remote(url, auth_token)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Turso: {}", e)))?;

        let client = Self {
            conn: Self::connect(&db)?,
        };
        client.initialize_schema().await?;

        Ok(client)
    }

    /// Opens a connection to the underlying database.
    pub fn connection(&self) -> Result<Connection> {
        Ok(self.conn.clone())
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        // Users table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_digest TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        // Statuses table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS statuses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                created_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create statuses table: {}", e)))?;

        // Labels table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS labels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                created_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create labels table: {}", e)))?;

        // Tasks table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                status_id INTEGER NOT NULL,
                creator_id INTEGER NOT NULL,
                executor_id INTEGER,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (status_id) REFERENCES statuses(id),
                FOREIGN KEY (creator_id) REFERENCES users(id),
                FOREIGN KEY (executor_id) REFERENCES users(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create tasks table: {}", e)))?;

        // Task-label join table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS task_labels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task_id INTEGER NOT NULL,
                label_id INTEGER NOT NULL,
                FOREIGN KEY (task_id) REFERENCES tasks(id),
                FOREIGN KEY (label_id) REFERENCES labels(id),
                UNIQUE(task_id, label_id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create task_labels table: {}", e)))?;

        Ok(())
    }

    fn map_user(row: &Row) -> Result<User> {
        Ok(User {
            id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
            first_name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
            last_name: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            email: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
            password_digest: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
            created_at: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
            updated_at: row.get(6).map_err(|e| AppError::Database(e.to_string()))?,
        })
    }

    async fn task_labels(&self, conn: &Connection, task_id: i64) -> Result<Vec<i64>> {
        let mut rows = conn
            .query(
                "SELECT label_id FROM task_labels WHERE task_id = ? ORDER BY label_id",
                [task_id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query task labels: {}", e)))?;

        let mut ids = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            ids.push(row.get(0).map_err(|e| AppError::Database(e.to_string()))?);
        }
        Ok(ids)
    }

    async fn map_task(&self, conn: &Connection, row: &Row) -> Result<Task> {
        let id: i64 = row.get(0).map_err(|e| AppError::Database(e.to_string()))?;
        Ok(Task {
            id,
            name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
            description: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            status_id: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
            creator_id: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
            executor_id: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
            label_ids: self.task_labels(conn, id).await?,
            created_at: row.get(6).map_err(|e| AppError::Database(e.to_string()))?,
            updated_at: row.get(7).map_err(|e| AppError::Database(e.to_string()))?,
        })
    }

    async fn verify_task_references(
        &self,
        conn: &Connection,
        status_id: Option<i64>,
        executor_id: Option<i64>,
        label_ids: Option<&[i64]>,
    ) -> Result<()> {
        if let Some(status_id) = status_id {
            if !self.row_exists(conn, "statuses", status_id).await? {
                return Err(AppError::Validation(format!(
                    "Status {} does not exist",
                    status_id
                )));
            }
        }
        if let Some(executor_id) = executor_id {
            if !self.row_exists(conn, "users", executor_id).await? {
                return Err(AppError::Validation(format!(
                    "Executor {} does not exist",
                    executor_id
                )));
            }
        }
        if let Some(label_ids) = label_ids {
            for label_id in label_ids {
                if !self.row_exists(conn, "labels", *label_id).await? {
                    return Err(AppError::Validation(format!(
                        "Label {} does not exist",
                        label_id
                    )));
                }
            }
        }
        Ok(())
    }

    async fn row_exists(&self, conn: &Connection, table: &str, id: i64) -> Result<bool> {
        // `table` is always one of our own identifiers, never user input.
        let mut rows = conn
            .query(&format!("SELECT 1 FROM {} WHERE id = ?", table), [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to query {}: {}", table, e)))?;

        Ok(rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .is_some())
    }

    async fn reference_count(
        &self,
        conn: &Connection,
        table: &str,
        column: &str,
        id: i64,
    ) -> Result<i64> {
        let mut rows = conn
            .query(
                &format!("SELECT COUNT(1) FROM {} WHERE {} = ?", table, column),
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to count {}: {}", table, e)))?;

        let row = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .ok_or_else(|| AppError::Database("COUNT returned no rows".to_string()))?;
        row.get(0).map_err(|e| AppError::Database(e.to_string()))
    }

    async fn replace_task_labels(
        &self,
        conn: &Connection,
        task_id: i64,
        label_ids: &[i64],
    ) -> Result<()> {
        conn.execute("DELETE FROM task_labels WHERE task_id = ?", [task_id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear task labels: {}", e)))?;

        for label_id in label_ids {
            conn.execute(
                "INSERT OR IGNORE INTO task_labels (task_id, label_id) VALUES (?, ?)",
                (task_id, *label_id),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to attach label: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseClient for TursoClient {
    // User operations
    async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<User> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO users (first_name, last_name, email, password_digest, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (first_name, last_name, email, password_digest, now, now),
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AppError::Conflict(format!("Email {} is already registered", email))
            } else {
                AppError::Database(format!("Failed to create user: {}", e))
            }
        })?;

        let id = conn.last_insert_rowid();
        self.get_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::Database("Created user vanished".to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, first_name, last_name, email, password_digest, created_at, updated_at
                 FROM users WHERE email = ?",
                [email],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Self::map_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, first_name, last_name, email, password_digest, created_at, updated_at
                 FROM users WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Self::map_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, first_name, last_name, email, password_digest, created_at, updated_at
                 FROM users ORDER BY id",
                (),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query users: {}", e)))?;

        let mut users = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            users.push(Self::map_user(&row)?);
        }
        Ok(users)
    }

    async fn update_user(
        &self,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        password_digest: Option<&str>,
    ) -> Result<User> {
        let conn = self.connection()?;
        let current = self
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        let now = Utc::now().timestamp();
        conn.execute(
            "UPDATE users
             SET first_name = ?, last_name = ?, email = ?, password_digest = ?, updated_at = ?
             WHERE id = ?",
            (
                first_name.unwrap_or(&current.first_name),
                last_name.unwrap_or(&current.last_name),
                email.unwrap_or(&current.email),
                password_digest.unwrap_or(&current.password_digest),
                now,
                id,
            ),
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AppError::Conflict("Email is already registered".to_string())
            } else {
                AppError::Database(format!("Failed to update user: {}", e))
            }
        })?;

        self.get_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::Database("Updated user vanished".to_string()))
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        if !self.row_exists(&conn, "users", id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        // RESTRICT on created tasks, SET NULL on assigned tasks, matching the
        // relational schema's foreign-key actions.
        if self.reference_count(&conn, "tasks", "creator_id", id).await? > 0 {
            return Err(AppError::Conflict(
                "User still owns tasks and cannot be deleted".to_string(),
            ));
        }

        conn.execute(
            "UPDATE tasks SET executor_id = NULL WHERE executor_id = ?",
            [id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to unassign tasks: {}", e)))?;

        conn.execute("DELETE FROM users WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))?;

        Ok(())
    }

    // Status operations
    async fn create_status(&self, name: &str) -> Result<Status> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO statuses (name, created_at) VALUES (?, ?)",
            (name, now),
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AppError::Conflict(format!("Status {} already exists", name))
            } else {
                AppError::Database(format!("Failed to create status: {}", e))
            }
        })?;

        Ok(Status {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        })
    }

    async fn get_status(&self, id: i64) -> Result<Option<Status>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, name, created_at FROM statuses WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query status: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Status {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            })),
            None => Ok(None),
        }
    }

    async fn list_statuses(&self) -> Result<Vec<Status>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query("SELECT id, name, created_at FROM statuses ORDER BY id", ())
            .await
            .map_err(|e| AppError::Database(format!("Failed to query statuses: {}", e)))?;

        let mut statuses = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            statuses.push(Status {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            });
        }
        Ok(statuses)
    }

    async fn update_status(&self, id: i64, name: &str) -> Result<Status> {
        let conn = self.connection()?;

        let changed = conn
            .execute("UPDATE statuses SET name = ? WHERE id = ?", (name, id))
            .await
            .map_err(|e| AppError::Database(format!("Failed to update status: {}", e)))?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("Status {} not found", id)));
        }

        self.get_status(id)
            .await?
            .ok_or_else(|| AppError::Database("Updated status vanished".to_string()))
    }

    async fn delete_status(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        if !self.row_exists(&conn, "statuses", id).await? {
            return Err(AppError::NotFound(format!("Status {} not found", id)));
        }
        if self.reference_count(&conn, "tasks", "status_id", id).await? > 0 {
            return Err(AppError::Conflict(
                "Status is in use and cannot be deleted".to_string(),
            ));
        }

        conn.execute("DELETE FROM statuses WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete status: {}", e)))?;
        Ok(())
    }

    // Label operations
    async fn create_label(&self, name: &str) -> Result<Label> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO labels (name, created_at) VALUES (?, ?)",
            (name, now),
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AppError::Conflict(format!("Label {} already exists", name))
            } else {
                AppError::Database(format!("Failed to create label: {}", e))
            }
        })?;

        Ok(Label {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        })
    }

    async fn get_label(&self, id: i64) -> Result<Option<Label>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query("SELECT id, name, created_at FROM labels WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to query label: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Label {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            })),
            None => Ok(None),
        }
    }

    async fn list_labels(&self) -> Result<Vec<Label>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query("SELECT id, name, created_at FROM labels ORDER BY id", ())
            .await
            .map_err(|e| AppError::Database(format!("Failed to query labels: {}", e)))?;

        let mut labels = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            labels.push(Label {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            });
        }
        Ok(labels)
    }

    async fn update_label(&self, id: i64, name: &str) -> Result<Label> {
        let conn = self.connection()?;

        let changed = conn
            .execute("UPDATE labels SET name = ? WHERE id = ?", (name, id))
            .await
            .map_err(|e| AppError::Database(format!("Failed to update label: {}", e)))?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("Label {} not found", id)));
        }

        self.get_label(id)
            .await?
            .ok_or_else(|| AppError::Database("Updated label vanished".to_string()))
    }

    async fn delete_label(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        if !self.row_exists(&conn, "labels", id).await? {
            return Err(AppError::NotFound(format!("Label {} not found", id)));
        }
        if self
            .reference_count(&conn, "task_labels", "label_id", id)
            .await?
            > 0
        {
            return Err(AppError::Conflict(
                "Label is in use and cannot be deleted".to_string(),
            ));
        }

        conn.execute("DELETE FROM labels WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete label: {}", e)))?;
        Ok(())
    }

    // Task operations
    async fn create_task(
        &self,
        name: &str,
        description: Option<&str>,
        status_id: i64,
        creator_id: i64,
        executor_id: Option<i64>,
        label_ids: &[i64],
    ) -> Result<Task> {
        let conn = self.connection()?;
        self.verify_task_references(&conn, Some(status_id), executor_id, Some(label_ids))
            .await?;

        let now = Utc::now().timestamp();
        conn.execute(
            "INSERT INTO tasks (name, description, status_id, creator_id, executor_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (name, description, status_id, creator_id, executor_id, now, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create task: {}", e)))?;

        let id = conn.last_insert_rowid();
        self.replace_task_labels(&conn, id, label_ids).await?;

        self.get_task(id)
            .await?
            .ok_or_else(|| AppError::Database("Created task vanished".to_string()))
    }

    async fn get_task(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, name, description, status_id, creator_id, executor_id, created_at, updated_at
                 FROM tasks WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query task: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(self.map_task(&conn, &row).await?)),
            None => Ok(None),
        }
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, name, description, status_id, creator_id, executor_id, created_at, updated_at
                 FROM tasks ORDER BY id",
                (),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query tasks: {}", e)))?;

        let mut tasks = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            tasks.push(self.map_task(&conn, &row).await?);
        }
        Ok(tasks)
    }

    async fn update_task(&self, id: i64, changes: &UpdateTaskRequest) -> Result<Task> {
        let conn = self.connection()?;
        let current = self
            .get_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))?;

        self.verify_task_references(
            &conn,
            changes.status_id,
            changes.executor_id,
            changes.label_ids.as_deref(),
        )
        .await?;

        let now = Utc::now().timestamp();
        // creator_id is immutable: it is deliberately absent from the UPDATE.
        conn.execute(
            "UPDATE tasks SET name = ?, description = ?, status_id = ?, executor_id = ?, updated_at = ?
             WHERE id = ?",
            (
                changes.name.as_deref().unwrap_or(&current.name),
                changes.description.as_deref().or(current.description.as_deref()),
                changes.status_id.unwrap_or(current.status_id),
                changes.executor_id.or(current.executor_id),
                now,
                id,
            ),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to update task: {}", e)))?;

        if let Some(label_ids) = &changes.label_ids {
            self.replace_task_labels(&conn, id, label_ids).await?;
        }

        self.get_task(id)
            .await?
            .ok_or_else(|| AppError::Database("Updated task vanished".to_string()))
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        // Label links must go first: the task_labels foreign key blocks
        // deleting a task that still has label rows pointing at it.
        conn.execute("DELETE FROM task_labels WHERE task_id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to clear task labels: {}", e)))?;

        let changed = conn
            .execute("DELETE FROM tasks WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete task: {}", e)))?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("Task {} not found", id)));
        }

        Ok(())
    }
}
