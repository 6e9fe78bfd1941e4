use std::sync::Arc;
use tokio::sync::Mutex;
use crate::errors::StoreResult;
use crate::models::{Task, User};
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyExists,
}

impl Registration {
    pub fn status(self) -> &'static str {
        match self {
            Registration::Created => "User created",
            Registration::AlreadyExists => "User already exists",
        }
    }
}

// Unknown user and wrong password are deliberately the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    Invalid,
}

impl LoginOutcome {
    pub fn status(self) -> &'static str {
        match self {
            LoginOutcome::LoggedIn => "Logged in",
            LoginOutcome::Invalid => "Invalid username or password",
        }
    }
}

/// Users and their tasks.
pub struct TaskService {
    users: Store<User>,
    tasks: Store<Task>,
    // Held across the duplicate check and the append of a new user.
    registration: Arc<Mutex<()>>,
}

impl TaskService {
    pub fn new(users: Store<User>, tasks: Store<Task>) -> Self {
        Self {
            users,
            tasks,
            registration: Arc::new(Mutex::new(())),
        }
    }

    pub async fn ensure(&self) -> StoreResult<()> {
        self.users.ensure().await?;
        self.tasks.ensure().await
    }

    pub async fn create_user(&self, user: User) -> StoreResult<Registration> {
        tracing::info!("Trying to create user: {}", user.username);
        let _guard = self.registration.lock().await;

        let existing = self.users.find(|u| u.username == user.username).await?;
        if existing.is_some() {
            tracing::warn!("User already exists: {}", user.username);
            return Ok(Registration::AlreadyExists);
        }

        self.users.append(&user).await?;
        tracing::info!("User created: {}", user.username);
        Ok(Registration::Created)
    }

    pub async fn login(&self, username: &str, password: &str) -> StoreResult<LoginOutcome> {
        tracing::info!("Login attempt for user: {}", username.trim());
        let (username, password) = (username.trim(), password.trim());

        let matched = self
            .users
            .find(|u| u.username.trim() == username && u.password.trim() == password)
            .await?;

        match matched {
            Some(_) => {
                tracing::info!("Login successful for user: {}", username);
                Ok(LoginOutcome::LoggedIn)
            }
            None => {
                tracing::warn!("Login failed for user: {}", username);
                Ok(LoginOutcome::Invalid)
            }
        }
    }

    pub async fn create_task(&self, task: Task) -> StoreResult<()> {
        self.tasks.append(&task).await?;
        tracing::info!("Task created for user {}: {}", task.user, task.task);
        Ok(())
    }

    pub async fn get_tasks(&self, name: &str) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.filter(|t| t.user == name).await?;
        tracing::debug!("Found {} tasks for user {}", tasks.len(), name);
        Ok(tasks)
    }
}

impl Clone for TaskService {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tasks: self.tasks.clone(),
            registration: self.registration.clone(),
        }
    }
}
