use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TasksQuery {
    pub name: String,
}
