use serde::{Deserialize, Serialize};
use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub task: String,
    pub deadline: String,  // free-form, never parsed
    pub user: String,      // owner's username, not checked against users
}

impl Task {
    // The listing endpoint reports each task as a bare [task, deadline, user] triple.
    pub fn into_tuple(self) -> (String, String, String) {
        (self.task, self.deadline, self.user)
    }
}

impl Record for Task {
    const COLUMNS: &'static [&'static str] = &["task", "deadline", "user"];

    fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            task: fields.next().unwrap_or_default(),
            deadline: fields.next().unwrap_or_default(),
            user: fields.next().unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.task.clone(), self.deadline.clone(), self.user.clone()]
    }
}
