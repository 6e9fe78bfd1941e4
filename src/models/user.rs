use serde::{Deserialize, Serialize};
use crate::store::Record;

// Passwords are kept and compared as given; there is no hashing layer here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl Record for User {
    const COLUMNS: &'static [&'static str] = &["username", "password"];

    fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            username: fields.next().unwrap_or_default(),
            password: fields.next().unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.username.clone(), self.password.clone()]
    }
}
