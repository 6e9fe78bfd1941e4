use serde::{Deserialize, Serialize};
use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub description: String,
}

impl Record for Character {
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            name: fields.next().unwrap_or_default(),
            description: fields.next().unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}
