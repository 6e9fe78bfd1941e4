use serde::{Deserialize, Serialize};
use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn is_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }
}

impl Record for Quote {
    const COLUMNS: &'static [&'static str] = &["text", "author"];

    fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            text: fields.next().unwrap_or_default(),
            author: fields.next().unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.text.clone(), self.author.clone()]
    }
}
