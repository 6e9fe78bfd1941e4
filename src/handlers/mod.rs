mod auth;
mod task;
mod character;
mod quote;

pub use auth::{create_user, login};
pub use task::{create_task, get_tasks};
pub use character::{list_characters, get_character, create_character};
pub use quote::{create_quote, get_quote, get_quote_by_author};
