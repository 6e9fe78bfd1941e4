mod user;
mod task;
mod character;
mod quote;
mod forms;

pub use user::User;
pub use task::Task;
pub use character::Character;
pub use quote::Quote;
pub use forms::TasksQuery;
