mod task_service;
mod quote_service;

pub use task_service::{LoginOutcome, Registration, TaskService};
pub use quote_service::QuoteService;
