mod category;
mod task;

pub(crate) use category::canonical_key;
pub use category::Category;
pub use task::{Task, format_date, parse_date};
