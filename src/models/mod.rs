pub mod category;
pub mod record;
pub mod result;

pub use category::{Category, CategorySpec, Descriptor, DisplayTemplate};
pub use record::{FieldValue, Record};
pub use result::SearchResult;
