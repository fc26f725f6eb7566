pub mod judges;
pub mod lookup;
pub mod reports;
pub mod settings;

pub use crate::domain::model::{CourtDates, PathSet, Person, Position};
pub use crate::domain::ports::{ConfigProvider, NameParser, RecordStore};
pub use crate::utils::error::Result;
