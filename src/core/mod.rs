pub mod keeper;
pub mod registry;
pub mod serializer;
pub mod zoo;

pub use crate::domain::model::{Animal, Species, Staff, StaffAction};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
