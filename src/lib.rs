pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::ZooConfig;

pub use core::{
    keeper::ZooKeeperEngine,
    registry::{Entity, Fields, Registry},
    serializer::{Serializer, UnknownTypePolicy},
    zoo::Zoo,
};
pub use domain::model::{Animal, Species, Staff, StaffAction};
pub use utils::error::{Result, ZooError};
