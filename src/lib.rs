pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig, Settings};
pub use self::core::{engine::OperationEngine, strings::StringService};
pub use domain::model::{CalcOp, Operation, OperationOutput, OutputFormat, TextOp};
pub use utils::error::{Result, ServiceError};
