pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::TerminalView, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::banner::{Banner, Notice, NoticeKind};
pub use crate::core::client::HttpNameApi;
pub use crate::core::controller::{FormController, FormState};
pub use crate::domain::model::{
    ApiResponse, CulturalInsights, DetailContent, FormSnapshot, Gender, GenerateResponse,
    NameOrigin, NameRequest, NameResult,
};
pub use crate::domain::ports::{FormConfig, FormView, NameApi};
pub use crate::utils::error::{ErrorKind, FormError, Result};
