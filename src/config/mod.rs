#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{FormSnapshot, Gender};
#[cfg(feature = "cli")]
use crate::domain::ports::FormConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "namegen-form")]
#[command(about = "Generate Chinese name suggestions from a name-generation API")]
pub struct CliConfig {
    // 表單的五個欄位。預設空字串，交給表單驗證處理
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "", help = "Birth date, YYYY-MM-DD")]
    pub birth_date: String,

    #[arg(long, value_enum, default_value_t = Gender::Unknown)]
    pub gender: Gender,

    #[arg(long, default_value = "")]
    pub nationality: String,

    #[arg(long, default_value = "http://localhost:5000/api/generate-name")]
    pub api_endpoint: String,

    #[arg(long, help = "Load endpoint and UI settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, default_value = "3000")]
    pub banner_ttl_ms: u64,

    #[arg(long, default_value = "2500")]
    pub celebration_ms: u64,

    #[arg(long, help = "Show the cultural detail for the given result (1-based)")]
    pub detail: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date.clone(),
            gender: self.gender,
            nationality: self.nationality.clone(),
        }
    }

    /// 設定檔有指定的值優先於命令列預設值
    pub fn apply_file(&mut self, file: &toml_config::TomlConfig) {
        self.api_endpoint = file.api_endpoint().to_string();
        if let Some(ttl) = file.banner_ttl_ms() {
            self.banner_ttl_ms = ttl;
        }
        if let Some(ms) = file.celebration_ms() {
            self.celebration_ms = ms;
        }
    }
}

#[cfg(feature = "cli")]
impl FormConfig for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn banner_ttl_ms(&self) -> u64 {
        self.banner_ttl_ms
    }

    fn celebration_ms(&self) -> u64 {
        self.celebration_ms
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("banner_ttl_ms", self.banner_ttl_ms, 500, 10_000)?;
        validate_range("celebration_ms", self.celebration_ms, 0, 10_000)?;
        Ok(())
    }
}
