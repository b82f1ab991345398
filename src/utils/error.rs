use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    StatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Result index {index} out of range ({len} results)")]
    IndexError { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Request,
    Internal,
}

impl FormError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::MissingFieldError { .. } | FormError::InvalidFieldError { .. } => {
                ErrorKind::Validation
            }
            FormError::ApiError(_)
            | FormError::StatusError { .. }
            | FormError::SerializationError(_) => ErrorKind::Request,
            FormError::IoError(_) | FormError::ConfigError { .. } | FormError::IndexError { .. } => {
                ErrorKind::Internal
            }
        }
    }

    /// 顯示在橫幅上的訊息，與原始頁面一樣使用中文
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation => match self {
                FormError::MissingFieldError { field } => {
                    format!("請填寫必填欄位：{}", field_label(field))
                }
                FormError::InvalidFieldError { field, reason, .. } => {
                    format!("{}格式不正確：{}", field_label(field), reason)
                }
                _ => "請檢查輸入內容".to_string(),
            },
            ErrorKind::Request => "名字生成失敗，請稍後再試".to_string(),
            ErrorKind::Internal => format!("發生未預期的錯誤：{}", self),
        }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "first_name" => "名字",
        "last_name" => "姓氏",
        "birth_date" => "出生日期",
        "nationality" => "國籍",
        "gender" => "性別",
        other => other,
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
