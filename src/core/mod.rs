pub mod banner;
pub mod client;
pub mod controller;

pub use crate::domain::model::{FormSnapshot, GenerateResponse, NameRequest, NameResult};
pub use crate::domain::ports::{FormConfig, FormView, NameApi};
pub use crate::utils::error::Result;
