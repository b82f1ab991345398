use crate::core::banner::Notice;
use crate::domain::model::{DetailContent, GenerateResponse, NameRequest, NameResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 表單控制器需要的設定值
pub trait FormConfig: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn banner_ttl_ms(&self) -> u64;
    fn celebration_ms(&self) -> u64;
}

/// 名字生成服務的呼叫介面
#[async_trait]
pub trait NameApi: Send + Sync {
    async fn generate(&self, request: &NameRequest) -> Result<GenerateResponse>;
}

/// 畫面繫結：控制器透過這組具名操作更新畫面，
/// 讓流程邏輯不依賴實際的輸出方式。
pub trait FormView: Send {
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_loading(&mut self, visible: bool);
    fn show_banner(&mut self, notice: &Notice);
    fn dismiss_banner(&mut self);
    fn render_results(&mut self, results: &[NameResult]);
    fn reveal_results(&mut self);
    fn celebrate(&mut self, max_ms: u64);
    fn show_detail(&mut self, detail: &DetailContent);
    fn hide_detail(&mut self);
}
