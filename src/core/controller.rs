use crate::core::banner::{Banner, Notice};
use crate::domain::model::{DetailContent, FormSnapshot, GenerateResponse, NameResult};
use crate::domain::ports::{FormConfig, FormView, NameApi};
use crate::utils::error::{FormError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 一次送出流程會經過的狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    ResultsShown,
    DetailShown,
}

/// 表單控制器：負責驗證、送出請求、更新畫面與詳細彈窗。
/// 結果列表由控制器持有，每次成功送出時整批換新。
pub struct FormController<A, V, C>
where
    A: NameApi,
    V: FormView + 'static,
    C: FormConfig,
{
    api: A,
    view: Arc<Mutex<V>>,
    config: C,
    state: FormState,
    results: Vec<NameResult>,
    last_snapshot: Option<FormSnapshot>,
    banner: Banner,
}

impl<A, V, C> FormController<A, V, C>
where
    A: NameApi,
    V: FormView + 'static,
    C: FormConfig,
{
    pub fn new(api: A, view: Arc<Mutex<V>>, config: C) -> Self {
        Self {
            api,
            view,
            config,
            state: FormState::Idle,
            results: Vec::new(),
            last_snapshot: None,
            banner: Banner::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn results(&self) -> &[NameResult] {
        &self.results
    }

    /// 送出表單。驗證失敗或請求失敗都只會顯示橫幅，
    /// 不會向呼叫端拋出錯誤。
    pub async fn submit(&mut self, snapshot: FormSnapshot) {
        if self.state == FormState::DetailShown {
            self.close_detail().await;
        }

        let request = match snapshot.clone().into_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Form validation failed: {}", e);
                self.show_notice(Notice::validation(e.user_message())).await;
                self.state = FormState::Idle;
                return;
            }
        };
        self.last_snapshot = Some(snapshot);

        {
            let mut view = self.view.lock().await;
            view.set_submit_enabled(false);
            view.set_loading(true);
        }
        self.state = FormState::Submitting;

        tracing::info!("Submitting name request for {}", request.nationality);
        let outcome = self.api.generate(&request).await;
        self.apply_response(outcome).await;
    }

    /// 請求結束後的畫面更新；失敗時保留先前的結果不動
    async fn apply_response(&mut self, outcome: Result<GenerateResponse>) {
        {
            let mut view = self.view.lock().await;
            view.set_loading(false);
            view.set_submit_enabled(true);
        }

        match outcome {
            Ok(response) => {
                self.results = response.results;
                tracing::info!("Received {} name candidates", self.results.len());

                let mut view = self.view.lock().await;
                view.render_results(&self.results);
                view.reveal_results();
                if !self.results.is_empty() && self.config.celebration_ms() > 0 {
                    view.celebrate(self.config.celebration_ms());
                }
                drop(view);

                self.state = FormState::ResultsShown;
            }
            Err(e) => {
                tracing::warn!("Name generation request failed: {}", e);
                self.show_notice(Notice::request(e.user_message())).await;
                self.state = FormState::Idle;
            }
        }
    }

    /// 開啟第 index 個結果的文化解讀彈窗
    pub async fn open_detail(&mut self, index: usize) -> Result<()> {
        if index >= self.results.len() {
            return Err(FormError::IndexError {
                index,
                len: self.results.len(),
            });
        }

        let detail = DetailContent::from_result(&self.results[index]);
        self.view.lock().await.show_detail(&detail);
        self.state = FormState::DetailShown;
        Ok(())
    }

    pub async fn close_detail(&mut self) {
        if self.state == FormState::DetailShown {
            self.view.lock().await.hide_detail();
            self.state = FormState::ResultsShown;
        }
    }

    /// 收起彈窗與橫幅後，用上一次驗證通過的欄位值重新送出
    pub async fn retry(&mut self) {
        self.banner.dismiss(&self.view).await;
        match self.last_snapshot.clone() {
            Some(snapshot) => self.submit(snapshot).await,
            None => tracing::warn!("Retry requested before any submission"),
        }
    }

    pub async fn dismiss_banner(&mut self) {
        self.banner.dismiss(&self.view).await;
    }

    async fn show_notice(&mut self, notice: Notice) {
        self.banner
            .show(&self.view, notice, self.config.banner_ttl_ms())
            .await;
    }
}
