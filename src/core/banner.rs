use crate::domain::ports::FormView;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Request,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Request,
            message: message.into(),
        }
    }
}

/// 暫時性橫幅。每次顯示會排定一個自動關閉的計時器，
/// 手動關閉或重新顯示時必須取消前一個計時器，避免殘留的
/// 回呼把新訊息關掉。
pub struct Banner {
    timer: Option<JoinHandle<()>>,
}

impl Banner {
    pub fn new() -> Self {
        Self { timer: None }
    }

    pub async fn show<V: FormView + 'static>(
        &mut self,
        view: &Arc<Mutex<V>>,
        notice: Notice,
        ttl_ms: u64,
    ) {
        self.cancel();
        view.lock().await.show_banner(&notice);

        let view = Arc::clone(view);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ttl_ms)).await;
            view.lock().await.dismiss_banner();
        }));
    }

    pub async fn dismiss<V: FormView + 'static>(&mut self, view: &Arc<Mutex<V>>) {
        if self.timer.is_some() {
            self.cancel();
            view.lock().await.dismiss_banner();
        }
    }

    fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingView {
        shown: Vec<Notice>,
        dismissed: usize,
    }

    impl FormView for CountingView {
        fn set_submit_enabled(&mut self, _enabled: bool) {}
        fn set_loading(&mut self, _visible: bool) {}
        fn show_banner(&mut self, notice: &Notice) {
            self.shown.push(notice.clone());
        }
        fn dismiss_banner(&mut self) {
            self.dismissed += 1;
        }
        fn render_results(&mut self, _results: &[crate::domain::model::NameResult]) {}
        fn reveal_results(&mut self) {}
        fn celebrate(&mut self, _max_ms: u64) {}
        fn show_detail(&mut self, _detail: &crate::domain::model::DetailContent) {}
        fn hide_detail(&mut self) {}
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_auto_dismisses_after_ttl() {
        let view = Arc::new(Mutex::new(CountingView::default()));
        let mut banner = Banner::new();

        banner
            .show(&view, Notice::validation("請檢查輸入內容"), 3000)
            .await;
        assert_eq!(view.lock().await.shown.len(), 1);
        assert_eq!(view.lock().await.dismissed, 0);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        settle().await;
        assert_eq!(view.lock().await.dismissed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_cancels_timer() {
        let view = Arc::new(Mutex::new(CountingView::default()));
        let mut banner = Banner::new();

        banner
            .show(&view, Notice::request("名字生成失敗，請稍後再試"), 3000)
            .await;
        banner.dismiss(&view).await;
        assert_eq!(view.lock().await.dismissed, 1);

        // 計時器已取消，時間前進後不應再關閉一次
        tokio::time::sleep(Duration::from_millis(5000)).await;
        settle().await;
        assert_eq!(view.lock().await.dismissed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reshow_replaces_pending_timer() {
        let view = Arc::new(Mutex::new(CountingView::default()));
        let mut banner = Banner::new();

        banner.show(&view, Notice::validation("first"), 3000).await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        banner.show(&view, Notice::validation("second"), 3000).await;

        // 第一個計時器在 3000ms 處已被取消
        tokio::time::sleep(Duration::from_millis(2000)).await;
        settle().await;
        assert_eq!(view.lock().await.dismissed, 0);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        settle().await;
        assert_eq!(view.lock().await.dismissed, 1);
        assert_eq!(view.lock().await.shown.len(), 2);
    }
}
