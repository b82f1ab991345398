use crate::core::banner::{Notice, NoticeKind};
use crate::domain::model::{DetailContent, NameResult};
use crate::domain::ports::FormView;

/// 把表單畫面輸出到終端機的 FormView 實作
#[derive(Debug, Default)]
pub struct TerminalView {
    results_visible: bool,
    detail_open: bool,
    banner: Option<Notice>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }
}

impl FormView for TerminalView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::debug!("Submit control enabled: {}", enabled);
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("⏳ 正在生成名字...");
        }
    }

    fn show_banner(&mut self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Validation => eprintln!("⚠️  {}", notice.message),
            NoticeKind::Request => eprintln!("❌ {}", notice.message),
        }
        self.banner = Some(notice.clone());
    }

    fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn render_results(&mut self, results: &[NameResult]) {
        if results.is_empty() {
            println!("沒有找到合適的名字，請調整輸入後再試。");
            return;
        }

        println!("✨ 為您生成的中文名字：");
        for (i, result) in results.iter().enumerate() {
            let subtitle = result.subtitle();
            if subtitle.is_empty() {
                println!("  {}. {}", i + 1, result.name);
            } else {
                println!("  {}. {}（{}）", i + 1, result.name, subtitle);
            }
        }
        println!("💡 使用 --detail <編號> 查看文化解讀");
    }

    fn reveal_results(&mut self) {
        self.results_visible = true;
    }

    fn celebrate(&mut self, max_ms: u64) {
        tracing::debug!("Celebration capped at {}ms", max_ms);
        println!("🎉 名字生成成功！");
    }

    fn show_detail(&mut self, detail: &DetailContent) {
        println!();
        println!("📜 {}", detail.name);
        println!("{}", detail.meaning_line);
        if let Some(lunar) = &detail.lunar_date {
            println!("農曆：{}", lunar);
        }
        for paragraph in &detail.poetry_paragraphs {
            println!("    {}", paragraph);
        }
        self.detail_open = true;
    }

    fn hide_detail(&mut self) {
        self.detail_open = false;
    }
}
