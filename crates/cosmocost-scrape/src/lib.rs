//! # CosmoCost Scrape
//!
//! 供應商頁面抓價：依網域挑選擷取策略，失敗時退回
//! 「頁面上最小的合理金額」掃描。結果只是輔助，抓不到價格
//! 就交給使用者手動輸入，永遠不會讓錯誤越過這層邊界

pub mod fetch;
pub mod strategy;

pub use fetch::PriceScraper;
pub use strategy::{extract_price, GenericStrategy, PriceStrategy};

/// 價格偵測結果
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGuess {
    /// 偵測到的價格（找不到時為 None）
    pub price: Option<f64>,

    /// 供應商名稱猜測（依網域）
    pub supplier: Option<String>,
}

/// 抓價錯誤
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("無效的網址: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP 請求失敗: {0}")]
    Http(#[from] reqwest::Error),
}
