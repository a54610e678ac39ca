//! 頁面抓取

use reqwest::Client;
use url::Url;

use crate::strategy::extract_price;
use crate::{PriceGuess, ScrapeError};

const USER_AGENT: &str = "Mozilla/5.0 (PriceBot)";

/// 供應商頁面抓價客戶端
///
/// 網路錯誤以 Err 回報；頁面抓回但找不到價格是正常結果
/// （PriceGuess.price 為 None），由介面層提示手動輸入
#[derive(Clone)]
pub struct PriceScraper {
    http: Client,
}

impl PriceScraper {
    /// 創建新的抓價客戶端
    pub fn new() -> Result<Self, ScrapeError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// 抓取頁面並擷取價格
    pub async fn discover(&self, raw_url: &str) -> Result<PriceGuess, ScrapeError> {
        let url = Url::parse(raw_url.trim())?;

        tracing::debug!("抓取供應商頁面: {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let html = response.error_for_status()?.text().await?;

        let guess = extract_price(&url, &html);
        match guess.price {
            Some(price) => tracing::info!("偵測到價格 {:.2}: {}", price, url),
            None => tracing::info!("頁面上找不到價格: {}", url),
        }
        Ok(guess)
    }
}
