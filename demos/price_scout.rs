//! 供應商頁面抓價示例
//!
//! 用法: cargo run --example price_scout -- <商品頁網址>

use cosmocost::PriceScraper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("請提供商品頁網址"))?;

    let scraper = PriceScraper::new()?;
    match scraper.discover(&url).await {
        Ok(guess) => {
            match guess.price {
                Some(price) => println!("偵測到價格: ${price:.2}"),
                None => println!("頁面上找不到價格，請手動輸入"),
            }
            if let Some(supplier) = guess.supplier {
                println!("供應商猜測: {supplier}");
            }
        }
        Err(err) => {
            // 抓取失敗只提示手動輸入，不視為致命錯誤
            println!("無法自動抓取（{err}），請手動輸入價格");
        }
    }

    Ok(())
}
