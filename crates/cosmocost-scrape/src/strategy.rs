//! 站點價格擷取策略
//!
//! 每個已知商店平台一種實作，外加通用回退。HTML 掃描採
//! 容錯的逐塊比對（不分大小寫、只看已知區塊），不解析整份文件

use url::Url;

use crate::PriceGuess;

/// 通用掃描的金額合理範圍
const MIN_PLAUSIBLE: f64 = 1.0;
const MAX_PLAUSIBLE: f64 = 50_000.0;

/// 價格擷取策略
pub trait PriceStrategy {
    /// 此策略是否適用於該網址
    fn matches(&self, url: &Url) -> bool;

    /// 供應商名稱猜測
    fn supplier(&self) -> Option<&str> {
        None
    }

    /// 從頁面 HTML 擷取價格
    fn extract(&self, html: &str) -> Option<f64>;
}

/// Shopify 商店（meta 標籤 → JSON-LD → 通用掃描）
pub struct ShopifyStrategy {
    domain: &'static str,
    supplier: &'static str,
}

impl ShopifyStrategy {
    pub fn new(domain: &'static str, supplier: &'static str) -> Self {
        Self { domain, supplier }
    }
}

impl PriceStrategy for ShopifyStrategy {
    fn matches(&self, url: &Url) -> bool {
        host_matches(url, self.domain)
    }

    fn supplier(&self) -> Option<&str> {
        Some(self.supplier)
    }

    fn extract(&self, html: &str) -> Option<f64> {
        meta_tag_price(html)
            .or_else(|| itemprop_price(html))
            .or_else(|| json_ld_price(html))
            .or_else(|| smallest_plausible_amount(html))
    }
}

/// ePages 商店（itemprop → price class 元素 → 通用掃描）
pub struct EpagesStrategy {
    domain: &'static str,
    supplier: &'static str,
}

impl EpagesStrategy {
    pub fn new(domain: &'static str, supplier: &'static str) -> Self {
        Self { domain, supplier }
    }
}

impl PriceStrategy for EpagesStrategy {
    fn matches(&self, url: &Url) -> bool {
        host_matches(url, self.domain)
    }

    fn supplier(&self) -> Option<&str> {
        Some(self.supplier)
    }

    fn extract(&self, html: &str) -> Option<f64> {
        itemprop_price(html)
            .or_else(|| price_class_text(html))
            .or_else(|| smallest_plausible_amount(html))
    }
}

/// 通用回退：頁面上最小的合理金額
pub struct GenericStrategy;

impl PriceStrategy for GenericStrategy {
    fn matches(&self, _url: &Url) -> bool {
        true
    }

    fn extract(&self, html: &str) -> Option<f64> {
        smallest_plausible_amount(html)
    }
}

/// 已知商店平台的策略清單
pub fn known_strategies() -> Vec<Box<dyn PriceStrategy>> {
    vec![
        Box::new(EpagesStrategy::new("newdirections.com.au", "New Directions AU")),
        Box::new(ShopifyStrategy::new(
            "escentialsofaustralia.com",
            "Escentials of Australia",
        )),
        Box::new(ShopifyStrategy::new(
            "heirloombodycare.com.au",
            "Heirloom Body Care",
        )),
    ]
}

/// 依網域挑策略擷取價格；未知網域走通用掃描
pub fn extract_price(url: &Url, html: &str) -> PriceGuess {
    for strategy in known_strategies() {
        if strategy.matches(url) {
            return PriceGuess {
                price: strategy.extract(html),
                supplier: strategy.supplier().map(String::from),
            };
        }
    }
    PriceGuess {
        price: GenericStrategy.extract(html),
        supplier: None,
    }
}

fn host_matches(url: &Url, domain: &str) -> bool {
    url.host_str()
        .map(|host| host == domain || host.ends_with(&format!(".{domain}")))
        .unwrap_or(false)
}

// ---- HTML 掃描輔助 ----

/// 自 from 起尋找不分大小寫的 ASCII 子字串
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let ned = needle.as_bytes();
    if ned.is_empty() || from >= hay.len() || hay.len() - from < ned.len() {
        return None;
    }
    hay[from..]
        .windows(ned.len())
        .position(|window| window.eq_ignore_ascii_case(ned))
        .map(|pos| from + pos)
}

/// 迭代某開標籤的屬性區塊（'>' 之前的部分）
fn tag_blocks<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(start) = find_ci(html, open, from) {
        let after = start + open.len();
        match html[after..].find('>') {
            Some(end) => {
                blocks.push(&html[after..after + end]);
                from = after + end + 1;
            }
            None => break,
        }
    }
    blocks
}

/// 取出標籤屬性區塊中某屬性的值（雙引號或單引號）
fn attr_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let key = find_ci(tag, attr, 0)?;
    let rest = &tag[key + attr.len()..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let inner = &rest[1..];
    let end = inner.find(quote)?;
    Some(&inner[..end])
}

/// 屬性區塊中某屬性是否等於指定值
fn attr_is(tag: &str, attr: &str, expected: &str) -> bool {
    attr_value(tag, attr)
        .map(|value| value.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

/// 解析開頭是數字的價格字串（允許千分位以外的一般寫法）
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `<meta property="og:price:amount" content="…">` 或
/// `<meta name="price" content="…">`
fn meta_tag_price(html: &str) -> Option<f64> {
    for tag in tag_blocks(html, "<meta") {
        let is_price_meta =
            attr_is(tag, "property=", "og:price:amount") || attr_is(tag, "name=", "price");
        if !is_price_meta {
            continue;
        }
        if let Some(price) = attr_value(tag, "content=").and_then(parse_leading_number) {
            return Some(price);
        }
    }
    None
}

/// 任何帶 `itemprop="price" content="…"` 的標籤
fn itemprop_price(html: &str) -> Option<f64> {
    let mut from = 0;
    while let Some(start) = find_ci(html, "itemprop=", from) {
        // 取該標籤的剩餘屬性區塊（到 '>' 為止）
        let tail = &html[start..];
        let block = match tail.find('>') {
            Some(end) => &tail[..end],
            None => tail,
        };
        if attr_is(block, "itemprop=", "price") {
            if let Some(price) = attr_value(block, "content=").and_then(parse_leading_number) {
                return Some(price);
            }
        }
        from = start + "itemprop=".len();
    }
    None
}

/// `class="…price…"` 元素內文開頭的金額（可帶 '$'）
fn price_class_text(html: &str) -> Option<f64> {
    let mut from = 0;
    while let Some(start) = find_ci(html, "class=", from) {
        from = start + "class=".len();
        let block = &html[start..];
        let Some(class) = attr_value(block, "class=") else {
            continue;
        };
        if !class.to_ascii_lowercase().contains("price") {
            continue;
        }
        let Some(close) = block.find('>') else {
            continue;
        };
        let text = &block[close + 1..];
        let text = text.trim_start();
        let text = text.strip_prefix('$').unwrap_or(text);
        if let Some(price) = parse_leading_number(text) {
            return Some(price);
        }
    }
    None
}

/// JSON-LD 區塊中的 `offers.price` 或頂層 `price`
fn json_ld_price(html: &str) -> Option<f64> {
    let mut from = 0;
    while let Some(start) = find_ci(html, "<script", from) {
        let after = start + "<script".len();
        let Some(open_end) = html[after..].find('>') else {
            break;
        };
        let tag = &html[after..after + open_end];
        let body_start = after + open_end + 1;
        let Some(body_len) = find_ci(html, "</script", body_start).map(|end| end - body_start)
        else {
            break;
        };
        from = body_start + body_len;

        if find_ci(tag, "application/ld+json", 0).is_none() {
            continue;
        }
        let body = html[body_start..body_start + body_len].trim();
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            // 壞掉的 JSON-LD 區塊直接跳過
            continue;
        };
        if let Some(price) = json_value_price(&value) {
            return Some(price);
        }
    }
    None
}

/// 在 JSON-LD 值裡找價格：offers（物件或陣列）優先，再看頂層 price
fn json_value_price(value: &serde_json::Value) -> Option<f64> {
    let entries = match value {
        serde_json::Value::Array(entries) => entries.as_slice(),
        single => std::slice::from_ref(single),
    };

    for entry in entries {
        if let Some(offers) = entry.get("offers") {
            let offers = match offers {
                serde_json::Value::Array(list) => list.as_slice(),
                single => std::slice::from_ref(single),
            };
            for offer in offers {
                if let Some(price) = offer.get("price").and_then(json_number) {
                    return Some(price);
                }
            }
        }
        if let Some(price) = entry.get("price").and_then(json_number) {
            return Some(price);
        }
    }
    None
}

/// JSON 數值或數字字串
fn json_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => parse_leading_number(text),
        _ => None,
    }
}

/// 通用掃描：收集 `$xx` / `$xx.xx` 金額，取合理範圍內最小者
fn smallest_plausible_amount(html: &str) -> Option<f64> {
    let bytes = html.as_bytes();
    let mut candidates = Vec::new();

    for (index, _) in html.match_indices('$') {
        let mut pos = index + 1;
        // 允許一個空格
        if bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() && pos - digits_start < 5 {
            pos += 1;
        }
        if pos == digits_start {
            continue;
        }
        let mut end = pos;
        // 小數部分必須剛好兩位
        if bytes.get(pos) == Some(&b'.')
            && bytes.get(pos + 1).is_some_and(|b| b.is_ascii_digit())
            && bytes.get(pos + 2).is_some_and(|b| b.is_ascii_digit())
        {
            end = pos + 3;
        }
        if let Ok(value) = html[digits_start..end].parse::<f64>() {
            if (MIN_PLAUSIBLE..=MAX_PLAUSIBLE).contains(&value) {
                candidates.push(value);
            }
        }
    }

    candidates.sort_by(f64::total_cmp);
    candidates.dedup();
    candidates.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_meta_og_price() {
        let html = r#"<head>
            <meta property="og:title" content="Shea Butter 1kg">
            <meta property="og:price:amount" content="24.95">
        </head>"#;

        assert_eq!(meta_tag_price(html), Some(24.95));
    }

    #[test]
    fn test_itemprop_price_content() {
        let html = r#"<span itemprop="price" content="18.50">$18.50</span>"#;
        assert_eq!(itemprop_price(html), Some(18.5));
    }

    #[test]
    fn test_json_ld_offers_price() {
        let html = r#"<script type="application/ld+json">
            {"@type":"Product","name":"Beeswax","offers":{"price":"12.40","priceCurrency":"AUD"}}
        </script>"#;

        assert_eq!(json_ld_price(html), Some(12.4));
    }

    #[test]
    fn test_json_ld_array_with_offer_list() {
        let html = r#"<script type="application/ld+json">
            [{"@type":"Organization"},
             {"@type":"Product","offers":[{"price":32.0},{"price":29.5}]}]
        </script>"#;

        assert_eq!(json_ld_price(html), Some(32.0));
    }

    #[test]
    fn test_broken_json_ld_is_skipped() {
        let html = r#"
            <script type="application/ld+json">{not valid</script>
            <script type="application/ld+json">{"price": 9.90}</script>
        "#;

        assert_eq!(json_ld_price(html), Some(9.9));
    }

    #[test]
    fn test_price_class_text() {
        let html = r#"<div class="product-price large"> $ 44.00 </div>"#;
        // '$' 後帶空白也要能解析
        assert_eq!(price_class_text(html), Some(44.0));
    }

    #[test]
    fn test_smallest_plausible_amount() {
        let html = "Was $89.95, now $24.95! Shipping $ 9.90. RRP $105";
        assert_eq!(smallest_plausible_amount(html), Some(9.9));
    }

    #[test]
    fn test_plausibility_window() {
        // 低於 $1 與高於 $50000 的金額不採計
        let html = "Sample $0.50 and bulk $99999";
        assert_eq!(smallest_plausible_amount(html), None);
    }

    #[test]
    fn test_extract_routes_by_domain() {
        let html = r#"<meta property="og:price:amount" content="15.00">"#;

        let guess = extract_price(&url("https://escentialsofaustralia.com/p/rose"), html);
        assert_eq!(guess.price, Some(15.0));
        assert_eq!(guess.supplier.as_deref(), Some("Escentials of Australia"));

        let guess = extract_price(&url("https://www.newdirections.com.au/item"), html);
        assert_eq!(guess.supplier.as_deref(), Some("New Directions AU"));
    }

    #[test]
    fn test_unknown_domain_uses_generic_scan() {
        let guess = extract_price(
            &url("https://example.com/shop"),
            "Special today only $7.50 (was $12.00)",
        );

        assert_eq!(guess.price, Some(7.5));
        assert!(guess.supplier.is_none());
    }

    #[test]
    fn test_known_domain_with_no_price_degrades_gracefully() {
        let guess = extract_price(
            &url("https://heirloombodycare.com.au/out-of-stock"),
            "<p>Currently unavailable</p>",
        );

        assert_eq!(guess.price, None);
        assert_eq!(guess.supplier.as_deref(), Some("Heirloom Body Care"));
    }

    #[test]
    fn test_shopify_meta_beats_generic_scan() {
        let html = r#"
            <meta property="og:price:amount" content="24.95">
            <div>Clearance $3.00</div>
        "#;

        let guess = extract_price(&url("https://escentialsofaustralia.com/p"), html);
        assert_eq!(guess.price, Some(24.95));
    }
}
