use crate::core::error::ScrapeError;
use crate::core::quote::{Quote, QuotePage, QuoteProvider};
use anyhow::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.google.com";

// Class markers of the quote page.
static PRICE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".YMlKec.fxKbKc").expect("valid price selector"));
static DETAIL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".P6K39c").expect("valid detail selector"));

/// Scrapes the current price and previous close from a Google Finance quote page.
pub struct GoogleFinanceScraper {
    client: reqwest::Client,
}

impl GoogleFinanceScraper {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("moneyview/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl QuoteProvider for GoogleFinanceScraper {
    #[instrument(name = "QuoteFetch", skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<QuotePage, ScrapeError> {
        debug!("Requesting quote page from {}", url);

        let network_error = |e: reqwest::Error| ScrapeError::Network {
            reason: e.to_string(),
            url: url.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network_error)?;
        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        parse_quote_page(&body)
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Keeps only the sign, digits and decimal point of a displayed amount, so
/// `"₹3,912.45"`, `"$ 41,200"` and `"−1.50"` all convert.
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64, ScrapeError> {
    let digits: String = text
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | '.' => Some(c),
            '-' | '\u{2212}' => Some('-'),
            _ => None,
        })
        .collect();
    digits.parse().map_err(|_| ScrapeError::Parse {
        field,
        text: text.to_string(),
    })
}

/// Extracts the quote and the page's detail values from a quote page body.
///
/// A missing price or previous close leaves that field `None`; text that is
/// present but not numeric is a [`ScrapeError::Parse`].
pub fn parse_quote_page(html: &str) -> Result<QuotePage, ScrapeError> {
    let document = Html::parse_document(html);

    let price_text = document.select(&PRICE_SELECTOR).next().map(element_text);
    let detail_texts: Vec<String> = document.select(&DETAIL_SELECTOR).map(element_text).collect();

    if price_text.is_none() {
        warn!("Price marker not found on quote page");
    }
    if detail_texts.is_empty() {
        warn!("Previous close marker not found on quote page");
    }

    let price = price_text
        .as_deref()
        .map(|t| parse_amount("price", t))
        .transpose()?;
    let previous_close = detail_texts
        .first()
        .map(|t| parse_amount("previous close", t))
        .transpose()?;

    let details = detail_texts.iter().map(|t| t.replace(',', "")).collect();

    Ok(QuotePage {
        quote: Quote::new(price, previous_close),
        details,
    })
}
