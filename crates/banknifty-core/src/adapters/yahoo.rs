use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::data_source::{QuoteSource, SourceError, SourceId};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{QuoteSnapshot, Symbol};

const REFERER: &str = "https://finance.yahoo.com/";
const COOKIE_ENDPOINT: &str = "https://fc.yahoo.com";
const CRUMB_ENDPOINTS: [&str; 2] = [
    "https://query1.finance.yahoo.com/v1/test/getcrumb",
    "https://query2.finance.yahoo.com/v1/test/getcrumb",
];
const QUOTE_SUMMARY_ENDPOINT: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";
const QUOTE_SUMMARY_MODULES: &str = "financialData,summaryDetail,price";

// ============================================================================
// Crumb handling
// ============================================================================

/// Session crumb required by Yahoo's quoteSummary endpoint.
///
/// The crumb is tied to the session cookie kept in the transport's cookie
/// store. It is fetched once and reused until a 401/403 invalidates it.
#[derive(Debug, Default)]
pub struct YahooCrumb {
    crumb: Mutex<Option<String>>,
}

impl YahooCrumb {
    fn cached(&self) -> Option<String> {
        self.crumb
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, crumb: String) {
        *self.crumb.lock().unwrap_or_else(PoisonError::into_inner) = Some(crumb);
    }

    pub fn invalidate(&self) {
        *self.crumb.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    async fn get(&self, http_client: &dyn HttpClient) -> Result<String, SourceError> {
        if let Some(crumb) = self.cached() {
            return Ok(crumb);
        }

        // The cookie endpoint answers 404 but still sets the session cookie.
        let cookie_request = HttpRequest::get(COOKIE_ENDPOINT).with_header("referer", REFERER);
        http_client.execute(cookie_request).await.map_err(|e| {
            SourceError::data_unavailable(format!(
                "failed to fetch yahoo session cookie: {}",
                e.message()
            ))
        })?;

        for endpoint in CRUMB_ENDPOINTS {
            let request = HttpRequest::get(endpoint).with_header("referer", REFERER);
            let response = match http_client.execute(request).await {
                Ok(response) if response.is_success() => response,
                Ok(response) => {
                    debug!(endpoint, status = response.status, "crumb endpoint refused");
                    continue;
                }
                Err(error) => {
                    debug!(endpoint, error = %error, "crumb endpoint unreachable");
                    continue;
                }
            };

            let body = response.body.trim();
            if body.to_ascii_lowercase().contains("too many requests") {
                return Err(SourceError::data_unavailable(
                    "yahoo rate limited while fetching crumb",
                ));
            }
            if is_plausible_crumb(body) {
                self.store(body.to_owned());
                return Ok(body.to_owned());
            }
        }

        Err(SourceError::data_unavailable(
            "failed to fetch yahoo crumb from all endpoints",
        ))
    }
}

fn is_plausible_crumb(body: &str) -> bool {
    !body.is_empty()
        && body.len() < 100
        && !body.contains(char::is_whitespace)
        && !body.contains('<')
}

// ============================================================================
// Yahoo Adapter
// ============================================================================

/// Quote source backed by Yahoo Finance's quoteSummary endpoint.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    crumb: Arc<YahooCrumb>,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }
}

impl YahooAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            crumb: Arc::new(YahooCrumb::default()),
        }
    }

    async fn fetch_snapshot(&self, symbol: &Symbol) -> Result<QuoteSnapshot, SourceError> {
        let crumb = self.crumb.get(self.http_client.as_ref()).await?;
        let endpoint = format!(
            "{}/{}?modules={}&crumb={}",
            QUOTE_SUMMARY_ENDPOINT,
            urlencoding::encode(symbol.as_str()),
            QUOTE_SUMMARY_MODULES,
            urlencoding::encode(&crumb)
        );

        let request = HttpRequest::get(endpoint).with_header("referer", REFERER);
        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::data_unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        if response.status == 401 || response.status == 403 {
            warn!(
                %symbol,
                status = response.status,
                "yahoo rejected crumb; it will be refreshed next run"
            );
            self.crumb.invalidate();
        }
        if !response.is_success() {
            return Err(SourceError::data_unavailable(format!(
                "yahoo returned status {} for {symbol}",
                response.status
            )));
        }

        parse_quote_summary(&response.body, symbol)
    }
}

impl QuoteSource for YahooAdapter {
    fn id(&self) -> SourceId {
        SourceId::Yahoo
    }

    fn snapshot<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_snapshot(symbol))
    }
}

/// Map a quoteSummary body onto a typed snapshot.
fn parse_quote_summary(body: &str, symbol: &Symbol) -> Result<QuoteSnapshot, SourceError> {
    let response: QuoteSummaryResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::data_unavailable(format!("failed to parse yahoo quoteSummary: {e}"))
    })?;

    if let Some(error) = response.quote_summary.error.filter(|e| !e.is_null()) {
        return Err(SourceError::data_unavailable(format!(
            "yahoo API error for {symbol}: {}",
            describe_api_error(&error)
        )));
    }

    let result = response
        .quote_summary
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| {
            SourceError::data_unavailable(format!("yahoo returned no data for {symbol}"))
        })?;

    let financial = result.financial_data.unwrap_or_default();
    let summary = result.summary_detail.unwrap_or_default();
    let price = result.price.unwrap_or_default();

    Ok(QuoteSnapshot::new(
        raw(&financial.current_price).or_else(|| raw(&price.regular_market_price)),
        raw(&summary.fifty_two_week_high),
        raw(&summary.fifty_two_week_low),
        raw(&summary.market_cap).or_else(|| raw(&price.market_cap)),
        raw(&summary.trailing_pe),
        raw(&financial.return_on_equity),
    ))
}

fn describe_api_error(error: &Value) -> String {
    error
        .get("description")
        .and_then(Value::as_str)
        .or_else(|| error.get("code").and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| error.to_string())
}

fn raw(value: &Option<YahooRawValue>) -> Option<f64> {
    value.as_ref().and_then(YahooRawValue::value)
}

// Yahoo Finance quoteSummary response structures
#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryData,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryData {
    #[serde(default)]
    result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "financialData", default)]
    financial_data: Option<FinancialData>,
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<SummaryDetail>,
    #[serde(default)]
    price: Option<PriceData>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialData {
    #[serde(rename = "currentPrice", default)]
    current_price: Option<YahooRawValue>,
    #[serde(rename = "returnOnEquity", default)]
    return_on_equity: Option<YahooRawValue>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "fiftyTwoWeekHigh", default)]
    fifty_two_week_high: Option<YahooRawValue>,
    #[serde(rename = "fiftyTwoWeekLow", default)]
    fifty_two_week_low: Option<YahooRawValue>,
    #[serde(rename = "marketCap", default)]
    market_cap: Option<YahooRawValue>,
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<YahooRawValue>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceData {
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<YahooRawValue>,
    #[serde(rename = "marketCap", default)]
    market_cap: Option<YahooRawValue>,
}

/// Numeric field wrapped as `{"raw": .., "fmt": ..}`.
///
/// `raw` is occasionally a string such as `"Infinity"`, so it is read as a
/// JSON value and only numbers are kept.
#[derive(Debug, Deserialize)]
struct YahooRawValue {
    #[serde(default)]
    raw: Option<Value>,
}

impl YahooRawValue {
    fn value(&self) -> Option<f64> {
        self.raw.as_ref().and_then(Value::as_f64)
    }
}
