//! Yahoo Finance API response models.
//!
//! Only the `price` module of the quoteSummary API is used; it carries the
//! names, the regular market price and the day range in one response.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    // Yahoo sends `null` rather than an empty list for unknown tickers
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<YahooPriceDetail>,
    pub regular_market_day_high: Option<YahooPriceDetail>,
    pub regular_market_day_low: Option<YahooPriceDetail>,
    pub regular_market_previous_close: Option<YahooPriceDetail>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_detail_null() {
        let json = r#"{"raw": null, "fmt": null}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, None);
    }

    #[test]
    fn test_deserialize_price_module() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "shortName": "TATA CONSULTANCY SERV LT",
                        "longName": "Tata Consultancy Services Limited",
                        "regularMarketPrice": {"raw": 3512.4, "fmt": "3,512.40"},
                        "regularMarketDayHigh": {"raw": 3530.0, "fmt": "3,530.00"},
                        "regularMarketDayLow": {"raw": 3488.1, "fmt": "3,488.10"},
                        "regularMarketPreviousClose": {"raw": 3495.75, "fmt": "3,495.75"}
                    }
                }],
                "error": null
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let results = response.quote_summary.result.unwrap();
        let price = results[0].price.as_ref().unwrap();
        assert_eq!(
            price.long_name.as_deref(),
            Some("Tata Consultancy Services Limited")
        );
        assert_eq!(
            price.regular_market_previous_close.as_ref().unwrap().raw,
            Some(3495.75)
        );
    }

    #[test]
    fn test_deserialize_null_result() {
        let json = r#"{"quoteSummary": {"result": null, "error": {"code": "Not Found"}}}"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
    }
}
