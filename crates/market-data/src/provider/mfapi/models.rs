//! mfapi.in response models.

use serde::Deserialize;

/// Body of `GET /mf/{scheme_code}`.
#[derive(Debug, Deserialize)]
pub struct MfApiResponse {
    #[serde(default)]
    pub meta: MfApiMeta,
    /// NAV history, newest first
    #[serde(default)]
    pub data: Vec<MfApiNavEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MfApiMeta {
    pub scheme_name: Option<String>,
    #[serde(alias = "fund_type")]
    pub scheme_type: Option<String>,
    pub scheme_category: Option<String>,
}

/// One NAV entry. mfapi.in reports the NAV as a string.
#[derive(Debug, Deserialize)]
pub struct MfApiNavEntry {
    #[serde(default)]
    pub date: String,
    pub nav: String,
}
