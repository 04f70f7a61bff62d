use serde::Deserialize;
use yidun_core::types::Suggestion;

/// Envelope of the site-check callback poll.
#[derive(Debug, Deserialize)]
pub struct CrawlerCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished crawl verdicts; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<CrawlerCallbackResult>,
}

/// One finished crawl verdict.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CrawlerCallbackResult {
    /// Moderation verdict for the crawled page.
    pub antispam: Option<CrawlerAntispam>,
}

/// Moderation verdict for one crawled page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlerAntispam {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// The crawled page URL.
    pub url: Option<String>,
    /// Site root the page belongs to.
    pub site_url: Option<String>,
    /// Site display name.
    pub site_name: Option<String>,
    /// Machine verdict.
    pub suggestion: Suggestion,
    /// Why the crawl failed, when it did.
    pub failure_reason: Option<i32>,
    /// Whether the verdict came from machine or human review.
    pub result_type: Option<i32>,
    /// Crawl/check progress status.
    pub check_status: Option<i32>,
    /// Per-content-type evidence; layout varies, kept as raw JSON.
    pub evidences: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_callback_result() {
        let resp: CrawlerCallbackResponse = serde_json::from_str(
            r#"{"code":200,"msg":"ok","result":[{"antispam":{
                "taskId":"t-1","dataId":"d-1","url":"https://example.com/page",
                "siteUrl":"https://example.com","siteName":"example",
                "suggestion":2,"resultType":1,"checkStatus":2,
                "evidences":{"texts":[]}}}]}"#,
        )
        .unwrap();
        let antispam = resp.result[0].antispam.as_ref().unwrap();
        assert_eq!(antispam.suggestion, Suggestion::Reject);
        assert_eq!(antispam.check_status, Some(2));
        assert!(antispam.evidences.is_some());
    }

    #[test]
    fn test_empty_batch() {
        let resp: CrawlerCallbackResponse =
            serde_json::from_str(r#"{"code":200,"msg":"ok","result":[]}"#).unwrap();
        assert!(resp.result.is_empty());
    }
}
