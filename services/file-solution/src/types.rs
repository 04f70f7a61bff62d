use serde::Deserialize;

/// Envelope of the document-check query.
#[derive(Debug, Deserialize)]
pub struct FileQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One entry per queried task.
    #[serde(default)]
    pub result: Vec<FileQueryResult>,
}

/// Verdict for one queried document task.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileQueryResult {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Verdict code for the whole document.
    pub result: i32,
    /// Per-content-type evidence; layout varies, kept as raw JSON.
    pub evidences: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_result() {
        let resp: FileQueryResponse = serde_json::from_str(
            r#"{"code":200,"msg":"ok","result":[
                {"taskId":"t-1","dataId":"d-1","result":2,"evidences":{"texts":[]}},
                {"taskId":"t-2","result":0}]}"#,
        )
        .unwrap();
        assert_eq!(resp.result[0].result, 2);
        assert!(resp.result[0].evidences.is_some());
        assert!(resp.result[1].callback.is_none());
    }

    #[test]
    fn test_error_envelope() {
        let resp: FileQueryResponse =
            serde_json::from_str(r#"{"code":401,"msg":"bad signature"}"#).unwrap();
        assert_eq!(resp.code, 401);
        assert!(resp.result.is_empty());
    }
}
