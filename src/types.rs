use serde::{Deserialize, Serialize};

/// Status codes reported in the response body (not the HTTP status line).
pub mod status {
    /// The service reports success as 200 in the `status` field.
    pub const OK: i32 = 200;
}

/// Response from the zipcloud search API.
///
/// The service always answers HTTP 200; success and failure are carried in
/// the body. `results` is `null` (not an empty array) when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub status: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<AddressRecord>>,
}

/// One resolved address. All fields are untrusted external strings and must
/// only ever be rendered as text content, never as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub zipcode: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub kana1: String,
    pub kana2: String,
    pub kana3: String,
    pub prefcode: String,
}

/// The three shapes a decoded response can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<'a> {
    /// Success with at least one record, in the order the service sent them.
    Matches(&'a [AddressRecord]),
    /// Success status but a null or empty match list.
    NoMatch,
    /// Service-reported failure, with its message when it provided one.
    Failure(Option<&'a str>),
}

impl SearchResponse {
    /// Interpret the body into one of the three lookup outcomes.
    pub fn result(&self) -> LookupResult<'_> {
        if self.status != status::OK {
            return LookupResult::Failure(self.message.as_deref());
        }
        match self.results.as_deref() {
            Some(records) if !records.is_empty() => LookupResult::Matches(records),
            _ => LookupResult::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_matches() {
        let body = r#"{
            "message": null,
            "results": [{
                "address1": "東京都",
                "address2": "千代田区",
                "address3": "千代田",
                "kana1": "ﾄｳｷｮｳﾄ",
                "kana2": "ﾁﾖﾀﾞｸ",
                "kana3": "ﾁﾖﾀﾞ",
                "prefcode": "13",
                "zipcode": "1000001"
            }],
            "status": 200
        }"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        match resp.result() {
            LookupResult::Matches(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].zipcode, "1000001");
                assert_eq!(records[0].prefcode, "13");
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_null_results() {
        let body = r#"{"message": null, "results": null, "status": 200}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result(), LookupResult::NoMatch);
    }

    #[test]
    fn test_deserialize_absent_results() {
        // Tolerate the field being missing entirely, not just null
        let body = r#"{"status": 200}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result(), LookupResult::NoMatch);
    }

    #[test]
    fn test_empty_results_is_no_match() {
        let body = r#"{"message": null, "results": [], "status": 200}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result(), LookupResult::NoMatch);
    }

    #[test]
    fn test_service_failure() {
        let body = r#"{"message": "パラメータ「郵便番号」の桁数が不正です。", "results": null, "status": 400}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            resp.result(),
            LookupResult::Failure(Some("パラメータ「郵便番号」の桁数が不正です。"))
        );
    }

    #[test]
    fn test_service_failure_without_message() {
        let body = r#"{"results": null, "status": 500}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result(), LookupResult::Failure(None));
    }
}
