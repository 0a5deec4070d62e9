//! User-visible message catalogue.
//!
//! These strings are the user-facing contract of the widget; diagnostic
//! detail goes to `tracing`, never into these regions.

use crate::zipcode::format_zip;

/// Prompt shown when the (normalized) input is empty.
pub const EMPTY_INPUT: &str = "郵便番号を入力してください。";

/// Warning shown when the normalized input is not exactly 7 digits.
pub const WRONG_LENGTH: &str = "郵便番号は7桁で入力してください。";

/// Interim notice while the request is in flight.
pub const SEARCHING: &str = "検索中...";

/// Fallback when the service reports failure without a message of its own.
pub const SERVICE_ERROR_FALLBACK: &str = "検索に失敗しました。";

/// Shown when the service succeeds but returns no matching address.
pub const NO_MATCH: &str = "郵便番号が見つかりませんでした。";

/// Generic notice for network-level failures.
pub const TRANSPORT_ERROR: &str = "通信エラーが発生しました。";

/// Distinct notice when the request deadline elapsed.
pub const TIMEOUT: &str = "通信がタイムアウトしました。";

/// Success summary: the formatted code and the number of matches.
pub fn success(zip: &str, count: usize) -> String {
    format!("郵便番号：{}（{}件）", format_zip(zip), count)
}
