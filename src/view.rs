//! In-memory model of the page the widget renders into.
//!
//! This stands in for the DOM surface of the original UI: an input field,
//! separate error and notice regions, a result table, and a togglable
//! result area. Row fields hold plain text only; markup interpretation can
//! only happen in [`SearchPage::table_html`], which escapes every field.

use crate::types::AddressRecord;
use crate::zipcode::format_zip;

/// One rendered table row. Fields are display text, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub zipcode: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub kana1: String,
    pub kana2: String,
    pub kana3: String,
    pub prefcode: String,
}

impl ResultRow {
    fn from_record(record: &AddressRecord) -> Self {
        Self {
            zipcode: format_zip(&record.zipcode),
            address1: record.address1.clone(),
            address2: record.address2.clone(),
            address3: record.address3.clone(),
            kana1: record.kana1.clone(),
            kana2: record.kana2.clone(),
            kana3: record.kana3.clone(),
            prefcode: record.prefcode.clone(),
        }
    }

    fn cells(&self) -> [&str; 8] {
        [
            &self.zipcode,
            &self.address1,
            &self.address2,
            &self.address3,
            &self.kana1,
            &self.kana2,
            &self.kana3,
            &self.prefcode,
        ]
    }
}

/// Visibility handle for the result-area wrapper.
#[derive(Debug, Clone, Default)]
struct ResultArea {
    visible: bool,
}

/// The widget's rendering surface.
#[derive(Debug, Clone)]
pub struct SearchPage {
    input: String,
    error: String,
    notice: String,
    rows: Vec<ResultRow>,
    // None models a page without the wrapper element; toggles then no-op.
    result_area: Option<ResultArea>,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPage {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: String::new(),
            notice: String::new(),
            rows: Vec::new(),
            result_area: Some(ResultArea::default()),
        }
    }

    /// A page whose markup lacks the result-area wrapper. Visibility
    /// toggles become no-ops instead of failures.
    pub fn without_result_area() -> Self {
        Self {
            result_area: None,
            ..Self::new()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn notice(&self) -> &str {
        &self.notice
    }

    /// Set the error region; the two message regions are mutually exclusive.
    pub fn set_error(&mut self, text: &str) {
        self.error = text.to_string();
        self.notice.clear();
    }

    /// Set the notice (success/progress) region, clearing any error.
    pub fn set_notice(&mut self, text: &str) {
        self.notice = text.to_string();
        self.error.clear();
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn clear_table(&mut self) {
        self.rows.clear();
    }

    /// Append one record as a table row, fields as plain text.
    pub fn push_row(&mut self, record: &AddressRecord) {
        self.rows.push(ResultRow::from_record(record));
    }

    pub fn is_result_area_visible(&self) -> bool {
        self.result_area.as_ref().is_some_and(|a| a.visible)
    }

    pub fn show_result_area(&mut self) {
        if let Some(area) = self.result_area.as_mut() {
            area.visible = true;
        }
    }

    pub fn hide_result_area(&mut self) {
        if let Some(area) = self.result_area.as_mut() {
            area.visible = false;
        }
    }

    /// Return to the pristine idle surface.
    pub fn reset(&mut self) {
        self.input.clear();
        self.rows.clear();
        self.hide_result_area();
        self.error.clear();
        self.notice.clear();
    }

    /// Serialize the table body as HTML rows with every cell escaped.
    pub fn table_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row.cells() {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html
    }
}

/// Escape text for safe insertion into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address1: &str) -> AddressRecord {
        AddressRecord {
            zipcode: "1000001".to_string(),
            address1: address1.to_string(),
            address2: "千代田区".to_string(),
            address3: "千代田".to_string(),
            kana1: "ﾄｳｷｮｳﾄ".to_string(),
            kana2: "ﾁﾖﾀﾞｸ".to_string(),
            kana3: "ﾁﾖﾀﾞ".to_string(),
            prefcode: "13".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("東京都"), "東京都");
    }

    #[test]
    fn test_table_html_escapes_untrusted_fields() {
        let mut page = SearchPage::new();
        page.push_row(&record("<script>alert(1)</script>"));

        let html = page.table_html();
        assert!(!html.contains("<script>"), "raw markup leaked: {}", html);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_row_formats_zipcode() {
        let mut page = SearchPage::new();
        page.push_row(&record("東京都"));
        assert_eq!(page.rows()[0].zipcode, "100-0001");
    }

    #[test]
    fn test_message_regions_are_exclusive() {
        let mut page = SearchPage::new();
        page.set_error("err");
        page.set_notice("ok");
        assert_eq!(page.error(), "");
        assert_eq!(page.notice(), "ok");

        page.set_error("err");
        assert_eq!(page.error(), "err");
        assert_eq!(page.notice(), "");
    }

    #[test]
    fn test_missing_result_area_is_noop() {
        let mut page = SearchPage::without_result_area();
        page.show_result_area();
        assert!(!page.is_result_area_visible());
        page.hide_result_area();
        assert!(!page.is_result_area_visible());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut page = SearchPage::new();
        page.set_input("100-0001");
        page.push_row(&record("東京都"));
        page.show_result_area();
        page.set_notice("done");

        page.reset();
        assert_eq!(page.input(), "");
        assert!(page.rows().is_empty());
        assert!(!page.is_result_area_visible());
        assert_eq!(page.error(), "");
        assert_eq!(page.notice(), "");
    }
}
