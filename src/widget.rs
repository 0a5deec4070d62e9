use crate::client::{LookupError, ZipcloudClient};
use crate::messages;
use crate::types::LookupResult;
use crate::view::SearchPage;
use crate::zipcode::{ZipValidation, normalize, validate};

/// Which outcome currently owns the page.
///
/// Exactly one state is active at a time; every transition is made by
/// [`SearchWidget::search`] or [`SearchWidget::reset`]. No-match and
/// timeout are distinct states because they carry distinct user messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    /// Input rejected before any request was made.
    ValidatingError(ZipValidation),
    Searching,
    Success { zipcode: String, count: usize },
    NoMatch,
    ServiceError,
    TransportError,
    TimedOut,
}

/// The lookup-and-render flow: owns the client, the page surface and the
/// state machine.
///
/// One widget runs one search at a time (`search` borrows `&mut self`).
/// Separate widgets racing against shared output resolve last-write-wins,
/// which is the accepted behavior for rapid repeated invocations.
pub struct SearchWidget {
    client: ZipcloudClient,
    page: SearchPage,
    state: UiState,
}

impl SearchWidget {
    pub fn new(client: ZipcloudClient) -> Self {
        Self::with_page(client, SearchPage::new())
    }

    pub fn with_page(client: ZipcloudClient, page: SearchPage) -> Self {
        Self {
            client,
            page,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn page(&self) -> &SearchPage {
        &self.page
    }

    /// Run one full search for raw user input.
    ///
    /// Invalid input never reaches the network; every exit leaves the page
    /// in a stable, re-triggerable state, never in `Searching`.
    pub async fn search(&mut self, raw: &str) {
        self.page.set_input(raw);

        // Stale results must never coexist with a new outcome.
        self.page.clear_table();
        self.page.hide_result_area();

        let code = normalize(raw);
        match validate(&code) {
            ZipValidation::Empty => {
                self.page.set_error(messages::EMPTY_INPUT);
                self.state = UiState::ValidatingError(ZipValidation::Empty);
                return;
            }
            ZipValidation::WrongLength => {
                self.page.set_error(messages::WRONG_LENGTH);
                self.state = UiState::ValidatingError(ZipValidation::WrongLength);
                return;
            }
            ZipValidation::Valid => {}
        }

        self.page.set_notice(messages::SEARCHING);
        self.state = UiState::Searching;
        tracing::debug!(code, "searching");

        let response = match self.client.search(&code).await {
            Ok(response) => response,
            Err(LookupError::Timeout) => {
                self.page.set_error(messages::TIMEOUT);
                self.state = UiState::TimedOut;
                return;
            }
            Err(LookupError::Transport(err)) => {
                tracing::warn!(error = %err, "lookup transport failure");
                self.page.set_error(messages::TRANSPORT_ERROR);
                self.state = UiState::TransportError;
                return;
            }
        };

        match response.result() {
            LookupResult::Failure(message) => {
                tracing::warn!(status = response.status, "service reported failure");
                self.page
                    .set_error(message.unwrap_or(messages::SERVICE_ERROR_FALLBACK));
                self.state = UiState::ServiceError;
            }
            LookupResult::NoMatch => {
                self.page.set_error(messages::NO_MATCH);
                self.state = UiState::NoMatch;
            }
            LookupResult::Matches(records) => {
                self.page.show_result_area();
                for record in records {
                    self.page.push_row(record);
                }
                self.page.set_notice(&messages::success(&code, records.len()));
                self.state = UiState::Success {
                    zipcode: code,
                    count: records.len(),
                };
            }
        }
    }

    /// Return to idle unconditionally, whatever the prior state.
    pub fn reset(&mut self) {
        self.page.reset();
        self.state = UiState::Idle;
    }
}
