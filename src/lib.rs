pub mod client;
pub mod messages;
pub mod types;
pub mod view;
pub mod widget;
pub mod zipcode;

pub use client::{LookupError, ZipcloudClient, ZipcloudConfig};
pub use types::{AddressRecord, LookupResult, SearchResponse};
pub use view::SearchPage;
pub use widget::{SearchWidget, UiState};
pub use zipcode::{ZipValidation, format_zip, normalize, validate};
