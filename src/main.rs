use std::env;
use std::time::Duration;

use anyhow::Result;
use zipcloud_rs::{SearchWidget, UiState, ZipcloudClient, ZipcloudConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <zipcode> [endpoint] [timeout_ms]", args[0]);
        eprintln!("  zipcode: 7-digit Japanese postal code (hyphens and full-width digits ok)");
        eprintln!("  endpoint: override the zipcloud API URL");
        eprintln!("  timeout_ms: request deadline in milliseconds (default 1000)");
        std::process::exit(1);
    }

    let mut config = ZipcloudConfig::default();
    if let Some(endpoint) = args.get(2) {
        config.base_url = endpoint.clone();
    }
    if let Some(timeout) = args.get(3) {
        match timeout.parse::<u64>() {
            Ok(ms) => config.timeout = Duration::from_millis(ms),
            Err(_) => eprintln!("Warning: invalid timeout '{}', using default", timeout),
        }
    }

    let client = ZipcloudClient::with_config(config)?;
    let mut widget = SearchWidget::new(client);
    widget.search(&args[1]).await;

    let page = widget.page();
    match widget.state() {
        UiState::Success { .. } => {
            println!("{}", page.notice());
            for row in page.rows() {
                println!(
                    "{}  {}{}{}  {} {} {}  (pref {})",
                    row.zipcode,
                    row.address1,
                    row.address2,
                    row.address3,
                    row.kana1,
                    row.kana2,
                    row.kana3,
                    row.prefcode
                );
            }
        }
        _ => {
            eprintln!("{}", page.error());
            std::process::exit(1);
        }
    }

    Ok(())
}
