use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

/// Build the HTTP client shared by an outbound service client.
///
/// Without a timeout the client waits as long as the transport allows.
pub fn build_client(timeout_secs: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
