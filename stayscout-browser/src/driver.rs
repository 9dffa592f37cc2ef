use crate::page::Page;
use anyhow::Result;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::collections::HashMap;
use webdriver::capabilities::Capabilities;

/// Thin wrapper around a `fantoccini` WebDriver client.
pub struct BrowserDriver {
    client: Client,
}

impl BrowserDriver {
    /// Connect to a running WebDriver service and open a browser session.
    ///
    /// `webdriver_url` is the service address (chromedriver listens on
    /// `http://localhost:9515`).
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();

        let mut args = session_arguments();
        if headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }
        chrome_opts.insert("args".to_string(), json!(args));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        tracing::debug!(target: "browser", %webdriver_url, headless, "connecting webdriver session");
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;

        Ok(Self { client })
    }

    /// Navigate to `url` and return a [`Page`] for element queries.
    pub async fn goto(&mut self, url: &str) -> Result<Page> {
        self.client.goto(url).await?;
        Ok(Page::new(self.client.clone()))
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

/// Chrome arguments that keep a scripted session close to a regular one.
/// Booking sites serve reduced result pages to sessions that advertise
/// automation.
fn session_arguments() -> Vec<String> {
    [
        "--disable-blink-features=AutomationControlled",
        "--disable-infobars",
        "--disable-dev-shm-usage",
        "--no-sandbox",
        "--disable-extensions",
        "--disable-plugins-discovery",
        "--window-size=1920,1080",
        "--lang=en-US,en",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_is_opt_in() {
        let args = session_arguments();
        assert!(args.iter().all(|a| a != "--headless"));
        assert!(args.iter().any(|a| a == "--disable-blink-features=AutomationControlled"));
    }
}
