//! Hands thumbnails and booking pages off to the host system.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub struct Previewer {
    http: reqwest::Client,
}

impl Previewer {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .context("preview http client failed to build")?;
        Ok(Self { http })
    }

    /// Fetch the listing thumbnail into a scratch file and open it with the
    /// system image viewer. Callers treat failures as non-fatal.
    pub async fn show_image(&self, image_url: &str) -> Result<()> {
        let resp = self
            .http
            .get(image_url)
            .send()
            .await
            .context("image fetch failed")?
            .error_for_status()
            .context("image fetch rejected")?;
        let bytes = resp.bytes().await.context("image body read failed")?;

        let mut file = tempfile::Builder::new()
            .prefix("stayscout-preview-")
            .suffix(image_suffix(image_url))
            .tempfile()
            .context("preview scratch file failed")?;
        file.write_all(&bytes)?;
        // Keep the file on disk; the viewer opens it after we return and
        // the OS temp cleaner reclaims it later.
        let (_, path) = file.keep().context("preview scratch file vanished")?;

        tracing::debug!(target: "preview", path = %path.display(), "opening image preview");
        open::that_detached(&path).context("system image viewer failed to start")?;
        Ok(())
    }

    /// Open a booking page in the system browser.
    pub fn open_booking(&self, booking_url: &str) -> Result<()> {
        tracing::info!(target: "preview", url = booking_url, "opening booking page");
        open::that_detached(booking_url).context("system browser failed to start")?;
        Ok(())
    }
}

/// Pick a scratch-file suffix the image viewer will recognise.
fn image_suffix(image_url: &str) -> &'static str {
    let ext = Url::parse(image_url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|segments| segments.last().map(String::from))
        })
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()));

    match ext.as_deref() {
        Some("png") => ".png",
        Some("webp") => ".webp",
        Some("gif") => ".gif",
        _ => ".jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_follows_url_extension() {
        assert_eq!(image_suffix("https://cdn.example.com/img/hotel.png"), ".png");
        assert_eq!(
            image_suffix("https://cdn.example.com/img/hotel.webp?w=300"),
            ".webp"
        );
    }

    #[test]
    fn suffix_defaults_to_jpg() {
        assert_eq!(image_suffix("https://cdn.example.com/img/hotel"), ".jpg");
        assert_eq!(image_suffix("not a url"), ".jpg");
    }
}
