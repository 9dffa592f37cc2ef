use anyhow::{Context, Result};
use fantoccini::{elements::Element, Client, Locator};

/// High-level page wrapper providing CSS element queries.
pub struct Page {
    client: Client,
}

impl Page {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Wait for and return a single element by CSS selector.
    ///
    /// Waiting matters on search-result pages: listing cards render after
    /// the initial document load.
    pub async fn find_element(&self, selector: &str) -> Result<PageElement> {
        let element = self
            .client
            .wait()
            .for_element(Locator::Css(selector))
            .await
            .with_context(|| format!("element not found: {selector}"))?;
        Ok(PageElement::new(element))
    }

    /// Find zero or more elements by CSS selector, in DOM order.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<PageElement>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;
        Ok(elements.into_iter().map(PageElement::new).collect())
    }

    /// Return the current page URL.
    pub async fn url(&self) -> Result<String> {
        self.client
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(anyhow::Error::from)
    }

    /// Return the page title.
    pub async fn title(&self) -> Result<String> {
        self.client.title().await.map_err(anyhow::Error::from)
    }
}

/// Wrapper for DOM elements with the typed reads the extractor needs.
#[derive(Clone)]
pub struct PageElement {
    element: Element,
}

impl PageElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Find a child element by CSS selector.
    pub async fn find_element(&self, selector: &str) -> Result<PageElement> {
        let element = self
            .element
            .find(Locator::Css(selector))
            .await
            .with_context(|| format!("child element not found: {selector}"))?;
        Ok(PageElement::new(element))
    }

    /// Return the element's visible text.
    pub async fn text(&self) -> Result<String> {
        self.element.text().await.map_err(anyhow::Error::from)
    }

    /// Read an attribute value.
    pub async fn attr(&self, attribute: &str) -> Result<Option<String>> {
        self.element
            .attr(attribute)
            .await
            .map_err(anyhow::Error::from)
    }
}
