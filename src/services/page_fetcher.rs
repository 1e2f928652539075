use std::time::Duration;

use futures::{stream, StreamExt};
use reqwest::{Client, StatusCode};

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(PageFetcher { client })
    }

    pub async fn fetch(&self, url: &str) -> Option<String> {
        self.fetch_with_timeout(url, None).await
    }

    /// Body of a 200 response; any other status or a transport error gives `None`
    pub async fn fetch_with_timeout(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Option<String> {
        let mut req = self.client.get(url);
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        match req.send().await {
            Ok(res) => match res.status() {
                StatusCode::OK => match res.text().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        log::error!("Failed to read body of {}. Error: {:?}", url, e);
                        None
                    }
                },
                status => {
                    log::warn!("Got status {} when fetching {}", status, url);
                    None
                }
            },
            Err(e) => {
                log::error!("Error fetching {}: {:?}", url, e);
                None
            }
        }
    }

    /// Fetches every item's url with at most `concurrency` requests in flight.
    /// Results keep the input order and stay attached to their item.
    pub async fn fetch_all<T, F>(
        &self,
        items: Vec<T>,
        url_of: F,
        concurrency: usize,
    ) -> Vec<(T, Option<String>)>
    where
        F: Fn(&T) -> &str,
    {
        stream::iter(items)
            .map(|item| {
                let url = url_of(&item).to_string();
                async move {
                    let body = self.fetch(&url).await;
                    (item, body)
                }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::PageFetcher;
    use crate::configuration::DEFAULT_USER_AGENT;

    #[tokio::test]
    async fn returns_body_on_ok_with_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "pricehound-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("pricehound-test/1.0").unwrap();
        let body = fetcher.fetch(&format!("{}/page", server.uri())).await;

        assert_eq!(body.as_deref(), Some("<p>hello</p>"));
    }

    #[tokio::test]
    async fn non_ok_status_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();

        assert_eq!(fetcher.fetch(&format!("{}/moved", server.uri())).await, None);
        assert_eq!(fetcher.fetch(&format!("{}/missing", server.uri())).await, None);
    }

    #[tokio::test]
    async fn transport_error_is_none() {
        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();

        assert_eq!(fetcher.fetch("not a url").await, None);
    }

    #[tokio::test]
    async fn timeout_cuts_off_slow_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let body = fetcher
            .fetch_with_timeout(&server.uri(), Some(Duration::from_millis(100)))
            .await;

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn fetch_all_keeps_items_paired_with_bodies() {
        let server = MockServer::start().await;
        for name in ["a", "b", "c"] {
            Mock::given(method("GET"))
                .and(path(format!("/{}", name)))
                .respond_with(ResponseTemplate::new(200).set_body_string(format!("page {}", name)))
                .mount(&server)
                .await;
        }

        let urls: Vec<String> = ["a", "missing", "b", "c"]
            .iter()
            .map(|n| format!("{}/{}", server.uri(), n))
            .collect();
        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let results = fetcher.fetch_all(urls.clone(), |u| u.as_str(), 2).await;

        let bodies: Vec<Option<&str>> = results.iter().map(|(_, b)| b.as_deref()).collect();
        assert_eq!(
            bodies,
            vec![Some("page a"), None, Some("page b"), Some("page c")]
        );
        let returned_urls: Vec<String> = results.into_iter().map(|(u, _)| u).collect();
        assert_eq!(returned_urls, urls);
    }
}
