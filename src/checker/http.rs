// src/checker/http.rs
// =============================================================================
// This module checks whether links answer over HTTP.
//
// Key functionality:
// - Probe trait: "send a request to this URL, give me a status code"
// - ReqwestProbe: the real implementation (HEAD, falling back to GET when
//   the server refuses HEAD)
// - validate_links: probes every link at once and annotates each record
//
// Classification is coarse: ANY response counts as reachable,
// including 404 and 500. Only "no response at all" is a failure. Reading
// meaning into status codes is left to whoever consumes the records.
// =============================================================================

use super::link::{LinkRecord, ValidatedLinkRecord};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why no response could be obtained for a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The href does not parse as an http(s) URL
    InvalidUrl,
    /// Request timed out
    Timeout,
    /// Too many redirects (redirect loop)
    TooManyRedirects,
    /// Could not resolve hostname
    Dns,
    /// Connection refused or reset
    Connect,
    /// SSL/TLS certificate error
    Tls,
    /// Anything else
    Other,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ProbeError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProbeError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

// Anything that can turn a URL into an HTTP status code
//
// The real implementation talks to the network. Tests swap in a fake so
// they never leave the machine.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}

// Probes URLs with a shared reqwest client
//
// The client is built once and reused for every request (connection pooling).
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for ReqwestProbe {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let parsed = parse_http_url(url)?;

        // HEAD first: no body download
        let response = self
            .client
            .head(parsed.clone())
            .send()
            .await
            .map_err(categorize_error)?;
        let status = response.status();

        // Some servers refuse HEAD outright; ask again with GET
        if matches!(status, StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED) {
            log::debug!("HEAD {} answered {}, retrying with GET", url, status.as_u16());
            return match self.client.get(parsed).send().await {
                Ok(response) => Ok(response.status().as_u16()),
                // HEAD already got an answer, so the link is still reachable
                Err(e) => {
                    log::debug!("GET {} failed after HEAD answered: {}", url, e);
                    Ok(status.as_u16())
                }
            };
        }

        Ok(status.as_u16())
    }
}

// Probes every link concurrently and annotates it with the outcome
//
// All requests are started together and awaited together (join_all), so the
// whole batch takes about as long as its slowest link. The output has the
// same length and order as the input no matter which request finishes first.
//
// Never fails: a probe error becomes `status: None, ok: fail` on that record.
pub async fn validate_links<P>(probe: &P, links: Vec<LinkRecord>) -> Vec<ValidatedLinkRecord>
where
    P: Probe + ?Sized,
{
    let checks = links.into_iter().map(move |link| async move {
        match probe.probe(&link.href).await {
            Ok(status) => ValidatedLinkRecord::reachable(link, status),
            Err(e) => {
                log::debug!("{} ({}) unreachable: {}", link.href, link.file.display(), e);
                ValidatedLinkRecord::unreachable(link)
            }
        }
    });

    join_all(checks).await
}

// Parses an href and rejects anything that is not http or https
//
// "https//developers.google./v8/" (missing colon) and "./docs/README.md"
// fail here before any request is attempted.
fn parse_http_url(href: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(href)
        .map_err(|e| ProbeError::new(FailureKind::InvalidUrl, format!("{}: {}", href, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProbeError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme '{}'", scheme),
        )),
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
fn categorize_error(error: reqwest::Error) -> ProbeError {
    // The useful detail (e.g. "dns error") usually sits in the source chain
    let detail = error_chain(&error);
    let lowered = detail.to_lowercase();

    let kind = if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_redirect() {
        FailureKind::TooManyRedirects
    } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
        FailureKind::Tls
    } else if error.is_connect() {
        if lowered.contains("dns") {
            FailureKind::Dns
        } else {
            FailureKind::Connect
        }
    } else if error.is_builder() {
        FailureKind::InvalidUrl
    } else {
        FailureKind::Other
    };

    ProbeError::new(kind, detail)
}

fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. join_all vs buffer_unordered
//    - buffer_unordered(N) caps concurrency but yields results as they finish,
//      so the order of the output no longer matches the input
//    - join_all starts every future and returns results in input order
//
// 2. Why a Probe trait?
//    - validate_links only needs "URL in, status code out"
//    - Tests implement it with a HashMap or a Barrier, no network needed
//
// 3. Why #[async_trait]?
//    - It boxes the returned future so trait objects and generic callers
//      can await it without naming the future type
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Barrier;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Answers from a fixed table; unknown URLs fail as unreachable
    struct FakeProbe {
        answers: HashMap<String, (u64, Result<u16, ProbeError>)>,
    }

    impl FakeProbe {
        fn new() -> Self {
            Self {
                answers: HashMap::new(),
            }
        }

        fn answer(mut self, url: &str, delay_ms: u64, result: Result<u16, ProbeError>) -> Self {
            self.answers.insert(url.to_string(), (delay_ms, result));
            self
        }
    }

    #[async_trait]
    impl Probe for FakeProbe {
        async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
            match self.answers.get(url) {
                Some((delay, result)) => {
                    tokio::time::sleep(Duration::from_millis(*delay)).await;
                    result.clone()
                }
                None => Err(ProbeError::new(FailureKind::Dns, "no such host")),
            }
        }
    }

    // Every probe waits until all of them have started
    struct BarrierProbe {
        barrier: Arc<Barrier>,
    }

    #[async_trait]
    impl Probe for BarrierProbe {
        async fn probe(&self, _url: &str) -> Result<u16, ProbeError> {
            self.barrier.wait().await;
            Ok(200)
        }
    }

    fn link(href: &str) -> LinkRecord {
        LinkRecord::new(href, "text", "/docs/pruebaRoto.md")
    }

    #[tokio::test]
    async fn test_order_is_kept_when_later_links_finish_first() {
        let probe = FakeProbe::new()
            .answer("https://slow.example", 60, Ok(200))
            .answer("https://medium.example", 30, Ok(301))
            .answer("https://fast.example", 0, Ok(404));
        let links = vec![
            link("https://slow.example"),
            link("https://medium.example"),
            link("https://fast.example"),
        ];

        let results = validate_links(&probe, links.clone()).await;

        assert_eq!(results.len(), 3);
        for (result, original) in results.iter().zip(&links) {
            assert_eq!(result.link(), original);
        }
        let statuses: Vec<_> = results.iter().map(|r| r.status()).collect();
        assert_eq!(statuses, vec![Some(200), Some(301), Some(404)]);
    }

    #[tokio::test]
    async fn test_failures_become_data() {
        let probe = FakeProbe::new()
            .answer("https://nodejs.org/", 0, Ok(200))
            .answer(
                "https//developers.google./v8/",
                0,
                Err(ProbeError::new(FailureKind::InvalidUrl, "relative URL without a base")),
            );
        let results = validate_links(
            &probe,
            vec![link("https://nodejs.org/"), link("https//developers.google./v8/")],
        )
        .await;

        assert_eq!(results[0], ValidatedLinkRecord::reachable(link("https://nodejs.org/"), 200));
        assert_eq!(
            results[1],
            ValidatedLinkRecord::unreachable(link("https//developers.google./v8/"))
        );
    }

    #[tokio::test]
    async fn test_all_probes_run_at_once() {
        let count = 8;
        let probe = BarrierProbe {
            barrier: Arc::new(Barrier::new(count)),
        };
        let links = (0..count).map(|i| link(&format!("https://host{}.example", i))).collect();

        // Serialized probes would deadlock on the barrier
        let results = tokio::time::timeout(Duration::from_secs(5), validate_links(&probe, links))
            .await
            .expect("probes did not run concurrently");
        assert_eq!(results.len(), count);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let probe = FakeProbe::new();
        assert!(validate_links(&probe, Vec::new()).await.is_empty());
    }

    fn real_probe() -> ReqwestProbe {
        ReqwestProbe::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_reqwest_probe_reports_any_status() {
        let server = MockServer::start().await;
        for (route, code) in [("/ok", 200), ("/missing", 404), ("/broken", 500)] {
            Mock::given(method("HEAD"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(code))
                .mount(&server)
                .await;
        }

        let probe = real_probe();
        assert_eq!(probe.probe(&format!("{}/ok", server.uri())).await, Ok(200));
        assert_eq!(probe.probe(&format!("{}/missing", server.uri())).await, Ok(404));
        assert_eq!(probe.probe(&format!("{}/broken", server.uri())).await, Ok(500));
    }

    #[tokio::test]
    async fn test_reqwest_probe_falls_back_to_get() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(405))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let status = real_probe().probe(&format!("{}/page", server.uri())).await;
        assert_eq!(status, Ok(200));
    }

    #[tokio::test]
    async fn test_head_status_kept_when_get_fallback_fails() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(405))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let probe = ReqwestProbe::new(Duration::from_millis(300)).unwrap();
        let status = probe.probe(&format!("{}/page", server.uri())).await;
        assert_eq!(status, Ok(405));
    }

    #[tokio::test]
    async fn test_reqwest_probe_rejects_malformed_urls() {
        let probe = real_probe();
        for href in ["https//developers.google./v8/", "./docs/README.md", "mailto:a@b.com"] {
            let err = probe.probe(href).await.unwrap_err();
            assert_eq!(err.kind, FailureKind::InvalidUrl, "{}", href);
        }
    }

    #[tokio::test]
    async fn test_reqwest_probe_refused_connection() {
        let err = real_probe().probe("http://127.0.0.1:1/").await.unwrap_err();
        assert_ne!(err.kind, FailureKind::InvalidUrl);
    }

    #[tokio::test]
    async fn test_reqwest_probe_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let probe = ReqwestProbe::new(Duration::from_millis(200)).unwrap();
        let err = probe.probe(&server.uri()).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Timeout);
    }

    #[tokio::test]
    async fn test_validate_against_local_server() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let links = vec![
            link(&format!("{}/", server.uri())),
            link("https//developers.google./v8/"),
        ];
        let results = validate_links(&real_probe(), links).await;

        assert_eq!(results[0].status(), Some(200));
        assert!(!results[0].is_fail());
        assert_eq!(results[1].status(), None);
        assert!(results[1].is_fail());
    }
}
