// ============================================================================
// ROUTE SEARCH CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un POST por búsqueda. Sin reintentos, sin timeout, sin cancelación.
// ============================================================================

use std::future::Future;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::{SearchError, SearchOutcome, SearchRequest};

/// Respuesta HTTP cruda (status + body en texto)
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Transporte HTTP asíncrono. En el navegador es gloo-net; en tests, un fake.
pub trait HttpTransport {
    /// POST con body JSON y `Content-Type: application/json`
    fn post_json(
        &self,
        url: &str,
        json_body: &str,
    ) -> impl Future<Output = Result<HttpResponse, SearchError>>;
}

/// Transporte real basado en fetch (gloo-net)
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, json_body: &str) -> Result<HttpResponse, SearchError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .map_err(|e| SearchError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        // Si no se puede leer el body de un error HTTP, el status basta
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if response.ok() => return Err(SearchError::MalformedResponse(e.to_string())),
            Err(_) => String::new(),
        };
        Ok(HttpResponse { status, body })
    }
}

/// Cliente de búsqueda de rutas
#[derive(Clone)]
pub struct RouteSearchClient<T: HttpTransport = GlooTransport> {
    search_url: String,
    transport: T,
}

impl RouteSearchClient<GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.search_url(), GlooTransport)
    }
}

impl Default for RouteSearchClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> RouteSearchClient<T> {
    pub fn with_transport(search_url: impl Into<String>, transport: T) -> Self {
        Self {
            search_url: search_url.into(),
            transport,
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Buscar la ruta de bus más cercana entre dos ubicaciones
    pub async fn search(&self, from: &str, to: &str) -> SearchOutcome {
        let request = SearchRequest {
            from: from.to_string(),
            to: to.to_string(),
        };
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => {
                return SearchOutcome::Failure(SearchError::Network(format!("Serialization error: {}", e)))
            }
        };

        log::info!("🚌 [SEARCH] POST {} ({} → {})", self.search_url, from, to);

        let outcome = match self.transport.post_json(&self.search_url, &body).await {
            Ok(response) => {
                log::info!("📥 [SEARCH] HTTP {} ({} bytes)", response.status, response.body.len());
                SearchOutcome::from_response(response.status, &response.body)
            }
            Err(e) => SearchOutcome::Failure(e),
        };

        if let SearchOutcome::Failure(e) = &outcome {
            log::error!("❌ [SEARCH] Error: {}", e);
        }
        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Transporte fake: devuelve respuestas en cola y registra cada llamada
    #[derive(Clone, Default)]
    pub(crate) struct FakeTransport {
        pub calls: Rc<RefCell<Vec<(String, String)>>>,
        pub replies: Rc<RefCell<VecDeque<Result<HttpResponse, SearchError>>>>,
    }

    impl FakeTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            let fake = Self::default();
            fake.push_reply(Ok(HttpResponse { status, body: body.to_string() }));
            fake
        }

        pub fn push_reply(&self, reply: Result<HttpResponse, SearchError>) {
            self.replies.borrow_mut().push_back(reply);
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl HttpTransport for FakeTransport {
        async fn post_json(&self, url: &str, json_body: &str) -> Result<HttpResponse, SearchError> {
            self.calls.borrow_mut().push((url.to_string(), json_body.to_string()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SearchError::Network("sin respuesta preparada".to_string())))
        }
    }

    const URL: &str = "http://localhost:8000/passenger/routes/search";

    #[test]
    fn posts_from_and_to_as_json() {
        let transport = FakeTransport::replying(200, r#"{"routes":[]}"#);
        let client = RouteSearchClient::with_transport(URL, transport.clone());

        let outcome = block_on(client.search("RTC Complex", "Beach Road"));

        assert_eq!(outcome, SearchOutcome::Success(json!({"routes": []})));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, URL);
        let sent: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(sent, json!({"from": "RTC Complex", "to": "Beach Road"}));
    }

    #[test]
    fn server_error_becomes_failure() {
        let transport = FakeTransport::replying(500, "Internal Server Error");
        let client = RouteSearchClient::with_transport(URL, transport);

        let outcome = block_on(client.search("A", "B"));
        assert_eq!(outcome, SearchOutcome::Failure(SearchError::Http { status: 500 }));
    }

    #[test]
    fn network_error_is_passed_through() {
        let transport = FakeTransport::default();
        transport.push_reply(Err(SearchError::Network("Failed to fetch".to_string())));
        let client = RouteSearchClient::with_transport(URL, transport);

        let outcome = block_on(client.search("A", "B"));
        assert_eq!(outcome, SearchOutcome::Failure(SearchError::Network("Failed to fetch".to_string())));
    }

    #[test]
    fn garbage_body_is_malformed() {
        let transport = FakeTransport::replying(200, "{routes:");
        let client = RouteSearchClient::with_transport(URL, transport);

        assert!(matches!(
            block_on(client.search("A", "B")),
            SearchOutcome::Failure(SearchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn default_client_targets_configured_endpoint() {
        let client = RouteSearchClient::new();
        assert!(client.search_url().ends_with("/passenger/routes/search"));
    }
}
