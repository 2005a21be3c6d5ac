// ============================================================================
// SEARCH VIEWMODEL - Lógica de la búsqueda de rutas
// ============================================================================
// validar -> in-flight -> red -> resolver estado -> avisar
// ============================================================================

use crate::models::{Notice, SearchOutcome};
use crate::services::notifier::Notifier;
use crate::services::route_search_client::{GlooTransport, HttpTransport, RouteSearchClient};
use crate::state::SearchState;

/// ViewModel de búsqueda - sin estado propio
pub struct SearchViewModel<T: HttpTransport = GlooTransport> {
    client: RouteSearchClient<T>,
}

impl SearchViewModel<GlooTransport> {
    pub fn new() -> Self {
        Self::with_client(RouteSearchClient::new())
    }
}

impl Default for SearchViewModel<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> SearchViewModel<T> {
    pub fn with_client(client: RouteSearchClient<T>) -> Self {
        Self { client }
    }

    /// Ejecutar una búsqueda sobre el estado.
    /// Devuelve None si no se hizo ningún request (validación, ocupado, desmontado).
    pub async fn search<N: Notifier>(&self, state: &SearchState, notifier: &N) -> Option<SearchOutcome> {
        let ticket = match state.begin_search() {
            Ok(ticket) => ticket,
            Err(e) => {
                match Notice::from_error(&e) {
                    Some(notice) => notifier.notify(&notice),
                    None => log::debug!("⏸️ [SEARCH] Búsqueda ignorada: {}", e),
                }
                return None;
            }
        };

        let outcome = self.client.search(&ticket.from, &ticket.to).await;

        if !state.complete_search(&ticket, outcome.clone()) {
            return Some(outcome);
        }

        match &outcome {
            SearchOutcome::Success(_) => log::info!("✅ [SEARCH] Resultado recibido"),
            SearchOutcome::Failure(e) => {
                if let Some(notice) = Notice::from_error(e) {
                    notifier.notify(&notice);
                }
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchError;
    use crate::services::route_search_client::tests::FakeTransport;
    use crate::services::route_search_client::HttpResponse;
    use crate::views::SearchPanelProps;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    /// Transporte que ejecuta un hook en medio del request (ventana in-flight)
    struct HookedTransport {
        inner: FakeTransport,
        hook: Box<dyn Fn()>,
    }

    impl HttpTransport for HookedTransport {
        async fn post_json(&self, url: &str, json_body: &str) -> Result<HttpResponse, SearchError> {
            (self.hook)();
            self.inner.post_json(url, json_body).await
        }
    }

    fn viewmodel(transport: FakeTransport) -> SearchViewModel<FakeTransport> {
        SearchViewModel::with_client(RouteSearchClient::with_transport("http://test/passenger/routes/search", transport))
    }

    fn state_with(from: &str, to: &str) -> SearchState {
        let state = SearchState::new();
        state.set_from_location(from.to_string());
        state.set_to_location(to.to_string());
        state
    }

    #[test]
    fn successful_search_shows_payload_and_reenables_button() {
        let transport = FakeTransport::replying(200, r#"{"routes":[]}"#);
        let vm = viewmodel(transport.clone());
        let state = state_with("A", "B");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        assert_eq!(transport.call_count(), 1);
        assert_eq!(state.get_result(), Some(json!({"routes": []})));
        assert!(notifier.notices.borrow().is_empty());

        let props = SearchPanelProps::from_state(&state);
        assert!(!props.button_disabled);
        assert_eq!(props.result_dump.as_deref(), Some("{\n  \"routes\": []\n}"));
    }

    #[test]
    fn request_body_carries_fields_as_typed() {
        let transport = FakeTransport::replying(200, "{}");
        let vm = viewmodel(transport.clone());
        let state = state_with(" RTC Complex ", "Gajuwaka");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        let calls = transport.calls.borrow();
        assert_eq!(calls[0].0, "http://test/passenger/routes/search");
        let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(body, json!({"from": " RTC Complex ", "to": "Gajuwaka"}));
    }

    #[test]
    fn empty_from_never_hits_the_network() {
        let transport = FakeTransport::replying(200, "{}");
        let vm = viewmodel(transport.clone());
        let state = state_with("", "B");
        let notifier = RecordingNotifier::default();

        let outcome = block_on(vm.search(&state, &notifier));

        assert_eq!(outcome, None);
        assert_eq!(transport.call_count(), 0);
        assert_eq!(*notifier.notices.borrow(), vec![Notice::Validation]);
        assert!(!state.is_in_flight());
        assert_eq!(state.get_result(), None);
    }

    #[test]
    fn whitespace_only_to_never_hits_the_network() {
        let transport = FakeTransport::default();
        let vm = viewmodel(transport.clone());
        let state = state_with("A", "    ");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        assert_eq!(transport.call_count(), 0);
        assert_eq!(notifier.notices.borrow().len(), 1);
    }

    #[test]
    fn server_error_notifies_and_leaves_result_unset() {
        let transport = FakeTransport::replying(500, "");
        let vm = viewmodel(transport.clone());
        let state = state_with("A", "B");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        assert_eq!(transport.call_count(), 1);
        assert!(!state.is_in_flight());
        assert_eq!(state.get_result(), None);
        assert_eq!(
            *notifier.notices.borrow(),
            vec![Notice::SearchFailed("Search failed".to_string())]
        );
        assert!(!SearchPanelProps::from_state(&state).button_disabled);
    }

    #[test]
    fn malformed_body_is_reported_like_a_transport_error() {
        let transport = FakeTransport::replying(200, "not json");
        let vm = viewmodel(transport);
        let state = state_with("A", "B");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        assert_eq!(state.get_result(), None);
        assert!(matches!(notifier.notices.borrow()[0], Notice::SearchFailed(_)));
    }

    #[test]
    fn activation_during_flight_is_a_no_op() {
        let state = state_with("A", "B");
        let second_attempt = Rc::new(RefCell::new(None));

        let inner = FakeTransport::replying(200, "[]");
        let busy_state = state.clone();
        let attempt_sink = second_attempt.clone();
        let transport = HookedTransport {
            inner: inner.clone(),
            hook: Box::new(move || {
                *attempt_sink.borrow_mut() = Some(busy_state.begin_search());
            }),
        };
        let vm = SearchViewModel::with_client(RouteSearchClient::with_transport("http://test", transport));
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));

        assert_eq!(inner.call_count(), 1);
        assert_eq!(*second_attempt.borrow(), Some(Err(SearchError::Busy)));
        assert!(notifier.notices.borrow().is_empty());
        assert_eq!(state.get_result(), Some(json!([])));
    }

    #[test]
    fn each_activation_issues_exactly_one_request() {
        let transport = FakeTransport::replying(200, "1");
        transport.push_reply(Ok(HttpResponse { status: 200, body: "2".to_string() }));
        let vm = viewmodel(transport.clone());
        let state = state_with("A", "B");
        let notifier = RecordingNotifier::default();

        block_on(vm.search(&state, &notifier));
        assert_eq!(transport.call_count(), 1);
        block_on(vm.search(&state, &notifier));
        assert_eq!(transport.call_count(), 2);
        assert_eq!(state.get_result(), Some(json!(2)));
    }

    #[test]
    fn unmount_mid_flight_discards_outcome_silently() {
        let state = state_with("A", "B");
        let teardown_state = state.clone();
        let inner = FakeTransport::replying(500, "");
        let transport = HookedTransport {
            inner,
            hook: Box::new(move || teardown_state.teardown()),
        };
        let vm = SearchViewModel::with_client(RouteSearchClient::with_transport("http://test", transport));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(vm.search(&state, &notifier));

        assert_eq!(outcome, Some(SearchOutcome::Failure(SearchError::Http { status: 500 })));
        assert!(notifier.notices.borrow().is_empty());
        assert_eq!(state.get_last_error(), None);
    }
}
