pub mod route_search_client;
pub mod notifier;

pub use route_search_client::{GlooTransport, HttpResponse, HttpTransport, RouteSearchClient};
pub use notifier::{AlertNotifier, Notifier};
