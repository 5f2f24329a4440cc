use doh_relay_application::use_cases::ResolveDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve: Arc<ResolveDomainUseCase>,
}
