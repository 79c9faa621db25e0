use std::sync::Arc;
use v6ready_application::use_cases::ResolveDomainUseCase;

#[derive(Clone)]
pub struct AppState {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}
