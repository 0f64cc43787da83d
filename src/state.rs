use axum::extract::FromRef;

use crate::submit::SubmitHandler;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: SubmitHandler,
}

impl FromRef<AppState> for SubmitHandler {
    fn from_ref(state: &AppState) -> Self {
        state.submit_handler.clone()
    }
}
