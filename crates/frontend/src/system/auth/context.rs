use contracts::system::auth::{SignInRequest, UserInfo};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from cookies; the token is checked by the API on first use
    let restored = AuthState {
        token: storage::get_token(),
        user_info: storage::get_user(),
    };
    if restored.is_authenticated() {
        log::info!("Restored session from cookies");
    }
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform sign in and store the session
pub async fn do_login(
    request: SignInRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::sign_in(&request).await?;

    storage::save_token(&response.token);
    storage::save_user(&response.user);
    log::info!("Signed in as {}", response.user.email);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}
