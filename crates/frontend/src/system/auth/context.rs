//! The Session/Identity Store.
//!
//! A single reactive `AuthState` signal provided to the whole tree.
//! Writers: the login page's success path and logout. Everything else
//! reads.

use contracts::system::roles::Role;
use contracts::system::session::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub session: Session,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.session.user().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Try to restore the session from localStorage tokens on mount
    create_effect(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                // Validate token by fetching current user
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        let mut session = Session::new();
                        session.establish(user_info);
                        set_auth_state.set(AuthState {
                            access_token: Some(access_token),
                            session,
                        });
                    }
                    Err(_) => {
                        // Token invalid, try refresh
                        if let Some(refresh_token) = storage::get_refresh_token() {
                            match api::refresh_token(refresh_token).await {
                                Ok(response) => {
                                    storage::save_access_token(&response.access_token);

                                    if let Ok(user_info) =
                                        api::get_current_user(&response.access_token).await
                                    {
                                        let mut session = Session::new();
                                        session.establish(user_info);
                                        set_auth_state.set(AuthState {
                                            access_token: Some(response.access_token),
                                            session,
                                        });
                                    }
                                }
                                Err(_) => {
                                    storage::clear_tokens();
                                }
                            }
                        } else {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

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

/// Clear the session and revoke the refresh token (logout)
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        if let Some(refresh_token) = storage::get_refresh_token() {
            let _ = api::logout(refresh_token).await;
        }
        storage::clear_tokens();
        set_auth_state.set(AuthState::default());
    });
}
