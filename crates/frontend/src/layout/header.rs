use leptos::prelude::*;

use crate::system::auth::context::{do_logout, use_auth};

/// Top bar: who is signed in, and the way out.
#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let identity = move || {
        let state = auth_state.get();
        match state.session.user() {
            Some(user) => format!("{} — {}", user.username, user.role.display_name()),
            None => String::new(),
        }
    };

    view! {
        <header class="app-header">
            <span class="header-identity">{identity}</span>
            <button class="btn-logout" on:click=move |_| do_logout(set_auth_state)>
                "Log out"
            </button>
        </header>
    }
}
