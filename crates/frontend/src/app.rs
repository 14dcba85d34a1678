use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
