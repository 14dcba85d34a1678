//! Application shell: auth gate and the main layout.

use contracts::system::views::{resolve_navigation, NavEntry};
use leptos::prelude::*;

use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::placeholder::PlaceholderPage;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Currently selected navigation entry, shared between the sidebar and
/// the content pane.
#[derive(Clone, Copy)]
pub struct ActiveView(pub RwSignal<NavEntry>);

/// Main application layout: sidebar, header and the content pane for the
/// selected navigation entry.
#[component]
fn MainLayout() -> impl IntoView {
    // Landing entry is the fallback "Dashboard", valid for every role
    let active = RwSignal::new(resolve_navigation(None)[0]);
    provide_context(ActiveView(active));

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="app-content">
                    {move || {
                        let entry = active.get();
                        if entry.path == "/" {
                            view! { <DashboardPage /> }.into_any()
                        } else {
                            view! { <PlaceholderPage entry=entry /> }.into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}

/// Auth gate: `LoginPage` without a session, `MainLayout` with one.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
