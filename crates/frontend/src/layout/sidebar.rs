//! Role-scoped sidebar.
//!
//! Renders exactly what `resolve_navigation` returns for the session's
//! role, in order, with no extra filtering. There is no second menu
//! definition anywhere; this is the one source of truth.

use contracts::system::views::resolve_navigation;
use leptos::prelude::*;

use crate::app_shell::ActiveView;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let ActiveView(active) = use_context::<ActiveView>().expect("ActiveView not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"PharmaTrack"</div>
            <ul>
                {move || {
                    let entries = resolve_navigation(auth_state.get().role());
                    entries
                        .iter()
                        .map(|entry| {
                            let entry = *entry;
                            let is_active = move || active.get().path == entry.path;
                            view! {
                                <li
                                    class:active=is_active
                                    on:click=move |_| active.set(entry)
                                >
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
