use contracts::system::views::NavEntry;
use leptos::prelude::*;

/// Stand-in for the role pages outside the auth core. The entry got here
/// through the resolver, so reaching this page already means the role is
/// allowed to see it.
#[component]
pub fn PlaceholderPage(entry: NavEntry) -> impl IntoView {
    view! {
        <div class="page-placeholder">
            <h1>{entry.label}</h1>
            <p>{format!("The {} page is not part of this build.", entry.label)}</p>
        </div>
    }
}
