//! Dashboard landing page.
//!
//! Mounts the widgets `resolve_dashboard_widgets` returns for the
//! session's role, in order. Widget internals are placeholder panels;
//! which panels appear is the part that matters.

use contracts::system::views::{resolve_dashboard_widgets, Widget};
use leptos::prelude::*;

use crate::system::auth::context::use_auth;

fn widget_summary(widget: Widget) -> &'static str {
    match widget {
        Widget::InventoryManagement => "Stock levels and reorder points at a glance.",
        Widget::OrderProcessing => "Open orders and their fulfilment state.",
        Widget::Statistics => "Key figures for the current period.",
        Widget::Notifications => "Recent events that may need attention.",
        Widget::QuickActions => "Shortcuts for the most common operations.",
        Widget::ComplianceChecks => "Regulatory checks and their outcomes.",
        Widget::PerformanceMetrics => "Throughput and delivery performance.",
        Widget::DistributionTracking => "Shipments currently in transit.",
        Widget::TaskManagement => "Assigned tasks and their status.",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let title = move || match auth_state.get().session.user() {
        Some(user) => format!("{} Dashboard", user.role.display_name()),
        None => "Dashboard".to_string(),
    };

    view! {
        <div class="dashboard">
            <h1>{title}</h1>
            {move || {
                let widgets = resolve_dashboard_widgets(auth_state.get().role());
                if widgets.is_empty() {
                    view! {
                        <p class="no-access">"No access to this dashboard"</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="widget-grid">
                            {widgets
                                .iter()
                                .map(|widget| {
                                    let widget = *widget;
                                    view! {
                                        <section class="widget-card">
                                            <h2>{widget.title()}</h2>
                                            <p>{widget_summary(widget)}</p>
                                        </section>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
