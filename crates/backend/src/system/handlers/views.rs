use axum::extract::Json;
use contracts::system::views::{resolve_dashboard_widgets, resolve_navigation, NavEntry, Widget};

use crate::system::auth::extractor::CurrentUser;

/// Navigation entries for the caller's role, in presentation order.
///
/// The role comes from validated token claims; a claim minted with a
/// role this build does not know resolves to the fallback entry, never
/// to an error.
pub async fn navigation(CurrentUser(claims): CurrentUser) -> Json<Vec<NavEntry>> {
    Json(resolve_navigation(claims.role()).to_vec())
}

/// Dashboard widgets for the caller's role, in mount order. Empty means
/// no access to the dashboard body.
pub async fn widgets(CurrentUser(claims): CurrentUser) -> Json<Vec<Widget>> {
    Json(resolve_dashboard_widgets(claims.role()).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::TokenClaims;

    fn claims_for(role: &str) -> CurrentUser {
        CurrentUser(TokenClaims {
            sub: "1".to_string(),
            username: "someone".to_string(),
            role: role.to_string(),
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        })
    }

    #[tokio::test]
    async fn test_navigation_returns_role_entries() {
        let Json(entries) = navigation(claims_for("drugSupplier")).await;
        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Manage Inventory",
                "Order History",
                "Supply Chain Overview",
                "Real-Time Alerts",
                "Task Management",
                "Communication",
                "Predictive Insights",
            ]
        );
    }

    #[tokio::test]
    async fn test_navigation_unknown_role_falls_back() {
        // A claim minted with a role this build does not know gets the
        // single landing entry, not an error.
        let Json(entries) = navigation(claims_for("superAdmin")).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/");
    }

    #[tokio::test]
    async fn test_widgets_return_role_panels() {
        let Json(widgets) = widgets(claims_for("distributorLowLevel")).await;
        assert_eq!(
            widgets,
            vec![Widget::TaskManagement, Widget::Statistics, Widget::Notifications]
        );
    }

    #[tokio::test]
    async fn test_widgets_unknown_role_is_empty() {
        let Json(widgets) = widgets(claims_for("")).await;
        assert!(widgets.is_empty());
    }
}
