//! Role-to-view resolution: the single source of truth for what each
//! role sees. Sidebar and dashboard body both render these lists
//! verbatim, in order; nothing else filters them.

use serde::{Deserialize, Serialize};

use super::roles::Role;

/// One clickable item in the role-scoped menu. Labels, paths and icon
/// names are baked in, so the wire shape is serialize-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

const fn nav(label: &'static str, path: &'static str, icon: &'static str) -> NavEntry {
    NavEntry { label, path, icon }
}

/// Opaque identifier for a dashboard-body panel. Rendering is up to the
/// caller; the resolver only decides which panels appear and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
    InventoryManagement,
    OrderProcessing,
    Statistics,
    Notifications,
    QuickActions,
    ComplianceChecks,
    PerformanceMetrics,
    DistributionTracking,
    TaskManagement,
}

impl Widget {
    pub fn title(&self) -> &'static str {
        match self {
            Widget::InventoryManagement => "Inventory Management",
            Widget::OrderProcessing => "Order Processing",
            Widget::Statistics => "Statistics",
            Widget::Notifications => "Notifications",
            Widget::QuickActions => "Quick Actions",
            Widget::ComplianceChecks => "Compliance Checks",
            Widget::PerformanceMetrics => "Performance Metrics",
            Widget::DistributionTracking => "Distribution Tracking",
            Widget::TaskManagement => "Task Management",
        }
    }
}

const DRUG_SUPPLIER_NAV: &[NavEntry] = &[
    nav("Dashboard", "/", "layout-dashboard"),
    nav("Manage Inventory", "/manage-inventory", "package"),
    nav("Order History", "/order-history", "file-text"),
    nav("Supply Chain Overview", "/supply-chain-overview", "activity"),
    nav("Real-Time Alerts", "/real-time-alerts", "bell"),
    nav("Task Management", "/task-management", "clipboard"),
    nav("Communication", "/communication", "message-square"),
    nav("Predictive Insights", "/predictive-insights", "trending-up"),
];

const GOVERNMENT_NAV: &[NavEntry] = &[
    nav("Dashboard", "/", "layout-dashboard"),
    nav("Monitor Distribution", "/monitor-distribution", "map"),
    nav("Policy Management", "/policy-management", "help-circle"),
    nav("Reports", "/reports", "bar-chart"),
    nav("Emergency Response", "/emergency-response", "heart-pulse"),
    nav("Analytics & Insights", "/analytics", "trending-up"),
    nav("Alerts & Notifications", "/alerts", "bell"),
    nav("Security Settings", "/security-settings", "shield"),
];

const DISTRIBUTOR_NAV: &[NavEntry] = &[
    nav("Dashboard", "/", "layout-dashboard"),
    nav("Distribute Drugs", "/distribute-drugs", "truck"),
    nav("Track Shipments", "/track-shipments", "refresh"),
    nav("Warehouse Management", "/warehouse-management", "store"),
    nav("Live Distribution Reports", "/live-distribution-reports", "bar-chart"),
    nav("Collaboration", "/collaboration", "users"),
    nav("Task Management", "/task-management", "clipboard"),
];

const DISTRIBUTOR_LOW_LEVEL_NAV: &[NavEntry] = &[
    nav("Dashboard", "/", "layout-dashboard"),
    nav("Local Distribution", "/local-distribution", "truck"),
    nav("Monitor Stock Levels", "/monitor-stock", "package"),
    nav("Local Distribution Reports", "/local-reports", "bar-chart"),
    nav("Real-Time Updates", "/real-time-updates", "refresh"),
    nav("Notifications", "/notifications", "bell"),
];

const MEDICAL_ADMINISTRATOR_NAV: &[NavEntry] = &[
    nav("Dashboard", "/", "layout-dashboard"),
    nav("Receive Drugs", "/receive-drugs", "inbox"),
    nav("Stock Management", "/stock-management", "receipt"),
    nav("Patient Distribution", "/patient-distribution", "users"),
    nav("Usage Reports", "/usage-reports", "bar-chart"),
    nav("Alerts & Notifications", "/alerts", "bell"),
    nav("User Profile", "/profile", "user"),
    nav("Settings", "/settings", "settings"),
    nav("Emergency Care", "/emergency-care", "heart-pulse"),
];

/// Landing route is all an unknown or absent role gets.
const FALLBACK_NAV: &[NavEntry] = &[nav("Dashboard", "/", "layout-dashboard")];

/// Navigation entries for a role, in presentation order.
///
/// `None` (unauthenticated, or a role string that failed to parse) falls
/// back to the single landing entry. This is deliberate least privilege,
/// not an error.
pub fn resolve_navigation(role: Option<Role>) -> &'static [NavEntry] {
    match role {
        Some(Role::DrugSupplier) => DRUG_SUPPLIER_NAV,
        Some(Role::Government) => GOVERNMENT_NAV,
        Some(Role::Distributor) => DISTRIBUTOR_NAV,
        Some(Role::DistributorLowLevel) => DISTRIBUTOR_LOW_LEVEL_NAV,
        Some(Role::MedicalAdministrator) => MEDICAL_ADMINISTRATOR_NAV,
        None => FALLBACK_NAV,
    }
}

/// Dashboard-body widgets for a role, in mount order.
///
/// Keyed by the same `Role` enum as [`resolve_navigation`], so a role
/// cannot gain a menu without a dashboard or vice versa. An empty result
/// means "no access to this dashboard".
pub fn resolve_dashboard_widgets(role: Option<Role>) -> &'static [Widget] {
    use Widget::*;
    match role {
        Some(Role::DrugSupplier) => &[
            InventoryManagement,
            OrderProcessing,
            Statistics,
            Notifications,
            QuickActions,
        ],
        Some(Role::Government) => &[
            ComplianceChecks,
            Statistics,
            Notifications,
            QuickActions,
            PerformanceMetrics,
        ],
        Some(Role::Distributor) => &[
            DistributionTracking,
            OrderProcessing,
            Statistics,
            Notifications,
            QuickActions,
        ],
        Some(Role::DistributorLowLevel) => &[TaskManagement, Statistics, Notifications],
        Some(Role::MedicalAdministrator) => &[
            InventoryManagement,
            OrderProcessing,
            Statistics,
            TaskManagement,
            Notifications,
        ],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        resolve_navigation(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_drug_supplier_navigation() {
        assert_eq!(
            labels(Some(Role::DrugSupplier)),
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

    #[test]
    fn test_government_navigation() {
        assert_eq!(
            labels(Some(Role::Government)),
            vec![
                "Dashboard",
                "Monitor Distribution",
                "Policy Management",
                "Reports",
                "Emergency Response",
                "Analytics & Insights",
                "Alerts & Notifications",
                "Security Settings",
            ]
        );
    }

    #[test]
    fn test_distributor_navigation() {
        assert_eq!(
            labels(Some(Role::Distributor)),
            vec![
                "Dashboard",
                "Distribute Drugs",
                "Track Shipments",
                "Warehouse Management",
                "Live Distribution Reports",
                "Collaboration",
                "Task Management",
            ]
        );
    }

    #[test]
    fn test_distributor_low_level_navigation() {
        assert_eq!(
            labels(Some(Role::DistributorLowLevel)),
            vec![
                "Dashboard",
                "Local Distribution",
                "Monitor Stock Levels",
                "Local Distribution Reports",
                "Real-Time Updates",
                "Notifications",
            ]
        );
    }

    #[test]
    fn test_medical_administrator_navigation() {
        assert_eq!(
            labels(Some(Role::MedicalAdministrator)),
            vec![
                "Dashboard",
                "Receive Drugs",
                "Stock Management",
                "Patient Distribution",
                "Usage Reports",
                "Alerts & Notifications",
                "User Profile",
                "Settings",
                "Emergency Care",
            ]
        );
    }

    #[test]
    fn test_unknown_role_navigation_falls_back() {
        let entries = resolve_navigation(None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Dashboard");
        assert_eq!(entries[0].path, "/");

        // Unparseable role strings end up here too
        assert_eq!(Role::parse("superAdmin"), None);
        assert_eq!(resolve_navigation(Role::parse("superAdmin")).len(), 1);
        assert_eq!(resolve_navigation(Role::parse("")).len(), 1);
    }

    #[test]
    fn test_drug_supplier_widgets() {
        assert_eq!(
            resolve_dashboard_widgets(Some(Role::DrugSupplier)),
            &[
                Widget::InventoryManagement,
                Widget::OrderProcessing,
                Widget::Statistics,
                Widget::Notifications,
                Widget::QuickActions,
            ]
        );
    }

    #[test]
    fn test_government_widgets() {
        assert_eq!(
            resolve_dashboard_widgets(Some(Role::Government)),
            &[
                Widget::ComplianceChecks,
                Widget::Statistics,
                Widget::Notifications,
                Widget::QuickActions,
                Widget::PerformanceMetrics,
            ]
        );
    }

    #[test]
    fn test_distributor_widgets() {
        assert_eq!(
            resolve_dashboard_widgets(Some(Role::Distributor)),
            &[
                Widget::DistributionTracking,
                Widget::OrderProcessing,
                Widget::Statistics,
                Widget::Notifications,
                Widget::QuickActions,
            ]
        );
    }

    #[test]
    fn test_distributor_low_level_widgets() {
        assert_eq!(
            resolve_dashboard_widgets(Some(Role::DistributorLowLevel)),
            &[Widget::TaskManagement, Widget::Statistics, Widget::Notifications]
        );
    }

    #[test]
    fn test_medical_administrator_widgets() {
        assert_eq!(
            resolve_dashboard_widgets(Some(Role::MedicalAdministrator)),
            &[
                Widget::InventoryManagement,
                Widget::OrderProcessing,
                Widget::Statistics,
                Widget::TaskManagement,
                Widget::Notifications,
            ]
        );
    }

    #[test]
    fn test_unknown_role_has_no_widgets() {
        assert!(resolve_dashboard_widgets(None).is_empty());
        assert!(resolve_dashboard_widgets(Role::parse("distributer")).is_empty());
    }

    #[test]
    fn test_every_role_has_both_mappings() {
        // Both resolvers are keyed by the same enum; every role must
        // produce a non-fallback result from each.
        for role in Role::ALL {
            assert!(resolve_navigation(Some(role)).len() > 1, "{role}");
            assert!(!resolve_dashboard_widgets(Some(role)).is_empty(), "{role}");
        }
    }

    #[test]
    fn test_dashboard_is_always_first() {
        for role in Role::ALL {
            let first = resolve_navigation(Some(role))[0];
            assert_eq!(first.label, "Dashboard");
            assert_eq!(first.path, "/");
        }
    }
}
