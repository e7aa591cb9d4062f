//! Built-in route set for the SJ Hardware back office.
//!
//! This is the extended variant (with accounting reports). Deployments that
//! want a different list load a manifest instead.

use crate::{RouteMetadata, RouteSpec, RouteTable, RouteTableError};

/// Path of the standalone login view.
pub const LOGIN_PATTERN: &str = "/login";

/// Report views nested under `/reports`: (path, view, title).
const REPORTS: &[(&str, &str, &str)] = &[
    ("general-ledger", "GeneralLedgerReport", "General Ledger"),
    ("trial-balance", "TrialBalanceReport", "Trial Balance"),
    ("profit-loss", "ProfitLossReport", "Profit & Loss"),
    ("cash-flow", "CashFlowReport", "Cash Flow"),
    ("debtors-report", "DebtorsReport", "Debtors"),
    ("creditors-report", "CreditorsReport", "Creditors"),
    ("out-of-stock", "OutOfStockReport", "Out of Stock"),
    ("stock-list", "StockListReport", "Stock List"),
    ("sales-list", "SalesListReport", "Sales List"),
    ("purchases-list", "PurchasesListReport", "Purchases List"),
    ("expenses-report", "ExpensesReport", "Expenses Report"),
    ("consumption-list", "ConsumptionListReport", "Consumption List"),
    ("performance-list", "PerformanceListReport", "Performance List"),
];

pub fn default_routes() -> Vec<RouteSpec> {
    let reports = REPORTS
        .iter()
        .map(|&(path, view, title)| {
            RouteSpec::new(path, view, RouteMetadata::protected(title))
        })
        .collect();

    vec![
        RouteSpec::new(
            LOGIN_PATTERN,
            "Login",
            RouteMetadata::public("Login").standalone(),
        ),
        RouteSpec::new("/", "MainLayout", RouteMetadata::protected("Home")).with_children(vec![
            RouteSpec::new(
                "",
                "Dashboard",
                RouteMetadata::protected("Dashboard").with_greeting(),
            ),
            RouteSpec::new(
                "products",
                "Products",
                RouteMetadata::protected("Products").with_greeting(),
            ),
            RouteSpec::new("sales", "Sales", RouteMetadata::protected("Sales")),
            RouteSpec::new(
                "purchases",
                "Purchases",
                RouteMetadata::protected("Purchases").with_greeting(),
            ),
            RouteSpec::new("payments", "Payments", RouteMetadata::protected("Payments")),
            RouteSpec::new("supplier", "Supplier", RouteMetadata::protected("Supplier")),
            RouteSpec::new("expenses", "Expenses", RouteMetadata::protected("Expenses")),
            RouteSpec::new("customers", "Customers", RouteMetadata::protected("Customers")),
            RouteSpec::new(
                "purchase-orders/:id",
                "PurchaseOrderDetail",
                RouteMetadata::protected("Purchase Order"),
            ),
            RouteSpec::new("reports", "Reports", RouteMetadata::protected("Reports"))
                .with_children(reports),
        ]),
    ]
}

/// Compile [`default_routes`].
pub fn default_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::build(&default_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutGroup;

    #[test]
    fn default_catalog_builds() {
        let table = default_table().unwrap();
        assert_eq!(table.len(), 2 + 10 + REPORTS.len());
    }

    #[test]
    fn dashboard_is_the_root_view() {
        let table = default_table().unwrap();
        let root = table.resolve("/").unwrap();
        assert_eq!(root.route().view().as_str(), "Dashboard");
        assert!(root.route().metadata().show_greeting);
        assert_eq!(root.layout_group(), LayoutGroup::Main);
    }

    #[test]
    fn reports_nest_two_levels_deep() {
        let table = default_table().unwrap();
        let report = table.resolve("/reports/trial-balance").unwrap();
        let chain: Vec<&str> = report.ancestors().iter().map(|r| r.view().as_str()).collect();
        assert_eq!(chain, vec!["MainLayout", "Reports"]);
        assert_eq!(report.route().metadata().display_name, "Trial Balance");
    }

    #[test]
    fn consumption_and_performance_lists_are_protected_reports() {
        let table = default_table().unwrap();
        for (path, view) in [
            ("/reports/consumption-list", "ConsumptionListReport"),
            ("/reports/performance-list", "PerformanceListReport"),
        ] {
            let report = table.resolve(path).unwrap();
            assert_eq!(report.route().view().as_str(), view);
            assert!(report.requires_auth());
        }
    }

    #[test]
    fn only_login_is_public() {
        let table = default_table().unwrap();
        for route in table.routes() {
            let path = route.pattern().to_string().replace(":id", "1");
            let resolved = table.resolve(&path).unwrap();
            assert_eq!(resolved.requires_auth(), path != LOGIN_PATTERN, "{path}");
        }
    }
}
