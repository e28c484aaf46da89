use pretty_assertions::assert_eq;
use shared_types::{MenuEntry, Role};

use crate::common::portal_resolver;

fn flatten(entries: &[MenuEntry]) -> Vec<String> {
    let mut out = Vec::new();
    for entry in entries {
        out.push(entry.path.clone());
        out.extend(flatten(&entry.children));
    }
    out
}

fn leaves(entries: &[MenuEntry]) -> Vec<String> {
    let mut out = Vec::new();
    for entry in entries {
        if entry.children.is_empty() {
            out.push(entry.path.clone());
        } else {
            out.extend(leaves(&entry.children));
        }
    }
    out
}

#[test]
fn sales_manager_sees_exactly_the_sales_dashboards() {
    let menu = portal_resolver().visible_menu(&Role::SalesManager);
    assert_eq!(
        leaves(&menu),
        vec![
            "/app/SaleTotal",
            "/app/CarPurchasesHeatMap",
            "/app/TimeSeries",
            "/app/SalesForecast",
            "/app/ModelSalesForcast",
            "/app/RegionSalesForcast",
        ]
    );
}

#[test]
fn customer_sees_exactly_the_customer_dashboards() {
    let menu = portal_resolver().visible_menu(&Role::Customer);
    assert_eq!(
        leaves(&menu),
        vec![
            "/app/TopCarModelList",
            "/app/VehicleModelCompAnalysis",
            "/app/Recommendation",
            "/app/FuelConsList",
        ]
    );
}

#[test]
fn dashboards_are_grouped_under_the_app_layout() {
    let menu = portal_resolver().visible_menu(&Role::Customer);
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].path, "/app");
    assert_eq!(menu[0].title, "Dashboards");
    assert_eq!(menu[0].children[0].title, "Top Car Models");
    assert_eq!(menu[0].children[0].icon.as_deref(), Some("list-ordered"));
}

#[test]
fn roles_without_dashboards_get_an_empty_menu() {
    let resolver = portal_resolver();
    assert!(resolver.visible_menu(&Role::ProductManager).is_empty());
    assert!(resolver
        .visible_menu(&Role::Other("Auditor".into()))
        .is_empty());
}

#[test]
fn hidden_routes_never_show_up() {
    let resolver = portal_resolver();
    for role in [Role::SalesManager, Role::Customer] {
        let paths = flatten(&resolver.visible_menu(&role));
        assert!(!paths.contains(&"/Auth".to_string()), "{role}");
        assert!(!paths.contains(&"/about".to_string()), "{role}");
    }
}

#[test]
fn menu_leaf_iff_role_is_authorized() {
    let resolver = portal_resolver();
    let pages: Vec<_> = resolver
        .table()
        .routes()
        .filter(|r| !r.layout && r.requires_auth)
        .map(|r| r.path.clone())
        .collect();
    for role in [
        Role::SalesManager,
        Role::Customer,
        Role::ProductManager,
        Role::Other("Auditor".into()),
    ] {
        let visible = leaves(&resolver.visible_menu(&role));
        for path in &pages {
            assert_eq!(
                visible.contains(path),
                resolver.is_authorized(&role, path),
                "{role} {path}"
            );
        }
    }
}

#[test]
fn menu_is_stable_across_calls() {
    let resolver = portal_resolver();
    assert_eq!(
        resolver.visible_menu(&Role::SalesManager),
        resolver.visible_menu(&Role::SalesManager)
    );
}
