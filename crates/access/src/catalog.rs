//! The portal's route tree.
//!
//! Paths and names are stable identifiers shared with the router, the
//! persisted permissions (`"{name}:view"`) and `config.toml`.

use shared_types::{PortalConfig, Role, RouteDescriptor, RouteTableError};

use crate::resolver::{self, PermissionResolver};
use crate::table::RouteTable;

pub const LOGIN_PATH: &str = "/Auth";
pub const ABOUT_PATH: &str = "/about";
pub const APP_PATH: &str = "/app";

/// Permission string that unlocks the detail panel of a dashboard page.
pub fn view_permission(page: &str) -> String {
    format!("{page}:view")
}

fn sales(path: &str, title: &str, icon: &str) -> RouteDescriptor {
    RouteDescriptor::protected(path, path)
        .title(title)
        .icon(icon)
        .roles([Role::SalesManager])
}

fn customer(path: &str, title: &str, icon: &str) -> RouteDescriptor {
    RouteDescriptor::protected(path, path)
        .title(title)
        .icon(icon)
        .roles([Role::Customer])
}

/// Every route of the portal, in menu order.
pub fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::public(LOGIN_PATH, "Auth")
            .title("Sign In")
            .hidden(),
        RouteDescriptor::public(ABOUT_PATH, "About")
            .title("About")
            .hidden(),
        RouteDescriptor::protected(APP_PATH, "App")
            .title("Dashboards")
            .layout(vec![
                sales("SaleTotal", "Sales Overview", "layout-dashboard"),
                sales("CarPurchasesHeatMap", "Purchase Heat Map", "map"),
                sales("TimeSeries", "Time Series", "clock"),
                sales("SalesForecast", "Sales Forecast", "trending-up"),
                sales("ModelSalesForcast", "Model Sales Forecast", "car"),
                sales("RegionSalesForcast", "Regional Sales Forecast", "map-pin"),
                customer("TopCarModelList", "Top Car Models", "list-ordered"),
                customer("VehicleModelCompAnalysis", "Model Comparison", "scale"),
                customer("Recommendation", "Purchase Recommendations", "thumbs-up"),
                customer("FuelConsList", "Fuel Consumption Ranking", "fuel"),
            ]),
    ]
}

/// Validate the catalog and bind it to the configured landing routes.
pub fn resolver(config: &PortalConfig) -> Result<PermissionResolver, RouteTableError> {
    let table = RouteTable::new(routes())?;
    resolver::from_settings(table, &config.routes)
}
