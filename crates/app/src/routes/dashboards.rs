//! Role-specific dashboard pages.
//!
//! Charts are not rendered here; each page shows its panel layout and a
//! detail section unlocked by the page's `"{name}:view"` permission.

use crate::permission_gate::PermissionGate;
use crate::portal::use_portal;
use access::catalog::{self, APP_PATH};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone};

/// Shared page frame for every dashboard.
#[component]
fn DashboardPage(name: &'static str, summary: &'static str, panels: Vec<&'static str>) -> Element {
    let portal = use_portal();
    let path = format!("{APP_PATH}/{name}");
    let route = portal.resolver().route(&path);
    let title = route
        .and_then(|r| r.title.clone())
        .unwrap_or_else(|| name.to_string());
    let permission = catalog::view_permission(name);

    rsx! {
        div { class: "dashboard-page", id: "{name}",
            div { class: "dashboard-panels",
                for panel in panels {
                    Card { class: "dashboard-panel",
                        CardHeader {
                            CardTitle { "{panel}" }
                        }
                        CardContent {
                            div { class: "chart-placeholder", "No data loaded" }
                        }
                    }
                }
            }

            PermissionGate {
                permission: permission.clone(),
                fallback: rsx! {
                    Card { class: "dashboard-detail", tone: CardTone::Locked,
                        CardHeader {
                            Icon::<LdLock> { icon: LdLock, width: 20, height: 20 }
                            CardTitle { "Detailed analysis" }
                            CardDescription { "Requires the {permission} permission." }
                        }
                    }
                },
                Card { class: "dashboard-detail",
                    CardHeader {
                        CardTitle { "{title}: detailed analysis" }
                        CardDescription { "{summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SaleTotal() -> Element {
    rsx! {
        DashboardPage {
            name: "SaleTotal",
            summary: "Sales volume and revenue totals by brand, month and region.",
            panels: vec!["Monthly sales", "Brand share", "Revenue by region"],
        }
    }
}

#[component]
pub fn CarPurchasesHeatMap() -> Element {
    rsx! {
        DashboardPage {
            name: "CarPurchasesHeatMap",
            summary: "Where purchases concentrate, by province and city.",
            panels: vec!["Purchase density map", "Top cities"],
        }
    }
}

#[component]
pub fn TimeSeries() -> Element {
    rsx! {
        DashboardPage {
            name: "TimeSeries",
            summary: "Sales over time with seasonal decomposition.",
            panels: vec!["Sales trend", "Seasonality", "Year over year"],
        }
    }
}

#[component]
pub fn SalesForecast() -> Element {
    rsx! {
        DashboardPage {
            name: "SalesForecast",
            summary: "Forecasts across brand, price band and segment.",
            panels: vec!["Overall forecast", "Forecast by segment"],
        }
    }
}

#[component]
pub fn ModelSalesForcast() -> Element {
    rsx! {
        DashboardPage {
            name: "ModelSalesForcast",
            summary: "Per-model sales forecast with confidence intervals.",
            panels: vec!["Model forecast", "Forecast error"],
        }
    }
}

#[component]
pub fn RegionSalesForcast() -> Element {
    rsx! {
        DashboardPage {
            name: "RegionSalesForcast",
            summary: "Per-region sales forecast.",
            panels: vec!["Regional forecast", "Growth ranking"],
        }
    }
}

#[component]
pub fn TopCarModelList() -> Element {
    rsx! {
        DashboardPage {
            name: "TopCarModelList",
            summary: "Best-selling models ranked by monthly volume.",
            panels: vec!["Top models", "Movers this month"],
        }
    }
}

#[component]
pub fn VehicleModelCompAnalysis() -> Element {
    rsx! {
        DashboardPage {
            name: "VehicleModelCompAnalysis",
            summary: "Side-by-side comparison of price, sales and ratings.",
            panels: vec!["Specification comparison", "Sales comparison"],
        }
    }
}

#[component]
pub fn Recommendation() -> Element {
    rsx! {
        DashboardPage {
            name: "Recommendation",
            summary: "Model suggestions matched to budget and usage.",
            panels: vec!["Recommended models", "Why these models"],
        }
    }
}

#[component]
pub fn FuelConsList() -> Element {
    rsx! {
        DashboardPage {
            name: "FuelConsList",
            summary: "Models ranked by reported fuel consumption.",
            panels: vec!["Most efficient", "Consumption by class"],
        }
    }
}
