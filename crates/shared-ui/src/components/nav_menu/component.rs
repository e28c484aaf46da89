use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdClock, LdFileText, LdFolder, LdFuel, LdLayoutDashboard, LdListOrdered, LdMap,
    LdMapPin, LdScale, LdThumbsUp, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::MenuEntry;

use crate::components::sidebar::{
    SidebarGroup, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarMenuSub,
};

/// Lucide icon for a route's icon key. Unknown keys get a generic page icon.
#[component]
pub fn MenuIcon(name: String, #[props(default = 18)] size: u32) -> Element {
    match name.as_str() {
        "layout-dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        "map" => rsx! { Icon::<LdMap> { icon: LdMap, width: size, height: size } },
        "clock" => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        "trending-up" => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: size, height: size } },
        "car" => rsx! { Icon::<LdCar> { icon: LdCar, width: size, height: size } },
        "map-pin" => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: size, height: size } },
        "list-ordered" => rsx! { Icon::<LdListOrdered> { icon: LdListOrdered, width: size, height: size } },
        "scale" => rsx! { Icon::<LdScale> { icon: LdScale, width: size, height: size } },
        "thumbs-up" => rsx! { Icon::<LdThumbsUp> { icon: LdThumbsUp, width: size, height: size } },
        "fuel" => rsx! { Icon::<LdFuel> { icon: LdFuel, width: size, height: size } },
        "folder" => rsx! { Icon::<LdFolder> { icon: LdFolder, width: size, height: size } },
        _ => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
    }
}

/// Renders a filtered menu tree inside a sidebar.
///
/// Entries with children become labelled groups; leaves become menu
/// buttons. `on_select` receives the full path of the chosen entry, and the
/// leaf whose path equals `active_path` is highlighted.
#[component]
pub fn NavMenu(
    entries: Vec<MenuEntry>,
    #[props(default)] active_path: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        for entry in entries {
            if entry.children.is_empty() {
                SidebarMenu {
                    NavMenuLeaf {
                        entry: entry.clone(),
                        active: entry.path == active_path,
                        on_select,
                    }
                }
            } else {
                SidebarGroup { label: entry.title.clone(),
                    NavMenuBranch {
                        entries: entry.children.clone(),
                        active_path: active_path.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn NavMenuBranch(
    entries: Vec<MenuEntry>,
    active_path: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        SidebarMenu {
            for entry in entries {
                NavMenuLeaf {
                    entry: entry.clone(),
                    active: entry.path == active_path,
                    on_select,
                }
                if !entry.children.is_empty() {
                    SidebarMenuSub {
                        NavMenuBranch {
                            entries: entry.children.clone(),
                            active_path: active_path.clone(),
                            on_select,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavMenuLeaf(entry: MenuEntry, active: bool, on_select: EventHandler<String>) -> Element {
    let path = entry.path.clone();
    let icon = entry.icon.clone().unwrap_or_default();

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active,
                title: "{entry.path}",
                onclick: move |_| on_select.call(path.clone()),
                MenuIcon { name: icon }
                span { class: "sidebar-menu-label", "{entry.title}" }
            }
        }
    }
}
