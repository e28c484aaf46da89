use dioxus::prelude::*;

use crate::components::with_class;

/// Whether the dashboard menu column is expanded. Shared through context by
/// [`SidebarProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    fn data_state(self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }

    fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    fn closed() -> Self {
        Self { open: false }
    }
}

/// Owns the [`SidebarState`] for everything below it.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_context_provider(|| Signal::new(SidebarState { open: default_open }));

    rsx! {
        div {
            class: "sidebar-provider",
            "data-state": state().data_state(),
            {children}
        }
    }
}

/// Sidebar state of the nearest [`SidebarProvider`].
pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// The menu column. While open on a narrow screen a backdrop covers the page;
/// clicking it closes the column.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let mut merged = with_class("sidebar", attributes);
    merged.push(Attribute::new("data-state", current.data_state(), None, false));

    rsx! {
        if current.open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState::closed()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

slot_component!(SidebarHeader, div, "sidebar-header");
slot_component!(SidebarContent, nav, "sidebar-content");
slot_component!(
    /// Bottom strip of the sidebar; holds the user block and logout.
    SidebarFooter,
    div,
    "sidebar-footer"
);

/// A labelled group of menu entries.
#[component]
pub fn SidebarGroup(
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-group", attributes);

    rsx! {
        div {
            ..merged,
            if !label.is_empty() {
                div { class: "sidebar-group-label", "{label}" }
            }
            {children}
        }
    }
}

slot_component!(SidebarMenu, ul, "sidebar-menu");
slot_component!(SidebarMenuItem, li, "sidebar-menu-item");
slot_component!(
    /// Nested list under a menu item.
    SidebarMenuSub,
    ul,
    "sidebar-menu-sub"
);

/// One menu row. `active` marks the current page for styling and screen
/// readers. With `collapse_on_select` the column closes after a click, for
/// the overlay layout on narrow screens.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default = false)] collapse_on_select: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let mut merged = with_class("sidebar-menu-button", attributes);
    if active {
        merged.push(Attribute::new("aria-current", "page", None, false));
    }

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if collapse_on_select {
                    state.set(SidebarState::closed());
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Opens or closes the column; reports the current state via `aria-expanded`.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let expanded = if state().open { "true" } else { "false" };
    let merged = with_class("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle menu",
            "aria-expanded": expanded,
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            ..merged,
            {children}
        }
    }
}

slot_component!(
    /// The page area beside the sidebar.
    SidebarInset,
    main,
    "sidebar-inset"
);
