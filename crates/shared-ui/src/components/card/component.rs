use dioxus::prelude::*;

use crate::components::with_class;

/// How a card presents itself. `Locked` dims a panel the session may not
/// open; `Danger` marks a page-blocking error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CardTone {
    #[default]
    Plain,
    Locked,
    Danger,
}

impl CardTone {
    fn as_str(self) -> &'static str {
        match self {
            CardTone::Plain => "plain",
            CardTone::Locked => "locked",
            CardTone::Danger => "danger",
        }
    }
}

/// A bordered panel, styled by its [`CardTone`].
#[component]
pub fn Card(
    #[props(default)] tone: CardTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut merged = with_class("card", attributes);
    merged.push(Attribute::new("data-tone", tone.as_str(), None, false));
    if tone == CardTone::Locked {
        merged.push(Attribute::new("aria-disabled", "true", None, false));
    }

    rsx! {
        section {
            ..merged,
            {children}
        }
    }
}

slot_component!(CardHeader, div, "card-header");
slot_component!(CardTitle, h3, "card-title");
slot_component!(
    /// Secondary text under a [`CardTitle`].
    CardDescription,
    p,
    "card-description"
);
slot_component!(CardContent, div, "card-content");
slot_component!(CardFooter, div, "card-footer");
