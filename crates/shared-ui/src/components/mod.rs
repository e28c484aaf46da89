use dioxus::prelude::Attribute;

/// `class` first, then the caller's attributes; a caller `class` is appended.
pub(crate) fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// A component that wraps its children in one `$tag` element with a fixed
/// class. Caller attributes are merged in through [`with_class`].
macro_rules! slot_component {
    ($(#[$meta:meta])* $name:ident, $tag:ident, $class:literal) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
            children: Element,
        ) -> Element {
            let merged = $crate::components::with_class($class, attributes);
            rsx! {
                $tag {
                    ..merged,
                    {children}
                }
            }
        }
    };
}

pub mod button;
pub mod card;
pub mod input;

pub mod sidebar;

// Depends on sidebar
pub mod nav_menu;

pub use button::*;
pub use card::*;
pub use input::*;
pub use nav_menu::*;
pub use sidebar::*;
