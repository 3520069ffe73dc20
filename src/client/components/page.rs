use dioxus::prelude::*;

/// Page body offset below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[72px] px-4 pb-8 bg-base-200/40 {class}",
            {children}
        }
    )
}
