use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightToBracket;
use dioxus_free_icons::Icon;

#[component]
pub fn EveLogin() -> Element {
    rsx!(
        div {
            a { href: "/api/auth/login",
                button {
                    class: "btn btn-neutral w-56 flex gap-2",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaRightToBracket
                    }
                    p { "Log in with EVE Online" }
                }
            }
        }
    )
}
