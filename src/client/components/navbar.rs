use dioxus::prelude::*;

use crate::client::{components::EveLogin, store::user::UserState};

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let state = user_store.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl", "Pochven Payout" }
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = state.user.as_ref() {
                    div { class: "flex items-center gap-3",
                        div { class: "avatar",
                            div { class: "w-10 rounded-full",
                                img {
                                    src: format!("https://images.evetech.net/characters/{}/portrait?size=64", user.character_id),
                                    alt: "{user.character_name}",
                                }
                            }
                        }
                        div { class: "flex flex-col",
                            p { "{user.character_name}" }
                            a { href: "/api/auth/logout", class: "text-sm underline opacity-60",
                                "Log Out"
                            }
                        }
                    }
                } else if state.fetched {
                    EveLogin { }
                }
            }
        }

        Outlet::<Route> {}
    }
}
