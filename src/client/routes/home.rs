use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCoins;
use dioxus_free_icons::Icon;

use crate::client::components::{EveLogin, Page};
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn GetStartedButton() -> Element {
    let user_store = use_context::<Store<UserState>>();

    rsx!(
        ul { class: "flex gap-2",
            if user_store.read().user.is_some() {
                li {
                    Link {
                        to: Route::PayoutTool {},
                        class: "btn btn-primary w-48 flex gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaCoins
                        }
                        p { "Open Payout Tool" }
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-28",
                            "API Docs"
                        }
                    }
                }
            } else if user_store.read().fetched {
                li {
                    EveLogin {  }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Pochven Payout" }
        Meta {
            name: "description",
            content: "Split Pochven site payouts between fleet members and track who has paid in."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-3xl", "Pochven Payout" }
                div {
                    GetStartedButton { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "Fair payouts for Pochven fleets"
                    }
                    p {
                        "Pochven sites pay out to the characters that were on grid, which rarely matches how the fleet wants the ISK split.
                        This tool works out how much each pilot should receive once alts, corporation tax and SIG tax are accounted for."
                    }
                    p {
                        "Sign in with the character that received the payout. If you are the fleet commander your fleet can be imported directly,
                        otherwise paste the names of the pilots that took part."
                    }
                    ul { class: "list-disc pl-6",
                        li { "Link alts to their main, every main earns a base share and each alt adds a bonus up to a per account cap" }
                        li { "Mark who is eligible and who was part of the site being paid out" }
                        li { "Set corporation and SIG tax as a percentage or a flat ISK amount" }
                        li { "Confirm donations from your wallet journal to see which pilots have paid in" }
                    }
                    p {
                        "Nothing is stored on the server besides your sign in, closing the page discards the payout."
                    }
                }
            }
        }
    )
}
