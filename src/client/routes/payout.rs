use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{EveLogin, MemberList, Page, PayIn, SetupFleet, ShareEditor},
        store::user::UserState,
    },
    payout::PayoutSession,
};

#[component]
pub fn PayoutTool() -> Element {
    let user_store = use_context::<Store<UserState>>();

    // Lives as long as the page, nothing is persisted
    let session = use_signal(PayoutSession::new);
    use_context_provider(|| session);

    let user = user_store.read();

    rsx!(
        Title { "Payout | Pochven Payout" }
        Meta {
            name: "description",
            content: "Split Pochven site payouts between fleet members and track who has paid in."
        }
        Page { class: "flex flex-col items-center",
            if user.user.is_some() {
                div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                    SetupFleet { }
                    MemberList { }
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        ShareEditor { }
                        PayIn { }
                    }
                }
            } else if user.fetched {
                div { class: "flex flex-col items-center gap-4 mt-16",
                    p { class: "text-lg", "Sign in to start a payout" }
                    EveLogin { }
                }
            } else {
                span { class: "loading loading-spinner loading-lg mt-16" }
            }
        }
    )
}
