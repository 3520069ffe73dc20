use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let user_store = use_store(UserState::default);
    use_context_provider(|| user_store);

    // Retrieve the signed in character once on load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_user;

        let mut user_store = user_store;
        use_future(move || async move {
            match get_user().await {
                Ok(user) => user_store.write().user = user,
                Err(err) => tracing::error!(%err, "Failed to retrieve signed in character"),
            }

            user_store.write().fetched = true;
        });
    }

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
