use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRotateRight, FaCircleXmark, FaUsers};
use dioxus_free_icons::Icon;

use crate::{
    model::fleet::CharacterDto,
    payout::{
        import::{members_from_characters, parse_names},
        PayoutSession,
    },
};

const EXAMPLE_FLEET: &str = "ConnorJC\nHogTits\nOrisis Wessette";

/// What the fleet lookup found for the signed in character.
#[derive(Clone, Debug, PartialEq)]
enum FleetLookup {
    Loading,
    NotInFleet,
    /// In a fleet but without the role needed to read its members
    NotCommander,
    Commander(Vec<CharacterDto>),
    Unavailable(String),
}

impl FleetLookup {
    fn reason(&self) -> Option<String> {
        match self {
            Self::NotInFleet => Some("You are not in a fleet.".to_string()),
            Self::NotCommander => {
                Some("Only the fleet commander can read the fleet's members.".to_string())
            }
            Self::Unavailable(reason) => Some(reason.clone()),
            Self::Loading | Self::Commander(_) => None,
        }
    }
}

#[component]
pub fn SetupFleet() -> Element {
    let mut session = use_context::<Signal<PayoutSession>>();
    #[allow(unused_mut)]
    let mut fleet = use_signal(|| FleetLookup::Loading);
    let mut import_text = use_signal(String::new);
    #[allow(unused_mut)]
    let mut import_status = use_signal(|| None::<Result<usize, String>>);
    #[allow(unused_mut)]
    let mut importing = use_signal(|| false);

    #[cfg(feature = "web")]
    let user_store = use_context::<Store<crate::client::store::user::UserState>>();

    let load_fleet = move || {
        #[cfg(feature = "web")]
        spawn(async move {
            use dioxus_logger::tracing;

            use crate::client::util::api::{self, ApiError};

            fleet.set(FleetLookup::Loading);

            let lookup = match api::get_fleet().await {
                Ok(Some(status)) => match status.members {
                    Some(members) if status.is_fleet_commander => FleetLookup::Commander(members),
                    _ => FleetLookup::NotCommander,
                },
                Ok(None) => FleetLookup::NotInFleet,
                Err(err) => {
                    tracing::warn!(%err, "Fleet lookup failed");
                    api::clear_on_unauthorized(user_store, &err);

                    match err {
                        ApiError::Upstream(reason) => FleetLookup::Unavailable(reason),
                        other => FleetLookup::Unavailable(other.to_string()),
                    }
                }
            };

            fleet.set(lookup);
        });
    };

    use_hook(move || load_fleet());

    let import_fleet = move |_: MouseEvent| {
        if let FleetLookup::Commander(members) = &*fleet.read() {
            let added = session
                .write()
                .roster
                .import(members_from_characters(members.clone()));
            import_status.set(Some(Ok(added)));
        }
    };

    let import_names = move |evt: FormEvent| {
        evt.prevent_default();

        let names = parse_names(&import_text.read());
        if names.is_empty() {
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api;

            importing.set(true);

            match api::resolve_characters(names).await {
                Ok(characters) => {
                    let added = session
                        .write()
                        .roster
                        .import(members_from_characters(characters));
                    import_text.set(String::new());
                    import_status.set(Some(Ok(added)));
                }
                Err(err) => {
                    api::clear_on_unauthorized(user_store, &err);
                    import_status.set(Some(Err(err.to_string())));
                }
            }

            importing.set(false);
        });
    };

    let lookup = fleet.read().clone();
    let busy = importing();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body flex flex-col items-center gap-3",
                h2 { class: "card-title text-2xl", "Manage Fleet" }
                button {
                    class: "btn btn-primary btn-outline flex gap-2",
                    disabled: !matches!(lookup, FleetLookup::Commander(_)),
                    onclick: import_fleet,
                    {match &lookup {
                        FleetLookup::Loading => rsx! {
                            span { class: "loading loading-spinner loading-sm" }
                            span { "Checking if you're the Fleet Commander" }
                        },
                        FleetLookup::Commander(members) => rsx! {
                            Icon { width: 16, height: 16, icon: FaUsers }
                            span { "Import {members.len()} Fleet Members" }
                        },
                        _ => rsx! {
                            Icon { width: 16, height: 16, icon: FaCircleXmark }
                            span { "Cannot Import Automatically" }
                        },
                    }}
                }
                if let Some(reason) = lookup.reason() {
                    p { class: "text-sm opacity-60", "{reason}" }
                }
                button {
                    class: "btn btn-link btn-sm flex gap-1 opacity-60",
                    onclick: move |_| load_fleet(),
                    Icon { width: 12, height: 12, icon: FaArrowRotateRight }
                    span { "Refresh Fleet Status" }
                }
                form {
                    class: "w-full lg:w-1/2 flex flex-col gap-2 px-2",
                    onsubmit: import_names,
                    label { class: "text-xl", r#for: "member-import", "Import Members" }
                    textarea {
                        id: "member-import",
                        class: "textarea w-full",
                        placeholder: EXAMPLE_FLEET,
                        rows: 6,
                        disabled: busy,
                        value: "{import_text}",
                        oninput: move |evt| import_text.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-outline w-full",
                        r#type: "submit",
                        disabled: busy,
                        if busy {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Import"
                    }
                }
                {match import_status() {
                    Some(Ok(added)) => rsx! {
                        p { class: "text-sm text-success", "Added {added} new characters to the fleet." }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "{err}" }
                    },
                    None => rsx! {},
                }}
            }
        }
    )
}
