use dioxus::prelude::*;

use crate::payout::{member::FleetMember, PayoutSession};

#[component]
pub fn MemberList() -> Element {
    let session = use_context::<Signal<PayoutSession>>();
    let edit_error = use_signal(|| None::<String>);

    let groups = session.read().groups();

    let body = match groups {
        Ok(groups) if groups.is_empty() => rsx! {
            p { class: "text-center py-6 opacity-60",
                "Fleet Members will appear here once added."
            }
        },
        Ok(groups) => rsx! {
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            th { span { class: "sr-only", "Character Portrait" } }
                            th { "Name" }
                            th { "Main/Alt" }
                            th { class: "text-center", "Eligible?" }
                            th { class: "text-center", "In this Payout?" }
                        }
                    }
                    tbody {
                        for group in groups {
                            MemberRow {
                                key: "{group.main.character_id}",
                                member: group.main.clone(),
                                edit_error,
                            }
                            for alt in group.alts {
                                MemberRow {
                                    key: "{alt.character_id}",
                                    member: alt,
                                    edit_error,
                                }
                            }
                        }
                    }
                }
            }
        },
        Err(err) => rsx! {
            div { class: "alert alert-error", "{err}" }
        },
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body",
                h2 { class: "card-title", "Fleet Members" }
                if let Some(err) = edit_error() {
                    div { class: "alert alert-warning", "{err}" }
                }
                {body}
            }
        }
    )
}

#[component]
fn MemberRow(member: FleetMember, edit_error: Signal<Option<String>>) -> Element {
    let mut session = use_context::<Signal<PayoutSession>>();
    let mut edit_error = edit_error;

    let character_id = member.character_id;
    let selected = member.alt_of_id.unwrap_or(character_id);
    let mains: Vec<(i64, String)> = session
        .read()
        .roster
        .main_options(character_id)
        .into_iter()
        .map(|main| (main.character_id, main.name.clone()))
        .collect();

    let row_class = if member.is_main() { "" } else { "opacity-80" };

    rsx!(
        tr { class: "{row_class}",
            td {
                div { class: "avatar",
                    div { class: "w-10 rounded-full",
                        img { src: member.portrait_url(64), alt: "{member.name}" }
                    }
                }
            }
            td { "{member.name}" }
            td {
                select {
                    class: "select select-sm",
                    onchange: move |evt| {
                        let main_id = evt
                            .value()
                            .parse::<i64>()
                            .ok()
                            .filter(|id| *id != character_id);
                        let result = session.write().roster.set_alt_of(character_id, main_id);
                        edit_error.set(result.err().map(|e| e.to_string()));
                    },
                    option {
                        value: "{character_id}",
                        selected: selected == character_id,
                        "Main Character"
                    }
                    for (main_id, name) in mains {
                        option {
                            key: "{main_id}",
                            value: "{main_id}",
                            selected: selected == main_id,
                            "Alt of {name}"
                        }
                    }
                }
            }
            td { class: "text-center",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: member.eligible,
                    onchange: move |_| {
                        let result = session.write().roster.toggle_eligible(character_id);
                        edit_error.set(result.err().map(|e| e.to_string()));
                    },
                }
            }
            td { class: "text-center",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: member.part_of_site_payout,
                    onchange: move |_| {
                        let result = session.write().roster.toggle_in_payout(character_id);
                        edit_error.set(result.err().map(|e| e.to_string()));
                    },
                }
            }
        }
    )
}
