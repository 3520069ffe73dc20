use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRotateRight, FaCircleCheck};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::form::NumberInput, util::format::format_isk},
    model::wallet::WalletJournalEntryDto,
    payout::{reconcile::relevant_transactions, refresh::RefreshGate, PayoutSession},
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wallet journal as last retrieved, shared by the polling loop and the manual refresh button.
#[derive(Clone, Copy)]
struct WalletState {
    journal: Signal<Vec<WalletJournalEntryDto>>,
    error: Signal<Option<String>>,
    refreshed_at: Signal<Option<DateTime<Utc>>>,
}

#[component]
pub fn PayIn() -> Element {
    let mut session = use_context::<Signal<PayoutSession>>();
    let wallet = WalletState {
        journal: use_signal(Vec::new),
        error: use_signal(|| None),
        refreshed_at: use_signal(|| None),
    };
    let gate = use_hook(RefreshGate::new);

    #[cfg(feature = "web")]
    let user_store = use_context::<Store<crate::client::store::user::UserState>>();

    // Poll the wallet journal for as long as the page is open
    #[cfg(feature = "web")]
    {
        let gate = gate.clone();
        use_future(move || {
            let gate = gate.clone();
            async move {
                use crate::payout::refresh::WALLET_REFRESH_INTERVAL;

                loop {
                    refresh_journal(&gate, wallet, user_store).await;
                    gloo_timers::future::sleep(WALLET_REFRESH_INTERVAL).await;
                }
            }
        });
    }

    let refresh_now = {
        let gate = gate.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let gate = gate.clone();
                spawn(async move { refresh_journal(&gate, wallet, user_store).await });
            }
            #[cfg(not(feature = "web"))]
            let _ = &gate;
        }
    };

    let state = session.read();
    let expected = state.pay_in.expected_site_payout;
    let per_character = state.payout_per_character();
    let reconciliation = state.reconciliation();
    let transactions = relevant_transactions(&wallet.journal.read(), &state.roster);
    let confirmed: Vec<bool> = transactions
        .iter()
        .map(|entry| state.selections.is_enabled(entry.id))
        .collect();
    let names: Vec<String> = transactions
        .iter()
        .map(|entry| {
            entry
                .first_party_id
                .and_then(|id| state.roster.get(id))
                .map(|member| member.name.clone())
                .unwrap_or_default()
        })
        .collect();
    drop(state);

    let per_character_view = match per_character {
        Ok(Some(amount)) => rsx! {
            p { class: "text-lg",
                span { class: "font-mono", "{format_isk(amount)}" }
                " per character in the payout"
            }
        },
        Ok(None) => rsx! {
            p { class: "opacity-60", "Mark characters as part of this payout to see what each receives." }
        },
        Err(err) => rsx! {
            div { class: "alert alert-error", "{err}" }
        },
    };

    let reconciliation_view = match reconciliation {
        Ok(groups) if groups.is_empty() => rsx! {},
        Ok(groups) => rsx! {
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "Main" }
                        th { class: "text-center", "Characters" }
                        th { class: "text-right", "Received" }
                        th { span { class: "sr-only", "Paid in full" } }
                    }
                }
                tbody {
                    for group in groups {
                        tr { key: "{group.main.character_id}",
                            td { "{group.main.name}" }
                            td { class: "text-center", "{group.character_count}" }
                            td { class: "text-right font-mono", "{format_isk(group.received)}" }
                            td {
                                if group.paid_in_full {
                                    span { class: "text-success", title: "Paid in full",
                                        Icon { width: 16, height: 16, icon: FaCircleCheck }
                                    }
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

    let refreshed_at = (wallet.refreshed_at)()
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Pay In" }
                NumberInput {
                    label: "Expected Site Payout",
                    value: expected,
                    suffix: "ISK",
                    onchange: move |value| session.write().pay_in.expected_site_payout = value,
                }
                {per_character_view}
                div { class: "divider", "Wallet Transactions" }
                div { class: "flex justify-between items-center text-sm opacity-60",
                    span { "Last refreshed: {refreshed_at}" }
                    button {
                        class: "btn btn-link btn-sm flex gap-1",
                        disabled: gate.is_busy(),
                        onclick: refresh_now,
                        Icon { width: 12, height: 12, icon: FaArrowRotateRight }
                        span { "Refresh" }
                    }
                }
                if let Some(err) = (wallet.error)() {
                    div { class: "alert alert-warning", "{err}" }
                }
                if transactions.is_empty() {
                    p { class: "opacity-60", "Donations from fleet members will appear here." }
                }
                ul { class: "flex flex-col gap-1",
                    for ((entry, enabled), name) in transactions.into_iter().zip(confirmed).zip(names) {
                        li { key: "{entry.id}",
                            label { class: "flex gap-2 items-center cursor-pointer",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox checkbox-sm",
                                    checked: enabled,
                                    onchange: {
                                        let entry = entry.clone();
                                        move |_| {
                                            session.write().toggle_transaction(&entry);
                                        }
                                    },
                                }
                                span { class: "font-mono", "{format_isk(entry.amount.unwrap_or(0.0))}" }
                                span { "from {name}" }
                                span { class: "text-xs opacity-60", "{entry.date.format(DATE_FORMAT)}" }
                            }
                        }
                    }
                }
                div { class: "divider", "Received" }
                {reconciliation_view}
            }
        }
    )
}

/// Retrieves the wallet journal unless a refresh is already in flight.
#[cfg(feature = "web")]
async fn refresh_journal(
    gate: &RefreshGate,
    mut wallet: WalletState,
    user_store: Store<crate::client::store::user::UserState>,
) {
    use dioxus_logger::tracing;

    use crate::client::util::api;

    let Some(_ticket) = gate.try_begin() else {
        tracing::debug!("Wallet refresh already running, skipping");
        return;
    };

    match api::get_wallet_journal().await {
        Ok(entries) => {
            wallet.journal.set(entries);
            wallet.error.set(None);
            wallet.refreshed_at.set(Some(Utc::now()));
        }
        Err(err) => {
            tracing::warn!(%err, "Failed to refresh wallet journal");
            api::clear_on_unauthorized(user_store, &err);
            wallet.error.set(Some(err.to_string()));
        }
    }
}
