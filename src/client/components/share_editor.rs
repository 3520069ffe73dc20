use dioxus::prelude::*;

use crate::{
    client::{
        components::form::{NumberInput, RangeInput},
        util::format::{format_isk, format_percentage},
    },
    payout::{breakdown::SliceKind, settings::TaxType, PayoutSession},
};

#[component]
pub fn ShareEditor() -> Element {
    let mut session = use_context::<Signal<PayoutSession>>();

    let settings = session.read().settings.clone();
    let expected = session.read().pay_in.expected_site_payout;
    let breakdown = session.read().breakdown();
    let warning = settings.validate().err();

    let breakdown_view = match breakdown {
        Ok(slices) => rsx! {
            ul { class: "flex flex-col gap-1",
                for slice in slices {
                    li {
                        key: "{slice.name}",
                        class: if slice.kind == SliceKind::Group { "flex justify-between" } else { "flex justify-between opacity-70" },
                        span { "{slice.name}" }
                        span { class: "font-mono",
                            "{format_percentage(slice.percentage)}"
                            if expected > 0.0 {
                                " ({format_isk(slice.percentage * expected)})"
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
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Shares" }
                RangeInput {
                    label: "Shares per Main",
                    value: settings.shares_per_main,
                    min: 0.0,
                    max: 5.0,
                    step: 0.25,
                    onchange: move |value| session.write().settings.shares_per_main = value,
                }
                RangeInput {
                    label: "Shares per Alt",
                    value: settings.shares_per_alt,
                    min: 0.0,
                    max: 5.0,
                    step: 0.25,
                    onchange: move |value| session.write().settings.shares_per_alt = value,
                }
                RangeInput {
                    label: "Total Shares per Account",
                    value: settings.shares_total,
                    min: 0.0,
                    max: 10.0,
                    step: 0.25,
                    onchange: move |value| session.write().settings.shares_total = value,
                }
                if let Some(warning) = warning {
                    div { class: "alert alert-warning", "{warning}" }
                }
                TaxInput {
                    label: "Corporation Tax",
                    tax_type: settings.corp_tax_type,
                    value: settings.corp_tax_value,
                    ontypechange: move |tax_type| session.write().settings.corp_tax_type = tax_type,
                    onvaluechange: move |value| session.write().settings.corp_tax_value = value,
                }
                TaxInput {
                    label: "SIG Tax",
                    tax_type: settings.sig_tax_type,
                    value: settings.sig_tax_value,
                    ontypechange: move |tax_type| session.write().settings.sig_tax_type = tax_type,
                    onvaluechange: move |value| session.write().settings.sig_tax_value = value,
                }
                div { class: "divider", "Breakdown" }
                {breakdown_view}
            }
        }
    )
}

/// Tax type selector with a value field; percentages are entered as whole numbers.
#[component]
fn TaxInput(
    label: &'static str,
    tax_type: TaxType,
    value: f64,
    ontypechange: EventHandler<TaxType>,
    onvaluechange: EventHandler<f64>,
) -> Element {
    let (shown, suffix) = match tax_type {
        TaxType::Percent => (value * 100.0, "%"),
        TaxType::Flat => (value, "ISK"),
    };

    rsx!(
        div { class: "flex gap-2 items-center",
            select {
                class: "select w-36",
                onchange: move |evt| {
                    let tax_type = match evt.value().as_str() {
                        "Flat" => TaxType::Flat,
                        _ => TaxType::Percent,
                    };
                    ontypechange.call(tax_type);
                },
                for option_type in [TaxType::Percent, TaxType::Flat] {
                    option {
                        value: option_type.label(),
                        selected: option_type == tax_type,
                        "{option_type.label()}"
                    }
                }
            }
            NumberInput {
                label,
                value: shown,
                suffix,
                onchange: move |entered: f64| {
                    let value = match tax_type {
                        TaxType::Percent => entered / 100.0,
                        TaxType::Flat => entered,
                    };
                    onvaluechange.call(value);
                },
            }
        }
    )
}
