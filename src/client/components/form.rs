use dioxus::prelude::*;

/// Slider with its current value shown next to the label.
#[component]
pub fn RangeInput(
    label: &'static str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    onchange: EventHandler<f64>,
) -> Element {
    rsx!(
        div { class: "flex flex-col gap-1",
            div { class: "flex justify-between",
                span { "{label}" }
                span { class: "font-mono", "{value}" }
            }
            input {
                r#type: "range",
                class: "range range-sm",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        onchange.call(value);
                    }
                },
            }
        }
    )
}

/// Numeric text field; unparsable input is ignored until it becomes a number again.
#[component]
pub fn NumberInput(
    label: &'static str,
    value: f64,
    suffix: Option<&'static str>,
    onchange: EventHandler<f64>,
) -> Element {
    rsx!(
        label { class: "input w-full",
            span { class: "label", "{label}" }
            input {
                r#type: "number",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        onchange.call(value);
                    }
                },
            }
            if let Some(suffix) = suffix {
                span { class: "label", "{suffix}" }
            }
        }
    )
}
