use contracts::domain::common::SelectOption;
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// Value the control should display; unknown values fall back to the placeholder
fn shown_value(value: &str, options: &[SelectOption]) -> String {
    if options.iter().any(|option| option.value == value) {
        value.to_string()
    } else {
        String::new()
    }
}

/// Select with a placeholder entry and an inline error line
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    /// Receives the chosen value, empty for the placeholder
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Text of the empty first entry
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message shown under the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--invalid=move || error.get().is_some()
                disabled=move || disabled.get()
                prop:value=move || options.with(|opts| shown_value(&value.get(), opts))
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                    // the owner may reject the choice and leave `value` untouched
                    let committed = options.with_untracked(|opts| shown_value(&value.get_untracked(), opts));
                    event_target::<HtmlSelectElement>(&ev).set_value(&committed);
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                </option>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let option_value = option.value.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str) -> SelectOption {
        SelectOption::new(value, value.to_uppercase())
    }

    #[test]
    fn test_shown_value_follows_committed_value() {
        let options = vec![option("e1"), option("e3")];
        assert_eq!(shown_value("e1", &options), "e1");
        assert_eq!(shown_value("e3", &options), "e3");
        assert_eq!(shown_value("", &options), "");
        assert_eq!(shown_value("gone", &options), "");
        assert_eq!(shown_value("e1", &[]), "");
    }
}
