use contracts::domain::common::FieldErrors;
use contracts::system::auth::SignUpForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::{show_toast, Toast};
use crate::system::auth::api;

#[component]
pub fn SignupPage(on_sign_in: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(SignUpForm::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let toast = RwSignal::new(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        set_is_loading.set(true);

        spawn_local(async move {
            match api::sign_up(&request).await {
                Ok(()) => {
                    log::info!("Account created for {}", request.email);
                    on_sign_in.run(());
                }
                Err(e) => {
                    log::error!("Error signing up: {}", e);
                    show_toast(toast, "Oops! Sign up failed");
                    let _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    let error_for = move |field: &'static str| {
        move || {
            field_errors
                .get()
                .get(field)
                .map(|msg| view! { <div class="form-error">{msg.to_string()}</div> })
        }
    };

    view! {
        <div class="login-container">
            <Toast toast=toast />
            <div class="login-box">
                <h1>"ANPR"</h1>
                <h2>"Create account"</h2>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="first_name">"First name"</label>
                        <input
                            type="text"
                            id="first_name"
                            prop:value=move || form.get().first_name
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                        {error_for("firstName")}
                    </div>

                    <div class="form-group">
                        <label for="last_name">"Last name"</label>
                        <input
                            type="text"
                            id="last_name"
                            prop:value=move || form.get().last_name
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                        {error_for("lastName")}
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        {error_for("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        {error_for("password")}
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"Already have an account? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_sign_in.run(());
                    }>"Sign in"</a>
                </div>
            </div>
        </div>
    }
}
