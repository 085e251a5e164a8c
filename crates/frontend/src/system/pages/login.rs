use contracts::domain::common::FieldErrors;
use contracts::system::auth::SignInRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::{show_toast, Toast};
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage(on_sign_up: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let toast = RwSignal::new(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignInRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        set_is_loading.set(true);

        spawn_local(async move {
            if let Err(e) = do_login(request, set_auth_state).await {
                log::error!("Error signing in: {}", e);
                show_toast(toast, "Oops! Invalid credentials");
            }
            let _ = set_is_loading.try_set(false);
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
                <h2>"Sign in"</h2>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {error_for("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {error_for("password")}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"Don't have an account? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_sign_up.run(());
                    }>"Sign up"</a>
                </div>
            </div>
        </div>
    }
}
