use crate::dashboards::d400_overview::api::{self, OverviewStats};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn StatCard(title: &'static str, icon_name: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__title">{title}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}

/// Overview tab: who is signed in and what happened today
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (stats, set_stats) = signal(None::<OverviewStats>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let today = Local::now().date_naive();
            match api::get_overview(today, &Local).await {
                Ok(data) => {
                    let _ = set_stats.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load overview: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    load();

    let stat = move |pick: fn(&OverviewStats) -> usize| {
        Signal::derive(move || {
            stats
                .get()
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    let user = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Overview"</h1>
                    <span class="header__subtitle">{move || format!("Signed in as {}", user())}</span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| load()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard title="Vehicles" icon_name="car" value=stat(|s| s.vehicles) />
                <StatCard title="Cameras" icon_name="camera" value=stat(|s| s.cameras) />
                <StatCard title="Entries today" icon_name="chevron-right" value=stat(|s| s.today.entries) />
                <StatCard title="Exits today" icon_name="log-out" value=stat(|s| s.today.exits) />
            </div>
        </div>
    }
}
