//! Access log list
//!
//! Polls `GET /logs` while mounted. A tick is skipped when the previous
//! request has not returned yet.

use crate::shared::api;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::toast::{show_toast, Toast};
use contracts::domain::a008_access_log::{AccessLog, AccessLogId, EntryType};
use contracts::domain::common::{AggregateId, AggregateRoot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct AccessLogRow {
    pub id: String,
    pub plate: String,
    pub entry_type: EntryType,
    pub camera_location: String,
    pub created: String,
    pub snapshot: Option<String>,
}

impl From<AccessLog> for AccessLogRow {
    fn from(log: AccessLog) -> Self {
        Self {
            id: log.id.as_string(),
            plate: log.plate_display(),
            entry_type: log.entry_type,
            created: log.created_display(),
            snapshot: log.snapshot_url(),
            camera_location: log.camera_location,
        }
    }
}

async fn fetch_logs() -> Result<Vec<AccessLog>, String> {
    api::get_list::<AccessLog>(&AccessLog::collection_path()).await
}

async fn delete_log(id: &str) -> Result<(), String> {
    api::delete(&AccessLog::item_path(&AccessLogId::new(id))).await
}

/// Single-flight flag shared by the poll loop and the refresh button
#[derive(Clone, Default)]
struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// False when a request is already running
    fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    fn finish(&self) {
        self.0.set(false);
    }
}

/// One refresh; returns immediately if another is still in flight
async fn refresh(
    in_flight: InFlight,
    set_items: WriteSignal<Vec<AccessLogRow>>,
    set_error: WriteSignal<Option<String>>,
) {
    if !in_flight.try_begin() {
        return;
    }
    let result = fetch_logs().await;
    in_flight.finish();

    match result {
        Ok(logs) => {
            let rows: Vec<AccessLogRow> = logs.into_iter().map(Into::into).collect();
            let _ = set_items.try_set(rows);
            let _ = set_error.try_set(None);
        }
        Err(e) => {
            log::error!("Error fetching access logs: {}", e);
            let _ = set_error.try_set(Some(e));
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccessLogList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<AccessLogRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let toast = RwSignal::new(None::<String>);

    let in_flight = InFlight::default();
    // disposed with the component, which ends the poll loop
    let alive = StoredValue::new(());
    let interval_ms = config().logs.refresh_interval_ms;

    {
        let in_flight = in_flight.clone();
        wasm_bindgen_futures::spawn_local(async move {
            while !alive.is_disposed() {
                refresh(in_flight.clone(), set_items, set_error).await;
                TimeoutFuture::new(interval_ms).await;
            }
            log::debug!("Access log polling stopped");
        });
    }

    let refresh_now = move |_| {
        let in_flight = in_flight.clone();
        wasm_bindgen_futures::spawn_local(refresh(in_flight, set_items, set_error));
    };

    let delete_row = move |id: String, plate: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete log entry for {}?", plate))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_log(&id).await {
                Ok(()) => {
                    let _ = set_items.try_update(|rows| rows.retain(|r| r.id != id));
                    show_toast(toast, "Log deleted successfully");
                }
                Err(e) => {
                    log::error!("Error deleting log {}: {}", id, e);
                    show_toast(toast, format!("Failed to delete log: {}", e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{AccessLog::list_name()}</h1>
                    <span class="header__subtitle">{move || format!("{} records", items.with(Vec::len))}</span>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=refresh_now>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Toast toast=toast />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Snapshot"</th>
                            <th class="table__header-cell">"Number plate"</th>
                            <th class="table__header-cell">"Entry type"</th>
                            <th class="table__header-cell">"Camera location"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let delete_id = row.id.clone();
                                let plate = row.plate.clone();
                                let badge = match row.entry_type {
                                    EntryType::In => "badge badge--success",
                                    EntryType::Out => "badge badge--warning",
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            {match row.snapshot {
                                                Some(src) => view! { <img class="table__thumb" src=src alt="Camera snapshot" /> }.into_any(),
                                                None => view! { <span class="table__muted">"-"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="table__cell">{row.plate}</td>
                                        <td class="table__cell"><span class=badge>{row.entry_type.label()}</span></td>
                                        <td class="table__cell">{row.camera_location}</td>
                                        <td class="table__cell">{row.created}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |_| delete_row(delete_id.clone(), plate.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_skips_overlapping_refresh() {
        let in_flight = InFlight::default();
        let button = in_flight.clone();
        assert!(in_flight.try_begin());
        assert!(!button.try_begin());
        in_flight.finish();
        assert!(button.try_begin());
    }
}
