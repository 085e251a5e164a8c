use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, title_for_key};
use crate::shared::api;
use crate::shared::icons::icon;
use crate::shared::toast::{show_toast, Toast};
use contracts::domain::a006_vehicle::{Vehicle, VehicleId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct VehicleListRow {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub vehicle_number: String,
    pub image: Option<String>,
}

impl From<Vehicle> for VehicleListRow {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id.as_string(),
            image: v.image_url(),
            name: v.name,
            phone_number: v.phone_number,
            vehicle_number: v.vehicle_number,
        }
    }
}

async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    api::get_list::<Vehicle>(&Vehicle::collection_path()).await
}

async fn delete_vehicle(id: &str) -> Result<(), String> {
    api::delete(&Vehicle::item_path(&VehicleId::new(id))).await
}

#[component]
#[allow(non_snake_case)]
pub fn VehicleList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<VehicleListRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let toast = RwSignal::new(None::<String>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_vehicles().await {
                Ok(v) => {
                    let rows: Vec<VehicleListRow> = v.into_iter().map(Into::into).collect();
                    let _ = set_items.try_set(rows);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Error fetching vehicles: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.saved_version.track();
        fetch();
    });

    let open_details = move |id: Option<String>| {
        let key = detail_tab_key("a006_vehicle", id.as_deref());
        ctx.open_tab(&key, &title_for_key(&key));
    };

    let delete_row = move |id: String, plate: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete vehicle {}?", plate))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_vehicle(&id).await {
                Ok(()) => {
                    let _ = set_items.try_update(|rows| rows.retain(|r| r.id != id));
                    show_toast(toast, "Vehicle deleted successfully");
                }
                Err(e) => {
                    log::error!("Error deleting vehicle {}: {}", id, e);
                    show_toast(toast, format!("Failed to delete vehicle: {}", e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Vehicle::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Add vehicle"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
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
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Phone number"</th>
                            <th class="table__header-cell">"Vehicle number"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let plate = row.vehicle_number.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        {match row.image {
                                            Some(src) => view! { <img class="table__thumb" src=src alt="Number plate" /> }.into_any(),
                                            None => view! { <span class="table__muted">"-"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.phone_number}</td>
                                    <td class="table__cell">{row.vehicle_number}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_details(Some(edit_id.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
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
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
