use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, title_for_key};
use crate::shared::api;
use crate::shared::icons::icon;
use crate::shared::toast::{show_toast, Toast};
use contracts::domain::a007_camera::{Camera, CameraId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CameraListRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rtsp_url: String,
}

impl From<Camera> for CameraListRow {
    fn from(c: Camera) -> Self {
        Self {
            id: c.id.as_string(),
            name: c.camera_name,
            location: c.camera_location,
            rtsp_url: c.rtsp_url,
        }
    }
}

async fn fetch_cameras() -> Result<Vec<Camera>, String> {
    api::get_list::<Camera>(&Camera::collection_path()).await
}

async fn delete_camera(id: &str) -> Result<(), String> {
    api::delete(&Camera::item_path(&CameraId::new(id))).await
}

#[component]
#[allow(non_snake_case)]
pub fn CameraList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<CameraListRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let toast = RwSignal::new(None::<String>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_cameras().await {
                Ok(v) => {
                    let rows: Vec<CameraListRow> = v.into_iter().map(Into::into).collect();
                    let _ = set_items.try_set(rows);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Error fetching cameras: {}", e);
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
        let key = detail_tab_key("a007_camera", id.as_deref());
        ctx.open_tab(&key, &title_for_key(&key));
    };

    let delete_row = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete camera {}?", name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_camera(&id).await {
                Ok(()) => {
                    let _ = set_items.try_update(|rows| rows.retain(|r| r.id != id));
                    show_toast(toast, "Camera deleted successfully");
                }
                Err(e) => {
                    log::error!("Error deleting camera {}: {}", id, e);
                    show_toast(toast, format!("Failed to delete camera: {}", e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Camera::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Add camera"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"RTSP URL"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let name = row.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell table__cell--mono">{row.rtsp_url}</td>
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
                                            on:click=move |_| delete_row(delete_id.clone(), name.clone())
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
