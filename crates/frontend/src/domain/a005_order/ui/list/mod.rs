use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, title_for_key};
use crate::shared::api;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use contracts::domain::a005_order::Order;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderListRow {
    pub id: String,
    pub created_at: String,
    pub requester: String,
    pub status: String,
    pub address: String,
    pub lines: usize,
    pub total_quantity: i64,
}

impl From<Order> for OrderListRow {
    fn from(o: Order) -> Self {
        Self {
            id: o.id.as_string(),
            created_at: format_optional_date(o.created_at.as_deref()),
            requester: o.request_from.employee_name.clone(),
            status: o.order_status.label().to_string(),
            address: o.address.address_details.clone(),
            lines: o.product.len(),
            total_quantity: o.total_quantity(),
        }
    }
}

async fn fetch_orders() -> Result<Vec<Order>, String> {
    api::get_list::<Order>(&Order::collection_path()).await
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<OrderListRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_orders().await {
                Ok(v) => {
                    let rows: Vec<OrderListRow> = v.into_iter().map(Into::into).collect();
                    let _ = set_items.try_set(rows);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Error fetching orders: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    // Reload initially and whenever a details tab saves
    Effect::new(move |_| {
        ctx.saved_version.track();
        fetch();
    });

    let open_details = move |id: Option<String>| {
        let key = detail_tab_key("a005_order", id.as_deref());
        ctx.open_tab(&key, &title_for_key(&key));
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Order::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New order"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Request from"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Lines"</th>
                            <th class="table__header-cell">"Total qty"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(Some(id.clone()))>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">{row.requester}</td>
                                    <td class="table__cell">{row.status}</td>
                                    <td class="table__cell">{row.address}</td>
                                    <td class="table__cell">{row.lines}</td>
                                    <td class="table__cell">{row.total_quantity}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
