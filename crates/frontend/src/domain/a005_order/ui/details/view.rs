use super::view_model::OrderDetailsViewModel;
use crate::shared::components::Select;
use crate::shared::icons::icon;
use contracts::domain::a005_order::NoticeKind;
use leptos::prelude::*;
use std::rc::Rc;
use uuid::Uuid;

#[component]
pub fn OrderDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(id);
    vm.load();

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit order" } else { "New order" }}</h3>
            </div>

            {move || vm.notice().map(|notice| {
                let class = match notice.kind {
                    NoticeKind::OutOfStock | NoticeKind::BusinessRule => "toast toast--warning",
                    NoticeKind::LoadFailed | NoticeKind::SubmitFailed => "toast toast--error",
                };
                view! {
                    <div class=class role="alert">
                        <span class="toast__text">{notice.message}</span>
                        <button class="toast__close" on:click=move |_| vm.dismiss_notice()>
                            {icon("x")}
                        </button>
                    </div>
                }
            })}

            <div class="details-form">
                <div class="form-row">
                    <Select
                        label="Request from"
                        id="request_from"
                        placeholder="Select requester"
                        value=Signal::derive(move || vm.requester_value())
                        options=Signal::derive(move || vm.requester_options())
                        on_change=Callback::new(move |v| vm.select_requester(v))
                        error=Signal::derive(move || vm.field_error("requester"))
                    />
                    <Select
                        label="Order status"
                        id="order_status"
                        placeholder="Select status"
                        value=Signal::derive(move || vm.status_value())
                        options=OrderDetailsViewModel::status_options()
                        on_change=Callback::new(move |v| vm.set_status(v))
                        error=Signal::derive(move || vm.field_error("status"))
                    />
                    <Select
                        label="Address"
                        id="address"
                        placeholder="Select address"
                        value=Signal::derive(move || vm.address_value())
                        options=Signal::derive(move || vm.address_options())
                        on_change=Callback::new(move |v| vm.set_address(v))
                        error=Signal::derive(move || vm.field_error("address"))
                    />
                </div>

                <div class="table">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Order type"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || vm.row_keys()
                                key=|key| *key
                                children=move |key: Uuid| view! { <OrderRowEditor vm=vm row_key=key /> }
                            />
                        </tbody>
                    </table>
                </div>
                {move || vm.field_error("rows").map(|e| view! { <div class="form__error">{e}</div> })}

                <button class="button button--secondary" on:click=move |_| vm.add_row()>
                    {icon("plus")}
                    "Add product"
                </button>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || vm.is_saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update" } else { "Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
fn OrderRowEditor(vm: OrderDetailsViewModel, row_key: Uuid) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell">
                <Select
                    placeholder="Select product"
                    value=Signal::derive(move || vm.row_product_value(row_key))
                    options=Signal::derive(move || vm.product_options())
                    on_change=Callback::new(move |v| vm.set_product(row_key, v))
                />
            </td>
            <td class="table__cell">
                <input
                    type="number"
                    class="form__input"
                    min="0"
                    max=move || vm.row_max_quantity(row_key)
                    prop:value=move || vm.row_quantity_value(row_key)
                    on:input=move |ev| vm.set_quantity(row_key, event_target_value(&ev))
                />
            </td>
            <td class="table__cell">
                <Select
                    placeholder="Select order type"
                    value=Signal::derive(move || vm.row_order_type_value(row_key))
                    options=OrderDetailsViewModel::order_type_options()
                    on_change=Callback::new(move |v| vm.set_order_type(row_key, v))
                />
            </td>
            <td class="table__cell">
                <button
                    class="button button--icon"
                    title="Remove row"
                    on:click=move |_| vm.remove_row(row_key)
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
        {move || vm.row_error(row_key).map(|e| view! {
            <tr class="table__row table__row--error">
                <td class="table__cell" colspan="4">
                    <div class="form__error">{e}</div>
                </td>
            </tr>
        })}
    }
}
