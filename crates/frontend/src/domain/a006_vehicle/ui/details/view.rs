use super::view_model::VehicleDetailsViewModel;
use crate::shared::icons::icon;
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::Input;

#[component]
pub fn VehicleDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = VehicleDetailsViewModel::new();
    vm.load_if_needed(id);

    let file_input: NodeRef<html::Input> = NodeRef::new();
    let selected_files = move || file_input.get_untracked().and_then(|input| input.files());

    let error_line = move |field: &'static str| {
        move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })
    };

    view! {
        <div class="details-container vehicle-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit vehicle" } else { "Add vehicle" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form__group">
                    <label class="form__label">"Name"</label>
                    <Input value=vm.name placeholder="Owner name" />
                    {error_line("name")}
                </div>

                <div class="form__group">
                    <label class="form__label">"Phone number"</label>
                    <Input value=vm.phone_number placeholder="10 digits" />
                    {error_line("phoneNumber")}
                </div>

                <div class="form__group">
                    <label class="form__label">"Vehicle number"</label>
                    <Input value=vm.vehicle_number placeholder="XX00XX0000" />
                    {error_line("vehicleNumber")}
                </div>

                <div class="form__group">
                    <label class="form__label" for="images">"Number plate image"</label>
                    <input
                        type="file"
                        id="images"
                        accept="image/*"
                        node_ref=file_input
                        on:change=move |_| vm.file_selected(selected_files())
                    />
                    {move || vm.preview.get().map(|p| view! {
                        <div class="upload-preview">
                            {p.src.map(|src| view! { <img class="upload-preview__img" src=src alt=p.name.clone() /> })}
                            <span class="upload-preview__name">{p.name.clone()}</span>
                            <span class="upload-preview__size">{p.size}</span>
                        </div>
                    })}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(selected_files(), on_saved.clone())
                    }
                    disabled=move || vm.is_saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update" } else { "Save" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
