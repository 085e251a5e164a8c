use super::view_model::CameraDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CameraDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CameraDetailsViewModel::new();
    vm.load_if_needed(id);
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    let error_line = move |field: &'static str| {
        move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })
    };

    view! {
        <div class="details-form" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                <h2 style="font-size: 20px; font-weight: bold;">
                    {move || if vm.is_edit_mode() { "Edit camera" } else { "Add camera" }}
                </h2>
                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved.get_value())
                        disabled=move || vm.is_saving.get()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Update" } else { " Save" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.with_value(|f| f(()))>
                        {icon("cancel")}
                        " Cancel"
                    </button>
                </div>
            </Flex>

            {move || vm.error.get().map(|e| view! {
                <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                    <span style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Space vertical=true>
                <div class="form__group">
                    <label class="form__label">
                        "Camera name"
                        <span style="color: red;">"*"</span>
                    </label>
                    <Input value=vm.camera_name placeholder="Gate 1" />
                    {error_line("cameraName")}
                </div>

                <div class="form__group">
                    <label class="form__label">
                        "Camera location"
                        <span style="color: red;">"*"</span>
                    </label>
                    <Input value=vm.camera_location placeholder="Main entrance" />
                    {error_line("cameraLocation")}
                </div>

                <div class="form__group">
                    <label class="form__label">
                        "RTSP URL"
                        <span style="color: red;">"*"</span>
                    </label>
                    <Input value=vm.rtsp_url placeholder="rtsp://host:554/stream" />
                    <div style="font-size: 12px; color: var(--colorNeutralForeground3);">
                        "rtsp, rtsps, http or https"
                    </div>
                    {error_line("rtspUrl")}
                </div>
            </Space>
        </div>
    }
}
