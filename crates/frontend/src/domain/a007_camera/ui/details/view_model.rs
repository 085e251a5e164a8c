use super::model;
use contracts::domain::a007_camera::{CameraDto, CameraId};
use contracts::domain::common::FieldErrors;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CameraDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub camera_name: RwSignal<String>,
    pub camera_location: RwSignal<String>,
    pub rtsp_url: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl CameraDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            camera_name: RwSignal::new(String::new()),
            camera_location: RwSignal::new(String::new()),
            rtsp_url: RwSignal::new(String::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Fill the form from a loaded record; no-op once the tab is closed
    fn apply(&self, dto: CameraDto) {
        let _ = self.id.try_set(dto.id);
        let _ = self.camera_name.try_set(dto.camera_name);
        let _ = self.camera_location.try_set(dto.camera_location);
        let _ = self.rtsp_url.try_set(dto.rtsp_url);
    }

    pub fn build_save_dto(&self) -> CameraDto {
        CameraDto {
            id: self.id.get_untracked(),
            camera_name: self.camera_name.get_untracked().trim().to_string(),
            camera_location: self.camera_location.get_untracked().trim().to_string(),
            rtsp_url: self.rtsp_url.get_untracked().trim().to_string(),
        }
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.with(|e| e.get(field).map(str::to_string))
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&CameraId::new(existing_id)).await {
                Ok(camera) => {
                    vm.apply(CameraDto::from(&camera));
                }
                Err(e) => {
                    log::error!("Error fetching camera details: {}", e);
                    let _ = error.try_set(Some("Error occurred fetching camera details.".to_string()));
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.is_saving.get_untracked() {
            return;
        }

        let current = self.build_save_dto();
        if let Err(errors) = current.validate() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);

        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            let _ = is_saving.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("Camera {} saved", current.camera_name);
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("Error saving camera: {}", e);
                    let _ = error.try_set(Some(format!("Error: {}", e)));
                }
            }
        });
    }
}

impl Default for CameraDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
