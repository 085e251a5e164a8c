use super::model;
use contracts::domain::a006_vehicle::{VehicleDto, VehicleId};
use contracts::domain::common::media::format_bytes;
use contracts::domain::common::FieldErrors;
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::FileList;

/// Image shown next to the upload control
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePreview {
    pub src: Option<String>,
    pub name: String,
    pub size: String,
}

/// ViewModel for the vehicle form
#[derive(Clone, Copy)]
pub struct VehicleDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub vehicle_number: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub preview: RwSignal<Option<ImagePreview>>,
    pub is_saving: RwSignal<bool>,
}

impl VehicleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            vehicle_number: RwSignal::new(String::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            preview: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    fn apply(&self, dto: VehicleDto) {
        let _ = self.id.try_set(dto.id);
        let _ = self.name.try_set(dto.name);
        let _ = self.phone_number.try_set(dto.phone_number);
        let _ = self.vehicle_number.try_set(dto.vehicle_number);
    }

    pub fn build_save_dto(&self) -> VehicleDto {
        VehicleDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            phone_number: self.phone_number.get_untracked().trim().to_string(),
            vehicle_number: self.vehicle_number.get_untracked().trim().to_string(),
        }
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.with(|e| e.get(field).map(str::to_string))
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        let preview = self.preview;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&VehicleId::new(existing_id)).await {
                Ok(vehicle) => {
                    let image = vehicle.images.first().map(|b64| ImagePreview {
                        src: vehicle.image_url(),
                        name: "vehicleImage.jpg".to_string(),
                        size: format_bytes(b64.len() as u64),
                    });
                    let _ = preview.try_set(image);
                    vm.apply(VehicleDto::from(&vehicle));
                }
                Err(e) => {
                    log::error!("Error fetching vehicle details: {}", e);
                    let _ = error.try_set(Some("Error occurred fetching vehicle details.".to_string()));
                }
            }
        });
    }

    /// A new file was picked in the upload control
    pub fn file_selected(&self, files: Option<FileList>) {
        let chosen = files.and_then(|list| list.item(0)).map(|file| ImagePreview {
            src: None,
            name: file.name(),
            size: format_bytes(file.size() as u64),
        });
        self.preview.set(chosen);
    }

    /// Save form data to server
    pub fn save_command(&self, files: Option<FileList>, on_saved: Rc<dyn Fn(())>) {
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
            let result = model::save_form(&current, files).await;
            let _ = is_saving.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("Vehicle {} saved", current.vehicle_number);
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("Error saving vehicle: {}", e);
                    let _ = error.try_set(Some(format!("Error: {}", e)));
                }
            }
        });
    }
}

impl Default for VehicleDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
