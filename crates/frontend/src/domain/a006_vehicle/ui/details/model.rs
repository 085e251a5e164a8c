use contracts::domain::a006_vehicle::{Vehicle, VehicleDto, VehicleId};
use contracts::domain::common::AggregateRoot;
use web_sys::{FileList, FormData};

use crate::shared::api::{self, Method};

pub async fn fetch_by_id(id: &VehicleId) -> Result<Vehicle, String> {
    api::get_json::<Vehicle>(&Vehicle::item_path(id)).await
}

fn build_form_data(dto: &VehicleDto, files: Option<&FileList>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;

    if let Some(files) = files {
        for index in 0..files.length() {
            if let Some(file) = files.item(index) {
                form.append_with_blob("images", &file)
                    .map_err(|e| format!("Failed to attach image: {:?}", e))?;
            }
        }
    }
    for (name, value) in dto.form_fields() {
        form.append_with_str(name, value)
            .map_err(|e| format!("Failed to add field {}: {:?}", name, e))?;
    }

    Ok(form)
}

/// Register a new vehicle or update an existing one, images included
pub async fn save_form(dto: &VehicleDto, files: Option<FileList>) -> Result<(), String> {
    let form = build_form_data(dto, files.as_ref())?;
    match &dto.id {
        Some(id) => {
            let id = VehicleId::new(id.as_str());
            api::send_form(Method::Put, &Vehicle::item_path(&id), form).await
        }
        None => {
            let path = format!("{}/register", Vehicle::collection_path());
            api::send_form(Method::Post, &path, form).await
        }
    }
}
