use contracts::domain::a007_camera::{Camera, CameraDto, CameraId};
use contracts::domain::common::AggregateRoot;

use crate::shared::api::{self, Method};

pub async fn fetch_by_id(id: &CameraId) -> Result<Camera, String> {
    api::get_json::<Camera>(&Camera::item_path(id)).await
}

pub async fn save_form(dto: &CameraDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => api::send_json(Method::Put, &Camera::item_path(&CameraId::new(id.as_str())), dto).await,
        None => {
            let path = format!("{}/register", Camera::collection_path());
            api::send_json(Method::Post, &path, dto).await
        }
    }
}
