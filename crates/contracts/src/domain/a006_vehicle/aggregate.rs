use serde::{Deserialize, Serialize};

use crate::domain::common::media::image_data_url;
use crate::domain::common::{AggregateId, AggregateRoot, FieldErrors};

crate::string_id!(
    /// Registered vehicle id
    VehicleId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Vehicle registered for number plate recognition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: VehicleId,

    pub name: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,

    /// Base64 encoded number plate images
    #[serde(rename = "vehicleImgUrl", default)]
    pub images: Vec<String>,
}

impl Vehicle {
    /// First plate image as a data URL
    pub fn image_url(&self) -> Option<String> {
        self.images.first().map(|b64| image_data_url(b64))
    }
}

impl AggregateRoot for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.vehicle_number
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "vehicles"
    }

    fn element_name() -> &'static str {
        "Vehicle"
    }

    fn list_name() -> &'static str {
        "Vehicles"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Add/edit vehicle form.
///
/// Sent as multipart form data together with the selected images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDto {
    #[serde(skip)]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
}

impl From<&Vehicle> for VehicleDto {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: Some(v.id.as_string()),
            name: v.name.clone(),
            phone_number: v.phone_number.clone(),
            vehicle_number: v.vehicle_number.clone(),
        }
    }
}

impl VehicleDto {
    /// Multipart text fields, in form order
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("vehicleNumber", self.vehicle_number.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Please enter your name");
        }

        let phone = self.phone_number.trim();
        if phone.is_empty() {
            errors.add("phoneNumber", "Please enter phone number");
        } else if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.add("phoneNumber", "Phone number must be exactly 10 digits");
        }

        let number = self.vehicle_number.trim();
        if number.is_empty() {
            errors.add("vehicleNumber", "Please enter vehicle number");
        } else if !is_valid_plate(number) {
            errors.add(
                "vehicleNumber",
                "Vehicle number must be in the format: 'XX00XX0000'",
            );
        }

        errors.into_result()
    }
}

/// Plate in the `XX00XX0000` layout, letters in either case
pub fn is_valid_plate(plate: &str) -> bool {
    let chars: Vec<char> = plate.chars().collect();
    if chars.len() != 10 {
        return false;
    }
    let letters = |range: std::ops::Range<usize>| chars[range].iter().all(|c| c.is_ascii_alphabetic());
    let digits = |range: std::ops::Range<usize>| chars[range].iter().all(|c| c.is_ascii_digit());

    letters(0..2) && digits(2..4) && letters(4..6) && digits(6..10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(name: &str, phone: &str, number: &str) -> VehicleDto {
        VehicleDto {
            id: None,
            name: name.into(),
            phone_number: phone.into(),
            vehicle_number: number.into(),
        }
    }

    #[test]
    fn test_plate_format() {
        assert!(is_valid_plate("MH12AB1234"));
        assert!(is_valid_plate("mh12ab1234"));
        assert!(!is_valid_plate("MH1AB12345"));
        assert!(!is_valid_plate("MH12AB123"));
    }

    #[test]
    fn test_valid_form() {
        assert!(dto("Motor Car", "9876543210", "KA01MX0042").validate().is_ok());
    }

    #[test]
    fn test_invalid_form() {
        let errors = dto(" ", "12345", "KA01MX004").validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Please enter your name"));
        assert_eq!(
            errors.get("phoneNumber"),
            Some("Phone number must be exactly 10 digits")
        );
        assert_eq!(
            errors.get("vehicleNumber"),
            Some("Vehicle number must be in the format: 'XX00XX0000'")
        );

        let errors = dto("Car", "", "").validate().unwrap_err();
        assert_eq!(errors.get("phoneNumber"), Some("Please enter phone number"));
        assert_eq!(errors.get("vehicleNumber"), Some("Please enter vehicle number"));
    }

    #[test]
    fn test_vehicle_image_url() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "_id": "v1",
            "name": "Motor Car",
            "phoneNumber": "9876543210",
            "vehicleNumber": "KA01MX0042",
            "vehicleImgUrl": ["QUJD"]
        }))
        .unwrap();
        assert_eq!(vehicle.image_url().as_deref(), Some("data:image/jpeg;base64,QUJD"));
        assert_eq!(Vehicle::item_path(&vehicle.id), "/vehicles/v1");
    }
}
