use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{entities::Port, value_objects::PortId};

/// Wire representation of a port, shared by the REST API and seed documents.
///
/// Every field is optional on input and empty values are omitted on output.
/// Unknown fields (`alias`, `regions`, `timezone`, `unlocs`, `code` in seed
/// files) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortDto {
    /// City of the port
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    /// Latitude/longitude pair
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<f64>,
    /// Country of the port
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// Name of the port
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Province of the port
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub province: String,
}

impl From<Port> for PortDto {
    fn from(port: Port) -> Self {
        Self {
            city: port.city().to_string(),
            coordinates: port.coordinates().to_vec(),
            country: port.country().to_string(),
            name: port.name().to_string(),
            province: port.province().to_string(),
        }
    }
}

impl From<PortDto> for Port {
    fn from(dto: PortDto) -> Self {
        Port::reconstruct(dto.name, dto.city, dto.country, dto.province, dto.coordinates)
    }
}

/// A decoded seed entry: the document key paired with its record body
#[derive(Debug, Clone, PartialEq)]
pub struct PortRecord {
    pub id: PortId,
    pub port: Port,
}

impl PortRecord {
    pub fn new(id: PortId, port: Port) -> Self {
        Self { id, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_fields_are_omitted() {
        let dto = PortDto::from(Port::new("name", "", vec![]));

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value, json!({ "name": "name" }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dto: PortDto = serde_json::from_value(json!({
            "name": "Ajman",
            "city": "Ajman",
            "country": "United Arab Emirates",
            "alias": [],
            "regions": [],
            "coordinates": [55.5136433, 25.4052165],
            "province": "Ajman",
            "timezone": "Asia/Dubai",
            "unlocs": ["AEAJM"],
            "code": "52000"
        }))
        .unwrap();

        assert_eq!(dto.name, "Ajman");
        assert_eq!(dto.coordinates, vec![55.5136433, 25.4052165]);
    }

    #[test]
    fn test_conversion_keeps_values_verbatim() {
        let dto = PortDto {
            city: "city".to_string(),
            coordinates: vec![1.0, 2.0, 3.0],
            country: "country".to_string(),
            name: "name".to_string(),
            province: "province".to_string(),
        };

        let port: Port = dto.clone().into();

        assert_eq!(port.coordinates(), &[1.0, 2.0, 3.0]);
        assert_eq!(PortDto::from(port), dto);
    }
}
