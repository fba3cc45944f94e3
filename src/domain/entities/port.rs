use crate::domain::errors::DomainError;

/// Port entity - a named location with geographic coordinates.
///
/// The identifier is not part of the entity: it is supplied by the caller
/// (URL path segment or seed document key) and used as the storage key.
///
/// Values are kept verbatim. Seed records are stored as decoded, so an
/// entity may hold empty fields; [`Port::validate`] is applied to client
/// input only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Port {
    name: String,
    city: String,
    country: String,
    province: String,
    coordinates: Vec<f64>,
}

impl Port {
    pub fn new(name: impl Into<String>, country: impl Into<String>, coordinates: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            coordinates,
            ..Self::default()
        }
    }

    /// Reconstruct from already decoded fields
    pub fn reconstruct(
        name: String,
        city: String,
        country: String,
        province: String,
        coordinates: Vec<f64>,
    ) -> Self {
        Self {
            name,
            city,
            country,
            province,
            coordinates,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    /// Check client supplied data.
    ///
    /// Rules are checked in a fixed order and the first failure wins:
    /// name, coordinates presence, coordinates arity, country. City and
    /// province may be empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::Validation(
                "port's name can not be empty".to_string(),
            ));
        }

        if self.coordinates.is_empty() {
            return Err(DomainError::Validation(
                "port's coordinates can not be empty".to_string(),
            ));
        }

        if self.coordinates.len() != 2 {
            return Err(DomainError::Validation(
                "port's coordinates should have only 2 values".to_string(),
            ));
        }

        if self.country.is_empty() {
            return Err(DomainError::Validation(
                "port's country can not be empty".to_string(),
            ));
        }

        Ok(())
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
}
