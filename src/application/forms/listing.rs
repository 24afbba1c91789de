use super::{Form, normalize_key, parse_number, required};
use crate::application::filter::MIN_YEAR;
use crate::domain::{
    FuelType, ImageUpload, Listing, ListingDraft, Transmission, UserRef, ValidationError,
};

/// Create/edit listing form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub location: String,
    pub price: String,
    pub year: String,
    pub mileage: String,
    pub transmission: String,
    pub description: String,
    /// Files attached on create; edit does not upload images.
    pub images: Vec<ImageUpload>,
}

impl ListingForm {
    /// Form pre-filled from an existing listing.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            brand: listing.brand.clone(),
            model: listing.model.clone(),
            fuel_type: listing.fuel_type.clone(),
            location: listing.location.clone(),
            price: listing.price.to_string(),
            year: listing.year.to_string(),
            mileage: listing.mileage.to_string(),
            transmission: listing.transmission.clone(),
            description: listing.description.clone(),
            images: Vec::new(),
        }
    }

    pub fn attach(&mut self, image: ImageUpload) {
        self.images.push(image);
    }

    /// Validate and convert into a request body. `user` is attached on create only.
    pub fn to_draft(
        &self,
        user: Option<UserRef>,
        current_year: i32,
    ) -> Result<ListingDraft, ValidationError> {
        let brand = required("Brand", &self.brand)?;
        let model = required("Model", &self.model)?;

        let year: i32 = parse_number("Year", required("Year", &self.year)?)?;
        if !(MIN_YEAR..=current_year).contains(&year) {
            return Err(ValidationError::OutOfRange {
                field: "Year",
                min: MIN_YEAR as i64,
                max: current_year as i64,
            });
        }

        let price: f64 = parse_number("Price", required("Price", &self.price)?)?;
        if !price.is_finite() {
            return Err(ValidationError::NotANumber { field: "Price" });
        }
        if price < 0.0 {
            return Err(ValidationError::Negative { field: "Price" });
        }

        let mileage: i64 = parse_number("Mileage", required("Mileage", &self.mileage)?)?;
        if mileage < 0 {
            return Err(ValidationError::Negative { field: "Mileage" });
        }

        let location = required("Location", &self.location)?;

        Ok(ListingDraft {
            brand: brand.to_string(),
            model: model.to_string(),
            fuel_type: self.fuel_type.clone(),
            location: location.to_string(),
            price,
            year,
            mileage,
            transmission: self.transmission.clone(),
            description: self.description.trim().to_string(),
            user,
        })
    }
}

impl Form for ListingForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        match normalize_key(field).as_str() {
            "brand" => self.brand = value.to_string(),
            "model" => self.model = value.to_string(),
            "year" => self.year = value.to_string(),
            "price" => self.price = value.to_string(),
            "mileage" => self.mileage = value.to_string(),
            "location" => self.location = value.to_string(),
            "description" => self.description = value.to_string(),
            "fuel" | "fuel_type" | "fueltype" => {
                self.fuel_type = if value.trim().is_empty() {
                    String::new()
                } else {
                    value
                        .parse::<FuelType>()
                        .map_err(|_| ValidationError::NotAnOption {
                            field: "Fuel type",
                            value: value.to_string(),
                        })?
                        .to_string()
                };
            }
            "transmission" => {
                self.transmission = if value.trim().is_empty() {
                    String::new()
                } else {
                    value
                        .parse::<Transmission>()
                        .map_err(|_| ValidationError::NotAnOption {
                            field: "Transmission",
                            value: value.to_string(),
                        })?
                        .to_string()
                };
            }
            _ => return Err(ValidationError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("brand", self.brand.clone()),
            ("model", self.model.clone()),
            ("year", self.year.clone()),
            ("price", self.price.clone()),
            ("mileage", self.mileage.clone()),
            ("location", self.location.clone()),
            ("fuel", self.fuel_type.clone()),
            ("transmission", self.transmission.clone()),
            ("description", self.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ListingForm {
        let mut form = ListingForm::default();
        for (field, value) in [
            ("brand", "Renault"),
            ("model", "Clio"),
            ("year", "2021"),
            ("price", "129000.50"),
            ("mileage", "40000"),
            ("location", "Tanger"),
            ("fuel", "Diesel"),
            ("transmission", "manual"),
        ] {
            form.set(field, value).unwrap();
        }
        form
    }

    #[test]
    fn converts_numbers_and_attaches_owner() {
        let draft = filled().to_draft(Some(UserRef { id: 5 }), 2025).unwrap();
        assert_eq!(draft.year, 2021);
        assert_eq!(draft.price, 129000.5);
        assert_eq!(draft.mileage, 40000);
        assert_eq!(draft.fuel_type, "diesel");
        assert_eq!(draft.user, Some(UserRef { id: 5 }));
    }

    #[test]
    fn year_must_be_in_range() {
        let mut form = filled();
        form.set("year", "1989").unwrap();
        assert_eq!(
            form.to_draft(None, 2025),
            Err(ValidationError::OutOfRange {
                field: "Year",
                min: 1990,
                max: 2025
            })
        );
        form.set("year", "2026").unwrap();
        assert!(form.to_draft(None, 2025).is_err());
    }

    #[test]
    fn missing_and_negative_values_are_rejected() {
        let mut form = filled();
        form.set("location", " ").unwrap();
        assert_eq!(
            form.to_draft(None, 2025),
            Err(ValidationError::Required { field: "Location" })
        );

        let mut form = filled();
        form.set("mileage", "-1").unwrap();
        assert_eq!(
            form.to_draft(None, 2025),
            Err(ValidationError::Negative { field: "Mileage" })
        );

        let mut form = filled();
        form.set("price", "12.5.3").unwrap();
        assert_eq!(
            form.to_draft(None, 2025),
            Err(ValidationError::NotANumber { field: "Price" })
        );
    }

    #[test]
    fn select_fields_only_take_known_values() {
        let mut form = filled();
        assert!(form.set("fuel", "steam").is_err());
        assert!(form.set("transmission", "sequential").is_err());
        assert_eq!(form.fuel_type, "diesel");
        form.set("transmission", "CVT").unwrap();
        assert_eq!(form.transmission, "cvt");
    }

    #[test]
    fn prefills_from_listing() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": 3, "brand": "Kia", "model": "Picanto", "price": 60000, "year": 2017, "mileage": 88000}"#,
        )
        .unwrap();
        let form = ListingForm::from_listing(&listing);
        assert_eq!(form.price, "60000");
        assert_eq!(form.year, "2017");
    }
}
