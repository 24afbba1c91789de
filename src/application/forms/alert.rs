use super::{Form, normalize_key, number_or_zero, pick_option};
use crate::application::filter::CITIES;
use crate::domain::{
    Alert, AlertDraft, AlertId, FuelType, Transmission, UserRef, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFormMode {
    Create,
    Edit(AlertId),
}

/// Create/edit alert dialog.
///
/// The create dialog offers pickers (brand, model, location, fuel, transmission) and only
/// accepts their options; the edit dialog takes free text.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertForm {
    pub mode: AlertFormMode,
    pub location: String,
    pub brand: String,
    pub model: String,
    pub year_min: String,
    pub year_max: String,
    pub price_min: String,
    pub price_max: String,
    pub mileage_max: String,
    pub fuel_type: String,
    pub transmission: String,
    pub has_defects: bool,
    pub active: bool,
}

impl AlertForm {
    pub fn create() -> Self {
        Self {
            mode: AlertFormMode::Create,
            location: String::new(),
            brand: String::new(),
            model: String::new(),
            year_min: String::new(),
            year_max: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            mileage_max: String::new(),
            fuel_type: String::new(),
            transmission: String::new(),
            has_defects: false,
            active: true,
        }
    }

    /// Edit dialog pre-filled from `alert`; zero bounds show as blank.
    pub fn edit(alert: &Alert) -> Self {
        fn blank_zero<T: PartialEq + Default + ToString>(value: T) -> String {
            if value == T::default() {
                String::new()
            } else {
                value.to_string()
            }
        }

        Self {
            mode: AlertFormMode::Edit(alert.id),
            location: alert.location.clone(),
            brand: alert.brand.clone(),
            model: alert.model.clone(),
            year_min: blank_zero(alert.year_min),
            year_max: blank_zero(alert.year_max),
            price_min: blank_zero(alert.price_min),
            price_max: blank_zero(alert.price_max),
            mileage_max: blank_zero(alert.mileage_max),
            fuel_type: alert.fuel_type.clone(),
            transmission: alert.transmission.clone(),
            has_defects: alert.has_defects,
            active: alert.active,
        }
    }

    pub fn is_create(&self) -> bool {
        self.mode == AlertFormMode::Create
    }

    /// Set the brand from the make picker. A different brand clears the model.
    pub fn set_brand(&mut self, value: &str, makes: &[String]) -> Result<(), ValidationError> {
        let brand = if self.is_create() && !value.trim().is_empty() {
            pick_option("Brand", value.trim(), makes)?
        } else {
            value.trim().to_string()
        };
        if brand != self.brand {
            self.model.clear();
        }
        self.brand = brand;
        Ok(())
    }

    /// Set the model from the model picker; free text when the brand has no known models.
    pub fn set_model(&mut self, value: &str, models: &[String]) -> Result<(), ValidationError> {
        self.model = if self.is_create() && !value.trim().is_empty() {
            pick_option("Model", value.trim(), models)?
        } else {
            value.trim().to_string()
        };
        Ok(())
    }

    /// Coerce the bounds to numbers (blank is zero) and build the request body.
    pub fn to_draft(&self, user: Option<UserRef>) -> Result<AlertDraft, ValidationError> {
        let year_min: i32 = number_or_zero("Year min", &self.year_min)?;
        let year_max: i32 = number_or_zero("Year max", &self.year_max)?;
        // A blank year max means no upper bound, so only a filled-in max can be inverted.
        if !self.year_max.trim().is_empty() && year_min > year_max {
            return Err(ValidationError::YearRangeInverted);
        }

        Ok(AlertDraft {
            location: self.location.trim().to_string(),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year_min,
            year_max,
            price_min: number_or_zero("Price min", &self.price_min)?,
            price_max: number_or_zero("Price max", &self.price_max)?,
            mileage_max: number_or_zero("Max mileage", &self.mileage_max)?,
            fuel_type: self.fuel_type.trim().to_string(),
            transmission: self.transmission.trim().to_string(),
            has_defects: self.has_defects,
            active: self.active,
            user,
        })
    }

    fn picker<T: std::str::FromStr + ToString>(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<String, ValidationError> {
        let value = value.trim();
        if !self.is_create() || value.is_empty() {
            return Ok(value.to_string());
        }
        value
            .parse::<T>()
            .map(|v| v.to_string())
            .map_err(|_| ValidationError::NotAnOption {
                field,
                value: value.to_string(),
            })
    }
}

impl Default for AlertForm {
    fn default() -> Self {
        Self::create()
    }
}

impl Form for AlertForm {
    /// Brand and model without option lists; see [`AlertForm::set_brand`].
    fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        match normalize_key(field).as_str() {
            "brand" => self.set_brand(value, &[])?,
            "model" => self.set_model(value, &[])?,
            "location" => {
                self.location = if self.is_create() && !value.trim().is_empty() {
                    let cities: Vec<String> = CITIES.iter().map(|c| c.to_string()).collect();
                    pick_option("Location", value.trim(), &cities)?
                } else {
                    value.trim().to_string()
                }
            }
            "year_min" => self.year_min = value.to_string(),
            "year_max" => self.year_max = value.to_string(),
            "price_min" => self.price_min = value.to_string(),
            "price_max" => self.price_max = value.to_string(),
            "mileage_max" | "mileage" => self.mileage_max = value.to_string(),
            "fuel" | "fuel_type" => self.fuel_type = self.picker::<FuelType>("Fuel type", value)?,
            "transmission" => {
                self.transmission = self.picker::<Transmission>("Transmission", value)?
            }
            _ => return Err(ValidationError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn toggle(&mut self, field: &str) -> Result<(), ValidationError> {
        match normalize_key(field).as_str() {
            "has_defects" | "defects" => self.has_defects = !self.has_defects,
            "active" => self.active = !self.active,
            _ => return Err(ValidationError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let check = |on: bool| if on { "[x]" } else { "[ ]" }.to_string();
        vec![
            ("brand", self.brand.clone()),
            ("model", self.model.clone()),
            ("location", self.location.clone()),
            ("year-min", self.year_min.clone()),
            ("year-max", self.year_max.clone()),
            ("price-min", self.price_min.clone()),
            ("price-max", self.price_max.clone()),
            ("mileage-max", self.mileage_max.clone()),
            ("fuel", self.fuel_type.clone()),
            ("transmission", self.transmission.clone()),
            ("has-defects", check(self.has_defects)),
            ("active", check(self.active)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_is_active_by_default() {
        let form = AlertForm::create();
        assert!(form.active);
        let draft = form.to_draft(Some(UserRef { id: 1 })).unwrap();
        assert_eq!(draft.year_min, 0);
        assert_eq!(draft.price_max, 0.0);
        assert!(draft.active);
    }

    #[test]
    fn inverted_year_range_blocks_submission() {
        let mut form = AlertForm::create();
        form.set("year-min", "2020").unwrap();
        form.set("year-max", "2015").unwrap();
        assert_eq!(form.to_draft(None), Err(ValidationError::YearRangeInverted));

        form.set("year-max", "").unwrap();
        assert!(form.to_draft(None).is_ok());
    }

    #[test]
    fn non_numeric_bound_is_an_error() {
        let mut form = AlertForm::create();
        form.set("price-max", "a lot").unwrap();
        assert_eq!(
            form.to_draft(None),
            Err(ValidationError::NotANumber { field: "Price max" })
        );
    }

    #[test]
    fn changing_brand_clears_model() {
        let makes = vec!["Peugeot".to_string(), "Fiat".to_string()];
        let mut form = AlertForm::create();
        form.set_brand("peugeot", &makes).unwrap();
        form.set_model("208", &[]).unwrap();
        form.set_brand("Peugeot", &makes).unwrap();
        assert_eq!(form.model, "208");
        form.set_brand("Fiat", &makes).unwrap();
        assert!(form.model.is_empty());
        assert!(form.set_brand("Lada", &makes).is_err());
        assert_eq!(form.brand, "Fiat");
    }

    #[test]
    fn edit_dialog_takes_free_text() {
        let alert: Alert = serde_json::from_str(
            r#"{"id": 4, "brand": "Fiat", "year_min": 0, "year_max": 2019, "fuel_type": "diesel", "active": false}"#,
        )
        .unwrap();
        let mut form = AlertForm::edit(&alert);
        assert_eq!(form.mode, AlertFormMode::Edit(4));
        assert_eq!(form.year_min, "");
        assert_eq!(form.year_max, "2019");
        assert!(!form.active);

        form.set("fuel", "LPG").unwrap();
        form.set("location", "Paris").unwrap();
        assert_eq!(form.fuel_type, "LPG");

        let mut create = AlertForm::create();
        assert!(create.set("fuel", "LPG").is_err());
        assert!(create.set("location", "Paris").is_err());
    }

    #[test]
    fn toggles_flags() {
        let mut form = AlertForm::create();
        form.toggle("has-defects").unwrap();
        form.toggle("active").unwrap();
        assert!(form.has_defects);
        assert!(!form.active);
        assert!(form.toggle("brand").is_err());
    }
}
