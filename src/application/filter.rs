//! Client-side filtering of the fetched listing collection.

use super::forms::pick_option;
use crate::domain::{Listing, ValidationError};
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// Oldest model year offered by the year pickers.
pub const MIN_YEAR: i32 = 1990;

/// Cities offered by the location picker.
pub const CITIES: [&str; 34] = [
    "Casablanca",
    "Rabat",
    "Fès",
    "Marrakech",
    "Agadir",
    "Tanger",
    "Meknès",
    "Oujda",
    "Kenitra",
    "Tetouan",
    "Safi",
    "El Jadida",
    "Beni Mellal",
    "Nador",
    "Khouribga",
    "Khemisset",
    "Taza",
    "Settat",
    "Berrechid",
    "Ouarzazate",
    "Larache",
    "Guelmim",
    "Mohammedia",
    "Errachidia",
    "Sidi Kacem",
    "Sidi Slimane",
    "Sidi Bennour",
    "Taourirt",
    "Essaouira",
    "Azrou",
    "Ifrane",
    "Al Hoceima",
    "Dakhla",
    "Laayoune",
];

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Year picker options, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (MIN_YEAR..=current_year).rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Brand,
    Model,
    Year,
    PriceMin,
    PriceMax,
    MileageMin,
    MileageMax,
    Location,
    FuelType,
    Transmission,
}

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::Brand,
        FilterField::Model,
        FilterField::Year,
        FilterField::PriceMin,
        FilterField::PriceMax,
        FilterField::MileageMin,
        FilterField::MileageMax,
        FilterField::Location,
        FilterField::FuelType,
        FilterField::Transmission,
    ];

    /// Name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Year => "year",
            Self::PriceMin => "price-min",
            Self::PriceMax => "price-max",
            Self::MileageMin => "mileage-min",
            Self::MileageMax => "mileage-max",
            Self::Location => "location",
            Self::FuelType => "fuel",
            Self::Transmission => "transmission",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::PriceMin => "Min price",
            Self::PriceMax => "Max price",
            Self::MileageMin => "Min mileage",
            Self::MileageMax => "Max mileage",
            Self::Location => "Location",
            Self::FuelType => "Fuel type",
            Self::Transmission => "Transmission",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "brand" | "make" => Ok(Self::Brand),
            "model" => Ok(Self::Model),
            "year" => Ok(Self::Year),
            "price-min" | "min-price" => Ok(Self::PriceMin),
            "price-max" | "max-price" => Ok(Self::PriceMax),
            "mileage-min" | "min-mileage" => Ok(Self::MileageMin),
            "mileage-max" | "max-mileage" => Ok(Self::MileageMax),
            "location" | "city" => Ok(Self::Location),
            "fuel" | "fuel-type" => Ok(Self::FuelType),
            "transmission" | "gearbox" => Ok(Self::Transmission),
            _ => Err(ValidationError::UnknownField(s.trim().to_string())),
        }
    }
}

/// Options the select-type filters may take. An empty list means free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChoices {
    pub makes: Vec<String>,
    pub models: Vec<String>,
    pub fuel_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub current_year: i32,
}

/// Filter criteria for the listings browser. `None` means the field is not populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub mileage_min: Option<i64>,
    pub mileage_max: Option<i64>,
    pub location: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_except(listing, None)
    }

    /// Apply every populated field except `skip`.
    fn matches_except(&self, listing: &Listing, skip: Option<FilterField>) -> bool {
        FilterField::ALL
            .iter()
            .filter(|field| Some(**field) != skip)
            .all(|field| self.field_matches(*field, listing))
    }

    fn field_matches(&self, field: FilterField, listing: &Listing) -> bool {
        fn equal(wanted: &Option<String>, actual: &str) -> bool {
            wanted.as_deref().is_none_or(|w| w == actual)
        }

        match field {
            FilterField::Brand => equal(&self.brand, &listing.brand),
            FilterField::Model => equal(&self.model, &listing.model),
            FilterField::Year => self.year.is_none_or(|y| listing.year == y),
            FilterField::PriceMin => self.price_min.is_none_or(|p| listing.price >= p),
            FilterField::PriceMax => self.price_max.is_none_or(|p| listing.price <= p),
            FilterField::MileageMin => self.mileage_min.is_none_or(|m| listing.mileage >= m),
            FilterField::MileageMax => self.mileage_max.is_none_or(|m| listing.mileage <= m),
            FilterField::Location => equal(&self.location, &listing.location),
            FilterField::FuelType => equal(&self.fuel_type, &listing.fuel_type),
            FilterField::Transmission => equal(&self.transmission, &listing.transmission),
        }
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }

    /// Distinct non-empty values of `field` among listings passing every other filter,
    /// in first-seen order.
    pub fn option_values(&self, listings: &[Listing], field: FilterField) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for listing in listings
            .iter()
            .filter(|l| self.matches_except(l, Some(field)))
        {
            let value = match field {
                FilterField::Brand => listing.brand.clone(),
                FilterField::Model => listing.model.clone(),
                FilterField::Year => listing.year.to_string(),
                FilterField::Location => listing.location.clone(),
                FilterField::FuelType => listing.fuel_type.clone(),
                FilterField::Transmission => listing.transmission.clone(),
                FilterField::PriceMin | FilterField::PriceMax => listing.price.to_string(),
                FilterField::MileageMin | FilterField::MileageMax => listing.mileage.to_string(),
            };
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }

    /// Current value of a field as shown in the panel.
    pub fn display_value(&self, field: FilterField) -> Option<String> {
        match field {
            FilterField::Brand => self.brand.clone(),
            FilterField::Model => self.model.clone(),
            FilterField::Year => self.year.map(|y| y.to_string()),
            FilterField::PriceMin => self.price_min.map(|p| p.to_string()),
            FilterField::PriceMax => self.price_max.map(|p| p.to_string()),
            FilterField::MileageMin => self.mileage_min.map(|m| m.to_string()),
            FilterField::MileageMax => self.mileage_max.map(|m| m.to_string()),
            FilterField::Location => self.location.clone(),
            FilterField::FuelType => self.fuel_type.clone(),
            FilterField::Transmission => self.transmission.clone(),
        }
    }

    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Brand => {
                self.brand = None;
                self.model = None;
            }
            FilterField::Model => self.model = None,
            FilterField::Year => self.year = None,
            FilterField::PriceMin => self.price_min = None,
            FilterField::PriceMax => self.price_max = None,
            FilterField::MileageMin => self.mileage_min = None,
            FilterField::MileageMax => self.mileage_max = None,
            FilterField::Location => self.location = None,
            FilterField::FuelType => self.fuel_type = None,
            FilterField::Transmission => self.transmission = None,
        }
    }

    /// Set a field from raw input. Blank input clears the field; on error the filter is
    /// left untouched. Changing the brand clears the model.
    pub fn set(
        &mut self,
        field: FilterField,
        raw: &str,
        choices: &FilterChoices,
    ) -> Result<(), ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            self.clear(field);
            return Ok(());
        }

        match field {
            FilterField::Brand => {
                let brand = offered(field, value, &choices.makes)?;
                if self.brand.as_deref() != Some(brand.as_str()) {
                    self.model = None;
                }
                self.brand = Some(brand);
            }
            FilterField::Model => self.model = Some(offered(field, value, &choices.models)?),
            FilterField::Year => {
                let year: i32 = parse_number(field, value)?;
                if !(MIN_YEAR..=choices.current_year).contains(&year) {
                    return Err(ValidationError::OutOfRange {
                        field: field.label(),
                        min: MIN_YEAR as i64,
                        max: choices.current_year as i64,
                    });
                }
                self.year = Some(year);
            }
            FilterField::PriceMin => self.price_min = Some(parse_amount(field, value)?),
            FilterField::PriceMax => self.price_max = Some(parse_amount(field, value)?),
            FilterField::MileageMin => self.mileage_min = Some(parse_count(field, value)?),
            FilterField::MileageMax => self.mileage_max = Some(parse_count(field, value)?),
            FilterField::Location => {
                let cities: Vec<String> = CITIES.iter().map(|c| c.to_string()).collect();
                self.location = Some(offered(field, value, &cities)?);
            }
            FilterField::FuelType => {
                self.fuel_type = Some(offered(field, value, &choices.fuel_types)?)
            }
            FilterField::Transmission => {
                self.transmission = Some(offered(field, value, &choices.transmissions)?)
            }
        }
        Ok(())
    }
}

fn offered(field: FilterField, value: &str, options: &[String]) -> Result<String, ValidationError> {
    pick_option(field.label(), value, options)
}

fn parse_number<T: FromStr>(field: FilterField, value: &str) -> Result<T, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: field.label() })
}

fn parse_amount(field: FilterField, value: &str) -> Result<f64, ValidationError> {
    let amount: f64 = parse_number(field, value)?;
    if !amount.is_finite() {
        return Err(ValidationError::NotANumber { field: field.label() });
    }
    if amount < 0.0 {
        return Err(ValidationError::Negative { field: field.label() });
    }
    Ok(amount)
}

fn parse_count(field: FilterField, value: &str) -> Result<i64, ValidationError> {
    let count: i64 = parse_number(field, value)?;
    if count < 0 {
        return Err(ValidationError::Negative { field: field.label() });
    }
    Ok(count)
}
