use super::null_as_default;
use super::user::{UserId, UserRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a listing ("annonce" on the backend).
pub type ListingId = i64;

/// A single car-for-sale record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fuel_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mileage: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Ordered image references, relative to the image base URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defects: Vec<Defect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl Listing {
    /// "Brand Model", the card title.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }

    pub fn owner_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Editable fields of this listing, as sent back on update.
    pub fn to_draft(&self) -> ListingDraft {
        ListingDraft {
            brand: self.brand.clone(),
            model: self.model.clone(),
            fuel_type: self.fuel_type.clone(),
            location: self.location.clone(),
            price: self.price,
            year: self.year,
            mileage: self.mileage,
            transmission: self.transmission.clone(),
            description: self.description.clone(),
            user: self.user,
        }
    }
}

/// Image reference as returned by the backend.
///
/// Older payloads carry bare paths, newer ones wrap the path in a stored-image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Path(String),
    Stored {
        #[serde(default)]
        id: Option<i64>,
        image: String,
    },
}

impl ImageRef {
    pub fn path(&self) -> &str {
        match self {
            ImageRef::Path(path) => path,
            ImageRef::Stored { image, .. } => image,
        }
    }

    /// Resolve against the image base URL.
    pub fn url(&self, base_url: &str) -> String {
        let path = self.path();
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// A defect note attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defect: String,
}

/// Listing fields sent on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub location: String,
    pub price: f64,
    pub year: i32,
    pub mileage: i64,
    pub transmission: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

/// A local file attached to a new listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Fuel types offered by the listing and alert forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gasoline => write!(f, "gasoline"),
            Self::Diesel => write!(f, "diesel"),
            Self::Electric => write!(f, "electric"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl FromStr for FuelType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gasoline" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!("unknown fuel type '{other}'")),
        }
    }
}

/// Transmissions offered by the listing and alert forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
    Cvt,
}

impl Transmission {
    pub const ALL: [Transmission; 3] = [
        Transmission::Manual,
        Transmission::Automatic,
        Transmission::Cvt,
    ];
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Automatic => write!(f, "automatic"),
            Self::Cvt => write!(f, "cvt"),
        }
    }
}

impl FromStr for Transmission {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "automatic" => Ok(Self::Automatic),
            "cvt" => Ok(Self::Cvt),
            other => Err(format!("unknown transmission '{other}'")),
        }
    }
}
