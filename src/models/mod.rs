use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{Result, UrError};

/// Identifies one UR property (団地).
///
/// All fields are kept as fixed-width, zero-padded digit strings because the
/// remote API matches on the exact representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyCode {
    store_code: String,
    house_code: String,
    #[serde(rename = "type")]
    kind: String,
}

impl PropertyCode {
    /// Build a code from caller supplied parts, rejecting anything that is not
    /// a 2/3/1 digit string triple
    pub fn new(
        store_code: impl Into<String>,
        house_code: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self> {
        let code = Self::from_parts(store_code.into(), house_code.into(), kind.into());
        ensure_digits("store code", &code.store_code, 2)?;
        ensure_digits("house code", &code.house_code, 3)?;
        ensure_digits("type", &code.kind, 1)?;
        Ok(code)
    }

    pub(crate) fn from_parts(store_code: String, house_code: String, kind: String) -> Self {
        Self {
            store_code,
            house_code,
            kind,
        }
    }

    pub fn store_code(&self) -> &str {
        &self.store_code
    }

    pub fn house_code(&self) -> &str {
        &self.house_code
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for PropertyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}{}", self.store_code, self.house_code, self.kind)
    }
}

/// Identifies one room within a property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoomCode {
    #[serde(flatten)]
    property: PropertyCode,
    room_id: String,
}

impl RoomCode {
    pub fn new(
        store_code: impl Into<String>,
        house_code: impl Into<String>,
        kind: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Result<Self> {
        let property = PropertyCode::new(store_code, house_code, kind)?;
        let room_id = room_id.into();
        ensure_digits("room id", &room_id, 9)?;
        Ok(Self { property, room_id })
    }

    pub(crate) fn from_parts(property: PropertyCode, room_id: String) -> Self {
        Self { property, room_id }
    }

    /// The property this room belongs to
    pub fn property(&self) -> &PropertyCode {
        &self.property
    }

    pub fn store_code(&self) -> &str {
        self.property.store_code()
    }

    pub fn house_code(&self) -> &str {
        self.property.house_code()
    }

    pub fn kind(&self) -> &str {
        self.property.kind()
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_room?JKSS={}", self.property, self.room_id)
    }
}

fn ensure_digits(field: &str, value: &str, width: usize) -> Result<()> {
    if value.len() == width && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(UrError::invalid_argument(format!(
            "{field} must be exactly {width} digits: {value:?}"
        )))
    }
}

/// Form body for the property rooms endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRoomsQuery {
    pub shisya: String,
    pub danchi: String,
    pub shikibetu: String,
    pub order_by_field: String,
    pub order_by_sort: String,
    pub page_index: String,
}

impl From<&PropertyCode> for PropertyRoomsQuery {
    fn from(code: &PropertyCode) -> Self {
        Self {
            shisya: code.store_code.clone(),
            danchi: code.house_code.clone(),
            shikibetu: code.kind.clone(),
            order_by_field: "0".to_string(),
            order_by_sort: "0".to_string(),
            page_index: "0".to_string(),
        }
    }
}

/// Form body for the room details endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDetailsQuery {
    pub shisya: String,
    pub danchi: String,
    pub shikibetu: String,
    pub id: String,
}

impl From<&RoomCode> for RoomDetailsQuery {
    fn from(code: &RoomCode) -> Self {
        Self {
            shisya: code.store_code().to_string(),
            danchi: code.house_code().to_string(),
            shikibetu: code.kind().to_string(),
            id: code.room_id.clone(),
        }
    }
}

/// Kind of listing a vacancy check was run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Property,
    Room,
}

/// Outcome of one vacancy check, as printed by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct VacancyReport {
    pub kind: ListingKind,
    pub listing: String,
    pub vacant: bool,
    pub checked_at: DateTime<Utc>,
}

impl VacancyReport {
    pub fn new(kind: ListingKind, listing: impl Into<String>, vacant: bool) -> Self {
        Self {
            kind,
            listing: listing.into(),
            vacant,
            checked_at: Utc::now(),
        }
    }
}
