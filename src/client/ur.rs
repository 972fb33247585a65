use tracing::{debug, info};

use crate::client::sender::RequestSender;
use crate::client::traits::Transport;
use crate::client::types::Endpoints;
use crate::error::{Result, UrError};
use crate::models::{PropertyCode, PropertyRoomsQuery, RoomCode, RoomDetailsQuery};
use crate::parser;

/// Body the API answers with when a property has no free room, or a room
/// is not on offer
const NOT_FOUND: &str = "null";

/// Checks vacancy of UR Chintai properties and rooms
pub struct UrClient<'s, T> {
    sender: RequestSender<'s, T>,
    endpoints: Endpoints,
}

impl<'s, T: Transport> UrClient<'s, T> {
    /// Client against the default UR Chintai endpoints
    pub fn new(sender: RequestSender<'s, T>) -> Self {
        Self::with_endpoints(sender, Endpoints::default())
    }

    pub fn with_endpoints(sender: RequestSender<'s, T>, endpoints: Endpoints) -> Self {
        Self { sender, endpoints }
    }

    /// Ask the API for the vacant rooms of a property; the property is vacant
    /// unless that list comes back as `null`.
    ///
    /// At least one of `url` and `property_code` is required. When both are
    /// given the code wins and the URL is ignored.
    pub async fn is_property_vacant(
        &self,
        url: Option<&str>,
        property_code: Option<&PropertyCode>,
    ) -> Result<bool> {
        let parsed;
        let code = match (property_code, non_empty(url)) {
            (Some(code), _) => code,
            (None, Some(url)) => {
                parsed = parser::parse_property_code_from_url(Some(url))?;
                &parsed
            }
            (None, None) => {
                return Err(UrError::invalid_argument(
                    "Please provide either property's URL or property code",
                ))
            }
        };

        let query = PropertyRoomsQuery::from(code);
        let body = self
            .sender
            .post(&self.endpoints.property_rooms, &query)
            .await?;

        let vacant = body != NOT_FOUND;
        info!("Property {} vacant: {}", code, vacant);
        Ok(vacant)
    }

    /// Ask the API for the details of one room; it is vacant unless the
    /// details come back as `null`.
    ///
    /// Same argument rules as [`UrClient::is_property_vacant`].
    pub async fn is_room_vacant(
        &self,
        url: Option<&str>,
        room_code: Option<&RoomCode>,
    ) -> Result<bool> {
        let parsed;
        let code = match (room_code, non_empty(url)) {
            (Some(code), _) => code,
            (None, Some(url)) => {
                parsed = parser::parse_room_code_from_url(Some(url))?;
                &parsed
            }
            (None, None) => {
                return Err(UrError::invalid_argument(
                    "Please provide either room's URL or room code",
                ))
            }
        };

        let query = RoomDetailsQuery::from(code);
        let body = self
            .sender
            .post(&self.endpoints.room_details, &query)
            .await?;

        let vacant = body != NOT_FOUND;
        info!("Room {} vacant: {}", code, vacant);
        Ok(vacant)
    }

    /// Load a listing page and read the property name off it
    pub async fn get_property_name(&self, url: Option<&str>) -> Result<String> {
        let url = non_empty(url)
            .ok_or_else(|| UrError::invalid_argument("Room's URL cannot be empty"))?;

        let html = self.sender.get(url).await?;
        debug!("Downloaded {} bytes of HTML", html.len());

        parser::parse_property_name_from_content(&html)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
