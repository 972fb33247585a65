use std::time::Duration;

pub const DEFAULT_PROPERTY_ROOMS_ENDPOINT: &str =
    "https://chintai.sumai.ur-net.go.jp/chintai/api/bukken/detail/detail_bukken_room/";
pub const DEFAULT_ROOM_DETAILS_ENDPOINT: &str =
    "https://chintai.sumai.ur-net.go.jp/chintai/api/room/detail/";
pub const DEFAULT_USER_AGENT: &str = concat!("urchintai-client/", env!("CARGO_PKG_VERSION"));

/// Remote endpoints queried by the listing client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Lists the vacant rooms of a property
    pub property_rooms: String,
    /// Details of a single room
    pub room_details: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            property_rooms: DEFAULT_PROPERTY_ROOMS_ENDPOINT.to_string(),
            room_details: DEFAULT_ROOM_DETAILS_ENDPOINT.to_string(),
        }
    }
}

/// Settings for the HTTP session and the client built on it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Passed straight to the HTTP client; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
