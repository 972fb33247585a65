//! Client for the UR Chintai (UR都市機構) rental listing API.
//!
//! ```no_run
//! use urchintai_client::{ClientConfig, RequestSender, Session, UrClient};
//!
//! # async fn run() -> urchintai_client::Result<()> {
//! let session = Session::new(&ClientConfig::default())?;
//! let client = UrClient::new(RequestSender::new(&session));
//!
//! let url = "https://www.ur-net.go.jp/chintai/kanto/kanagawa/40_4120.html";
//! if client.is_property_vacant(Some(url), None).await? {
//!     println!("{}", client.get_property_name(Some(url)).await?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod parser;

pub use client::{ClientConfig, Endpoints, RequestSender, Session, Transport, UrClient};
pub use error::{Result, UrError};
pub use models::{PropertyCode, RoomCode};
