pub mod sender;
pub mod session;
pub mod traits;
pub mod types;
pub mod ur;

pub use sender::RequestSender;
pub use session::Session;
pub use traits::{HttpResponse, Transport};
pub use types::{ClientConfig, Endpoints};
pub use ur::UrClient;
