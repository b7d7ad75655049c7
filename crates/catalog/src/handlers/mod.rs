pub mod error;
pub mod extractors;
pub mod health;
pub mod items;
pub mod root;

pub use error::ApiError;
pub use extractors::JsonBody;
