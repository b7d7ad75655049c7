mod error;
mod operations;
mod patch;
mod price;
mod requests;
mod types;

pub use error::ItemError;
pub use operations::validate_item;
pub use patch::Patch;
pub use price::{Price, PRICE_DECIMAL_PLACES};
pub use requests::{CreateItemRequest, ReplaceItemRequest, UpdateItemRequest};
pub use types::{Item, ItemListResponse};
