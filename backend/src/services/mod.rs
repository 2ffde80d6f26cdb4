//! Business logic services for the AgriConnect platform

pub mod history;
pub mod order;
pub mod price;
pub mod product;
pub mod recommendation;

pub use history::{HistoryStore, InMemoryHistoryStore, PgHistoryStore};
pub use order::OrderService;
pub use price::PriceService;
pub use product::ProductService;
pub use recommendation::RecommendationService;
