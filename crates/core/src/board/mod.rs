//! Board module - feed aggregation, filtering, and view state.

mod board_model;
mod board_service;
mod board_traits;
mod filter;

// Re-export the public interface
pub use board_model::{FilterMode, ListingQuery};
pub use board_service::BoardService;
pub use board_traits::BoardServiceTrait;
pub use filter::filter_and_sort;
