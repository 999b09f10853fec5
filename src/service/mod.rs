//! ItemService: item persistence over per-request connections.

mod items;
pub use items::ItemService;
