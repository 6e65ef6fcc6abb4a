pub mod item_card;
pub mod pagination_controls;

pub use item_card::ItemCard;
pub use pagination_controls::PaginationControls;
