pub mod controller;
pub mod state;
pub mod view;

pub use view::LoadItemsView;
