pub mod u501_load_items;
pub mod u502_match_item;
pub mod u503_catalog_maintenance;
