pub mod allergen;
pub mod catalog;
pub mod category;
pub mod menu_item;
pub mod rows;
pub mod schedule;
