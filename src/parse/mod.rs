//! Extraction of the weekly menu from the cafeteria's menu page.
//!
//! The page lays the week out as one `div.foodMenuDayColumn` per day. Each column has an
//! `h1` with the day name and one or more `ul` station lists whose `li` entries hold the
//! entrée, the calorie text and the side.
mod clean_text;
mod fragment;
mod menu_page;
pub mod query;

pub use clean_text::clean_text;
pub use fragment::Fragment;
pub use menu_page::{MenuItem, WeeklyMenu};

#[cfg(test)]
pub use fragment::fixture;
