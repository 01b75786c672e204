mod daily_menu;
mod menu_item;
mod weekly_menu;

pub use menu_item::MenuItem;
pub use weekly_menu::WeeklyMenu;
