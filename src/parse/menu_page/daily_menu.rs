use log::debug;

use super::menu_item::MenuItem;
use crate::parse::Fragment;
use crate::query;

/// One day column of the page: the heading text exactly as published and its stations in
/// page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMenu {
    day_label: String,
    items: Vec<MenuItem>,
}

impl DailyMenu {
    #[cfg(test)]
    pub fn day_label(&self) -> &str {
        &self.day_label
    }

    #[cfg(test)]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn into_parts(self) -> (String, Vec<MenuItem>) {
        (self.day_label, self.items)
    }

    pub fn from_column<F: Fragment>(column: &F) -> Option<Self> {
        query!(STATION_LIST_QUERY <- "ul");
        query!(STATION_QUERY <- "li");
        query!(DAY_QUERY <- "h1");

        let station_lists = column.find_all(&STATION_LIST_QUERY);
        let Some(heading) = column.find(&DAY_QUERY) else {
            debug!("Day column has no heading");
            return None;
        };
        if station_lists.is_empty() {
            debug!("Day column has no station lists");
            return None;
        }

        let items = station_lists
            .iter()
            .flat_map(|list| list.find_all(&STATION_QUERY))
            .filter_map(|station| MenuItem::from_station(&station))
            .collect();

        Some(Self {
            day_label: heading.inner_text().trim().to_string(),
            items,
        })
    }
}
