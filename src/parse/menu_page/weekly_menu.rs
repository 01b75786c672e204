use std::collections::HashMap;

use log::{debug, error};
use scraper::Html;

use super::{daily_menu::DailyMenu, menu_item::MenuItem};
use crate::fetch::MenuSource;
use crate::parse::Fragment;
use crate::query;

/// Stations for every day column found on the page, keyed by the column's heading text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyMenu(HashMap<String, Vec<MenuItem>>);

impl WeeklyMenu {
    /// Fetches and parses the page once. Any failure along the way, including a page with
    /// no day columns, is logged and reported as `None`.
    pub async fn load<S: MenuSource>(source: &S) -> Option<Self> {
        match source.menu_page().await {
            Ok(html) => {
                let menu = Self::from_html(&html)?;
                if menu.is_empty() {
                    debug!("Menu page has day columns but none with stations");
                } else {
                    debug!("Parsed menu for {} days", menu.len());
                }
                Some(menu)
            }
            Err(e) => {
                error!("Failed to get website info. {e}");
                None
            }
        }
    }

    pub fn from_html(html: &str) -> Option<Self> {
        let document = Html::parse_document(html);
        Self::from_document(&document.root_element())
    }

    pub fn from_document<F: Fragment>(document: &F) -> Option<Self> {
        query!(DAY_COLUMN_QUERY <- "div"."foodMenuDayColumn");

        let columns = document.find_all(&DAY_COLUMN_QUERY);
        if columns.is_empty() {
            debug!("No columns found");
            return None;
        }

        let days = columns
            .iter()
            .filter_map(DailyMenu::from_column)
            .map(DailyMenu::into_parts)
            .filter(|(day, items)| !day.is_empty() && !items.is_empty())
            .collect();
        Some(Self(days))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn day(&self, day_label: &str) -> Option<&[MenuItem]> {
        self.0.get(day_label).map(Vec::as_slice)
    }

    /// Removes and returns one day's stations.
    pub fn take_day(&mut self, day_label: &str) -> Option<Vec<MenuItem>> {
        self.0.remove(day_label)
    }
}
