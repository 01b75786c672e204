use log::debug;

use crate::parse::{clean_text, Fragment};
use crate::query;

/// One station's entrée (`title`) and its side (`text`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    title: String,
    text: String,
}

impl MenuItem {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Reads one station `li`. Stations that only carry a header or an empty slot don't
    /// have the entrée/calories pair and yield `None`.
    pub fn from_station<F: Fragment>(station: &F) -> Option<Self> {
        // entrée first, then the calorie line, which isn't published
        query!(DETAIL_QUERY <- "div"."noNutritionalLink");
        query!(SIDE_QUERY <- "span"."menuRightDiv_li_p");

        let details = station.find_all(&DETAIL_QUERY);
        let [entree, _calories] = details.as_slice() else {
            debug!(
                "Invalid number of station details, expected 2 found {}",
                details.len()
            );
            return None;
        };
        let sides = station.find_all(&SIDE_QUERY);
        let [side] = sides.as_slice() else {
            debug!("Invalid number of station sides, expected 1 found {}", sides.len());
            return None;
        };

        let title = clean_text(&entree.inner_text());
        if title.is_empty() {
            debug!("Station has an empty entrée");
            return None;
        }
        Some(Self {
            title,
            text: clean_text(&side.inner_text()),
        })
    }
}
