use std::sync::OnceLock;

use scraper::Selector;

/// A lookup by tag name and, optionally, a single class. For scraper-backed fragments the
/// query is turned into a CSS [`Selector`] the first time it is used.
#[derive(Debug)]
pub struct Query {
    tag: &'static str,
    class: Option<&'static str>,
    cell: OnceLock<Selector>,
}

impl Query {
    pub const fn new(tag: &'static str, class: Option<&'static str>) -> Self {
        Self {
            tag,
            class,
            cell: OnceLock::new(),
        }
    }

    #[allow(clippy::let_and_return)]
    pub fn selector(&self) -> &Selector {
        self.cell.get_or_init(|| {
            let css = match self.class {
                Some(class) => format!("{}.{class}", self.tag),
                None => self.tag.to_string(),
            };
            // bound first, the parse error borrows `css`
            let sel = match Selector::parse(&css) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static query {css}: {e:?}"),
            };
            sel
        })
    }

    /// Whether an element with this tag and these classes satisfies the query.
    #[cfg(test)]
    pub fn matches<'c>(&self, tag: &str, mut classes: impl Iterator<Item = &'c str>) -> bool {
        tag.eq_ignore_ascii_case(self.tag)
            && self
                .class
                .map_or(true, |wanted| classes.any(|class| class == wanted))
    }
}

#[macro_export]
macro_rules! query {
    ($x: ident <- $tag: literal) => {
        static $x: $crate::parse::query::Query = $crate::parse::query::Query::new($tag, None);
    };
    ($x: ident <- $tag: literal . $class: literal) => {
        static $x: $crate::parse::query::Query =
            $crate::parse::query::Query::new($tag, Some($class));
    };
}
