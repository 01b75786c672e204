use scraper::ElementRef;

use super::query::Query;

/// Read-only view of one node of the menu page. Extraction code only ever talks to the
/// document through this trait, so it doesn't care which parser produced the tree.
pub trait Fragment: Sized {
    /// Every descendant matching `query`, in document order.
    fn find_all(&self, query: &Query) -> Vec<Self>;

    fn find(&self, query: &Query) -> Option<Self> {
        self.find_all(query).into_iter().next()
    }

    /// All descendant text concatenated, untrimmed.
    fn inner_text(&self) -> String;
}

impl<'a> Fragment for ElementRef<'a> {
    fn find_all(&self, query: &Query) -> Vec<Self> {
        self.select(query.selector()).collect()
    }

    fn find(&self, query: &Query) -> Option<Self> {
        self.select(query.selector()).next()
    }

    fn inner_text(&self) -> String {
        self.text().collect()
    }
}

/// Hand-built trees for exercising the extractors without any HTML.
#[cfg(test)]
pub mod fixture {
    use super::{Fragment, Query};

    #[derive(Debug, Clone, Default)]
    pub struct Node {
        tag: &'static str,
        classes: Vec<&'static str>,
        text: String,
        children: Vec<Node>,
    }

    impl Node {
        pub fn new(tag: &'static str) -> Self {
            Self {
                tag,
                ..Self::default()
            }
        }

        pub fn class(mut self, class: &'static str) -> Self {
            self.classes.push(class);
            self
        }

        pub fn text(mut self, text: &str) -> Self {
            self.text = text.to_string();
            self
        }

        pub fn child(mut self, child: Self) -> Self {
            self.children.push(child);
            self
        }

        fn collect_matches(&self, query: &Query, out: &mut Vec<Self>) {
            for child in &self.children {
                if query.matches(child.tag, child.classes.iter().copied()) {
                    out.push(child.clone());
                }
                child.collect_matches(query, out);
            }
        }
    }

    impl Fragment for Node {
        fn find_all(&self, query: &Query) -> Vec<Self> {
            let mut out = Vec::new();
            self.collect_matches(query, &mut out);
            out
        }

        fn inner_text(&self) -> String {
            let mut text = self.text.clone();
            for child in &self.children {
                text.push_str(&child.inner_text());
            }
            text
        }
    }
}
