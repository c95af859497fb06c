//! category.rs: a named bucket of news.
//!
//! Categories own their news by value. The deletion mark is transient
//! UI state: false except between a user toggle and the confirmed bulk
//! delete, and never part of a persisted snapshot.

use serde::{Deserialize, Serialize};

use crate::news::News;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub news: Vec<News>,
    #[serde(skip)]
    pub marked_for_deletion: bool,
}

impl Category {
    /// A fresh active category with no news.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            news: Vec::new(),
            marked_for_deletion: false,
        }
    }

    pub fn add_news(&mut self, news: News) {
        self.news.push(news);
    }

    /// active → marked, marked → active.
    pub fn toggle_marked(&mut self) {
        self.marked_for_deletion = !self.marked_for_deletion;
    }
}
