//! # Category state
//! Pure, testable transitions over the category collection. No I/O;
//! the controller owns an [`AppState`], feeds [`Command`]s through
//! [`apply`], and renders or persists whatever comes back.

use crate::category::Category;
use crate::error::ValidationError;
use crate::news::News;

/// The whole mutable application state: the ordered categories plus the
/// flat news set from the last successful fetch.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub categories: Vec<Category>,
    pub news: Vec<News>,
}

impl AppState {
    pub fn new(categories: Vec<Category>, news: Vec<News>) -> Self {
        Self { categories, news }
    }
}

/// User intents, decoupled from whatever surface produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCategory(String),
    ToggleMark(usize),
    DeleteMarked,
    Quit,
}

/// Distribute news into the categories by exact name match, replacing
/// each bucket's previous contents. News matching no category is
/// dropped. With duplicate names the first category in order wins.
pub fn group_by_category(news: &[News], categories: &[Category]) -> Vec<Category> {
    let mut grouped: Vec<Category> = categories
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.news.clear();
            c
        })
        .collect();

    let mut dropped = 0usize;
    for n in news {
        match grouped.iter_mut().find(|c| c.name == n.category_name) {
            Some(c) => c.add_news(n.clone()),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "news without a matching category");
    }

    grouped
}

/// Append a fresh active category. Blank names are rejected and the
/// input collection is left as it was.
pub fn add_category(
    name: &str,
    categories: &[Category],
) -> Result<Vec<Category>, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankCategoryName);
    }

    let mut out = categories.to_vec();
    out.push(Category::new(name));
    Ok(out)
}

/// Flip the deletion mark at `index`; out of range is a no-op.
pub fn toggle_marked(index: usize, categories: &[Category]) -> Vec<Category> {
    let mut out = categories.to_vec();
    if let Some(c) = out.get_mut(index) {
        c.toggle_marked();
    }
    out
}

/// Remove exactly the marked categories (and their news with them),
/// keeping the relative order of the rest. Idempotent.
pub fn delete_marked(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| !c.marked_for_deletion)
        .cloned()
        .collect()
}

/// Dispatch one command against the state, producing the next state.
/// The input is untouched on error. `Quit` is a pass-through; shutting
/// down (and snapshotting names) is the controller's job.
pub fn apply(state: &AppState, cmd: Command) -> Result<AppState, ValidationError> {
    match cmd {
        Command::AddCategory(name) => {
            let categories = add_category(&name, &state.categories)?;
            // Regroup so already-fetched news matching the new name
            // lands in it, as the original add path did.
            let categories = group_by_category(&state.news, &categories);
            Ok(AppState {
                categories,
                news: state.news.clone(),
            })
        }
        Command::ToggleMark(index) => Ok(AppState {
            categories: toggle_marked(index, &state.categories),
            news: state.news.clone(),
        }),
        Command::DeleteMarked => Ok(AppState {
            categories: delete_marked(&state.categories),
            news: state.news.clone(),
        }),
        Command::Quit => Ok(state.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<Category> {
        names.iter().copied().map(Category::new).collect()
    }

    #[test]
    fn add_appends_active_empty_category() {
        let before = cats(&["Sports"]);
        let after = add_category("Tech", &before).expect("valid name");
        assert_eq!(after.len(), 2);
        assert_eq!(after[1].name, "Tech");
        assert!(after[1].news.is_empty());
        assert!(!after[1].marked_for_deletion);
    }

    #[test]
    fn add_trims_the_name() {
        let after = add_category("  Tech \n", &[]).expect("valid name");
        assert_eq!(after[0].name, "Tech");
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let before = cats(&["Sports"]);
        let after = toggle_marked(5, &before);
        assert_eq!(after, before);
    }

    #[test]
    fn apply_add_regroups_existing_news() {
        let state = AppState::new(
            cats(&["Sports"]),
            vec![News::with_placeholders("t", "d", "Tech", 0)],
        );
        let state = apply(&state, Command::AddCategory("Tech".into())).expect("ok");
        assert_eq!(state.categories[1].news.len(), 1);
        assert!(state.categories[0].news.is_empty());
    }

    #[test]
    fn apply_rejects_blank_name_without_touching_state() {
        let state = AppState::new(cats(&["Sports"]), Vec::new());
        let err = apply(&state, Command::AddCategory("   ".into())).unwrap_err();
        assert_eq!(err, ValidationError::BlankCategoryName);
        assert_eq!(state.categories.len(), 1);
    }

    #[test]
    fn apply_quit_leaves_state_alone() {
        let state = AppState::new(cats(&["Sports"]), Vec::new());
        let out = apply(&state, Command::Quit).expect("ok");
        assert_eq!(out.categories, state.categories);
    }
}
