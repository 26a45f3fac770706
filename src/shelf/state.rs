use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::book::{is_filled, BookId};
use crate::query;
use crate::store::Store;

use super::ShelfView;

/// The unsubmitted new-book form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInput {
    pub title: String,
    pub author: String,
}

impl DraftInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        DraftInput {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn is_submittable(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.author)
    }
}

/// Input from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum UiEvent {
    QueryChanged(String),
    DraftTitleChanged(String),
    DraftAuthorChanged(String),
    AddClicked,
    RemoveClicked(BookId),
}

/// Everything a session holds between events.
#[derive(Clone, Debug, Default)]
pub struct ShelfState {
    store: Store,
    draft: DraftInput,
    query: String,
}

impl ShelfState {
    pub fn new(store: Store) -> Self {
        ShelfState {
            store,
            draft: DraftInput::default(),
            query: String::new(),
        }
    }

    pub fn reduce(mut self, event: UiEvent) -> ShelfState {
        match event {
            UiEvent::QueryChanged(text) => self.update_query(text),
            UiEvent::DraftTitleChanged(text) => self.update_draft_title(text),
            UiEvent::DraftAuthorChanged(text) => self.update_draft_author(text),
            UiEvent::AddClicked => {
                let draft = self.draft.clone();
                self.submit_draft(draft);
            }
            UiEvent::RemoveClicked(id) => self.request_removal(id),
        }
        self
    }

    /// Add `draft` to the store and clear the form. A draft with a blank
    /// field is dropped and the form is left as it was.
    pub fn submit_draft(&mut self, draft: DraftInput) {
        if !draft.is_submittable() {
            trace!("draft incomplete, not submitted");
            return;
        }
        if self.store.add(draft.title, draft.author).is_some() {
            self.draft = DraftInput::default();
        }
    }

    pub fn request_removal(&mut self, id: BookId) {
        self.store.remove(id);
    }

    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn update_draft_title(&mut self, text: impl Into<String>) {
        self.draft.title = text.into();
    }

    pub fn update_draft_author(&mut self, text: impl Into<String>) {
        self.draft.author = text.into();
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Derive what the presentation layer should show.
    pub fn view(&self) -> ShelfView {
        ShelfView {
            visible: query::filter(self.store.list(), &self.query)
                .into_iter()
                .cloned()
                .collect(),
            draft: self.draft.clone(),
            query: self.query.clone(),
            total: self.store.len(),
        }
    }
}
