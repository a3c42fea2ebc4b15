//! View state for a todo list UI, driven by discrete actions.
//!
//! # Design
//! `ViewState` is a plain value. `apply` never mutates in place; it returns
//! the next state, so a rendering layer can diff or snapshot freely and the
//! transitions are testable without any UI. Network results arrive as
//! actions dispatched by the host after it runs a request built by
//! `TodoClient`.

use std::fmt;

use crate::summary::{LocalSummarizer, PendingSummary};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Blocking notice shown to the user. Messages are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    EmptyInput,
    FetchFailed,
    AddFailed,
    UpdateFailed,
    DeleteFailed,
    NothingToSummarize,
    SummarizeFailed,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::EmptyInput => "Empty Fields are not allowed",
            Alert::FetchFailed => "Failed to fetch todos",
            Alert::AddFailed => "Failed to add todo",
            Alert::UpdateFailed => "Failed to update todo",
            Alert::DeleteFailed => "Failed to delete todo",
            Alert::NothingToSummarize => "No todos to summarize",
            Alert::SummarizeFailed => "Failed to summarize todos",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether the input box creates a new item or edits item `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditMode {
    pub id: Option<TodoId>,
    pub is_edit: bool,
}

impl EditMode {
    fn editing(id: TodoId) -> Self {
        Self {
            id: Some(id),
            is_edit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InputChanged(String),
    FetchStarted,
    FetchSucceeded(Vec<Todo>),
    FetchFailed,
    Created(Todo),
    CreateFailed,
    /// Leave edit mode and clear the input.
    CreateModeEntered,
    EditStarted { id: TodoId, text: String },
    Updated(Todo),
    UpdateFailed,
    Deleted(TodoId),
    DeleteFailed,
    /// A client-side check refused to proceed.
    Rejected(Alert),
    SummaryStarted,
    SummaryReady(String),
    SummaryFailed,
    AlertDismissed,
}

/// What submitting the input box should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CreateTodo),
    Update(TodoId, UpdateTodo),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub input: String,
    pub todos: Vec<Todo>,
    pub edit: EditMode,
    pub loading: bool,
    pub summary: Option<String>,
    pub alert: Option<Alert>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, action: Action) -> ViewState {
        let mut next = self.clone();
        match action {
            Action::InputChanged(text) => next.input = text,
            Action::FetchStarted | Action::SummaryStarted => next.loading = true,
            Action::FetchSucceeded(todos) => {
                next.todos = todos;
                next.loading = false;
            }
            Action::FetchFailed => {
                next.loading = false;
                next.alert = Some(Alert::FetchFailed);
            }
            Action::Created(todo) => {
                next.todos.push(todo);
                next.input.clear();
            }
            Action::CreateFailed => next.alert = Some(Alert::AddFailed),
            Action::CreateModeEntered => {
                next.edit = EditMode::default();
                next.input.clear();
            }
            Action::EditStarted { id, text } => {
                next.edit = EditMode::editing(id);
                next.input = text;
            }
            Action::Updated(updated) => {
                if let Some(todo) = next.todos.iter_mut().find(|t| t.id == updated.id) {
                    todo.text = updated.text;
                }
                next.input.clear();
                next.edit = EditMode::default();
            }
            Action::UpdateFailed => next.alert = Some(Alert::UpdateFailed),
            Action::Deleted(id) => next.todos.retain(|t| t.id != id),
            Action::DeleteFailed => next.alert = Some(Alert::DeleteFailed),
            Action::Rejected(alert) => next.alert = Some(alert),
            Action::SummaryReady(summary) => {
                next.summary = Some(summary);
                next.loading = false;
            }
            Action::SummaryFailed => {
                next.loading = false;
                next.alert = Some(Alert::SummarizeFailed);
            }
            Action::AlertDismissed => next.alert = None,
        }
        next
    }

    /// Create or update depending on edit mode. Blank input is refused.
    /// The input is sent as typed, without trimming.
    pub fn submission(&self) -> Result<Submission, Alert> {
        if self.input.trim().is_empty() {
            return Err(Alert::EmptyInput);
        }
        let text = self.input.clone();
        match self.edit {
            EditMode {
                id: Some(id),
                is_edit: true,
            } => Ok(Submission::Update(id, UpdateTodo { text })),
            _ => Ok(Submission::Create(CreateTodo { text })),
        }
    }

    /// Heuristic summary of the loaded items, without a server round-trip.
    pub fn local_summary(&self, summarizer: &LocalSummarizer) -> Result<PendingSummary, Alert> {
        if self.todos.is_empty() {
            return Err(Alert::NothingToSummarize);
        }
        Ok(summarizer.prepare(&self.todos))
    }
}
