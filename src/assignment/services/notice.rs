//! Assignment notice rendering.

use minijinja::Environment;
use serde_json::{Map, Value};

use crate::assignment::{domain::AssignedTask, ports::NotificationError, ports::Recipient};

const DEFAULT_NOTICE_TEMPLATE: &str = concat!(
    "Hello {{ name }}, you have been assigned \"{{ title }}\" ",
    "({{ priority }} priority, complexity {{ complexity }}/10",
    "{% if due_date %}, due {{ due_date }}{% endif %}). ",
    "Why you: {{ rationale }}."
);

/// `minijinja` template used to word assignment notifications.
///
/// The template sees `name`, `title`, `task_type`, `priority`, `complexity`,
/// `due_date` (formatted `YYYY-MM-DD`, absent when unset), `score`, and
/// `rationale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeTemplate {
    source: String,
}

impl Default for NoticeTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_NOTICE_TEMPLATE.to_owned(),
        }
    }
}

impl NoticeTemplate {
    /// Creates a notice template from `minijinja` source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Renders the notice for a recipient of `task`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Template`] when the template is invalid
    /// or fails to render.
    pub fn render(
        &self,
        recipient: &Recipient,
        task: &AssignedTask,
    ) -> Result<String, NotificationError> {
        let environment = Environment::new();
        environment
            .render_str(&self.source, build_context(recipient, task))
            .map_err(|error| NotificationError::Template(error.to_string()))
    }
}

fn build_context(recipient: &Recipient, task: &AssignedTask) -> Map<String, Value> {
    let request = task.request();
    let mut context = Map::new();
    context.insert("name".to_owned(), Value::String(recipient.name.clone()));
    context.insert("title".to_owned(), Value::String(request.title().to_owned()));
    context.insert(
        "task_type".to_owned(),
        Value::String(request.task_type().to_owned()),
    );
    context.insert(
        "priority".to_owned(),
        Value::String(request.priority().as_str().to_owned()),
    );
    context.insert(
        "complexity".to_owned(),
        Value::from(request.complexity().value()),
    );
    if let Some(due_date) = request.due_date() {
        context.insert(
            "due_date".to_owned(),
            Value::String(due_date.format("%Y-%m-%d").to_string()),
        );
    }
    context.insert(
        "score".to_owned(),
        Value::String(task.assignment().score.to_string()),
    );
    context.insert(
        "rationale".to_owned(),
        Value::String(task.assignment().rationale.clone()),
    );
    context
}
