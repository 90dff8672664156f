//! models/task_model.rs
//! Estructuras de las tareas de TaskRouter: producto elegido, atributos y eventos.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EventError;

pub const EVENT_WORKFLOW_TIMEOUT: &str = "workflow.timeout";
pub const EVENT_TASK_CANCELED: &str = "task.canceled";

/// Cola/producto a la que se encola la llamada según la tecla marcada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    ProgrammableSms,
    ProgrammableVoice,
}

impl Product {
    /// "1" es SMS; cualquier otra cosa (incluido vacío) cae en Voice.
    pub fn from_digits(digits: &str) -> Self {
        match digits {
            "1" => Product::ProgrammableSms,
            _ => Product::ProgrammableVoice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Product::ProgrammableSms => "ProgrammableSMS",
            Product::ProgrammableVoice => "ProgrammableVoice",
        }
    }

    /// Texto del elemento `<Task>`: `{"selected_product": "<label>"}`
    pub fn task_payload(&self) -> String {
        format!("{{\"selected_product\": \"{}\"}}", self.label())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// POST /call/enqueue/
#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueForm {
    #[serde(rename = "Digits", default)]
    pub digits: String,
}

/// POST /events
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventForm {
    #[serde(rename = "EventType", default)]
    pub event_type: String,
    #[serde(rename = "TaskAttributes")]
    pub task_attributes: Option<String>,
}

/// Atributos que viajan con la tarea (JSON dentro del form).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskAttributes {
    pub from: String,
    pub call_sid: String,
    pub selected_product: String,
}

impl TaskAttributes {
    pub fn parse(raw: &str) -> Result<Self, EventError> {
        serde_json::from_str(raw).map_err(|e| EventError::MalformedAttributes(e.to_string()))
    }
}

/// Eventos de TaskRouter que sabemos manejar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    WorkflowTimeout(TaskAttributes),
    TaskCanceled(TaskAttributes),
    Other(String),
}

impl TaskEvent {
    /// Solo se leen los atributos en los eventos que nos interesan;
    /// el resto se acepta sin mirar el payload.
    pub fn from_form(form: &EventForm) -> Result<Self, EventError> {
        match form.event_type.as_str() {
            EVENT_WORKFLOW_TIMEOUT => Ok(TaskEvent::WorkflowTimeout(Self::attributes(form)?)),
            EVENT_TASK_CANCELED => Ok(TaskEvent::TaskCanceled(Self::attributes(form)?)),
            other => Ok(TaskEvent::Other(other.to_string())),
        }
    }

    fn attributes(form: &EventForm) -> Result<TaskAttributes, EventError> {
        let raw = form.task_attributes.as_deref().ok_or_else(|| {
            EventError::MalformedAttributes("falta el campo TaskAttributes".to_string())
        })?;
        TaskAttributes::parse(raw)
    }
}

/// Respuesta al callback de asignación.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentInstruction {
    pub instruction: &'static str,
    pub post_work_activity_sid: String,
}

impl AssignmentInstruction {
    pub fn dequeue(post_work_activity_sid: &str) -> Self {
        Self {
            instruction: "dequeue",
            post_work_activity_sid: post_work_activity_sid.to_string(),
        }
    }
}
