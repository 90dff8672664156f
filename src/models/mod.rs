//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod missed_call_model;
pub mod task_model;
