//! tests/mod.rs
//! Pruebas de los endpoints contra SQLite en memoria y un CallRouter falso.

pub mod support;
