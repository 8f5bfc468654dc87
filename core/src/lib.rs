//! Core of the crispy language: values, reader, environment, evaluator and
//! builtins.

pub mod api;
pub mod environment;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod stdlib;
pub mod values;
