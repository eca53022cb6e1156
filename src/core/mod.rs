// src/core/mod.rs

pub mod lexer;
pub mod net;
pub mod sanitize;
