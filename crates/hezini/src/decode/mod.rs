//! Decoding pipeline: raw bytes -> lines -> classified lines -> document

pub mod classify;
pub mod parser;
pub mod reader;
