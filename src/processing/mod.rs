//! Text processing and scoring module
//! Holds the skill catalogs, the text utilities, and the resume scorer

pub mod catalog;
pub mod scorer;
pub mod text_processor;
