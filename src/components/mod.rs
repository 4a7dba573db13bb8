//! Reusable view components shared by the pages.

pub mod feedback;
pub mod text_field;
