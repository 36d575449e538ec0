// Utility functions
// Clipboard copying, copy feedback and browser glue

pub mod clipboard;
pub mod dom;
pub mod errors;
pub mod feedback;

