pub mod domain;
pub mod endoflife;
pub mod error;
pub mod format;
pub mod tools;
