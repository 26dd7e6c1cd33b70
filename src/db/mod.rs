pub mod connection;
pub mod entities;
pub mod repository;

/// A persisted todo record.
pub type Todo = entities::todo::Model;
