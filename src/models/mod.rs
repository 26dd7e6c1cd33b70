mod todo;

pub use todo::TodoView;
