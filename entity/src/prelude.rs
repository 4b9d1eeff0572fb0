pub use super::todos::Entity as Todos;
