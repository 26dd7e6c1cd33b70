//! Conversions between the persisted [`Todo`] and the wire [`TodoView`].

use crate::{db::Todo, models::TodoView};

pub fn to_view(todo: &Todo) -> TodoView {
    TodoView {
        id: todo.id,
        title: todo.title.clone(),
        category: todo.category.clone(),
        description: todo.description.clone(),
        done: todo.done,
    }
}

pub fn to_views(todos: &[Todo]) -> Vec<TodoView> {
    todos.iter().map(to_view).collect()
}

/// Copies every field, `id` included. Callers creating a new record must
/// clear the id themselves.
pub fn to_entity(view: TodoView) -> Todo {
    Todo {
        id: view.id,
        title: view.title,
        category: view.category,
        description: view.description,
        done: view.done,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_entity, to_view, to_views};
    use crate::db::Todo;

    fn todo(id: i64, title: &str, category: &str, description: Option<&str>, done: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
            done,
        }
    }

    #[test]
    fn to_view_copies_every_field() {
        let entity = todo(1, "Test Todo", "Work", Some("Test Description"), false);

        let view = to_view(&entity);

        assert_eq!(view.id, entity.id);
        assert_eq!(view.title, entity.title);
        assert_eq!(view.category, entity.category);
        assert_eq!(view.description, entity.description);
        assert_eq!(view.done, entity.done);
    }

    #[test]
    fn to_views_preserves_order() {
        let entities = vec![
            todo(2, "Todo 2", "Personal", Some("Description 2"), true),
            todo(1, "Todo 1", "Work", None, false),
        ];

        let views = to_views(&entities);

        let ids: Vec<i64> = views.iter().map(|view| view.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(views[1].description, None);
    }

    #[test]
    fn entity_survives_a_trip_through_the_view() {
        let entities = [
            todo(1, "Todo 1", "Work", Some("Description 1"), false),
            todo(9, "Todo 9", "Home", None, true),
        ];

        for entity in entities {
            assert_eq!(to_entity(to_view(&entity)), entity);
        }
    }

    #[test]
    fn to_entity_keeps_the_supplied_id() {
        let view = to_view(&todo(4, "Todo 4", "Work", None, false));

        assert_eq!(to_entity(view).id, 4);
    }
}
