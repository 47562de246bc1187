//! State Reducers
//!
//! Pure transition functions for the ingredient list and the request state.

use crate::models::Ingredient;

/// Transitions of the ingredient list
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientAction {
    /// Replace the whole list (search results)
    ReplaceAll(Vec<Ingredient>),
    /// Append one confirmed ingredient
    AppendOne(Ingredient),
    /// Drop every entry with this id
    RemoveById(String),
}

/// Apply one action to the ingredient list.
///
/// Duplicate ids are not rejected by `AppendOne`.
pub fn ingredient_reducer(mut current: Vec<Ingredient>, action: IngredientAction) -> Vec<Ingredient> {
    match action {
        IngredientAction::ReplaceAll(list) => list,
        IngredientAction::AppendOne(item) => {
            current.push(item);
            current
        }
        IngredientAction::RemoveById(id) => {
            current.retain(|item| item.id != id);
            current
        }
    }
}

/// Status of the single tracked request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Transitions of the request state
#[derive(Debug, Clone, PartialEq)]
pub enum HttpAction {
    /// A request started; clears any previous error
    Send,
    /// A request finished; the error is left as is
    ResponseReceived,
    /// A request failed with a user-facing message
    Failed(String),
    /// Dismiss the current error
    ClearError,
}

pub fn http_reducer(current: HttpState, action: HttpAction) -> HttpState {
    match action {
        HttpAction::Send => HttpState { loading: true, error: None },
        HttpAction::ResponseReceived => HttpState { loading: false, ..current },
        HttpAction::Failed(message) => HttpState { loading: false, error: Some(message) },
        HttpAction::ClearError => HttpState { error: None, ..current },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn make_ingredient(id: &str, title: &str, amount: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            title: title.to_string(),
            amount,
        }
    }

    fn ids(list: &[Ingredient]) -> BTreeSet<String> {
        list.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_append_keeps_order() {
        let list = ingredient_reducer(Vec::new(), IngredientAction::AppendOne(make_ingredient("a", "Apple", 1.0)));
        let list = ingredient_reducer(list, IngredientAction::AppendOne(make_ingredient("b", "Basil", 2.0)));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "a");
        assert_eq!(list[1].id, "b");
    }

    #[test]
    fn test_append_allows_duplicate_ids() {
        let item = make_ingredient("a", "Apple", 1.0);
        let list = ingredient_reducer(vec![item.clone()], IngredientAction::AppendOne(item));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_absent_id_is_identity() {
        let list = vec![make_ingredient("x", "Salt", 1.0), make_ingredient("y", "Pepper", 2.0)];
        let next = ingredient_reducer(list.clone(), IngredientAction::RemoveById("nope".to_string()));
        assert_eq!(next, list);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let list = vec![
            make_ingredient("x", "Salt", 1.0),
            make_ingredient("y", "Pepper", 2.0),
            make_ingredient("x", "Salt", 1.0),
        ];
        let next = ingredient_reducer(list, IngredientAction::RemoveById("x".to_string()));
        assert_eq!(next, vec![make_ingredient("y", "Pepper", 2.0)]);
    }

    #[test]
    fn test_replace_all_discards_old_entries() {
        let list = vec![make_ingredient("x", "Salt", 1.0)];
        let results = vec![make_ingredient("y", "Sugar", 4.0)];
        let next = ingredient_reducer(list, IngredientAction::ReplaceAll(results.clone()));
        assert_eq!(next, results);
    }

    #[test]
    fn test_replace_all_is_idempotent() {
        let results = vec![make_ingredient("y", "Sugar", 4.0), make_ingredient("z", "Flour", 5.0)];
        let once = ingredient_reducer(Vec::new(), IngredientAction::ReplaceAll(results.clone()));
        let twice = ingredient_reducer(once.clone(), IngredientAction::ReplaceAll(results));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_append_remove_matches_set_model() {
        // (append?, id)
        let steps = [
            (true, "a"),
            (true, "b"),
            (false, "a"),
            (true, "c"),
            (false, "zz"),
            (true, "d"),
            (false, "c"),
            (true, "a"),
        ];

        let mut list = Vec::new();
        let mut model: Vec<String> = Vec::new();
        for (append, id) in steps {
            if append {
                list = ingredient_reducer(list, IngredientAction::AppendOne(make_ingredient(id, id, 1.0)));
                model.push(id.to_string());
            } else {
                list = ingredient_reducer(list, IngredientAction::RemoveById(id.to_string()));
                model.retain(|m| m != id);
            }
            assert_eq!(ids(&list), model.iter().cloned().collect());
        }

        let order: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_initial_http_state_is_idle() {
        let state = HttpState::default();
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_send_always_clears_error() {
        let states = [
            HttpState::default(),
            HttpState { loading: false, error: Some("boom".to_string()) },
            HttpState { loading: true, error: Some("boom".to_string()) },
        ];
        for state in states {
            let next = http_reducer(state, HttpAction::Send);
            assert_eq!(next, HttpState { loading: true, error: None });
        }
    }

    #[test]
    fn test_failed_sets_exact_message() {
        let next = http_reducer(
            HttpState { loading: true, error: None },
            HttpAction::Failed("Something went wrong!".to_string()),
        );
        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("Something went wrong!"));
    }

    #[test]
    fn test_response_keeps_error() {
        let state = HttpState { loading: true, error: Some("boom".to_string()) };
        let next = http_reducer(state, HttpAction::ResponseReceived);
        assert_eq!(next, HttpState { loading: false, error: Some("boom".to_string()) });
    }

    #[test]
    fn test_clear_error_keeps_loading() {
        let state = HttpState { loading: true, error: Some("boom".to_string()) };
        let next = http_reducer(state, HttpAction::ClearError);
        assert_eq!(next, HttpState { loading: true, error: None });
    }
}
