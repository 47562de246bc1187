//! Ingredient List Component

use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::Ingredient;

/// Row key: the id plus how many earlier rows share it
pub type RowKey = (String, usize);

/// Pair each ingredient with a stable key; only repeated ids get a count above 0
pub fn keyed_rows(list: Vec<Ingredient>) -> Vec<(RowKey, Ingredient)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    list.into_iter()
        .map(|item| {
            let count = seen.entry(item.id.clone()).or_default();
            let key = (item.id.clone(), *count);
            *count += 1;
            (key, item)
        })
        .collect()
}

/// Loaded ingredients; clicking an entry removes it
#[component]
pub fn IngredientList(
    #[prop(into)] ingredients: Signal<Vec<Ingredient>>,
    on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="ingredient-list">
            <h2>"Loaded Ingredients"</h2>
            <ul>
                <For
                    each=move || keyed_rows(ingredients.get())
                    key=|(key, _)| key.clone()
                    children=move |(_, item)| {
                        let id = item.id.clone();
                        view! {
                            <li on:click=move |_| on_remove.run(id.clone())>
                                <span>{item.title}</span>
                                <span>{format!("{}x", item.amount)}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ingredient(id: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            title: format!("Ingredient {}", id),
            amount: 1.0,
        }
    }

    fn keys(list: Vec<Ingredient>) -> Vec<RowKey> {
        keyed_rows(list).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_keys_survive_removal_of_earlier_row() {
        let before = keys(vec![make_ingredient("a"), make_ingredient("b"), make_ingredient("c")]);
        let after = keys(vec![make_ingredient("b"), make_ingredient("c")]);

        assert_eq!(before[1..], after[..]);
    }

    #[test]
    fn test_duplicate_ids_get_distinct_keys() {
        let rows = keys(vec![make_ingredient("a"), make_ingredient("b"), make_ingredient("a")]);
        assert_eq!(
            rows,
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 0),
                ("a".to_string(), 1),
            ]
        );
    }
}
