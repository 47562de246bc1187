//! Ingredient Form Component
//!
//! Title + amount inputs for creating a new ingredient.

use leptos::prelude::*;

use crate::components::LoadingIndicator;
use crate::models::IngredientDraft;

/// Validate raw form input; `None` when the title is blank or the amount is not a number
pub fn parse_draft(title: &str, amount: &str) -> Option<IngredientDraft> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let amount = amount.trim().parse::<f64>().ok().filter(|a| a.is_finite())?;
    Some(IngredientDraft {
        title: title.to_string(),
        amount,
    })
}

/// Form for adding ingredients.
///
/// Stays mounted during requests; the submit button is disabled and a spinner
/// is shown while `loading` is set.
#[component]
pub fn IngredientForm(
    on_add: Callback<IngredientDraft>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (amount, set_amount) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match parse_draft(&title.get(), &amount.get()) {
            Some(draft) => on_add.run(draft),
            None => log::debug!("ignoring incomplete ingredient form"),
        }
    };

    view! {
        <section class="ingredient-form">
            <form on:submit=submit>
                <div class="form-control">
                    <label for="title">"Name"</label>
                    <input
                        type="text"
                        id="title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label for="amount">"Amount"</label>
                    <input
                        type="number"
                        id="amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </div>
                <div class="ingredient-form__actions">
                    <button type="submit" disabled=move || loading.get()>"Add Ingredient"</button>
                    <Show when=move || loading.get()>
                        <LoadingIndicator />
                    </Show>
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draft_trims_input() {
        let draft = parse_draft("  Tomato ", " 3 ").unwrap();
        assert_eq!(draft, IngredientDraft { title: "Tomato".to_string(), amount: 3.0 });
    }

    #[test]
    fn test_parse_draft_accepts_fractions() {
        assert_eq!(parse_draft("Flour", "0.25").unwrap().amount, 0.25);
    }

    #[test]
    fn test_parse_draft_rejects_blank_title() {
        assert!(parse_draft("   ", "3").is_none());
    }

    #[test]
    fn test_parse_draft_rejects_bad_amount() {
        assert!(parse_draft("Salt", "").is_none());
        assert!(parse_draft("Salt", "a pinch").is_none());
        assert!(parse_draft("Salt", "NaN").is_none());
        assert!(parse_draft("Salt", "inf").is_none());
    }
}
