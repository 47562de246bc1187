//! UI Components
//!
//! Leptos components making up the ingredients screen.

mod ingredients;
mod ingredient_form;
mod ingredient_list;
mod search;
mod error_modal;
mod loading_indicator;

pub use ingredients::Ingredients;
pub use ingredient_form::IngredientForm;
pub use ingredient_list::IngredientList;
pub use search::Search;
pub use error_modal::ErrorModal;
pub use loading_indicator::LoadingIndicator;
