//! Evaluation form widget
//!
//! - `fields`: the five fixed criteria
//! - `score`: parsing field text and formatting the total
//! - `visibility`: details panel state
//! - `widget`: binding to a page and reacting to its events
//! - `builtin`: the default evaluation sheet

mod builtin;
mod fields;
mod score;
mod visibility;
mod widget;

pub use builtin::evaluation_page;
pub use visibility::VisibilityState;
pub use widget::EvaluationFormWidget;

#[cfg(test)]
pub use fields::FieldName;
#[cfg(test)]
pub use widget::{DETAILS_CONTAINER_ID, FORM_ID, TOGGLE_BUTTON_ID, TOTAL_SCORE_ID};
