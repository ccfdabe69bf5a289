//! Built-in evaluation sheet used when no page file is configured

use super::fields::FieldName;
use super::visibility::VisibilityState;
use super::widget::{DETAILS_CONTAINER_ID, FORM_ID, TOGGLE_BUTTON_ID, TOTAL_SCORE_ID};
use crate::page::{Display, ElementKind, Input, Page};

/// Title of the built-in page
pub const EVALUATION_PAGE_TITLE: &str = "Individual Evaluation Sheet";

/// Build the evaluation sheet: toggle button, then the form holding the
/// criterion grid and the read-only total.
pub fn evaluation_page() -> Page {
    let mut page = Page::new(EVALUATION_PAGE_TITLE);

    page.push(
        None,
        Some(TOGGLE_BUTTON_ID),
        ElementKind::Button(VisibilityState::Hidden.button_content()),
    );

    let form = page.push(None, Some(FORM_ID), ElementKind::Form);
    let details = page.push(
        Some(form),
        Some(DETAILS_CONTAINER_ID),
        ElementKind::Container(Display::Grid),
    );

    for field in FieldName::ALL {
        page.push(
            Some(details),
            None,
            ElementKind::Input(Input {
                name: Some(field.as_str().to_string()),
                label: Some(field.label().to_string()),
                value: "0".to_string(),
                readonly: false,
            }),
        );
    }

    page.push(
        Some(form),
        Some(TOTAL_SCORE_ID),
        ElementKind::Input(Input {
            name: Some(TOTAL_SCORE_ID.to_string()),
            label: Some("Total Score".to_string()),
            value: String::new(),
            readonly: true,
        }),
    );

    page
}
