//! Evaluation form widget: details toggle and running total

use super::fields::FieldName;
use super::score::TotalScore;
use super::visibility::VisibilityState;
use crate::page::{Document, ElementHandle, EventKind, PageEvent};

/// Id of the button toggling the details panel
pub const TOGGLE_BUTTON_ID: &str = "toggle-details";
/// Id of the details container
pub const DETAILS_CONTAINER_ID: &str = "details-container";
/// Id of the form holding the criterion inputs
pub const FORM_ID: &str = "eval-form";
/// Id of the input receiving the total
pub const TOTAL_SCORE_ID: &str = "total_score";

/// Widget bound to the elements of an evaluation page.
///
/// Element handles are resolved once by [`attach`](Self::attach) and reused
/// for every toggle and recomputation. Visibility is tracked here rather than
/// read back from the container, so the button label always matches the last
/// state this widget applied.
#[derive(Debug, Clone)]
pub struct EvaluationFormWidget {
    toggle_button: ElementHandle,
    details: ElementHandle,
    total_score: ElementHandle,
    fields: Vec<(FieldName, ElementHandle)>,
    visibility: VisibilityState,
}

impl EvaluationFormWidget {
    /// Bind to the page, hide the details and compute the initial total.
    ///
    /// Returns `None` without touching the page when any of the required
    /// elements is missing.
    pub fn attach<D: Document + ?Sized>(doc: &mut D) -> Option<Self> {
        let toggle_button = doc.element_by_id(TOGGLE_BUTTON_ID)?;
        let details = doc.element_by_id(DETAILS_CONTAINER_ID)?;
        let form = doc.element_by_id(FORM_ID)?;
        let total_score = doc.element_by_id(TOTAL_SCORE_ID)?;

        let fields: Vec<_> = FieldName::ALL
            .iter()
            .filter_map(|name| doc.query_by_name(form, name.as_str()).map(|el| (*name, el)))
            .collect();

        let widget = Self {
            toggle_button,
            details,
            total_score,
            fields,
            visibility: VisibilityState::Hidden,
        };

        widget.apply_visibility(doc);
        doc.add_listener(toggle_button, EventKind::Click);
        for (_, el) in &widget.fields {
            doc.add_listener(*el, EventKind::Input);
        }

        widget.compute_total(doc);
        Some(widget)
    }

    fn apply_visibility<D: Document + ?Sized>(&self, doc: &mut D) {
        doc.set_display(self.details, self.visibility.display());
        doc.set_button_content(self.toggle_button, self.visibility.button_content());
    }

    /// Flip the details panel between hidden and shown
    pub fn toggle<D: Document + ?Sized>(&mut self, doc: &mut D) {
        self.visibility = self.visibility.flip();
        self.apply_visibility(doc);
        tracing::debug!("Details panel now {:?}", self.visibility);
    }

    /// Recompute the total from all current field values and write it out
    pub fn compute_total<D: Document + ?Sized>(&self, doc: &mut D) -> TotalScore {
        let values: Vec<String> = self
            .fields
            .iter()
            .map(|(_, el)| doc.value(*el).unwrap_or_default())
            .collect();
        let total = TotalScore::sum(values.iter().map(String::as_str));
        let rendered = total.to_string();
        doc.set_value(self.total_score, &rendered);
        tracing::trace!("Total recomputed: {rendered}");
        total
    }

    /// React to a page event; returns true when the event was handled
    pub fn handle_event<D: Document + ?Sized>(&mut self, doc: &mut D, event: PageEvent) -> bool {
        match event {
            PageEvent::Click(el) if el == self.toggle_button => {
                self.toggle(doc);
                true
            }
            PageEvent::Input(el) if self.fields.iter().any(|(_, field)| *field == el) => {
                self.compute_total(doc);
                true
            }
            _ => false,
        }
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility
    }

    pub fn total_score(&self) -> ElementHandle {
        self.total_score
    }

    /// Criteria found in the form, in summation order
    pub fn tracked_fields(&self) -> &[(FieldName, ElementHandle)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluation_page;
    use crate::evaluation::visibility::{EDIT_LABEL, HIDE_LABEL};
    use crate::page::{Display, ElementKind, Icon, MockDocument, Page};
    use pretty_assertions::assert_eq;

    fn field(page: &Page, name: FieldName) -> ElementHandle {
        let form = page.element_by_id(FORM_ID).unwrap();
        page.query_by_name(form, name.as_str()).unwrap()
    }

    fn total(page: &Page) -> String {
        let el = page.element_by_id(TOTAL_SCORE_ID).unwrap();
        page.value(el).unwrap()
    }

    fn type_into(page: &mut Page, widget: &mut EvaluationFormWidget, name: FieldName, text: &str) {
        let el = field(page, name);
        page.set_value(el, text);
        widget.handle_event(page, PageEvent::Input(el));
    }

    fn button_label(page: &Page) -> (Icon, String) {
        let el = page.element_by_id(TOGGLE_BUTTON_ID).unwrap();
        match &page.get(el).unwrap().kind {
            ElementKind::Button(content) => (content.icon, content.label.clone()),
            other => panic!("toggle is not a button: {other:?}"),
        }
    }

    fn details_display(page: &Page) -> Display {
        let el = page.element_by_id(DETAILS_CONTAINER_ID).unwrap();
        page.display(el).unwrap()
    }

    mod totals {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mixed_values_sum_to_two_decimals() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();

            type_into(&mut page, &mut widget, FieldName::Aptitude, "10");
            type_into(&mut page, &mut widget, FieldName::CharacterTraits, "5.5");
            type_into(&mut page, &mut widget, FieldName::Fitness, "");
            type_into(&mut page, &mut widget, FieldName::Leadership, "3");
            type_into(&mut page, &mut widget, FieldName::Communication, "1.25");

            assert_eq!(total(&page), "19.75");
        }

        #[test]
        fn test_non_numeric_contributes_zero() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();
            type_into(&mut page, &mut widget, FieldName::Fitness, "abc");
            assert_eq!(total(&page), "0.00");
        }

        #[test]
        fn test_initial_total_computed_on_attach() {
            let mut page = evaluation_page();
            let aptitude = field(&page, FieldName::Aptitude);
            page.set_value(aptitude, "4.5");
            let total_el = page.element_by_id(TOTAL_SCORE_ID).unwrap();
            page.set_value(total_el, "stale");

            EvaluationFormWidget::attach(&mut page).unwrap();
            assert_eq!(total(&page), "4.50");
        }

        #[test]
        fn test_recompute_reflects_only_current_values() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();

            type_into(&mut page, &mut widget, FieldName::Leadership, "8");
            type_into(&mut page, &mut widget, FieldName::Leadership, "2");
            assert_eq!(total(&page), "2.00");

            let first = widget.compute_total(&mut page);
            let second = widget.compute_total(&mut page);
            assert_eq!(first.to_string(), second.to_string());
            assert_eq!(total(&page), "2.00");
        }

        #[test]
        fn test_missing_field_is_skipped() {
            let mut page = Page::new("partial");
            page.push(
                None,
                Some(TOGGLE_BUTTON_ID),
                ElementKind::Button(Default::default()),
            );
            let form = page.push(None, Some(FORM_ID), ElementKind::Form);
            page.push(
                Some(form),
                Some(DETAILS_CONTAINER_ID),
                ElementKind::Container(Display::Grid),
            );
            for (name, value) in [("aptitude", "1"), ("leadership", "2.5")] {
                page.push(
                    Some(form),
                    None,
                    ElementKind::Input(crate::page::Input {
                        name: Some(name.to_string()),
                        value: value.to_string(),
                        ..Default::default()
                    }),
                );
            }
            page.push(
                Some(form),
                Some(TOTAL_SCORE_ID),
                ElementKind::Input(Default::default()),
            );

            let widget = EvaluationFormWidget::attach(&mut page).unwrap();
            let tracked: Vec<FieldName> =
                widget.tracked_fields().iter().map(|(name, _)| *name).collect();
            assert_eq!(tracked, vec![FieldName::Aptitude, FieldName::Leadership]);
            assert_eq!(total(&page), "3.50");
            // one click listener plus one input listener per found field
            assert_eq!(page.listener_count(), 3);
        }

        #[test]
        fn test_fields_outside_form_are_ignored() {
            let mut page = evaluation_page();
            page.push(
                None,
                None,
                ElementKind::Input(crate::page::Input {
                    name: Some("fitness".to_string()),
                    value: "99".to_string(),
                    ..Default::default()
                }),
            );
            EvaluationFormWidget::attach(&mut page).unwrap();
            assert_eq!(total(&page), "0.00");
        }
    }

    mod toggle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state_is_hidden_with_edit_label() {
            let mut page = evaluation_page();
            assert_eq!(details_display(&page), Display::Grid);

            let widget = EvaluationFormWidget::attach(&mut page).unwrap();
            assert_eq!(widget.visibility(), VisibilityState::Hidden);
            assert_eq!(details_display(&page), Display::None);
            assert_eq!(button_label(&page), (Icon::Edit, EDIT_LABEL.to_string()));
        }

        #[test]
        fn test_click_flips_and_second_click_restores() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();
            let button = page.element_by_id(TOGGLE_BUTTON_ID).unwrap();

            assert!(widget.handle_event(&mut page, PageEvent::Click(button)));
            assert_eq!(details_display(&page), Display::Grid);
            assert_eq!(button_label(&page), (Icon::EyeSlash, HIDE_LABEL.to_string()));

            assert!(widget.handle_event(&mut page, PageEvent::Click(button)));
            assert_eq!(details_display(&page), Display::None);
            assert_eq!(button_label(&page), (Icon::Edit, EDIT_LABEL.to_string()));
        }

        #[test]
        fn test_external_display_change_does_not_desync_label() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();
            let details = page.element_by_id(DETAILS_CONTAINER_ID).unwrap();
            page.set_display(details, Display::Block);

            widget.toggle(&mut page);
            assert_eq!(widget.visibility(), VisibilityState::Shown);
            assert_eq!(details_display(&page), Display::Grid);
            assert_eq!(button_label(&page).1, HIDE_LABEL);
        }

        #[test]
        fn test_unrelated_events_are_ignored() {
            let mut page = evaluation_page();
            let mut widget = EvaluationFormWidget::attach(&mut page).unwrap();
            let total_el = widget.total_score();

            assert!(!widget.handle_event(&mut page, PageEvent::Click(total_el)));
            assert!(!widget.handle_event(&mut page, PageEvent::Input(total_el)));
            let aptitude = field(&page, FieldName::Aptitude);
            assert!(!widget.handle_event(&mut page, PageEvent::Click(aptitude)));
            assert_eq!(widget.visibility(), VisibilityState::Hidden);
        }
    }

    mod guard {
        use super::*;
        use pretty_assertions::assert_eq;
        use mockall::predicate::eq;

        fn lookup_without(missing: &'static str) -> impl Fn(&str) -> Option<ElementHandle> {
            move |id: &str| {
                if id == missing {
                    return None;
                }
                match id {
                    TOGGLE_BUTTON_ID => Some(ElementHandle(0)),
                    DETAILS_CONTAINER_ID => Some(ElementHandle(1)),
                    FORM_ID => Some(ElementHandle(2)),
                    TOTAL_SCORE_ID => Some(ElementHandle(3)),
                    _ => None,
                }
            }
        }

        #[test]
        fn test_any_missing_required_element_aborts_silently() {
            for missing in [TOGGLE_BUTTON_ID, DETAILS_CONTAINER_ID, FORM_ID, TOTAL_SCORE_ID] {
                let mut doc = MockDocument::new();
                doc.expect_element_by_id()
                    .returning(lookup_without(missing));
                doc.expect_query_by_name().never();
                doc.expect_add_listener().never();
                doc.expect_set_display().never();
                doc.expect_set_button_content().never();
                doc.expect_set_value().never();

                assert!(EvaluationFormWidget::attach(&mut doc).is_none());
            }
        }

        #[test]
        fn test_missing_required_element_leaves_container_style() {
            let mut bare = Page::new("no total");
            bare.push(
                None,
                Some(TOGGLE_BUTTON_ID),
                ElementKind::Button(Default::default()),
            );
            let form = bare.push(None, Some(FORM_ID), ElementKind::Form);
            let details = bare.push(
                Some(form),
                Some(DETAILS_CONTAINER_ID),
                ElementKind::Container(Display::Grid),
            );

            assert!(EvaluationFormWidget::attach(&mut bare).is_none());
            assert_eq!(bare.display(details), Some(Display::Grid));
            assert_eq!(bare.listener_count(), 0);
        }

        #[test]
        fn test_attach_registers_listeners_on_found_fields() {
            let mut doc = MockDocument::new();
            doc.expect_element_by_id()
                .returning(lookup_without(""));
            doc.expect_query_by_name()
                .returning(|_, name: &str| match name {
                    "aptitude" => Some(ElementHandle(10)),
                    "fitness" => Some(ElementHandle(12)),
                    _ => None,
                });
            doc.expect_set_display()
                .with(eq(ElementHandle(1)), eq(Display::None))
                .times(1)
                .return_const(());
            doc.expect_set_button_content()
                .times(1)
                .return_const(());
            doc.expect_add_listener()
                .with(eq(ElementHandle(0)), eq(EventKind::Click))
                .times(1)
                .return_const(());
            doc.expect_add_listener()
                .with(eq(ElementHandle(10)), eq(EventKind::Input))
                .times(1)
                .return_const(());
            doc.expect_add_listener()
                .with(eq(ElementHandle(12)), eq(EventKind::Input))
                .times(1)
                .return_const(());
            doc.expect_value().returning(|el| {
                if el == ElementHandle(10) {
                    Some("2".to_string())
                } else if el == ElementHandle(12) {
                    Some("0.5".to_string())
                } else {
                    None
                }
            });
            doc.expect_set_value()
                .withf(|el, value: &str| *el == ElementHandle(3) && value == "2.50")
                .times(1)
                .return_const(());

            let widget = EvaluationFormWidget::attach(&mut doc).unwrap();
            assert_eq!(widget.tracked_fields().len(), 2);
        }
    }
}
