// SPDX-License-Identifier: MPL-2.0
//! Quote request form.
//!
//! The [`QuoteForm`] trait is the surface other components write to. The
//! concrete [`QuoteFormState`] keeps the field values, decides which group
//! of detail fields is shown for the chosen interest, and records focus
//! requests for the host to carry out.

use crate::page::{Page, QUOTE_ANCHOR, QUOTE_ANCHOR_OFFSET};

/// What the visitor wants a quote for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Interest {
    #[default]
    None,
    Fabric,
    FinishedProduct,
    Samples,
}

impl Interest {
    /// Selectable values in display order.
    pub const ALL: [Interest; 3] = [
        Interest::Fabric,
        Interest::FinishedProduct,
        Interest::Samples,
    ];

    /// Form value submitted for this interest.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Interest::None => "",
            Interest::Fabric => "solo_tela",
            Interest::FinishedProduct => "producto_terminado",
            Interest::Samples => "muestras",
        }
    }

    /// Parses a submitted form value. Unknown values map to `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "solo_tela" => Interest::Fabric,
            "producto_terminado" => Interest::FinishedProduct,
            "muestras" => Interest::Samples,
            _ => Interest::None,
        }
    }

    /// Detail fields shown for this interest.
    #[must_use]
    pub fn field_group(self) -> Option<FieldGroup> {
        match self {
            Interest::Fabric => Some(FieldGroup::Fabric),
            Interest::FinishedProduct => Some(FieldGroup::Product),
            Interest::None | Interest::Samples => None,
        }
    }
}

/// Group of detail fields revealed by an interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Fabric,
    Product,
}

/// Writable surface of the quote form.
pub trait QuoteForm {
    fn set_interest(&mut self, interest: Interest);
    fn set_message(&mut self, message: &str);
    fn set_message_placeholder(&mut self, placeholder: &str);
    fn focus_message(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteFormState {
    interest: Interest,
    /// Card highlighted by the last `select_type`.
    selected_card: Option<Interest>,
    message: String,
    placeholder: Option<String>,
    focus_requested: bool,
}

impl QuoteFormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change notification of the interest field.
    ///
    /// Returns the field group that becomes visible.
    pub fn on_interest_changed(&mut self, interest: Interest) -> Option<FieldGroup> {
        self.interest = interest;
        tracing::debug!(interest = interest.as_str(), "quote interest changed");
        interest.field_group()
    }

    /// Handles a click on one of the product-type cards.
    pub fn select_type<P>(&mut self, interest: Interest, page: &mut P) -> Option<FieldGroup>
    where
        P: Page + ?Sized,
    {
        self.selected_card = Some(interest);
        page.scroll_to(QUOTE_ANCHOR, QUOTE_ANCHOR_OFFSET);
        self.on_interest_changed(interest)
    }

    #[must_use]
    pub fn interest(&self) -> Interest {
        self.interest
    }

    #[must_use]
    pub fn visible_fields(&self) -> Option<FieldGroup> {
        self.interest.field_group()
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<Interest> {
        self.selected_card
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Returns and clears the pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

impl QuoteForm for QuoteFormState {
    fn set_interest(&mut self, interest: Interest) {
        self.on_interest_changed(interest);
    }

    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn set_message_placeholder(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }

    fn focus_message(&mut self) {
        self.focus_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageState;

    #[test]
    fn interest_values_round_trip_through_form_value() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_value(interest.as_str()), interest);
        }
        assert_eq!(Interest::from_value("otro"), Interest::None);
    }

    #[test]
    fn interest_change_selects_field_group() {
        let mut form = QuoteFormState::new();
        assert_eq!(
            form.on_interest_changed(Interest::Fabric),
            Some(FieldGroup::Fabric)
        );
        assert_eq!(
            form.on_interest_changed(Interest::FinishedProduct),
            Some(FieldGroup::Product)
        );
        assert_eq!(form.on_interest_changed(Interest::Samples), None);
        assert_eq!(form.visible_fields(), None);
    }

    #[test]
    fn select_type_scrolls_to_quote_anchor() {
        let mut form = QuoteFormState::new();
        let mut page = PageState::new();

        let fields = form.select_type(Interest::FinishedProduct, &mut page);

        assert_eq!(fields, Some(FieldGroup::Product));
        assert_eq!(form.selected_card(), Some(Interest::FinishedProduct));
        let requests = page.scroll_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].anchor, QUOTE_ANCHOR);
        assert_eq!(requests[0].offset, QUOTE_ANCHOR_OFFSET);
    }

    #[test]
    fn focus_request_is_consumed_once() {
        let mut form = QuoteFormState::new();
        form.focus_message();
        assert!(form.take_focus_request());
        assert!(!form.take_focus_request());
    }

    #[test]
    fn port_writes_update_state() {
        let mut form = QuoteFormState::new();
        form.set_message("hola");
        form.set_message_placeholder("placeholder");
        form.set_message("");
        assert_eq!(form.message(), "");
        assert_eq!(form.placeholder(), Some("placeholder"));
    }
}
