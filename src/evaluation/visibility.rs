//! Visibility of the details panel

use crate::page::{ButtonContent, Display, Icon};

/// Label of the toggle button while the details are hidden
pub const EDIT_LABEL: &str = "View / Update Evaluation";
/// Label of the toggle button while the details are shown
pub const HIDE_LABEL: &str = "Hide Evaluation";

/// Whether the details panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Shown,
}

impl VisibilityState {
    pub fn flip(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Display applied to the details container
    pub fn display(self) -> Display {
        match self {
            Self::Hidden => Display::None,
            Self::Shown => Display::Grid,
        }
    }

    /// Content applied to the toggle button
    pub fn button_content(self) -> ButtonContent {
        match self {
            Self::Hidden => ButtonContent::new(Icon::Edit, EDIT_LABEL),
            Self::Shown => ButtonContent::new(Icon::EyeSlash, HIDE_LABEL),
        }
    }
}
