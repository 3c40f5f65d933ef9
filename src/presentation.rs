/// View data for the bookmark table, notices and field marks
///
/// Nothing here touches the DOM; the Yew components only read these.

use crate::bookmark::BookmarkRecord;
use crate::error::ValidationError;
use crate::validation::{is_valid_name, is_valid_url};

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkRow {
    /// 1-based, as shown in the `#` column
    pub position: usize,
    /// 0-based, passed back to the delete action
    pub index: usize,
    pub name: String,
    pub visit_url: String,
}

pub fn rows(records: &[BookmarkRecord]) -> Vec<BookmarkRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| BookmarkRow {
            position: index + 1,
            index,
            name: record.name.clone(),
            visit_url: record.visit_url(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A pass/fail message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn added() -> Self {
        Notice {
            kind: NoticeKind::Success,
            title: "Success!".to_string(),
            text: "Your site has been successfully added.".to_string(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::Name => Notice::error(
                "Invalid Site Name",
                "Please enter a valid site name! It should be at least 3 characters long and can include letters, numbers, spaces, dashes (-), and underscores (_).",
            ),
            ValidationError::Url => Notice::error(
                "Invalid URL",
                "Please enter a valid URL! Ensure it starts with 'http://' or 'https://' and follows the correct URL format.",
            ),
            ValidationError::Both => Notice::error(
                "Invalid Inputs",
                "Both the site name and URL are invalid. Please correct them before submitting.",
            ),
        }
    }
}

/// Live validity marking of a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    /// Not typed into yet, or just cleared
    #[default]
    Pristine,
    Valid,
    Invalid,
}

impl FieldMark {
    fn from_check(valid: bool) -> Self {
        if valid {
            FieldMark::Valid
        } else {
            FieldMark::Invalid
        }
    }

    pub fn for_name(text: &str) -> Self {
        Self::from_check(is_valid_name(text))
    }

    pub fn for_url(text: &str) -> Self {
        Self::from_check(is_valid_url(text))
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FieldMark::Invalid => "form-control is-invalid",
            FieldMark::Pristine | FieldMark::Valid => "form-control",
        }
    }
}
