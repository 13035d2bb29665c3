// SPDX-License-Identifier: MPL-2.0
//! Labels shown by the feedback widget.

use crate::config::{WordingConfig, DEFAULT_FIRST_OPTION_YES};
use crate::feedback::Rating;
use crate::i18n::fluent::I18n;

/// Resolved text for every label, in the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wording {
    pub satisfied: String,
    pub yes: String,
    pub no: String,
    pub comment: String,
    pub comment_placeholder: String,
    pub submit: String,
    pub sending: String,
    pub thanks: String,
    pub error: String,
    pub first_option_yes: bool,
}

impl Wording {
    /// Takes each label from `overrides` when set, otherwise from `i18n`.
    pub fn resolve(i18n: &I18n, overrides: &WordingConfig) -> Self {
        let pick = |custom: &Option<String>, key: &str| {
            custom.clone().unwrap_or_else(|| i18n.tr(key))
        };

        Self {
            satisfied: pick(&overrides.satisfied, "feedback-satisfied"),
            yes: pick(&overrides.yes, "feedback-yes"),
            no: pick(&overrides.no, "feedback-no"),
            comment: pick(&overrides.comment, "feedback-comment"),
            comment_placeholder: pick(
                &overrides.comment_placeholder,
                "feedback-comment-placeholder",
            ),
            submit: pick(&overrides.submit, "feedback-submit"),
            sending: i18n.tr("feedback-sending"),
            thanks: pick(&overrides.thanks, "feedback-thanks"),
            error: pick(&overrides.error, "feedback-error"),
            first_option_yes: overrides
                .first_option_yes
                .unwrap_or(DEFAULT_FIRST_OPTION_YES),
        }
    }

    /// Rating choices in display order.
    #[must_use]
    pub fn rating_order(&self) -> [Rating; 2] {
        if self.first_option_yes {
            [Rating::Satisfied, Rating::NotSatisfied]
        } else {
            [Rating::NotSatisfied, Rating::Satisfied]
        }
    }

    #[must_use]
    pub fn rating_label(&self, rating: Rating) -> &str {
        match rating {
            Rating::Satisfied => &self.yes,
            Rating::NotSatisfied => &self.no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn defaults_come_from_localization() {
        let wording = Wording::resolve(&english(), &WordingConfig::default());

        assert_eq!(wording.satisfied, "Was this service useful?");
        assert_eq!(wording.yes, "Yes, thanks");
        assert_eq!(wording.no, "Not really");
        assert_eq!(wording.comment, "");
        assert_eq!(wording.comment_placeholder, "Please tell us why?");
        assert_eq!(wording.submit, "Send my feedback");
        assert_eq!(wording.thanks, "Thank you for your feedback");
        assert_eq!(wording.error, "Sorry, something went wrong");
        assert!(wording.first_option_yes);
    }

    #[test]
    fn overrides_replace_single_labels() {
        let overrides = WordingConfig {
            yes: Some("Absolutely".to_string()),
            thanks: Some("Cheers".to_string()),
            ..WordingConfig::default()
        };
        let wording = Wording::resolve(&english(), &overrides);

        assert_eq!(wording.yes, "Absolutely");
        assert_eq!(wording.thanks, "Cheers");
        assert_eq!(wording.no, "Not really");
    }

    #[test]
    fn first_option_no_reverses_order() {
        let overrides = WordingConfig {
            first_option_yes: Some(false),
            ..WordingConfig::default()
        };
        let wording = Wording::resolve(&english(), &overrides);

        assert_eq!(
            wording.rating_order(),
            [Rating::NotSatisfied, Rating::Satisfied]
        );
        assert_eq!(wording.rating_label(Rating::NotSatisfied), "Not really");
    }
}
