//! Validation logic for the sign-in, registration and editor forms.
//!
//! Kept apart from the components so the rules can be tested without a DOM.
//! Nothing here touches a store; failures are rendered next to the field.

use classroom_shared::models::{Announcement, Quiz};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum display-name length on registration.
pub const MIN_NAME_LEN: usize = 2;
/// Minimum number of non-empty options per quiz question.
pub const MIN_OPTIONS: usize = 2;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").ok());

/// Validation errors that can occur during form validation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("{0} is required")]
    Required(&'static str),
    /// Email address does not look like `local@domain`
    #[error("Invalid email address")]
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least {min} characters", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,
    /// Name is shorter than [`MIN_NAME_LEN`]
    #[error("Name must be at least {min} characters", min = MIN_NAME_LEN)]
    NameTooShort,
    /// Confirmation left empty
    #[error("Please confirm your password")]
    ConfirmationMissing,
    /// Password confirmation doesn't match password
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    /// A quiz question has no text
    #[error("Question {0} needs text")]
    QuestionTextMissing(usize),
    /// A quiz question has fewer than [`MIN_OPTIONS`] filled options
    #[error("Question {0} needs at least {min} options", min = MIN_OPTIONS)]
    TooFewOptions(usize),
    /// The correct answer points at a missing or empty option
    #[error("Question {0} has no valid correct answer")]
    InvalidCorrectAnswer(usize),
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must be `non-space@non-space`
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if matches {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least [`MIN_PASSWORD_LEN`] characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates the display name entered on registration.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("Name"));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::ConfirmationMissing);
    }
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Validates an announcement before it is created or updated.
pub fn validate_announcement(announcement: &Announcement) -> Result<(), ValidationError> {
    if announcement.title.trim().is_empty() {
        return Err(ValidationError::Required("Title"));
    }
    if announcement.description.trim().is_empty() {
        return Err(ValidationError::Required("Description"));
    }
    Ok(())
}

/// Validates a quiz before it is created or updated.
///
/// Questions are numbered from 1 in the errors, as they are on screen.
pub fn validate_quiz(quiz: &Quiz) -> Result<(), ValidationError> {
    if quiz.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        return Err(ValidationError::Required("Quiz name"));
    }
    for (index, question) in quiz.questions.iter().flatten().enumerate() {
        let number = index + 1;
        if question.question_text.trim().is_empty() {
            return Err(ValidationError::QuestionTextMissing(number));
        }
        let filled = question
            .options
            .iter()
            .filter(|option| !option.trim().is_empty())
            .count();
        if filled < MIN_OPTIONS {
            return Err(ValidationError::TooFewOptions(number));
        }
        let correct_is_filled = question
            .options
            .get(question.correct_answer_index)
            .is_some_and(|option| !option.trim().is_empty());
        if !correct_is_filled {
            return Err(ValidationError::InvalidCorrectAnswer(number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_shared::models::QuizQuestion;

    fn question(text: &str, options: &[&str], correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: None,
            question_text: text.to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
            correct_answer_index: correct,
        }
    }

    fn quiz(name: &str, questions: Vec<QuizQuestion>) -> Quiz {
        Quiz {
            name: Some(name.to_string()),
            questions: Some(questions),
            ..Quiz::default()
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a@b").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("   "), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("userexample.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user @example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("123456").is_ok());
        assert_eq!(validate_password(""), Err(ValidationError::Required("Password")));
        assert_eq!(validate_password("12345"), Err(ValidationError::PasswordTooShort));
        assert!(validate_password("pässwö").is_ok(), "length counts characters");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Al").is_ok());
        assert_eq!(validate_name(" "), Err(ValidationError::Required("Name")));
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("secret1", "secret1").is_ok());
        assert_eq!(
            validate_confirm_password("", "secret1"),
            Err(ValidationError::ConfirmationMissing)
        );
        assert_eq!(
            validate_confirm_password("Secret1", "secret1"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required("Email").to_string(), "Email is required");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::TooFewOptions(2).to_string(),
            "Question 2 needs at least 2 options"
        );
    }

    #[test]
    fn test_validate_announcement() {
        let mut announcement = Announcement {
            title: "Exam moved".to_string(),
            description: "Now on Friday".to_string(),
            ..Announcement::default()
        };
        assert!(validate_announcement(&announcement).is_ok());

        announcement.description = "  ".to_string();
        assert_eq!(
            validate_announcement(&announcement),
            Err(ValidationError::Required("Description"))
        );

        announcement.title.clear();
        assert_eq!(
            validate_announcement(&announcement),
            Err(ValidationError::Required("Title"))
        );
    }

    #[test]
    fn test_validate_quiz() {
        let good = quiz("Sets", vec![question("2+2?", &["3", "4", "", ""], 1)]);
        assert!(validate_quiz(&good).is_ok());

        let unnamed = quiz(" ", vec![]);
        assert_eq!(validate_quiz(&unnamed), Err(ValidationError::Required("Quiz name")));
        assert_eq!(
            validate_quiz(&Quiz::default()),
            Err(ValidationError::Required("Quiz name"))
        );

        let no_text = quiz("Sets", vec![question("ok", &["a", "b"], 0), question("", &["a", "b"], 0)]);
        assert_eq!(validate_quiz(&no_text), Err(ValidationError::QuestionTextMissing(2)));

        let one_option = quiz("Sets", vec![question("q", &["a", " ", ""], 0)]);
        assert_eq!(validate_quiz(&one_option), Err(ValidationError::TooFewOptions(1)));

        let empty_answer = quiz("Sets", vec![question("q", &["a", "b", ""], 2)]);
        assert_eq!(
            validate_quiz(&empty_answer),
            Err(ValidationError::InvalidCorrectAnswer(1))
        );

        let out_of_range = quiz("Sets", vec![question("q", &["a", "b"], 5)]);
        assert_eq!(
            validate_quiz(&out_of_range),
            Err(ValidationError::InvalidCorrectAnswer(1))
        );
    }

    #[test]
    fn test_quiz_without_questions_is_valid() {
        let bare = Quiz {
            name: Some("Draft".to_string()),
            ..Quiz::default()
        };
        assert!(validate_quiz(&bare).is_ok());
    }
}
