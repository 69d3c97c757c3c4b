//! Interaction flows as an explicit screen state machine.
//!
//! The start screen branches into the patient questionnaire or the doctor
//! form; both return to the start screen when finished. Screens hold only
//! presentation state and talk to the knowledge base through `commands`.

mod doctor;
mod patient;

pub use doctor::*;
pub use patient::*;

/// Current screen of the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Start,
    Patient(PatientSession),
    Doctor(DoctorForm),
    Done,
}

/// Choice made on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Patient,
    Doctor,
    Quit,
}

impl StartChoice {
    /// Parse a start-screen answer. Case and surrounding blanks are ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" | "1" | "paciente" => Some(Self::Patient),
            "d" | "2" | "doctor" => Some(Self::Doctor),
            "s" | "q" | "3" | "salir" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Parse a yes/no answer to a symptom question.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "s" | "si" | "sí" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Whether an answer to the symptom checklist asks to uncheck everything.
pub fn is_clear_selection(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "-" | "ninguno")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_choice_accepts_words_letters_and_numbers() {
        assert_eq!(StartChoice::parse("Paciente"), Some(StartChoice::Patient));
        assert_eq!(StartChoice::parse(" p "), Some(StartChoice::Patient));
        assert_eq!(StartChoice::parse("2"), Some(StartChoice::Doctor));
        assert_eq!(StartChoice::parse("DOCTOR"), Some(StartChoice::Doctor));
        assert_eq!(StartChoice::parse("salir"), Some(StartChoice::Quit));
        assert_eq!(StartChoice::parse("enfermera"), None);
        assert_eq!(StartChoice::parse(""), None);
    }

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("Sí"), Some(true));
        assert_eq!(parse_yes_no("s"), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no(" NO "), Some(false));
        assert_eq!(parse_yes_no("quizás"), None);
    }

    #[test]
    fn clear_selection_tokens() {
        assert!(is_clear_selection("-"));
        assert!(is_clear_selection(" Ninguno "));
        assert!(!is_clear_selection(""));
        assert!(!is_clear_selection("1"));
    }
}
