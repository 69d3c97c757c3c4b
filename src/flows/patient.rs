use std::collections::BTreeMap;

use crate::models::Symptom;

/// Question-by-question walk over every known symptom.
///
/// Symptoms are asked in id order. Once every question is answered the
/// session is complete and its selection is ready for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientSession {
    questions: Vec<Symptom>,
    index: usize,
    selected: Vec<i64>,
}

impl PatientSession {
    pub fn new(symptoms: BTreeMap<i64, String>) -> Self {
        Self {
            questions: symptoms
                .into_iter()
                .map(|(id, name)| Symptom { id, name })
                .collect(),
            index: 0,
            selected: Vec::new(),
        }
    }

    /// Symptom currently being asked, or `None` once complete.
    pub fn current_question(&self) -> Option<&Symptom> {
        self.questions.get(self.index)
    }

    /// Record the answer to the current question and move to the next one.
    /// Answers after completion are ignored.
    pub fn answer(&mut self, present: bool) {
        let Some(symptom) = self.questions.get(self.index) else {
            return;
        };
        if present {
            self.selected.push(symptom.id);
        }
        self.index += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Ids answered "yes", in question order.
    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.questions.len())
    }
}
