//! Line-oriented terminal front end for the interaction flows.
//!
//! One render/step function per [`Screen`]. Input and output are generic so
//! the binary drives stdin/stdout while tests replay scripted answers.
//! End of input ends the session cleanly on any screen.

use std::io::{BufRead, Write};

use console::style;

use crate::commands::{doctor, patient};
use crate::core_state::{CoreError, CoreState};
use crate::flows::{is_clear_selection, parse_yes_no, DoctorForm, PatientSession, Screen, StartChoice};
use crate::models::DiseaseMatch;

const TITLE: &str = "Sistema Experto de Detección de Enfermedades";
const DISCLAIMER: &str =
    "Esto es un prototipo, consulta a tu médico para tener un diagnóstico más exacto.";

/// Format a ranking the way the patient sees it, disclaimer included.
pub fn render_results(ranked: &[DiseaseMatch]) -> String {
    let mut text = String::new();
    if ranked.is_empty() {
        text.push_str(
            "No se encontraron enfermedades correspondientes a los síntomas seleccionados.",
        );
    } else {
        text.push_str("Posibles enfermedades:\n");
        for entry in ranked {
            text.push_str(&format!(
                "- {} (coincidencias con {} síntomas)\n",
                entry.disease_name, entry.matches
            ));
        }
    }
    text.push_str("\n\n");
    text.push_str(DISCLAIMER);
    text
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    colors: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, colors: bool) -> Self {
        Self {
            input,
            output,
            colors,
        }
    }

    /// Run screens from the start screen until the user quits or input ends.
    pub fn run(&mut self, state: &CoreState) -> Result<(), CoreError> {
        let mut screen = Screen::Start;
        loop {
            screen = match screen {
                Screen::Start => self.start(state)?,
                Screen::Patient(session) => self.patient(state, session)?,
                Screen::Doctor(form) => self.doctor(state, form)?,
                Screen::Done => break,
            };
        }
        self.output.flush()?;
        Ok(())
    }

    fn start(&mut self, state: &CoreState) -> Result<Screen, CoreError> {
        self.heading(TITLE)?;
        let Some(answer) = self.prompt("¿Eres paciente o doctor? [p]aciente / [d]octor / [s]alir: ")?
        else {
            return Ok(Screen::Done);
        };

        let next = match StartChoice::parse(&answer) {
            Some(StartChoice::Patient) => {
                let session = PatientSession::new(patient::list_symptoms(state)?);
                self.heading("¿Presentas alguno de los siguientes síntomas?")?;
                Screen::Patient(session)
            }
            Some(StartChoice::Doctor) => {
                Screen::Doctor(DoctorForm::new(patient::list_symptoms(state)?))
            }
            Some(StartChoice::Quit) => Screen::Done,
            None => {
                writeln!(self.output, "Opción no reconocida.")?;
                Screen::Start
            }
        };
        Ok(next)
    }

    /// Ask the current question, or rank once every question is answered.
    fn patient(
        &mut self,
        state: &CoreState,
        mut session: PatientSession,
    ) -> Result<Screen, CoreError> {
        let Some(symptom) = session.current_question() else {
            let ranked = patient::rank_symptoms(state, session.selected())?;
            self.heading("Diagnóstico completado.")?;
            writeln!(self.output, "{}", render_results(&ranked))?;
            writeln!(self.output)?;
            return Ok(Screen::Start);
        };

        let (answered, total) = session.progress();
        let question = format!("({}/{}) {} [s/n]: ", answered + 1, total, symptom.name);
        let Some(answer) = self.prompt(&question)? else {
            return Ok(Screen::Done);
        };

        match parse_yes_no(&answer) {
            Some(present) => session.answer(present),
            None => writeln!(self.output, "Responde 's' o 'n'.")?,
        }
        Ok(Screen::Patient(session))
    }

    /// Fill the form and save it. A rejected save keeps the form open.
    fn doctor(&mut self, state: &CoreState, mut form: DoctorForm) -> Result<Screen, CoreError> {
        self.heading("Agregar nueva enfermedad y síntomas")?;

        let Some(name) = self.prompt("Nombre de la enfermedad: ")? else {
            return Ok(Screen::Done);
        };
        form.set_name(&name);

        writeln!(self.output, "Selecciona los síntomas asociados:")?;
        for (id, symptom) in form.available() {
            let mark = if form.is_checked(*id) { "x" } else { " " };
            writeln!(self.output, "  [{mark}] {id}. {symptom}")?;
        }
        loop {
            let kept = form.checked();
            let question = if kept.is_empty() {
                "Ids separados por comas (vacío para ninguno): ".to_string()
            } else {
                let ids: Vec<String> = kept.iter().map(i64::to_string).collect();
                format!(
                    "Ids separados por comas (vacío para mantener {}, '-' para ninguno): ",
                    ids.join(", ")
                )
            };
            let Some(ids) = self.prompt(&question)? else {
                return Ok(Screen::Done);
            };
            if ids.trim().is_empty() {
                break;
            }
            if is_clear_selection(&ids) {
                form.clear_checked();
                break;
            }
            match form.check_from_list(&ids) {
                Ok(()) => break,
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }

        let Some(new_symptom) = self.prompt("Agregar nuevo síntoma (opcional): ")? else {
            return Ok(Screen::Done);
        };
        form.set_new_symptom(&new_symptom);

        match doctor::add_disease_with_links(state, &form.to_input()) {
            Ok(_) => {
                writeln!(self.output, "Datos guardados correctamente.")?;
                writeln!(self.output)?;
                Ok(Screen::Start)
            }
            Err(CoreError::Validation(message)) => {
                writeln!(self.output, "Error: {message}")?;
                Ok(Screen::Doctor(form))
            }
            Err(e) => Err(e),
        }
    }

    fn heading(&mut self, text: &str) -> Result<(), CoreError> {
        writeln!(
            self.output,
            "{}",
            style(text).bold().cyan().force_styling(self.colors)
        )?;
        Ok(())
    }

    /// Write a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, CoreError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::startup;

    fn seeded_state(dir: &tempfile::TempDir) -> CoreState {
        let state = CoreState::with_db_path(dir.path().join("kb.db"));
        startup(&state).unwrap();
        state
    }

    fn play(state: &CoreState, script: &str) -> String {
        let mut output = Vec::new();
        Terminal::new(script.as_bytes(), &mut output, false)
            .run(state)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn patient_with_fever_and_cough() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "p\ns\ns\nn\nn\nn\nn\nn\nsalir\n");

        assert!(out.contains("(1/7) Fiebre [s/n]: "));
        assert!(out.contains("(7/7) Fatiga extrema [s/n]: "));
        assert!(out.contains("Diagnóstico completado."));
        let gripe = out.find("- Gripe (coincidencias con 2 síntomas)").unwrap();
        let covid = out.find("- COVID-19 (coincidencias con 2 síntomas)").unwrap();
        let bronquitis = out.find("- Bronquitis (coincidencias con 1 síntomas)").unwrap();
        assert!(gripe < covid && covid < bronquitis);
        assert!(out.contains(DISCLAIMER));
    }

    #[test]
    fn patient_without_symptoms_gets_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "p\nn\nn\nn\nn\nn\nn\nn\ns\n");
        assert!(out.contains("No se encontraron enfermedades"));
        assert!(!out.contains("Posibles enfermedades"));
    }

    #[test]
    fn empty_store_goes_straight_to_results() {
        let dir = tempfile::tempdir().unwrap();
        let state = CoreState::with_db_path(dir.path().join("empty.db"));

        let out = play(&state, "p\nsalir\n");
        assert!(!out.contains("[s/n]"));
        assert!(out.contains("No se encontraron enfermedades"));
    }

    #[test]
    fn unrecognised_answers_are_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "enfermera\np\nquizás\ns\n");
        assert!(out.contains("Opción no reconocida."));
        assert!(out.contains("Responde 's' o 'n'."));
        assert_eq!(out.matches("(1/7) Fiebre").count(), 2);
        assert!(out.contains("(2/7) Tos"));
    }

    #[test]
    fn end_of_input_mid_questionnaire_stops_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "p\ns\n");
        assert!(!out.contains("Diagnóstico completado."));
    }

    #[test]
    fn doctor_fixes_missing_name_then_saves() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "d\n\n2,4\n\nAsma\n\n\nsalir\n");

        assert!(out.contains("Error: Por favor, ingrese el nombre de la enfermedad."));
        assert!(out.contains("[x] 2. Tos"));
        assert!(out.contains("vacío para mantener 2, 4"));
        assert!(out.contains("Datos guardados correctamente."));

        let ranked = patient::rank_symptoms(&state, &[2, 4]).unwrap();
        let asma = ranked.iter().find(|m| m.disease_name == "Asma").unwrap();
        assert_eq!(asma.matches, 2);
    }

    #[test]
    fn doctor_can_clear_selection_after_rejected_save() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "d\n\n2,4\n\nOtitis\n-\n\nsalir\n");
        assert!(out.contains("'-' para ninguno"));
        assert!(out.contains("Datos guardados correctamente."));

        let counts = crate::commands::store_counts(&state).unwrap();
        assert_eq!(counts.diseases, 5);
        assert_eq!(counts.links, 10);
        let ranked = patient::rank_symptoms(&state, &[2, 4]).unwrap();
        assert!(ranked.iter().all(|m| m.disease_name != "Otitis"));
    }

    #[test]
    fn doctor_unknown_symptom_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(&dir);

        let out = play(&state, "d\nSinusitis\n9\n3\nCongestión nasal\nsalir\n");
        assert!(out.contains("No existe un síntoma con id 9."));
        assert!(out.contains("Datos guardados correctamente."));

        let symptoms = patient::list_symptoms(&state).unwrap();
        let (new_id, _) = symptoms
            .iter()
            .find(|(_, name)| name.as_str() == "Congestión nasal")
            .unwrap();
        let ranked = patient::rank_symptoms(&state, &[3, *new_id]).unwrap();
        let sinusitis = ranked.iter().find(|m| m.disease_name == "Sinusitis").unwrap();
        assert_eq!(sinusitis.matches, 2);
    }

    #[test]
    fn results_text_lists_each_candidate() {
        let ranked = vec![
            DiseaseMatch {
                disease_id: 1,
                disease_name: "Gripe".into(),
                matches: 2,
            },
            DiseaseMatch {
                disease_id: 4,
                disease_name: "Neumonía".into(),
                matches: 1,
            },
        ];
        let text = render_results(&ranked);
        assert!(text.starts_with("Posibles enfermedades:\n- Gripe (coincidencias con 2 síntomas)\n"));
        assert!(text.contains("- Neumonía (coincidencias con 1 síntomas)"));
        assert!(text.ends_with(DISCLAIMER));
    }
}
