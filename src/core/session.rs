use crate::config::session::{SessionConfig, Step};
use crate::core::form::RecordListForm;
use crate::core::policy::EntryErrors;
use crate::domain::model::Snapshot;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session: String,
    pub steps_applied: usize,
    pub snapshots: Vec<Snapshot>,
    pub valid: bool,
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub index: usize,
    pub valid: bool,
    pub errors: EntryErrors,
}

/// Replays scripted gestures against a form, rendering after each one.
pub struct SessionRunner<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> SessionRunner<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Applies every step in order. The first failing step aborts the run;
    /// steps before it stay applied to `form`.
    pub fn run(&mut self, config: &SessionConfig, form: &mut RecordListForm) -> Result<SessionReport> {
        tracing::info!(
            session = config.name(),
            steps = config.steps.len(),
            "Starting session"
        );

        self.renderer.render(form)?;

        let mut snapshots = Vec::new();
        for (position, step) in config.steps.iter().enumerate() {
            tracing::debug!(step = position + 1, ?step, "Applying step");
            if let Some(snapshot) = apply_step(form, step)? {
                snapshots.push(snapshot);
            }
            self.renderer.render(form)?;
        }

        let report = build_report(config.name(), config.steps.len(), snapshots, form)?;
        tracing::info!(
            session = config.name(),
            entries = form.len(),
            valid = report.valid,
            submissions = report.snapshots.len(),
            "Session finished"
        );
        Ok(report)
    }
}

fn apply_step(form: &mut RecordListForm, step: &Step) -> Result<Option<Snapshot>> {
    match step {
        Step::Add => {
            form.add_entry();
        }
        Step::Remove { index } => {
            form.remove_entry(*index)?;
        }
        Step::Set {
            index,
            field,
            value,
        } => form.set_field(*index, *field, value.as_str())?,
        Step::Touch { index, field } => form.touch(*index, *field)?,
        Step::Submit => return Ok(Some(form.submit())),
        Step::Reset => form.reset(),
    }
    Ok(None)
}

fn build_report(
    session: &str,
    steps_applied: usize,
    snapshots: Vec<Snapshot>,
    form: &RecordListForm,
) -> Result<SessionReport> {
    let entries = (0..form.len())
        .map(|index| {
            let errors = form.entry_errors(index)?;
            Ok(EntryReport {
                index,
                valid: errors.is_empty(),
                errors,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SessionReport {
        session: session.to_string(),
        steps_applied,
        snapshots,
        valid: form.is_valid(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NullRenderer;
    use crate::config::session::SessionInfo;
    use crate::domain::model::{Field, RecordEntry};
    use crate::utils::error::FormError;

    struct CountingRenderer {
        renders: usize,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _form: &RecordListForm) -> Result<()> {
            self.renders += 1;
            Ok(())
        }
    }

    fn session(steps: Vec<Step>) -> SessionConfig {
        SessionConfig {
            session: SessionInfo {
                name: "test".to_string(),
                description: None,
            },
            steps,
        }
    }

    fn set(index: usize, field: Field, value: &str) -> Step {
        Step::Set {
            index,
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_run_collects_snapshots() {
        let config = session(vec![
            set(0, Field::Name, "Jo"),
            set(0, Field::Email, "jo@x.com"),
            set(0, Field::Mobile, "1234567890"),
            Step::Submit,
            Step::Add,
            Step::Submit,
        ]);
        let mut form = RecordListForm::new();
        let report = SessionRunner::new(NullRenderer)
            .run(&config, &mut form)
            .unwrap();

        assert_eq!(report.steps_applied, 6);
        assert_eq!(report.snapshots.len(), 2);
        assert_eq!(
            report.snapshots[0].userinfo,
            vec![RecordEntry::new("Jo", "jo@x.com", "1234567890")]
        );
        assert_eq!(report.snapshots[1].len(), 2);
        assert!(!report.valid);
        assert!(report.entries[0].valid);
        assert!(!report.entries[1].valid);
        assert_eq!(report.entries[1].errors.len(), 3);
    }

    #[test]
    fn test_renders_initial_state_and_every_step() {
        let config = session(vec![Step::Add, Step::Reset]);
        let mut form = RecordListForm::new();
        let mut runner = SessionRunner::new(CountingRenderer { renders: 0 });
        runner.run(&config, &mut form).unwrap();

        assert_eq!(runner.into_renderer().renders, 3);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_bad_index_aborts_run() {
        let config = session(vec![Step::Add, Step::Remove { index: 5 }, Step::Add]);
        let mut form = RecordListForm::new();
        let err = SessionRunner::new(NullRenderer)
            .run(&config, &mut form)
            .unwrap_err();

        assert!(matches!(err, FormError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(form.len(), 2);
    }
}
