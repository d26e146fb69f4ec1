use crate::config::Config;
use crate::loaders::Submission;
use crate::model::{ProjectId, ProjectStatus};
use crate::state::ProjectState;
use crate::views::{InputError, ProjectInput, ProjectList};
use tracing::warn;

/// Outcome of submitting a batch of rows.
#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub accepted: usize,
    /// Line of every rejected row, with the reason.
    pub rejected: Vec<(u64, InputError)>,
}

impl BatchReport {
    pub fn rejected_lines(&self) -> Vec<u64> {
        self.rejected.iter().map(|&(line, _)| line).collect()
    }

    /// Fail if any row was rejected, unless `keep_going` is set.
    pub fn check(&self, keep_going: bool) -> eyre::Result<()> {
        eyre::ensure!(
            keep_going || self.rejected.is_empty(),
            "{} projects were rejected",
            self.rejected.len()
        );
        Ok(())
    }
}

/// The whole screen: one form and the active and finished lists, all
/// sharing the same state.
#[derive(Debug)]
pub struct App {
    pub state: ProjectState,
    pub input: ProjectInput,
    pub active: ProjectList,
    pub finished: ProjectList,
    show_description: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut state = ProjectState::new();
        let input = ProjectInput::new(config.form.clone());
        let active = ProjectList::new(ProjectStatus::Active, &mut state);
        let finished = ProjectList::new(ProjectStatus::Finished, &mut state);
        Self {
            state,
            input,
            active,
            finished,
            show_description: config.display.show_description,
        }
    }

    /// Fill in the form and submit it.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, InputError> {
        self.input.fill(title, description, people);
        self.input.submit(&mut self.state)
    }

    /// Submit every row in order. Rejected rows do not stop the batch.
    pub fn submit_all(&mut self, submissions: &[Submission]) -> BatchReport {
        let mut report = BatchReport::default();
        for submission in submissions {
            match self.submit(
                &submission.title,
                &submission.description,
                &submission.people,
            ) {
                Ok(_) => report.accepted += 1,
                Err(e) => {
                    warn!(line = submission.line, "rejected submission");
                    report.rejected.push((submission.line, e));
                }
            }
        }
        report
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            self.active.render(self.show_description),
            self.finished.render(self.show_description)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_reaches_active_list() {
        let mut app = App::new(&Config::default());
        app.submit("Website", "Build the website", "3").unwrap();
        assert_eq!(app.active.items().len(), 1);
        assert!(app.finished.items().is_empty());
        assert_eq!(app.state.len(), 1);
    }

    #[test]
    fn test_invalid_submission_changes_nothing() {
        let mut app = App::new(&Config::default());
        let before = app.render();
        assert_eq!(app.submit("Website", "Web", "3"), Err(InputError::Invalid));
        assert_eq!(app.render(), before);
        assert_eq!(app.input.description, "Web");
    }

    #[test]
    fn test_batch_reports_physical_lines() {
        let data = "title,description,people\n\"Multi\nline\",Build the website,3\nBad,Desc,9\n";
        let submissions = crate::loaders::load(data.as_bytes()).unwrap();
        let mut app = App::new(&Config::default());
        let report = app.submit_all(&submissions);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, vec![(4, InputError::Invalid)]);
        assert_eq!(report.rejected_lines(), vec![4]);
        assert_eq!(app.active.items().len(), 1);
        assert!(report.check(false).is_err());
        assert!(report.check(true).is_ok());
    }

    #[test]
    fn test_clean_batch_passes() {
        let data = "title,description,people\nWebsite,Build the website,3\nMove,Pack everything,5\n";
        let submissions = crate::loaders::load(data.as_bytes()).unwrap();
        let mut app = App::new(&Config::default());
        let report = app.submit_all(&submissions);
        assert_eq!(report.accepted, 2);
        assert!(report.rejected.is_empty());
        assert!(report.check(false).is_ok());
    }

    #[test]
    fn test_render_screen() {
        let mut config = Config::default();
        config.display.show_description = false;
        let mut app = App::new(&config);
        app.submit("Website", "Build the website", "1").unwrap();
        assert_eq!(
            app.render(),
            "[active-projects] ACTIVE PROJECTS\n  - Website (1 person assigned)\n\n\
             [finished-projects] FINISHED PROJECTS\n  (none)\n"
        );
    }
}
