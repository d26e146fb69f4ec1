use crate::config::FormConfig;
use crate::model::ProjectId;
use crate::state::ProjectState;
use crate::validation::{Validatable, validate};
use tracing::warn;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input, please try again!")]
    Invalid,
}

/// The project creation form. Fields hold the raw text as typed.
#[derive(Clone, Debug, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
    constraints: FormConfig,
}

impl ProjectInput {
    pub fn new(constraints: FormConfig) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            constraints,
        }
    }

    pub fn fill(&mut self, title: &str, description: &str, people: &str) {
        title.clone_into(&mut self.title);
        description.clone_into(&mut self.description);
        people.clone_into(&mut self.people);
    }

    /// Validate the fields and, if they are all acceptable, add the project
    /// to `state` and clear the form. On failure the fields are kept as is.
    pub fn submit(&mut self, state: &mut ProjectState) -> Result<ProjectId, InputError> {
        let (title, description, people) = self.gather_user_input()?;
        let id = state.add_project(&title, &description, people);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn gather_user_input(&self) -> Result<(String, String, u32), InputError> {
        let Ok(people) = self.people.trim().parse::<u32>() else {
            warn!(people = %self.people, "number of people is not a number");
            return Err(InputError::Invalid);
        };
        let title = Validatable::text(self.title.as_str()).required();
        let description = Validatable::text(self.description.as_str())
            .required()
            .min_length(self.constraints.description_min_length);
        let people_validatable = Validatable::number(f64::from(people))
            .required()
            .min(f64::from(self.constraints.people_min))
            .max(f64::from(self.constraints.people_max));
        if validate(&title) && validate(&description) && validate(&people_validatable) {
            Ok((self.title.clone(), self.description.clone(), people))
        } else {
            warn!(
                title = %self.title,
                description = %self.description,
                people = %self.people,
                "rejecting invalid project",
            );
            Err(InputError::Invalid)
        }
    }
}
