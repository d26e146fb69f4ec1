use rand::Rng;
use rand::distr::Alphanumeric;
use std::fmt;

const ID_LENGTH: usize = 12;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub String);

impl ProjectId {
    /// Draw a random identifier. Nothing prevents two draws from being
    /// equal, callers holding a set of projects must check for collisions.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(
            (0..ID_LENGTH)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect(),
        )
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase name, used to build element identifiers.
    pub fn name(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(id: ProjectId, title: String, description: String, people: u32) -> Self {
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human readable staffing, such as "1 person" or "3 persons".
    pub fn persons(&self) -> String {
        if self.people == 1 {
            "1 person".to_owned()
        } else {
            format!("{} persons", self.people)
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

#[test]
fn test_new_project_is_active() {
    let p = Project::new(
        ProjectId("abc".into()),
        "Title".into(),
        "Description".into(),
        3,
    );
    assert_eq!(p.status, ProjectStatus::Active);
}

#[test]
fn test_persons() {
    let p = Project::new(ProjectId("x".into()), "T".into(), "D".into(), 1);
    assert_eq!(p.persons(), "1 person");
    let p = Project { people: 4, ..p };
    assert_eq!(p.persons(), "4 persons");
}

#[test]
fn test_random_id_shape() {
    let mut rng = rand::rng();
    let id = ProjectId::random(&mut rng);
    assert_eq!(id.0.len(), ID_LENGTH);
    assert!(id.0.chars().all(|c| c.is_ascii_alphanumeric()));
}
