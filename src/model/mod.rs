pub use self::project::{Project, ProjectId, ProjectStatus};

mod project;
