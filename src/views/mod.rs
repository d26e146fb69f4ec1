pub use self::project_input::{InputError, ProjectInput};
pub use self::project_list::ProjectList;

mod project_input;
mod project_list;
