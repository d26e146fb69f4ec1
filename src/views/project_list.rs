use crate::model::{Project, ProjectStatus};
use crate::state::{ProjectState, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// One rendered entry of a project list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectItem {
    pub title: String,
    pub persons: String,
    pub description: String,
}

impl From<&Project> for ProjectItem {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            persons: format!("{} assigned", project.persons()),
            description: project.description.clone(),
        }
    }
}

/// List of the projects having a given status. The list is rebuilt from
/// scratch every time the state notifies a change.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    items: Rc<RefCell<Vec<ProjectItem>>>,
    subscription: Subscription,
}

impl ProjectList {
    pub fn new(status: ProjectStatus, state: &mut ProjectState) -> Self {
        let items = Rc::new(RefCell::new(Vec::new()));
        let target = Rc::clone(&items);
        let subscription = state.subscribe(move |projects| {
            let relevant = filter_by_status(&projects, status);
            let mut items = target.borrow_mut();
            items.clear();
            items.extend(relevant.into_iter().map(ProjectItem::from));
            trace!(%status, items = %items.len(), "project list rendered");
        });
        Self {
            status,
            items,
            subscription,
        }
    }

    /// Identifier of the whole widget, such as `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status.name())
    }

    /// Identifier of the list inside the widget, such as
    /// `active-projects-list`.
    #[allow(dead_code)]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.name())
    }

    pub fn header(&self) -> String {
        format!("{} PROJECTS", self.status.name().to_uppercase())
    }

    #[allow(dead_code)]
    pub fn items(&self) -> Vec<ProjectItem> {
        self.items.borrow().clone()
    }

    pub fn render(&self, show_description: bool) -> String {
        let mut out = format!("[{}] {}\n", self.element_id(), self.header());
        let items = self.items.borrow();
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for item in items.iter() {
            out.push_str(&format!("  - {} ({})\n", item.title, item.persons));
            if show_description {
                out.push_str(&format!("    {}\n", item.description));
            }
        }
        out
    }

    /// Stop following the state. Returns `false` if the list was already
    /// detached.
    #[allow(dead_code)]
    pub fn detach(&self, state: &mut ProjectState) -> bool {
        state.unsubscribe(self.subscription)
    }
}

/// Projects of `projects` having `status`, in their original order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}
