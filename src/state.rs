use crate::model::{Project, ProjectId};
use rand::rngs::ThreadRng;
use std::fmt;
use tracing::{debug, trace};

/// Callback receiving an owned copy of every project after each mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Handle returned by [`ProjectState::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

/// In-memory store of projects. The list only grows, and listeners are
/// called synchronously, in registration order, after each addition.
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
    rng: ThreadRng,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectState")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProjectState {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            rng: rand::rng(),
        }
    }

    /// Register a listener for future mutations. Past mutations are not
    /// replayed.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        trace!(?subscription, listeners = %self.listeners.len(), "listener registered");
        subscription
    }

    /// Remove a listener. Returns `false` if it was not registered.
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        before != self.listeners.len()
    }

    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
        let id = self.fresh_id();
        let project = Project::new(id.clone(), title.to_owned(), description.to_owned(), people);
        debug!(project = %project, people, "adding project");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Owned copy of all projects, in insertion order.
    #[allow(dead_code)]
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[allow(dead_code)]
    pub fn listeners_count(&self) -> usize {
        self.listeners.len()
    }

    fn fresh_id(&mut self) -> ProjectId {
        loop {
            let id = ProjectId::random(&mut self.rng);
            if self.projects.iter().all(|p| p.id != id) {
                return id;
            }
            debug!(%id, "identifier collision, drawing again");
        }
    }

    fn notify(&mut self) {
        trace!(listeners = %self.listeners.len(), "notifying listeners");
        for (_, listener) in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}
