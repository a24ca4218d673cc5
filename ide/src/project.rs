//! Resolution of the catalogue and project that apply to a document.

use std::sync::Arc;

use analyzer::Document;

use crate::catalogue::PropertyCatalogue;

/// Opaque identifier of the project a document belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectHandle(pub String);

/// Finds the property catalogue and project for a document.
pub trait DocumentContextFinder: Send + Sync {
    /// `None` while the catalogue is not loaded; completion then yields nothing.
    fn catalogue(&self, doc: &Document) -> Option<Arc<PropertyCatalogue>>;

    fn project(&self, _doc: &Document) -> Option<ProjectHandle> {
        None
    }
}

/// Returns the same catalogue and project for every document.
#[derive(Debug, Clone, Default)]
pub struct StaticContextFinder {
    catalogue: Option<Arc<PropertyCatalogue>>,
    project: Option<ProjectHandle>,
}

impl StaticContextFinder {
    pub fn new(catalogue: impl Into<Arc<PropertyCatalogue>>) -> Self {
        Self {
            catalogue: Some(catalogue.into()),
            project: None,
        }
    }

    /// A finder whose catalogue has not been loaded yet.
    pub fn not_loaded() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: ProjectHandle) -> Self {
        self.project = Some(project);
        self
    }
}

impl DocumentContextFinder for StaticContextFinder {
    fn catalogue(&self, _doc: &Document) -> Option<Arc<PropertyCatalogue>> {
        self.catalogue.clone()
    }

    fn project(&self, _doc: &Document) -> Option<ProjectHandle> {
        self.project.clone()
    }
}
