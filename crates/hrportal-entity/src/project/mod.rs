//! Project entities.

pub mod model;
pub mod status;

pub use model::{NewProject, Project, ProjectWithAssignee};
pub use status::ProjectStatus;
