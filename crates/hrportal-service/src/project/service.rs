//! Project CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::{ProjectStore, StaffStore};
use hrportal_entity::project::{NewProject, Project, ProjectWithAssignee};

/// Manages projects and their assignees.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectStore>,
    staff: Arc<dyn StaffStore>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(stores: &Stores) -> Self {
        Self {
            projects: stores.projects.clone(),
            staff: stores.staff.clone(),
        }
    }

    /// All projects, newest first.
    pub async fn list(&self) -> Result<Vec<ProjectWithAssignee>, AppError> {
        self.projects.list().await
    }

    /// One project with its assignee.
    pub async fn get(&self, id: Uuid) -> Result<ProjectWithAssignee, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Creates a project.
    pub async fn create(&self, data: NewProject) -> Result<Project, AppError> {
        let data = self.check(data).await?;
        let project = self.projects.create(&data).await?;
        info!(project_id = %project.id, status = %project.status, "Project created");
        Ok(project)
    }

    /// Replaces every field of a project.
    pub async fn update(&self, id: Uuid, data: NewProject) -> Result<Project, AppError> {
        let data = self.check(data).await?;
        self.projects
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Deletes a project.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.projects.delete(id).await? {
            return Err(AppError::not_found("Project not found"));
        }
        info!(project_id = %id, "Project deleted");
        Ok(())
    }

    async fn check(&self, data: NewProject) -> Result<NewProject, AppError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Project name is required"));
        }
        if let (Some(start), Some(end)) = (data.start_date, data.end_date) {
            if end < start {
                return Err(AppError::validation("End date cannot be before start date"));
            }
        }
        if let Some(staff_member_id) = data.staff_member_id {
            if self.staff.find_by_id(staff_member_id).await?.is_none() {
                return Err(AppError::not_found("Employee not found"));
            }
        }
        Ok(NewProject {
            name: name.to_owned(),
            ..data
        })
    }
}
