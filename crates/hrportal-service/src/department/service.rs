//! Department CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::DepartmentStore;
use hrportal_entity::department::{Department, NewDepartment};

/// Manages departments.
#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentStore>,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(stores: &Stores) -> Self {
        Self {
            departments: stores.departments.clone(),
        }
    }

    /// All departments by name.
    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        self.departments.list().await
    }

    /// One department by id.
    pub async fn get(&self, id: Uuid) -> Result<Department, AppError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    /// Creates a department. Names are unique.
    pub async fn create(&self, data: NewDepartment) -> Result<Department, AppError> {
        let data = normalize(data)?;
        let department = self.departments.create(&data).await?;
        info!(department_id = %department.id, name = %department.name, "Department created");
        Ok(department)
    }

    /// Replaces a department's name and description.
    pub async fn update(&self, id: Uuid, data: NewDepartment) -> Result<Department, AppError> {
        let data = normalize(data)?;
        self.departments
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    /// Deletes a department. Its members stay, unassigned.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.departments.delete(id).await? {
            return Err(AppError::not_found("Department not found"));
        }
        info!(department_id = %id, "Department deleted");
        Ok(())
    }
}

fn normalize(data: NewDepartment) -> Result<NewDepartment, AppError> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Department name is required"));
    }
    Ok(NewDepartment {
        name: name.to_owned(),
        description: data.description.filter(|d| !d.trim().is_empty()),
    })
}
