//! Employee (staff member) entities.

pub mod model;
pub mod status;

pub use model::{
    NewStaffMember, StaffMember, StaffProfileUpdate, StaffSummary, StaffUpdate,
    StaffWithDepartment,
};
pub use status::EmploymentStatus;
