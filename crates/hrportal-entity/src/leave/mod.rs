//! Leave request entities.

pub mod model;
pub mod status;

pub use model::{LeaveRequest, LeaveWithRequester, NewLeaveRequest};
pub use status::LeaveStatus;
