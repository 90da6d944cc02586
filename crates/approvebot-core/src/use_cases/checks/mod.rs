pub(crate) mod determine_ci_status;

pub use determine_ci_status::{CiStatus, DetermineCiStatusInterface};
#[cfg(any(test, feature = "testkit"))]
pub use determine_ci_status::MockDetermineCiStatusInterface;
