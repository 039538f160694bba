//! Status statistics returned by the backend

use serde::{Deserialize, Serialize};

/// One `{status, count}` row of a status-stats response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount<S> {
    pub status: S,
    pub count: u64,
}
