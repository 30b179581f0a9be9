use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Correlates the log records of one capture attempt, from shutter to routing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureId(String);

impl_id!(CaptureId);
