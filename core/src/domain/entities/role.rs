//! Role entity for coarse-grained authorization groups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named role users can be assigned to
///
/// Role names are unique; membership is many-to-many and managed entirely
/// by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role
    pub id: Uuid,

    /// Unique role name
    pub name: String,
}

impl Role {
    /// Creates a new Role instance
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
