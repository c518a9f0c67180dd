// Basic type definitions for the wallet module

/// Snapshot of one owned object returned by the ownership query.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedObjectRecord {
    pub object_id: String,
    pub struct_type: String,
}
