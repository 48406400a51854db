//! Request schemas shared across the backend's endpoints.

use super::{Field, Schema};

/// Numeric workspace reference; accepts string-encoded ids.
pub fn workspace_schema() -> Schema {
    Schema::new().field(Field::non_negative_integer("workspaceId").strict(false))
}

/// Workspace reference with no shape constraint on the id.
pub fn generic_workspace_schema() -> Schema {
    Schema::new().field(Field::raw("workspaceId"))
}

/// Zoho workspace ids are opaque strings.
pub fn zoho_workspace_schema() -> Schema {
    Schema::new().field(Field::string("workspaceId").strict(false))
}

pub fn zoho_org_schema() -> Schema {
    Schema::new().field(Field::string("orgId").strict(false))
}

pub fn zoho_view_schema() -> Schema {
    Schema::new()
        .field(Field::string("orgId").strict(false))
        .field(Field::string("workspaceId").strict(false))
}

pub fn property_schema() -> Schema {
    Schema::new().field(Field::raw("propertyValue"))
}

pub fn device_group_schema() -> Schema {
    Schema::new().field(Field::non_negative_integer("workspaceId").strict(false))
}
