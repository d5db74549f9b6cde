use async_trait::async_trait;
use tracing::{Span, debug, field, instrument};
use unkey_client::SharedClient;
use unkey_client::models::{
    CreatePermissionRequest, DeletePermissionRequest, GetPermissionRequest,
};
use unkey_tfsdk::{
    Attr, CreateRequest, DeleteRequest, DeleteResponse, Diagnostic, Diagnostics, ProviderData,
    ReadRequest, Resource, ResourceResponse, Schema, UpdateRequest, Value,
};

use super::{ClientSlot, api_error, respond, respond_delete, state_id};
use crate::models::PermissionModel;
use crate::schemas::permission_schema;

const TYPE_NAME: &str = "unkey_permission";

/// `unkey_permission`. Immutable after create.
#[derive(Debug, Default)]
pub struct PermissionResource {
    client: ClientSlot,
}

impl PermissionResource {
    /// An unconfigured resource.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resource bound to `client`.
    #[must_use]
    pub fn with_client(client: SharedClient) -> Self {
        Self {
            client: ClientSlot::with_client(client),
        }
    }

    /// Registry constructor.
    #[must_use]
    pub fn factory() -> Box<dyn Resource> {
        Box::new(Self::new())
    }

    #[instrument(name = "unkey_permission_create", skip_all, fields(id = field::Empty))]
    async fn create_permission(&self, plan: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: PermissionModel = plan.decode()?;

        let created = client
            .create_permission(CreatePermissionRequest {
                name: model.name.known_str().unwrap_or_default().to_string(),
                slug: model.slug.known_str().unwrap_or_default().to_string(),
                description: model.description.known().cloned(),
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Creating Unkey Permission",
                    "Could not create Permission, unexpected error",
                    &e,
                )
            })?;

        Span::current().record("id", created.permission_id.as_str());
        debug!("Created permission");
        model.id = Attr::Known(created.permission_id);
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_permission_read", skip_all, fields(id = field::Empty))]
    async fn read_permission(&self, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: PermissionModel = state.decode()?;
        let id = state_id(&model.id, "permission")?;
        Span::current().record("id", id.as_str());

        let permission = client
            .get_permission(GetPermissionRequest {
                permission: id.clone(),
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Unkey Permission",
                    format!("Could not read Unkey Permission ID {id}"),
                    &e,
                )
            })?;

        model.id = Attr::Known(permission.id);
        model.name = Attr::Known(permission.name);
        model.slug = Attr::Known(permission.slug);
        model.description = permission.description.into();
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_permission_delete", skip_all, fields(id = field::Empty))]
    async fn delete_permission(&self, state: &Value) -> Result<(), Diagnostic> {
        let client = self.client.get()?;
        let model: PermissionModel = state.decode()?;
        let id = state_id(&model.id, "permission")?;
        Span::current().record("id", id.as_str());

        client
            .delete_permission(DeletePermissionRequest { permission: id })
            .await
            .map_err(|e| {
                api_error(
                    "Error Deleting Unkey Permission",
                    "Could not delete Permission, unexpected error",
                    &e,
                )
            })?;
        debug!("Deleted permission");
        Ok(())
    }
}

#[async_trait]
impl Resource for PermissionResource {
    fn type_suffix(&self) -> &'static str {
        "permission"
    }

    fn schema(&self) -> Schema {
        permission_schema()
    }

    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(provider_data)
    }

    async fn create(&self, request: CreateRequest) -> ResourceResponse {
        respond(TYPE_NAME, "create", self.create_permission(&request.plan).await)
    }

    async fn read(&self, request: ReadRequest) -> ResourceResponse {
        respond(TYPE_NAME, "read", self.read_permission(&request.state).await)
    }

    async fn update(&self, request: UpdateRequest) -> ResourceResponse {
        ResourceResponse::with_state(request.plan)
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        respond_delete(TYPE_NAME, self.delete_permission(&request.state).await)
    }
}
