use async_trait::async_trait;
use tracing::{Span, debug, field, instrument};
use unkey_client::SharedClient;
use unkey_client::models::{CreateRoleRequest, DeleteRoleRequest, GetRoleRequest};
use unkey_tfsdk::{
    Attr, CreateRequest, DeleteRequest, DeleteResponse, Diagnostic, Diagnostics, ProviderData,
    ReadRequest, Resource, ResourceResponse, Schema, UpdateRequest, Value,
};

use super::{ClientSlot, api_error, respond, respond_delete, state_id};
use crate::models::RoleModel;
use crate::schemas::role_schema;

const TYPE_NAME: &str = "unkey_role";

/// `unkey_role`. Immutable after create.
#[derive(Debug, Default)]
pub struct RoleResource {
    client: ClientSlot,
}

impl RoleResource {
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

    #[instrument(name = "unkey_role_create", skip_all, fields(id = field::Empty))]
    async fn create_role(&self, plan: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: RoleModel = plan.decode()?;

        let created = client
            .create_role(CreateRoleRequest {
                name: model.name.known_str().unwrap_or_default().to_string(),
                description: model.description.known().cloned(),
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Creating Unkey Role",
                    "Could not create Role, unexpected error",
                    &e,
                )
            })?;

        Span::current().record("id", created.role_id.as_str());
        debug!("Created role");
        model.id = Attr::Known(created.role_id);
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_role_read", skip_all, fields(id = field::Empty))]
    async fn read_role(&self, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: RoleModel = state.decode()?;
        let id = state_id(&model.id, "role")?;
        Span::current().record("id", id.as_str());

        let role = client
            .get_role(GetRoleRequest { role: id.clone() })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Unkey Role",
                    format!("Could not read Unkey Role ID {id}"),
                    &e,
                )
            })?;

        model.id = Attr::Known(role.id);
        model.name = Attr::Known(role.name);
        model.description = role.description.into();
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_role_delete", skip_all, fields(id = field::Empty))]
    async fn delete_role(&self, state: &Value) -> Result<(), Diagnostic> {
        let client = self.client.get()?;
        let model: RoleModel = state.decode()?;
        let id = state_id(&model.id, "role")?;
        Span::current().record("id", id.as_str());

        client
            .delete_role(DeleteRoleRequest { role: id })
            .await
            .map_err(|e| {
                api_error(
                    "Error Deleting Unkey Role",
                    "Could not delete Role, unexpected error",
                    &e,
                )
            })?;
        debug!("Deleted role");
        Ok(())
    }
}

#[async_trait]
impl Resource for RoleResource {
    fn type_suffix(&self) -> &'static str {
        "role"
    }

    fn schema(&self) -> Schema {
        role_schema()
    }

    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(provider_data)
    }

    async fn create(&self, request: CreateRequest) -> ResourceResponse {
        respond(TYPE_NAME, "create", self.create_role(&request.plan).await)
    }

    async fn read(&self, request: ReadRequest) -> ResourceResponse {
        respond(TYPE_NAME, "read", self.read_role(&request.state).await)
    }

    async fn update(&self, request: UpdateRequest) -> ResourceResponse {
        ResourceResponse::with_state(request.plan)
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        respond_delete(TYPE_NAME, self.delete_role(&request.state).await)
    }
}

#[cfg(test)]
mod tests {
    use unkey_tfsdk::AttrValue;

    use super::*;
    use crate::testing::FakeUnkey;

    #[tokio::test]
    async fn test_role_round_trip_without_description() {
        let (fake, client) = FakeUnkey::shared();
        let resource = RoleResource::with_client(client);
        let plan = RoleModel {
            id: Attr::Unknown,
            name: Attr::Known("admin".into()),
            description: Attr::Null,
        };

        let created = resource
            .create(CreateRequest {
                plan: plan.to_value(),
            })
            .await;
        let state = created.state.unwrap();

        let read = resource.read(ReadRequest { state: state.clone() }).await;
        let model: RoleModel = read.state.unwrap().decode().unwrap();
        assert_eq!(model.name.known_str(), Some("admin"));
        assert!(model.description.is_null());

        resource.delete(DeleteRequest { state }).await;
        assert!(fake.state.lock().roles.is_empty());
    }
}
