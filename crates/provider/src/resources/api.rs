use async_trait::async_trait;
use tracing::{Span, debug, field, instrument};
use unkey_client::SharedClient;
use unkey_client::models::{CreateApiRequest, DeleteApiRequest, GetApiRequest};
use unkey_tfsdk::{
    Attr, CreateRequest, DeleteRequest, DeleteResponse, Diagnostic, Diagnostics, ProviderData,
    ReadRequest, Resource, ResourceResponse, Schema, UpdateRequest, Value,
};

use super::{ClientSlot, api_error, respond, respond_delete, state_id};
use crate::models::ApiModel;
use crate::schemas::api_schema;

const TYPE_NAME: &str = "unkey_api";

/// `unkey_api`: an API namespace. Every attribute forces replacement, so
/// update only echoes the plan.
#[derive(Debug, Default)]
pub struct ApiResource {
    client: ClientSlot,
}

impl ApiResource {
    /// An unconfigured resource, waiting for provider configure.
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

    #[instrument(name = "unkey_api_create", skip_all, fields(id = field::Empty))]
    async fn create_api(&self, plan: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: ApiModel = plan.decode()?;

        let created = client
            .create_api(CreateApiRequest {
                name: model.name.known_str().unwrap_or_default().to_string(),
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Creating Unkey API",
                    "Could not create API, unexpected error",
                    &e,
                )
            })?;

        Span::current().record("id", created.api_id.as_str());
        debug!("Created API");
        model.id = Attr::Known(created.api_id);
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_api_read", skip_all, fields(id = field::Empty))]
    async fn read_api(&self, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: ApiModel = state.decode()?;
        let id = state_id(&model.id, "API")?;
        Span::current().record("id", id.as_str());

        let api = client
            .get_api(GetApiRequest { api_id: id.clone() })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Unkey API",
                    format!("Could not read Unkey API ID {id}"),
                    &e,
                )
            })?;

        model.id = Attr::Known(api.id);
        model.name = Attr::Known(api.name);
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_api_delete", skip_all, fields(id = field::Empty))]
    async fn delete_api(&self, state: &Value) -> Result<(), Diagnostic> {
        let client = self.client.get()?;
        let model: ApiModel = state.decode()?;
        let id = state_id(&model.id, "API")?;
        Span::current().record("id", id.as_str());

        client
            .delete_api(DeleteApiRequest { api_id: id })
            .await
            .map_err(|e| {
                api_error(
                    "Error Deleting Unkey API",
                    "Could not delete API, unexpected error",
                    &e,
                )
            })?;
        debug!("Deleted API");
        Ok(())
    }
}

#[async_trait]
impl Resource for ApiResource {
    fn type_suffix(&self) -> &'static str {
        "api"
    }

    fn schema(&self) -> Schema {
        api_schema()
    }

    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(provider_data)
    }

    async fn create(&self, request: CreateRequest) -> ResourceResponse {
        respond(TYPE_NAME, "create", self.create_api(&request.plan).await)
    }

    async fn read(&self, request: ReadRequest) -> ResourceResponse {
        respond(TYPE_NAME, "read", self.read_api(&request.state).await)
    }

    async fn update(&self, request: UpdateRequest) -> ResourceResponse {
        ResourceResponse::with_state(request.plan)
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        respond_delete(TYPE_NAME, self.delete_api(&request.state).await)
    }
}

#[cfg(test)]
mod tests {
    use unkey_tfsdk::{AttrValue, ObjectValue};

    use super::*;
    use crate::testing::FakeUnkey;

    fn plan(name: &str) -> Value {
        ObjectValue::new()
            .with("id", &Attr::<String>::Unknown)
            .with("name", &name.to_string())
            .into()
    }

    #[tokio::test]
    async fn test_create_read_delete() {
        let (fake, client) = FakeUnkey::shared();
        let resource = ApiResource::with_client(client);

        let created = resource.create(CreateRequest { plan: plan("payments") }).await;
        assert!(!created.diagnostics.has_error());
        let state = created.state.unwrap();
        let model: ApiModel = state.decode().unwrap();
        let id = model.id.known_str().unwrap().to_string();
        assert!(fake.state.lock().apis.contains_key(&id));

        let read = resource.read(ReadRequest { state: state.clone() }).await;
        assert_eq!(read.state, Some(state.clone()));

        let deleted = resource.delete(DeleteRequest { state }).await;
        assert!(deleted.diagnostics.is_empty());
        assert!(fake.state.lock().apis.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_api_is_error() {
        let (_, client) = FakeUnkey::shared();
        let resource = ApiResource::with_client(client);
        let state: Value = ApiModel {
            id: Attr::Known("api_gone".into()),
            name: Attr::Known("payments".into()),
        }
        .to_value();

        let read = resource.read(ReadRequest { state }).await;
        assert!(read.state.is_none());
        let diag = read.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Error Reading Unkey API");
        assert!(diag.detail.contains("api_gone"));
    }

    #[tokio::test]
    async fn test_update_echoes_plan() {
        let resource = ApiResource::new();
        let plan = plan("payments");
        let updated = resource
            .update(UpdateRequest {
                plan: plan.clone(),
                state: Value::Null,
            })
            .await;
        assert_eq!(updated.state, Some(plan));
    }

    #[tokio::test]
    async fn test_unconfigured_create_fails() {
        let created = ApiResource::new()
            .create(CreateRequest { plan: plan("payments") })
            .await;
        assert_eq!(
            created.diagnostics.iter().next().unwrap().summary,
            "Unconfigured Unkey Client"
        );
    }
}
