use async_trait::async_trait;
use tracing::{Span, debug, field, instrument};
use unkey_client::SharedClient;
use unkey_client::models::{
    CreateIdentityRequest, DeleteIdentityRequest, GetIdentityRequest, IdentityData,
    UpdateIdentityRequest,
};
use unkey_tfsdk::{
    Attr, CreateRequest, DeleteRequest, DeleteResponse, Diagnostic, Diagnostics,
    ProviderData, ReadRequest, Resource, ResourceResponse, Schema, UpdateRequest, Value,
};

use super::{
    ClientSlot, api_error, meta_differs, meta_from_api, meta_to_api, respond, respond_delete,
    state_id,
};
use crate::conversions::{ratelimits_from_api, ratelimits_to_api};
use crate::models::IdentityModel;
use crate::schemas::identity_schema;

const TYPE_NAME: &str = "unkey_identity";

/// Partial update for an identity: meta and ratelimits, when they changed.
pub(crate) fn identity_change_set(
    identity_id: &str,
    plan: &IdentityModel,
    state: &IdentityModel,
) -> Result<UpdateIdentityRequest, Diagnostic> {
    let mut request = UpdateIdentityRequest::new(identity_id);
    if meta_differs(&plan.meta, &state.meta) {
        request.meta = Some(meta_to_api(&plan.meta)?);
    }
    if !plan.ratelimits.is_unknown() && plan.ratelimits != state.ratelimits {
        request.ratelimits = Some(ratelimits_to_api(&plan.ratelimits).unwrap_or_default());
    }
    Ok(request)
}

fn apply_identity_data(model: &mut IdentityModel, data: IdentityData) -> Result<(), Diagnostic> {
    model.id = Attr::Known(data.id);
    model.external_id = Attr::Known(data.external_id);
    model.meta = meta_from_api(&model.meta, data.meta.as_ref())?;
    model.ratelimits = ratelimits_from_api(&data.ratelimits);
    Ok(())
}

/// `unkey_identity`: a user or organisation that keys are grouped under.
#[derive(Debug, Default)]
pub struct IdentityResource {
    client: ClientSlot,
}

impl IdentityResource {
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

    #[instrument(name = "unkey_identity_create", skip_all, fields(id = field::Empty))]
    async fn create_identity(&self, plan: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: IdentityModel = plan.decode()?;

        let request = CreateIdentityRequest {
            external_id: model.external_id.known_str().unwrap_or_default().to_string(),
            meta: meta_to_api(&model.meta)?,
            ratelimits: ratelimits_to_api(&model.ratelimits),
        };
        let created = client.create_identity(request).await.map_err(|e| {
            api_error(
                "Error Creating Unkey Identity",
                "Could not create Identity, unexpected error",
                &e,
            )
        })?;

        Span::current().record("id", created.identity_id.as_str());
        debug!("Created identity");
        model.id = Attr::Known(created.identity_id);
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_identity_read", skip_all, fields(id = field::Empty))]
    async fn read_identity(&self, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: IdentityModel = state.decode()?;
        let id = state_id(&model.id, "identity")?;
        Span::current().record("id", id.as_str());

        let data = client
            .get_identity(GetIdentityRequest {
                identity: id.clone(),
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Unkey Identity",
                    format!("Could not read Unkey Identity ID {id}"),
                    &e,
                )
            })?;

        apply_identity_data(&mut model, data)?;
        Ok(Value::encode(&model))
    }

    /// The update response carries the refreshed identity, so it doubles as
    /// the re-read. Without changes a plain read is issued instead.
    #[instrument(name = "unkey_identity_update", skip_all, fields(id = field::Empty))]
    async fn update_identity(&self, plan: &Value, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: IdentityModel = plan.decode()?;
        let prior: IdentityModel = state.decode()?;
        let id = state_id(&prior.id, "identity")?;
        Span::current().record("id", id.as_str());

        let change_set = identity_change_set(&id, &model, &prior)?;
        let data = if change_set.has_changes() {
            let data = client.update_identity(change_set).await.map_err(|e| {
                api_error(
                    "Error Updating Unkey Identity",
                    format!("Could not update Unkey Identity ID {id}"),
                    &e,
                )
            })?;
            debug!("Updated identity");
            data
        } else {
            client
                .get_identity(GetIdentityRequest {
                    identity: id.clone(),
                })
                .await
                .map_err(|e| {
                    api_error(
                        "Error Reading Updated Unkey Identity",
                        format!("Could not read Unkey Identity ID {id} after update"),
                        &e,
                    )
                })?
        };

        apply_identity_data(&mut model, data)?;
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_identity_delete", skip_all, fields(id = field::Empty))]
    async fn delete_identity(&self, state: &Value) -> Result<(), Diagnostic> {
        let client = self.client.get()?;
        let model: IdentityModel = state.decode()?;
        let id = state_id(&model.id, "identity")?;
        Span::current().record("id", id.as_str());

        client
            .delete_identity(DeleteIdentityRequest { identity: id })
            .await
            .map_err(|e| {
                api_error(
                    "Error Deleting Unkey Identity",
                    "Could not delete Identity, unexpected error",
                    &e,
                )
            })?;
        debug!("Deleted identity");
        Ok(())
    }
}

#[async_trait]
impl Resource for IdentityResource {
    fn type_suffix(&self) -> &'static str {
        "identity"
    }

    fn schema(&self) -> Schema {
        identity_schema()
    }

    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(provider_data)
    }

    async fn create(&self, request: CreateRequest) -> ResourceResponse {
        respond(TYPE_NAME, "create", self.create_identity(&request.plan).await)
    }

    async fn read(&self, request: ReadRequest) -> ResourceResponse {
        respond(TYPE_NAME, "read", self.read_identity(&request.state).await)
    }

    async fn update(&self, request: UpdateRequest) -> ResourceResponse {
        respond(
            TYPE_NAME,
            "update",
            self.update_identity(&request.plan, &request.state).await,
        )
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        respond_delete(TYPE_NAME, self.delete_identity(&request.state).await)
    }
}

#[cfg(test)]
mod tests {
    use unkey_tfsdk::AttrValue;

    use super::*;
    use crate::models::RatelimitModel;
    use crate::testing::FakeUnkey;

    fn requests_limit() -> RatelimitModel {
        RatelimitModel {
            name: Attr::Known("requests".into()),
            limit: Attr::Known(100),
            duration: Attr::Known(60_000),
            auto_apply: Attr::Known(true),
        }
    }

    fn plan() -> IdentityModel {
        IdentityModel {
            id: Attr::Unknown,
            external_id: Attr::Known("user_42".into()),
            meta: Attr::Known(r#"{"tier":"pro"}"#.into()),
            ratelimits: Attr::Known(vec![requests_limit()]),
        }
    }

    #[test]
    fn test_change_set_only_changed_fields() {
        let state = plan();
        let mut next = state.clone();
        assert!(!identity_change_set("id_1", &next, &state).unwrap().has_changes());

        next.ratelimits = Attr::Null;
        let request = identity_change_set("id_1", &next, &state).unwrap();
        assert_eq!(request.ratelimits, Some(Vec::new()));
        assert_eq!(request.meta, None);
    }

    #[tokio::test]
    async fn test_identity_lifecycle() {
        let (fake, client) = FakeUnkey::shared();
        let resource = IdentityResource::with_client(client);

        let state = resource
            .create(CreateRequest {
                plan: plan().to_value(),
            })
            .await
            .state
            .unwrap();
        let created: IdentityModel = state.decode().unwrap();
        let id = created.id.known_str().unwrap().to_string();

        let read = resource.read(ReadRequest { state: state.clone() }).await;
        assert_eq!(read.state, Some(state.clone()));

        let mut next = created.clone();
        next.meta = Attr::Null;
        let updated: IdentityModel = resource
            .update(UpdateRequest {
                plan: next.to_value(),
                state,
            })
            .await
            .state
            .unwrap()
            .decode()
            .unwrap();
        assert!(updated.meta.is_null());
        assert_eq!(updated.ratelimits, Attr::Known(vec![requests_limit()]));
        assert_eq!(fake.state.lock().identity_updates[0].meta, Some(None));

        resource
            .delete(DeleteRequest {
                state: updated.to_value(),
            })
            .await;
        assert!(!fake.state.lock().identities.contains_key(&id));
    }

    #[tokio::test]
    async fn test_meta_formatting_survives_refresh() {
        let (fake, client) = FakeUnkey::shared();
        let resource = IdentityResource::with_client(client);
        let written = IdentityModel {
            meta: Attr::Known(r#"{"tier": "pro", "a": 1}"#.into()),
            ..plan()
        };

        let state = resource
            .create(CreateRequest {
                plan: written.to_value(),
            })
            .await
            .state
            .unwrap();
        let read: IdentityModel = resource
            .read(ReadRequest { state })
            .await
            .state
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(read.meta, written.meta);

        let config = IdentityModel {
            ratelimits: Attr::Null,
            ..read.clone()
        };
        let id = read.id.known_str().unwrap().to_string();
        let change_set = identity_change_set(&id, &config, &read).unwrap();
        assert_eq!(change_set.meta, None);

        let updated: IdentityModel = resource
            .update(UpdateRequest {
                plan: config.to_value(),
                state: read.to_value(),
            })
            .await
            .state
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(updated.meta, written.meta);
        assert_eq!(fake.state.lock().identity_updates[0].meta, None);
    }

    #[tokio::test]
    async fn test_delete_of_missing_identity_reports_failure() {
        let (_, client) = FakeUnkey::shared();
        let resource = IdentityResource::with_client(client);
        let state = IdentityModel {
            id: Attr::Known("id_gone".into()),
            ..plan()
        };

        let response = resource
            .delete(DeleteRequest {
                state: state.to_value(),
            })
            .await;
        let diag = response.diagnostics.errors().next().unwrap();
        assert_eq!(diag.summary, "Error Deleting Unkey Identity");
    }
}
