use async_trait::async_trait;
use chrono::Utc;
use tracing::{Span, debug, field, instrument};
use unkey_client::SharedClient;
use unkey_client::models::{
    CreateKeyRequest, DeleteKeyRequest, GetKeyRequest, KeyData, UpdateKeyRequest,
};
use unkey_tfsdk::{
    Attr, CreateRequest, DeleteRequest, DeleteResponse, Diagnostic, Diagnostics,
    ProviderData, ReadRequest, Resource, ResourceResponse, Schema, UpdateRequest, Value,
};

use super::{
    ClientSlot, api_error, meta_differs, meta_from_api, meta_to_api, respond, respond_delete,
    state_id,
};
use crate::conversions::{
    credits_from_api, credits_to_api, credits_to_update_api, ratelimits_from_api, ratelimits_to_api,
    string_list_to_vec, vec_to_string_list,
};
use crate::models::KeyModel;
use crate::schemas::key_schema;

const TYPE_NAME: &str = "unkey_key";

/// RFC 850 layout, e.g. `Monday, 02-Jan-06 15:04:05 UTC`.
const LAST_UPDATED_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

fn now_rfc850() -> String {
    Utc::now().format(LAST_UPDATED_FORMAT).to_string()
}

/// Whether `plan` should be sent: it differs from state and is not waiting
/// on apply.
fn changed<T: PartialEq>(plan: &Attr<T>, state: &Attr<T>) -> bool {
    !plan.is_unknown() && plan != state
}

/// Builds the partial update for a key from plan and prior state.
///
/// Only attributes whose plan value differs from state are included. A null
/// plan value clears the remote field: `null` for scalars, meta and credits,
/// an empty list for roles, permissions and ratelimits.
pub(crate) fn key_change_set(
    key_id: &str,
    plan: &KeyModel,
    state: &KeyModel,
) -> Result<UpdateKeyRequest, Diagnostic> {
    let mut request = UpdateKeyRequest::new(key_id);

    if changed(&plan.name, &state.name) {
        request.name = Some(plan.name.known().cloned());
    }
    if changed(&plan.external_id, &state.external_id) {
        request.external_id = Some(plan.external_id.known().cloned());
    }
    if changed(&plan.enabled, &state.enabled) {
        request.enabled = plan.enabled.known().copied();
    }
    if changed(&plan.expires, &state.expires) {
        request.expires = Some(plan.expires.known().copied());
    }
    if meta_differs(&plan.meta, &state.meta) {
        request.meta = Some(meta_to_api(&plan.meta)?);
    }
    if changed(&plan.roles, &state.roles) {
        request.roles = Some(string_list_to_vec(&plan.roles).unwrap_or_default());
    }
    if changed(&plan.permissions, &state.permissions) {
        request.permissions = Some(string_list_to_vec(&plan.permissions).unwrap_or_default());
    }
    if changed(&plan.credits, &state.credits) {
        request.credits = Some(credits_to_update_api(&plan.credits)?);
    }
    if changed(&plan.ratelimits, &state.ratelimits) {
        request.ratelimits = Some(ratelimits_to_api(&plan.ratelimits).unwrap_or_default());
    }

    Ok(request)
}

/// Overwrites every remote-backed attribute of `model` from `data`.
///
/// The plaintext key and the create-only attributes are left alone; the API
/// never returns them.
fn apply_key_data(model: &mut KeyModel, data: KeyData) -> Result<(), Diagnostic> {
    model.id = Attr::Known(data.key_id);
    model.name = data.name.into();
    model.enabled = Attr::Known(data.enabled);
    model.expires = data.expires.into();
    model.roles = vec_to_string_list(&data.roles);
    model.permissions = vec_to_string_list(&data.permissions);
    model.meta = meta_from_api(&model.meta, data.meta.as_ref())?;
    model.credits = credits_from_api(data.credits.as_ref());
    model.ratelimits = ratelimits_from_api(&data.ratelimits);
    model.external_id = data.identity.map(|identity| identity.external_id).into();
    Ok(())
}

/// `unkey_key`: an API key.
#[derive(Debug, Default)]
pub struct KeyResource {
    client: ClientSlot,
}

impl KeyResource {
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

    #[instrument(name = "unkey_key_create", skip_all, fields(id = field::Empty))]
    async fn create_key(&self, plan: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: KeyModel = plan.decode()?;

        let request = CreateKeyRequest {
            api_id: model.api_id.known_str().unwrap_or_default().to_string(),
            prefix: model.prefix.known().cloned(),
            name: model.name.known().cloned(),
            byte_length: model.byte_length.known().copied(),
            external_id: model.external_id.known().cloned(),
            meta: meta_to_api(&model.meta)?,
            roles: string_list_to_vec(&model.roles),
            permissions: string_list_to_vec(&model.permissions),
            expires: model.expires.known().copied(),
            credits: credits_to_api(&model.credits)?,
            ratelimits: ratelimits_to_api(&model.ratelimits),
            enabled: model.enabled.known().copied(),
            recoverable: model.recoverable.known().copied(),
        };

        let created = client
            .create_key(request)
            .await
            .map_err(|e| {
                api_error(
                    "Error Creating Unkey Key",
                    "Could not create Key, unexpected error",
                    &e,
                )
            })?;

        Span::current().record("id", created.key_id.as_str());
        debug!("Created key");
        model.id = Attr::Known(created.key_id);
        model.key = Attr::Known(created.key);
        if model.enabled.is_unknown() {
            // Unkey enables keys unless told otherwise.
            model.enabled = Attr::Known(true);
        }
        model.last_updated = Attr::Known(now_rfc850());
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_key_read", skip_all, fields(id = field::Empty))]
    async fn read_key(&self, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: KeyModel = state.decode()?;
        let id = state_id(&model.id, "key")?;
        Span::current().record("id", id.as_str());

        let data = client
            .get_key(GetKeyRequest {
                key_id: id.clone(),
                decrypt: false,
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Unkey Key",
                    format!("Could not read Unkey Key ID {id}"),
                    &e,
                )
            })?;

        apply_key_data(&mut model, data)?;
        Ok(Value::encode(&model))
    }

    #[instrument(name = "unkey_key_update", skip_all, fields(id = field::Empty))]
    async fn update_key(&self, plan: &Value, state: &Value) -> Result<Value, Diagnostic> {
        let client = self.client.get()?;
        let mut model: KeyModel = plan.decode()?;
        let prior: KeyModel = state.decode()?;
        let id = state_id(&prior.id, "key")?;
        Span::current().record("id", id.as_str());

        let change_set = key_change_set(&id, &model, &prior)?;
        if change_set.has_changes() {
            client.update_key(change_set).await.map_err(|e| {
                api_error(
                    "Error Updating Unkey Key",
                    format!("Could not update Unkey Key ID {id}"),
                    &e,
                )
            })?;
            debug!("Updated key");
        } else {
            debug!("No remote changes for key");
        }

        let data = client
            .get_key(GetKeyRequest {
                key_id: id.clone(),
                decrypt: false,
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Reading Updated Unkey Key",
                    format!("Could not read Unkey Key ID {id} after update"),
                    &e,
                )
            })?;

        apply_key_data(&mut model, data)?;
        model.key = prior.key;
        model.last_updated = Attr::Known(now_rfc850());
        Ok(Value::encode(&model))
    }

    #[instrument(
        name = "unkey_key_delete",
        skip_all,
        fields(id = field::Empty, permanent = field::Empty)
    )]
    async fn delete_key(&self, state: &Value) -> Result<(), Diagnostic> {
        let client = self.client.get()?;
        let model: KeyModel = state.decode()?;
        let id = state_id(&model.id, "key")?;
        let permanent = model.permanent_deletion.value_bool();
        Span::current()
            .record("id", id.as_str())
            .record("permanent", permanent);

        client
            .delete_key(DeleteKeyRequest {
                key_id: id,
                permanent,
            })
            .await
            .map_err(|e| {
                api_error(
                    "Error Deleting Unkey Key",
                    "Could not delete Key, unexpected error",
                    &e,
                )
            })?;
        debug!("Deleted key");
        Ok(())
    }
}

#[async_trait]
impl Resource for KeyResource {
    fn type_suffix(&self) -> &'static str {
        "key"
    }

    fn schema(&self) -> Schema {
        key_schema()
    }

    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(provider_data)
    }

    async fn create(&self, request: CreateRequest) -> ResourceResponse {
        respond(TYPE_NAME, "create", self.create_key(&request.plan).await)
    }

    async fn read(&self, request: ReadRequest) -> ResourceResponse {
        respond(TYPE_NAME, "read", self.read_key(&request.state).await)
    }

    async fn update(&self, request: UpdateRequest) -> ResourceResponse {
        respond(
            TYPE_NAME,
            "update",
            self.update_key(&request.plan, &request.state).await,
        )
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        respond_delete(TYPE_NAME, self.delete_key(&request.state).await)
    }
}
