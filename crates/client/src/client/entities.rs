//! Generic CRUD for every [`Entity`].

use reqwest::Response;
use tracing::{debug, info};

use crate::client::SplunkClient;
use crate::endpoints::read_json;
use crate::entity::{Entity, Object, ObjectId};
use crate::error::{ClientError, Result};
use crate::models::SplunkResponse;
use crate::values::{self, Operation, Values};

impl SplunkClient {
    /// POST the collection with `name` plus the create-time fields.
    pub async fn create_entity<E: Entity>(&self, id: &ObjectId, content: &E) -> Result<Object<E>> {
        let mut form = Values::new();
        form.add("name", E::entry_name(&id.name));
        form.extend(values::encode_for(content, Operation::Create)?);

        info!(kind = E::KIND, name = %id.name, "Creating Splunk object");
        let response = self.post(&id.collection_path::<E>(), &form).await?;
        decode_object(id, response).await
    }

    /// GET the entry; `Ok(None)` if Splunk answers 404.
    pub async fn read_entity<E: Entity>(&self, id: &ObjectId) -> Result<Option<Object<E>>> {
        match self.get(&id.entry_path::<E>(), &[]).await {
            Ok(response) => decode_object(id, response).await.map(Some),
            Err(e) if e.is_not_found() => {
                debug!(kind = E::KIND, name = %id.name, "Splunk object not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// POST the entry with the update-time fields.
    pub async fn update_entity<E: Entity>(&self, id: &ObjectId, content: &E) -> Result<Object<E>> {
        let form = values::encode_for(content, Operation::Update)?;

        info!(kind = E::KIND, name = %id.name, "Updating Splunk object");
        let response = self.post(&id.entry_path::<E>(), &form).await?;
        decode_object(id, response).await
    }

    /// DELETE the entry. An entry that is already gone counts as deleted.
    pub async fn delete_entity<E: Entity>(&self, id: &ObjectId) -> Result<()> {
        info!(kind = E::KIND, name = %id.name, "Deleting Splunk object");
        match self.delete(&id.entry_path::<E>()).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!(kind = E::KIND, name = %id.name, "Splunk object already deleted");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

async fn decode_object<E: Entity>(id: &ObjectId, response: Response) -> Result<Object<E>> {
    let body: SplunkResponse<E> = read_json(response).await?;
    let entry = body.take_entry(E::entry_name(&id.name)).ok_or_else(|| {
        ClientError::InvalidResponse(format!("no entry returned for {} '{}'", E::KIND, id.name))
    })?;

    Ok(Object {
        id: id.clone(),
        content: entry.content,
        acl: entry.acl,
    })
}
