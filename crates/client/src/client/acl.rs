//! Object permissions: `<entry>/acl`.

use tracing::info;

use crate::client::SplunkClient;
use crate::endpoints::{ServicePath, read_json};
use crate::entity::{Entity, ObjectId};
use crate::error::Result;
use crate::models::{Acl, SplunkResponse};
use crate::values;

impl SplunkClient {
    /// Update the ACL of an entity.
    pub async fn update_acl<E: Entity>(&self, id: &ObjectId, acl: &Acl) -> Result<()> {
        self.update_acl_at(&id.entry_path::<E>(), acl).await
    }

    /// Update the ACL of the object at `path`.
    pub async fn update_acl_at(&self, path: &ServicePath, acl: &Acl) -> Result<()> {
        let form = values::encode(acl)?;
        info!(%path, owner = %acl.owner, sharing = acl.sharing.as_str(), "Updating ACL");
        self.post(&path.clone().action("acl"), &form).await?;
        Ok(())
    }

    /// ACL of the object at `path`; `Ok(None)` if the object does not exist.
    pub async fn read_acl_at(&self, path: &ServicePath) -> Result<Option<Acl>> {
        let response = match self.get(path, &[]).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let body: SplunkResponse<serde_json::Value> = read_json(response).await?;
        Ok(body.entry.into_iter().next().and_then(|entry| entry.acl))
    }
}
