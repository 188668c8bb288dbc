//! Lookup table files.
//!
//! Contents go through the `lookup_edit` app endpoints, which write the CSV
//! file into the app; removal uses `data/lookup-table-files`.

use tracing::info;

use crate::client::SplunkClient;
use crate::endpoints::{Namespace, ServicePath, read_json};
use crate::error::Result;
use crate::models::{LookupContents, LookupTableFile};
use crate::values;

const LOOKUP_CONTENTS_PATH: &str = "data/lookup_edit/lookup_contents";
const LOOKUP_FILES_PATH: &str = "data/lookup-table-files";

impl SplunkClient {
    /// Create or replace a lookup file with `file.contents`.
    pub async fn upload_lookup_table(&self, file: &LookupTableFile) -> Result<()> {
        let form = values::encode(file)?;
        info!(app = %file.app, file = %file.file_name, rows = file.contents.rows().len(), "Uploading lookup table");
        self.post(&ServicePath::new(Namespace::Global, LOOKUP_CONTENTS_PATH), &form)
            .await?;
        Ok(())
    }

    /// Current rows of a lookup file; `Ok(None)` if it does not exist.
    pub async fn read_lookup_table(
        &self,
        app: &str,
        owner: &str,
        file_name: &str,
    ) -> Result<Option<LookupContents>> {
        let path = ServicePath::new(Namespace::Global, LOOKUP_CONTENTS_PATH);
        let query = [
            ("namespace", app),
            ("lookup_file", file_name),
            ("owner", owner),
            ("lookup_type", "csv"),
        ];
        match self.get(&path, &query).await {
            Ok(response) => read_json(response).await.map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Remove a lookup file. A file that is already gone counts as deleted.
    pub async fn delete_lookup_table(&self, app: &str, owner: &str, file_name: &str) -> Result<()> {
        let path = ServicePath::new(Namespace::user(owner, app), LOOKUP_FILES_PATH).entry(file_name);
        info!(%app, file = %file_name, "Deleting lookup table");
        match self.delete(&path).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
