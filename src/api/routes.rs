//! Endpoint addresses derived from the collection url.

use url::Url;

use crate::error::{Error, Result};
use crate::models::TodoId;

#[derive(Debug, Clone, PartialEq)]
pub struct Routes {
    collection: Url,
}

impl Routes {
    pub fn new(collection: Url) -> Result<Self> {
        if collection.cannot_be_a_base() {
            return Err(Error::NotABase { url: collection });
        }
        Ok(Self { collection })
    }

    /// `/api/todos`
    pub fn collection(&self) -> Url {
        self.collection.clone()
    }

    /// `/api/todos/{id}`, with the id as one percent-encoded segment
    pub fn item(&self, id: &TodoId) -> Result<Url> {
        let mut url = self.collection.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| Error::NotABase {
                url: self.collection.clone(),
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}
