use tracing::*;

use crate::api::{PropertyApi, PropertyError};
use crate::storage::{LAST_CREATED_PROPERTY, NEWLY_CREATED_PROPERTY};
use crate::structures::property::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySource {
    Session,
    Api,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProperty {
    pub property: Property,
    pub source: PropertySource,
}

impl PropertyApi {
    /// Loads a property for display, using a matching echo left in the session by a creation
    /// before asking the server. A consumed echo is removed.
    #[instrument(skip(self), level = "debug")]
    pub async fn load_property(&self, id: &str) -> Result<LoadedProperty, PropertyError> {
        if id.is_empty() || id == "undefined" {
            error!("Refusing to load property with ID {:?}", id);
            return Err(PropertyError::InvalidId);
        }

        for key in [NEWLY_CREATED_PROPERTY, LAST_CREATED_PROPERTY] {
            if let Some(property) = self.take_from_session(key, id)? {
                debug!("Property {} found in session under {}", id, key);
                return Ok(LoadedProperty { property, source: PropertySource::Session });
            }
        }

        let property = self.fetch_property_by_id(id).await?;
        Ok(LoadedProperty { property, source: PropertySource::Api })
    }

    fn take_from_session(&self, key: &str, id: &str) -> Result<Option<Property>, PropertyError> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Property>(&raw) {
            Ok(property) if property.id_matches(id) => {
                self.store.remove_item(key)?;
                Ok(Some(property))
            }
            Ok(_) => Ok(None),
            Err(err) => {
                error!("Error parsing stored property under {}: {}", key, err);
                Ok(None)
            }
        }
    }
}
