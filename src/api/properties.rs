use std::fmt::Display;

use chrono::Utc;
use serde_json::Value;
use tracing::*;

use crate::api::{PropertyApi, PropertyError};
use crate::storage::NEWLY_CREATED_PROPERTY;
use crate::structures::form::PropertyForm;
use crate::structures::property::Property;

impl PropertyApi {
    /// `GET /api/properties/{id}/?_t={millis}`. The id goes into the path as is.
    #[instrument(skip(self, id), fields(id = %id), level = "debug")]
    pub async fn fetch_property_by_id<I: Display>(&self, id: I) -> Result<Property, PropertyError> {
        info!("Fetching property with ID: {}", id);
        match self.request_property(&id).await {
            Ok(property) => {
                info!("Fetched property {}: {}", id, property);
                Ok(property)
            }
            Err(err) => {
                error!("Error fetching property {}: {}", id, err);
                Err(err)
            }
        }
    }

    async fn request_property(&self, id: &impl Display) -> Result<Property, PropertyError> {
        // Only there to defeat intermediate caches, the server ignores it.
        let timestamp = Utc::now().timestamp_millis();
        let response = self.client.get(format!("{}/{}/", self.properties_url(), id)).query(&[("_t", timestamp)]).send().await?;

        if !response.status().is_success() {
            return Err(PropertyError::FetchFailed);
        }

        Ok(response.json::<Property>().await?)
    }

    /// `POST /api/properties/` with the form as body. A created property with a truthy id
    /// replaces the session echo.
    #[instrument(skip(self, form), level = "debug")]
    pub async fn create_property(&self, form: impl Into<PropertyForm>) -> Result<Property, PropertyError> {
        let form = form.into();
        info!("Creating property with data: {}", form);
        match self.submit_property(form).await {
            Ok(property) => Ok(property),
            Err(err) => {
                error!("Error creating property: {}", err);
                Err(err)
            }
        }
    }

    async fn submit_property(&self, form: PropertyForm) -> Result<Property, PropertyError> {
        let response = form.attach(self.client.post(format!("{}/", self.properties_url()))).send().await?;

        if !response.status().is_success() {
            let error_data = response.json::<Value>().await.ok();
            error!("Server error response: {}", error_data.map_or("null".to_string(), |data| data.to_string()));
            return Err(PropertyError::CreateFailed);
        }

        let result = response.json::<Property>().await?;
        info!("Property created successfully. Response: {}", result);

        if result.has_truthy_id() {
            self.store.set_item(NEWLY_CREATED_PROPERTY, &serde_json::to_string(&result)?)?;
        }

        Ok(result)
    }
}
