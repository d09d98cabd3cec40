mod client;
mod error;
mod models;

pub use error::StableError;
pub use models::Horse;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the stable API including
/// transformation of response data into explicitly-defined types.
///
pub struct Stable {
    client: Client,
}

impl Stable {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Stable {
        debug!("Initializing stable client for {}...", base_url);
        Stable {
            client: Client::new(base_url),
        }
    }

    /// Returns the horses in the stable, optionally filtered by availability
    /// for riding. No query parameter is sent when no filter is given.
    ///
    pub async fn horses(&self, availability: Option<bool>) -> Result<Vec<Horse>, StableError> {
        debug!("Requesting horses (availability: {:?})...", availability);

        let value;
        let params = match availability {
            Some(available) => {
                value = available.to_string();
                Some(vec![("dostepnosc", value.as_str())])
            }
            None => None,
        };

        let horses = self
            .client
            .call(Method::GET, "konie", params, None)
            .await?
            .json::<Vec<Horse>>()
            .await?;

        debug!("Retrieved {} horses.", horses.len());
        Ok(horses)
    }

    /// Returns a single horse by id.
    ///
    pub async fn horse(&self, id: u64) -> Result<Horse, StableError> {
        debug!("Requesting horse {}...", id);

        let horse = self
            .client
            .call(Method::GET, &format!("konie/{}", id), None, None)
            .await?
            .json::<Horse>()
            .await?;

        Ok(horse)
    }

    /// Create a new horse. The request body carries no id; the created
    /// record, id included, is returned by the server.
    ///
    pub async fn create_horse(&self, horse: &Horse) -> Result<Horse, StableError> {
        debug!("Creating new horse...");

        let body = serde_json::to_value(horse)?;
        let created = self
            .client
            .call(Method::POST, "konie", None, Some(body))
            .await?
            .json::<Horse>()
            .await?;

        Ok(created)
    }

    /// Update an existing horse.
    ///
    pub async fn update_horse(&self, id: u64, horse: &Horse) -> Result<Horse, StableError> {
        debug!("Updating horse {}...", id);

        let body = serde_json::to_value(horse)?;
        let updated = self
            .client
            .call(Method::PUT, &format!("konie/{}", id), None, Some(body))
            .await?
            .json::<Horse>()
            .await?;

        Ok(updated)
    }

    /// Delete a horse. Any success response body is ignored.
    ///
    pub async fn delete_horse(&self, id: u64) -> Result<(), StableError> {
        debug!("Deleting horse {}...", id);

        self.client
            .call(Method::DELETE, &format!("konie/{}", id), None, None)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn horse_json(horse: &Horse) -> serde_json::Value {
        json!({
            "id": horse.id,
            "rasa": horse.breed,
            "wiek": horse.age,
            "dostepnosc_do_jazdy": horse.available_for_riding,
        })
    }

    #[tokio::test]
    async fn horses_without_filter_sends_no_query() -> Result<(), StableError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/konie").matches(|req| {
                    req.query_params
                        .as_ref()
                        .map_or(true, |params| params.is_empty())
                });
                then.status(200).json_body(json!([]));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let horses = stable.horses(None).await?;
        assert!(horses.is_empty());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn horses_filtered_by_availability() -> Result<(), StableError> {
        let available: Horse = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/konie")
                    .query_param("dostepnosc", "true");
                then.status(200).json_body(json!([horse_json(&available)]));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let horses = stable.horses(Some(true)).await?;
        assert_eq!(horses.len(), 1);
        assert_eq!(horses[0].breed, available.breed);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn horses_filtered_by_unavailability() -> Result<(), StableError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/konie")
                    .query_param("dostepnosc", "false");
                then.status(200).json_body(json!([]));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        stable.horses(Some(false)).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn horse_success() -> Result<(), StableError> {
        let mut expected: Horse = Faker.fake();
        expected.id = Some(7);

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/konie/7");
                then.status(200).json_body(horse_json(&expected));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let horse = stable.horse(7).await?;
        assert_eq!(horse, expected);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn horse_not_found_carries_detail() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/konie/99");
                then.status(404)
                    .json_body(json!({ "detail": "Koń nie istnieje" }));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let error = stable.horse(99).await.unwrap_err();
        assert_eq!(error.detail(), Some("Koń nie istnieje"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn horse_not_found_without_body_has_no_detail() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/konie/99");
                then.status(404);
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let error = stable.horse(99).await.unwrap_err();
        assert_eq!(error.detail(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_horse_posts_without_id() -> Result<(), StableError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/konie").json_body(json!({
                    "rasa": "Hucuł",
                    "wiek": 0,
                    "dostepnosc_do_jazdy": true,
                }));
                then.status(201).json_body(json!({
                    "id": 1,
                    "rasa": "Hucuł",
                    "wiek": 0,
                    "dostepnosc_do_jazdy": true,
                }));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let created = stable
            .create_horse(&Horse {
                id: None,
                breed: "Hucuł".to_string(),
                age: 0,
                available_for_riding: true,
            })
            .await?;
        assert_eq!(created.id, Some(1));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn update_horse_rejected_carries_detail() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT").path("/konie/3");
                then.status(400)
                    .json_body(json!({ "detail": "Nie można zmieniać rasy konia" }));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        let error = stable
            .update_horse(
                3,
                &Horse {
                    id: Some(3),
                    breed: "Arab".to_string(),
                    age: 5,
                    available_for_riding: true,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(error.detail(), Some("Nie można zmieniać rasy konia"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_horse_ignores_response_body() -> Result<(), StableError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/konie/5");
                then.status(200)
                    .json_body(json!({ "detail": "Usunięto konia" }));
            })
            .await;

        let stable = Stable::new(&server.base_url());
        stable.delete_horse(5).await?;
        mock.assert_async().await;
        Ok(())
    }
}
