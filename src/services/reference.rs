use crate::errors::internal::ReferenceFetchError;
use crate::types::dto::reference::RegionRecord;

/// Client for the administrative-region reference source
///
/// Two cascading lookups: provinces, then the municipalities of a
/// selected province. The upstream contract is an array of `{id, nome}`
/// records per call. The base URL comes from configuration; the shipped
/// frontend left it blank, so there is no default endpoint.
pub struct ReferenceDataClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ReferenceDataClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Fetch the province list
    pub async fn provinces(&self) -> Result<Vec<RegionRecord>, ReferenceFetchError> {
        let base = self.base_url()?;
        self.fetch(&format!("{}/provincias", base)).await
    }

    /// Fetch the municipalities of one province
    pub async fn municipalities(
        &self,
        province_id: u32,
    ) -> Result<Vec<RegionRecord>, ReferenceFetchError> {
        let base = self.base_url()?;
        self.fetch(&format!("{}/provincias/{}/municipios", base, province_id))
            .await
    }

    fn base_url(&self) -> Result<&str, ReferenceFetchError> {
        self.base_url
            .as_deref()
            .ok_or(ReferenceFetchError::BaseUrlNotConfigured)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<RegionRecord>, ReferenceFetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReferenceFetchError::BadStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_client_reports_itself() {
        let client = ReferenceDataClient::new(None);

        assert!(!client.is_configured());
        assert!(matches!(
            client.provinces().await,
            Err(ReferenceFetchError::BaseUrlNotConfigured)
        ));
        assert!(matches!(
            client.municipalities(7).await,
            Err(ReferenceFetchError::BaseUrlNotConfigured)
        ));
    }

    #[test]
    fn configured_client_reports_itself() {
        let client = ReferenceDataClient::new(Some("https://regions.example.com".to_string()));
        assert!(client.is_configured());
    }
}
