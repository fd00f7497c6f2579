use super::{Error, Result};
use async_trait::async_trait;
use contacts_core::contact::{Contact, NewContact};
use log::debug;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use url::Url;

#[cfg(test)]
use mockall::automock;

/// The contact operations of the backend API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// All contacts in the order the server returns them
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn create(&self, data: &NewContact) -> Result<Contact>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct HttpContactsApi {
    http: HttpClient,
    contacts_url: Url,
}

impl HttpContactsApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            contacts_url: Self::contacts_url(base_url)?,
        })
    }

    fn contacts_url(base_url: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("api/contacts")?)
    }

    fn contact_url(&self, id: &str) -> Result<Url> {
        let mut url = self.contacts_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        Ok(url)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);
        debug!("API answered {status}: {message:?}");
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    async fn list(&self) -> Result<Vec<Contact>> {
        let resp = self.http.get(self.contacts_url.clone()).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn create(&self, data: &NewContact) -> Result<Contact> {
        let resp = self
            .http
            .post(self.contacts_url.clone())
            .json(data)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let resp = self.http.delete(self.contact_url(id)?).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}
