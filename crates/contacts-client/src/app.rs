use crate::{
    api::ContactsApi,
    form::ContactForm,
    status::{
        CONTACT_ADDED, CONTACT_DELETED, CONTACTS_REFRESHED, DELETE_FAILED, SOMETHING_WENT_WRONG,
        Status,
    },
};
use contacts_core::{Contact, validation::ContactField};
use log::{error, info};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::sleep,
};

/// How long a status banner stays up
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Everything the view renders
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// In the order the server returned them
    pub contacts: Vec<Contact>,
    pub form: ContactForm,
    pub status: Option<Status>,
    /// Bumped on every status change, a timer only clears its own status
    status_generation: u64,
}

struct Shared {
    state: RwLock<ClientState>,
    status_timer: Mutex<Option<JoinHandle<()>>>,
}

/// The contact form and list, synchronized with the API by re-fetching the
/// list after every mutation.
#[derive(Clone)]
pub struct ContactApp {
    api: Arc<dyn ContactsApi>,
    shared: Arc<Shared>,
}

impl ContactApp {
    pub fn new(api: Arc<dyn ContactsApi>) -> Self {
        Self {
            api,
            shared: Arc::new(Shared {
                state: RwLock::new(ClientState::default()),
                status_timer: Mutex::new(None),
            }),
        }
    }

    pub async fn snapshot(&self) -> ClientState {
        self.shared.state.read().await.clone()
    }

    pub async fn set_field(&self, field: ContactField, value: &str) {
        self.shared.state.write().await.form.set_field(field, value);
    }

    pub async fn set_message(&self, value: &str) {
        self.shared.state.write().await.form.set_message(value);
    }

    pub async fn blur(&self, field: ContactField) {
        self.shared.state.write().await.form.blur(field);
    }

    /// Id of the contact in the given 1-based table row
    pub async fn contact_id_at(&self, row: usize) -> Option<String> {
        let state = self.shared.state.read().await;
        row.checked_sub(1)
            .and_then(|idx| state.contacts.get(idx))
            .map(|c| c.id.clone())
    }

    /// Replaces the list with the server's. On failure the current list stays.
    pub async fn load_contacts(&self) {
        match self.api.list().await {
            Ok(contacts) => self.shared.state.write().await.contacts = contacts,
            Err(e) => error!("Could not load contacts: {e}"),
        }
    }

    pub async fn refresh(&self) {
        self.load_contacts().await;
        self.set_status(Status::success(CONTACTS_REFRESHED)).await;
    }

    /// Marks all fields touched and, if the draft is valid, creates the
    /// contact. An invalid draft never reaches the API.
    pub async fn submit(&self) {
        let new_contact = {
            let mut state = self.shared.state.write().await;
            state.form.touch_all();
            if !state.form.is_valid() {
                return;
            }
            state.form.to_new_contact()
        };
        self.clear_status().await;

        match self.api.create(&new_contact).await {
            Ok(created) => {
                info!("Added contact {}", created.id);
                self.shared.state.write().await.form.reset();
                self.set_status(Status::success(CONTACT_ADDED)).await;
                self.load_contacts().await;
            }
            Err(e) => {
                error!("Could not add contact: {e}");
                let message = e.api_message().unwrap_or(SOMETHING_WENT_WRONG);
                self.set_status(Status::error(message)).await;
            }
        }
    }

    pub async fn delete(&self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => {
                info!("Deleted contact {id}");
                self.set_status(Status::success(CONTACT_DELETED)).await;
                self.load_contacts().await;
            }
            Err(e) => {
                error!("Could not delete contact {id}: {e}");
                self.set_status(Status::error(DELETE_FAILED)).await;
            }
        }
    }

    /// Shows the status and (re)starts the timer that clears it. The timer
    /// lock is held across the generation bump and the handle swap, locking
    /// `status_timer` before `state`.
    async fn set_status(&self, status: Status) {
        let mut status_timer = self.shared.status_timer.lock().await;
        let generation = {
            let mut state = self.shared.state.write().await;
            state.status_generation += 1;
            state.status = Some(status);
            state.status_generation
        };
        let shared = Arc::clone(&self.shared);
        let timer = tokio::spawn(async move {
            sleep(STATUS_TIMEOUT).await;
            let mut state = shared.state.write().await;
            if state.status_generation == generation {
                state.status = None;
            }
        });
        if let Some(previous) = status_timer.replace(timer) {
            previous.abort();
        }
    }

    async fn clear_status(&self) {
        let mut status_timer = self.shared.status_timer.lock().await;
        {
            let mut state = self.shared.state.write().await;
            state.status_generation += 1;
            state.status = None;
        }
        if let Some(previous) = status_timer.take() {
            previous.abort();
        }
    }
}
