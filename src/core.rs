//! Core Kinderstore functionality
//!
//! This module contains the main KinderStore struct and its implementation,
//! providing centralized coordination for the HTTP client, auth session,
//! dispatch manager, and per-domain resource stores.

use std::collections::HashMap;
use std::sync::Arc;

use api_client::{ApiClient, AuthSession};
use config::AppConfig;
use dispatch_system::DispatchManager;
use resource_store::{DomainStore, Resource, ResourceActions};

use crate::debug_log;
use crate::domains::{
    Appointment, Child, Diagnosis, LabRequestItem, VaccinationRecord, Vaccine,
};
use crate::errors::KinderStoreError;

/// Main KinderStore coordinator that manages the shared API client and
/// per-domain store objects
pub struct KinderStore {
    api: Arc<ApiClient>,
    session: Arc<AuthSession>,
    dispatch_manager: Arc<DispatchManager>,
    stores: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
}

impl KinderStore {
    /// Create a new coordinator from configuration, with no stores yet
    pub fn new(config: &AppConfig) -> Result<Self, KinderStoreError> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let session = Arc::new(AuthSession::from_env(&config.auth));
        let dispatch_manager = Arc::new(DispatchManager::with_config(config.dispatch.clone()));

        Ok(Self {
            api,
            session,
            dispatch_manager,
            stores: HashMap::new(),
        })
    }

    /// Create the coordinator and register the six clinic domain stores
    /// under their resource names
    pub fn bootstrap(config: &AppConfig) -> Result<Self, KinderStoreError> {
        let mut kinderstore = Self::new(config)?;
        kinderstore.register_domain::<Child>()?;
        kinderstore.register_domain::<Appointment>()?;
        kinderstore.register_domain::<Vaccine>()?;
        kinderstore.register_domain::<VaccinationRecord>()?;
        kinderstore.register_domain::<Diagnosis>()?;
        kinderstore.register_domain::<LabRequestItem>()?;
        Ok(kinderstore)
    }

    /// Shared API client reference
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Bearer token session shared by every store
    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    /// Lifecycle event fan-out shared by every store
    pub fn dispatch_manager(&self) -> &Arc<DispatchManager> {
        &self.dispatch_manager
    }

    /// Build and register a domain store under its resource name
    pub fn register_domain<T: Resource>(&mut self) -> Result<(), KinderStoreError> {
        debug_log!("registering domain store: {}", T::resource_name());
        let store = DomainStore::<T>::new(
            Arc::clone(&self.api),
            Arc::clone(&self.session),
            Some(Arc::clone(&self.dispatch_manager)),
        );
        self.register_store(T::resource_name().to_string(), store)
    }

    /// Register a store object with a given name
    pub fn register_store<T>(&mut self, name: String, store: T) -> Result<(), KinderStoreError>
    where
        T: ResourceActions + Send + Sync + 'static,
    {
        if self.stores.contains_key(&name) {
            return Err(KinderStoreError::StoreAlreadyRegistered(name));
        }

        self.stores.insert(name, Box::new(store));
        Ok(())
    }

    /// Get a registered store object by name
    pub fn get_store<T>(&self, name: &str) -> Result<&T, KinderStoreError>
    where
        T: ResourceActions + Send + Sync + 'static,
    {
        self.stores
            .get(name)
            .and_then(|store| store.downcast_ref::<T>())
            .ok_or_else(|| KinderStoreError::StoreNotFound(name.to_string()))
    }

    /// Get the domain store for an entity type by its resource name
    pub fn get_domain<T: Resource>(&self) -> Result<&DomainStore<T>, KinderStoreError> {
        self.get_store::<DomainStore<T>>(T::resource_name())
    }

    /// List all registered store names
    pub fn list_stores(&self) -> Vec<&String> {
        self.stores.keys().collect()
    }

    /// Remove a store object by name
    pub fn unregister_store(&mut self, name: &str) -> Result<(), KinderStoreError> {
        self.stores
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| KinderStoreError::StoreNotFound(name.to_string()))
    }
}
