//! Integration tests for the coordinator and domain store actions
//!
//! These run without a clinic backend: they exercise the paths that settle
//! before any network call (the bearer-token precondition) and observe
//! operation routing through dispatch events.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use kinderstore::prelude::*;

fn test_config() -> AppConfig {
    AppConfig {
        api: ApiConfig::new(
            // never contacted in these tests
            "https://clinic.test.invalid/api".to_string(),
            1_000,
            "kinderstore-test".to_string(),
        ),
        auth: AuthConfig::new("KINDERSTORE_TEST_TOKEN_UNSET".to_string()),
        dispatch: DispatchConfig::new(16, false),
    }
}

#[tokio::test]
async fn missing_token_rejects_before_any_network_call() -> Result<()> {
    let kinderstore = KinderStore::bootstrap(&test_config())?;
    let vaccines = kinderstore.get_domain::<Vaccine>()?;

    let result = vaccines.fetch_all().await;
    assert_eq!(result, Err(ApiError::Unauthenticated));

    // the rejection surfaced in store state like any other failure
    let state = vaccines.state();
    assert!(!state.loading());
    assert_eq!(state.error, Some(ApiError::Unauthenticated));
    assert!(state.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn blank_search_dispatches_the_list_operation() -> Result<()> {
    let kinderstore = KinderStore::bootstrap(&test_config())?;
    let children = kinderstore.get_domain::<Child>()?;

    let operations = Arc::new(Mutex::new(Vec::new()));
    {
        let operations = Arc::clone(&operations);
        kinderstore.dispatch_manager().add_callback(move |event| {
            if event.resource == "children" {
                operations.lock().unwrap().push((event.operation, event.phase));
            }
        });
    }

    // whitespace-only query: reset to full list, no search call
    let _ = children.search("   ").await;

    let seen = operations.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            (Operation::List, Phase::Pending),
            (Operation::List, Phase::Rejected),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn search_results_stay_clear_of_the_item_cache() -> Result<()> {
    let kinderstore = KinderStore::bootstrap(&test_config())?;
    let children = kinderstore.get_domain::<Child>()?;

    // fallback path touches items, never search_results
    let _ = children.search("").await;
    let state = children.state();
    assert!(state.search_results.is_none());
    Ok(())
}

#[tokio::test]
async fn rejected_events_carry_the_normalized_message() -> Result<()> {
    let kinderstore = KinderStore::bootstrap(&test_config())?;
    let appointments = kinderstore.get_domain::<Appointment>()?;

    let errors = Arc::new(Mutex::new(Vec::new()));
    {
        let errors = Arc::clone(&errors);
        kinderstore.dispatch_manager().add_callback(move |event| {
            if event.phase == Phase::Rejected {
                errors.lock().unwrap().push(event.error.clone());
            }
        });
    }

    let _ = appointments.fetch_doctors().await;

    let seen = errors.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![Some(
            "authentication required: no bearer token in session".to_string()
        )]
    );
    Ok(())
}

#[tokio::test]
async fn every_domain_store_shares_one_session() -> Result<()> {
    let kinderstore = KinderStore::bootstrap(&test_config())?;

    kinderstore.session().set_token("clinic-token");
    assert!(kinderstore.session().is_authenticated());

    // clearing the shared session de-authenticates every store
    kinderstore.session().clear();
    let diagnoses = kinderstore.get_domain::<Diagnosis>()?;
    let result = diagnoses.search_by_child(12).await;
    assert_eq!(result, Err(ApiError::Unauthenticated));
    Ok(())
}
