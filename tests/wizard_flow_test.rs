// End-to-end coverage of the collection-request flow over the library
// surface: session store, validator, state machine and pricing working
// together the way the HTTP endpoints drive them.

mod common;

use applixo_backend::services::{CollectionValidator, TransitionError};
use applixo_backend::stores::SessionStore;
use applixo_backend::types::internal::{PaymentMethod, WizardStep, USER_DEFAULT_ADDRESS};
use common::{today, valid_details, valid_details_request};

#[test]
fn booking_a_collection_end_to_end() {
    let store = SessionStore::new();
    let validator = CollectionValidator::new();

    let (id, session) = store.create(today());
    assert_eq!(session.step(), WizardStep::Details);
    assert_eq!(session.details().address, USER_DEFAULT_ADDRESS);

    // Details step: validate, then advance
    let details = validator
        .validate(&valid_details_request(), today())
        .expect("request should validate");

    let (outcome, snapshot) = store
        .with_session(&id, |session| session.submit_details(details))
        .expect("session exists");
    outcome.unwrap();
    assert_eq!(snapshot.step(), WizardStep::Payment);
    assert_eq!(snapshot.cost_kz(), 7150.0);

    // Payment step: method, then advance to review
    let (outcome, _) = store
        .with_session(&id, |session| {
            session.select_payment(PaymentMethod::Eletronico)
        })
        .expect("session exists");
    outcome.unwrap();

    let (outcome, snapshot) = store
        .with_session(&id, |session| session.advance())
        .expect("session exists");
    outcome.unwrap();
    assert_eq!(snapshot.step(), WizardStep::Review);

    // Review step: confirm
    let (outcome, snapshot) = store
        .with_session(&id, |session| session.confirm())
        .expect("session exists");
    outcome.unwrap();
    assert_eq!(snapshot.step(), WizardStep::Confirmed);
    assert_eq!(snapshot.payment_method(), Some(PaymentMethod::Eletronico));
}

#[test]
fn invalid_details_never_advance_the_session() {
    let store = SessionStore::new();
    let validator = CollectionValidator::new();

    let (id, _) = store.create(today());

    let mut request = valid_details_request();
    request.first_name = String::new();
    request.waste_types.clear();

    let violations = validator
        .validate(&request, today())
        .expect_err("request should fail validation");
    assert!(violations.iter().any(|v| v.field == "first_name"));
    assert!(violations.iter().any(|v| v.field == "waste_types"));

    // The endpoint never reaches submit_details on validation failure,
    // so the session must still be at the details step.
    assert_eq!(store.get(&id).unwrap().step(), WizardStep::Details);
}

#[test]
fn cancelling_and_resetting_returns_to_a_clean_form() {
    let store = SessionStore::new();

    let (id, _) = store.create(today());

    store
        .with_session(&id, |session| session.submit_details(valid_details()))
        .unwrap()
        .0
        .unwrap();
    store
        .with_session(&id, |session| {
            session.select_payment(PaymentMethod::PrePago)
        })
        .unwrap()
        .0
        .unwrap();
    store
        .with_session(&id, |session| session.advance())
        .unwrap()
        .0
        .unwrap();
    store
        .with_session(&id, |session| session.cancel())
        .unwrap()
        .0
        .unwrap();

    // Cancelled keeps the data until the explicit reset
    let cancelled = store.get(&id).unwrap();
    assert_eq!(cancelled.step(), WizardStep::Cancelled);
    assert_eq!(cancelled.details().first_name, "João");

    let (outcome, snapshot) = store
        .with_session(&id, |session| session.reset(today()))
        .unwrap();
    outcome.unwrap();

    assert_eq!(snapshot.step(), WizardStep::Details);
    assert!(snapshot.details().first_name.is_empty());
    assert_eq!(snapshot.details().address, USER_DEFAULT_ADDRESS);
    assert_eq!(snapshot.details().quantity_kg, 1.0);
    assert_eq!(snapshot.payment_method(), None);
}

#[test]
fn advancing_without_payment_method_is_blocked() {
    let store = SessionStore::new();

    let (id, _) = store.create(today());
    store
        .with_session(&id, |session| session.submit_details(valid_details()))
        .unwrap()
        .0
        .unwrap();

    let (outcome, snapshot) = store
        .with_session(&id, |session| session.advance())
        .unwrap();

    assert_eq!(outcome, Err(TransitionError::PaymentMethodRequired));
    assert_eq!(snapshot.step(), WizardStep::Payment);
}

#[test]
fn independent_sessions_do_not_share_state() {
    let store = SessionStore::new();

    let (first, _) = store.create(today());
    let (second, _) = store.create(today());

    store
        .with_session(&first, |session| session.submit_details(valid_details()))
        .unwrap()
        .0
        .unwrap();

    assert_eq!(store.get(&first).unwrap().step(), WizardStep::Payment);
    assert_eq!(store.get(&second).unwrap().step(), WizardStep::Details);
}
