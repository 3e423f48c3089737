//! End-to-end enquiry flow tests.
//!
//! Drive the full pipeline through a [`Store`]: actions go in, the
//! reducer sequences the flow, and the dispatch effect delivers to a
//! recording mock relay.

use chrono::NaiveDate;
use reserva_enquiry::mocks::MockRelayClient;
use reserva_enquiry::{
    BookingContext, DateRange, DocumentRef, EnquiryAction, EnquiryEnvironment, EnquiryPhase,
    EnquiryReducer, EnquiryState, FormField, PartyComposition, PaymentPreference,
    SubmissionStatus,
};
use reserva_runtime::Store;
use reserva_testing::mocks::FixedClock;
use reserva_testing::test_clock;

type EnquiryStore = Store<
    EnquiryState,
    EnquiryAction,
    EnquiryEnvironment<FixedClock, MockRelayClient>,
    EnquiryReducer<FixedClock, MockRelayClient>,
>;

fn store_with(relay: MockRelayClient, initial: EnquiryState) -> EnquiryStore {
    Store::new(
        initial,
        EnquiryReducer::default(),
        EnquiryEnvironment::new(test_clock(), relay),
    )
}

fn stay() -> DateRange {
    DateRange {
        check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
    }
}

fn passport(name: &str) -> DocumentRef {
    DocumentRef::new(name, "image/png", vec![9; 64])
}

/// Drive a fresh session up to a complete, submittable form.
async fn capture_complete_details(store: &EnquiryStore, adults: u32) {
    store
        .send(EnquiryAction::DatesChosen { range: stay() })
        .await
        .unwrap();
    store
        .send(EnquiryAction::PartyChanged {
            adults,
            children: 0,
        })
        .await
        .unwrap();

    let slot_ids: Vec<_> = store
        .state(|s| s.form.slots.iter().map(|slot| slot.id).collect())
        .await;

    for (i, slot) in slot_ids.iter().copied().enumerate() {
        store
            .send(EnquiryAction::GuestNameEdited {
                slot,
                value: format!("Guest {}", i + 1),
            })
            .await
            .unwrap();
        store
            .send(EnquiryAction::GuestPhoneEdited {
                slot,
                value: "+34600000000".to_string(),
            })
            .await
            .unwrap();
        store
            .send(EnquiryAction::DocumentAttached {
                slot,
                document: passport(&format!("guest_{}.png", i + 1)),
            })
            .await
            .unwrap();
    }

    store
        .send(EnquiryAction::EmailEdited {
            value: "ana@example.com".to_string(),
        })
        .await
        .unwrap();
    store
        .send(EnquiryAction::PaymentSelected {
            preference: PaymentPreference::Card,
        })
        .await
        .unwrap();
}

async fn submit_and_settle(store: &EnquiryStore) {
    let mut handle = store.send(EnquiryAction::Submit).await.unwrap();
    // wait() covers the dispatch effect and the fed-back outcome action
    handle.wait().await;
}

#[tokio::test]
async fn single_adult_happy_path_delivers_one_document_part() {
    let relay = MockRelayClient::new();
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 1).await;
    submit_and_settle(&store).await;

    // Confirmed, carrying the primary contact for the confirmation view
    let phase = store.state(|s| s.phase.clone()).await;
    match phase {
        EnquiryPhase::Confirmed {
            guest_name, email, ..
        } => {
            assert_eq!(guest_name, "Guest 1");
            assert_eq!(email, "ana@example.com");
        },
        other => panic!("expected Confirmed, got {other:?}"),
    }

    // Exactly one POST with exactly one document part
    let deliveries = relay.deliveries();
    assert_eq!(deliveries.len(), 1);
    let payload = &deliveries[0];
    assert_eq!(payload.file_parts.len(), 1);
    assert_eq!(payload.file_parts[0].name, "document_guest_1");
    assert_eq!(payload.text("_subject"), Some("New booking enquiry"));
    assert_eq!(payload.text("payment"), Some("card"));
    assert_eq!(payload.text("check_in"), Some("01/07/2025"));
}

#[tokio::test]
async fn missing_second_guest_document_blocks_submission() {
    let relay = MockRelayClient::new();
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 2).await;

    // Remove the second guest's document again
    let second = store.state(|s| s.form.slots[1].id).await;
    store
        .send(EnquiryAction::DocumentRemoved { slot: second })
        .await
        .unwrap();

    submit_and_settle(&store).await;

    let (phase, report) = store
        .state(|s| (s.phase.clone(), s.last_report.clone()))
        .await;
    assert_eq!(phase, EnquiryPhase::CapturingDetails);

    let report = report.unwrap();
    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.violations()[0].field, FormField::GuestDocument(2));

    // Nothing went over the wire
    assert_eq!(relay.delivery_count(), 0);
}

#[tokio::test]
async fn transport_failure_returns_to_capture_and_allows_resubmit() {
    let relay = MockRelayClient::failing("connection reset by peer");
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 1).await;
    submit_and_settle(&store).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.phase, EnquiryPhase::CapturingDetails);
    assert_eq!(state.outcome.status, SubmissionStatus::Failed);
    assert!(
        state
            .outcome
            .error_detail
            .as_deref()
            .unwrap()
            .contains("connection reset by peer")
    );

    // No data loss: the form is still complete, so a manual resubmit
    // dispatches again
    assert!(state.form.slots.iter().all(|s| s.document.is_some()));
    submit_and_settle(&store).await;
    assert_eq!(relay.delivery_count(), 2);
}

#[tokio::test]
async fn relay_rejection_is_not_reported_as_success() {
    let relay = MockRelayClient::rejecting(500);
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 1).await;
    submit_and_settle(&store).await;

    let (phase, outcome) = store
        .state(|s| (s.phase.clone(), s.outcome.clone()))
        .await;

    // One request left, but a 500 answer is a failure, not a confirmation
    assert_eq!(relay.delivery_count(), 1);
    assert_eq!(phase, EnquiryPhase::CapturingDetails);
    assert_eq!(outcome.status, SubmissionStatus::Failed);
    assert!(outcome.error_detail.unwrap().contains("500"));
}

#[tokio::test]
async fn checkout_page_variant_starts_at_detail_capture() {
    let relay = MockRelayClient::new();
    let context = BookingContext {
        property_id: Some(7),
        property_name: Some("Villa Azul".to_string()),
        date_range: Some(stay()),
        party: PartyComposition {
            adults: 2,
            children: 1,
        },
    };
    let store = store_with(relay.clone(), EnquiryState::with_context(context));

    // Already capturing details; two slots derived from the context
    let (phase, slots) = store
        .state(|s| (s.phase.clone(), s.form.slots.len()))
        .await;
    assert_eq!(phase, EnquiryPhase::CapturingDetails);
    assert_eq!(slots, 2);

    let slot_ids: Vec<_> = store
        .state(|s| s.form.slots.iter().map(|slot| slot.id).collect())
        .await;
    for (i, slot) in slot_ids.iter().copied().enumerate() {
        store
            .send(EnquiryAction::GuestNameEdited {
                slot,
                value: format!("Guest {}", i + 1),
            })
            .await
            .unwrap();
        store
            .send(EnquiryAction::GuestPhoneEdited {
                slot,
                value: "+34600000000".to_string(),
            })
            .await
            .unwrap();
        store
            .send(EnquiryAction::DocumentAttached {
                slot,
                document: passport(&format!("guest_{}.png", i + 1)),
            })
            .await
            .unwrap();
    }
    store
        .send(EnquiryAction::EmailEdited {
            value: "ana@example.com".to_string(),
        })
        .await
        .unwrap();

    submit_and_settle(&store).await;

    assert!(matches!(
        store.state(|s| s.phase.clone()).await,
        EnquiryPhase::Confirmed { .. }
    ));

    let deliveries = relay.deliveries();
    assert_eq!(deliveries.len(), 1);
    let payload = &deliveries[0];
    assert_eq!(payload.text("property"), Some("Villa Azul"));
    assert_eq!(payload.text("adults"), Some("2"));
    assert_eq!(payload.text("children"), Some("1"));
    assert_eq!(payload.file_parts.len(), 2);
    assert_eq!(payload.file_parts[1].name, "document_guest_2");
}

#[tokio::test]
async fn shrinking_party_discards_second_guest_before_submit() {
    let relay = MockRelayClient::new();
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 2).await;

    // Drop to one adult: the second slot and its document disappear
    store
        .send(EnquiryAction::PartyChanged {
            adults: 1,
            children: 0,
        })
        .await
        .unwrap();

    submit_and_settle(&store).await;

    let deliveries = relay.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].file_parts.len(), 1);
    assert_eq!(deliveries[0].text("guest_2_name"), None);
}

#[tokio::test]
async fn exit_confirmation_tears_down_the_form() {
    let relay = MockRelayClient::new();
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 1).await;
    submit_and_settle(&store).await;

    store.send(EnquiryAction::ExitConfirmation).await.unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.phase, EnquiryPhase::SelectingDates);
    assert!(state.form.email.is_empty());
    assert_eq!(state.outcome.status, SubmissionStatus::Idle);
}

#[tokio::test]
async fn mock_relay_records_payload_verbatim() {
    // Sanity check that the recording mock hands back what was delivered
    let relay = MockRelayClient::new();
    let store = store_with(relay.clone(), EnquiryState::new());

    capture_complete_details(&store, 1).await;
    let nationality = reserva_enquiry::directory::by_name("United Arab Emirates").unwrap();
    store
        .send(EnquiryAction::NationalitySelected {
            country: nationality,
        })
        .await
        .unwrap();

    submit_and_settle(&store).await;

    let payload = relay.deliveries().remove(0);
    assert_eq!(payload.text("nationality"), Some("United Arab Emirates"));
    assert_eq!(payload.text("_replyto"), Some("ana@example.com"));
}
