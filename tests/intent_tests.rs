//! Intent detection and image-state transitions through the service.

mod common;

use common::{service_with, Completion, MockBackend};
use parlor::types::Intent;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn show_intent_from_empty_display_records_the_empty_slot() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Answer("show_sadbot_image".into()));
    let service = service_with(backend);

    let intent = service.detect("I want to see the sad one").await;

    assert_eq!(
        intent,
        Intent::ShowImage {
            agent_id: "sadbot".into()
        }
    );
    let image = service.image();
    assert_eq!(image.current.as_deref(), Some("sadbot.jpg"));
    assert_eq!(image.last, None);
}

#[tokio::test]
async fn go_back_reverts_to_the_recorded_slot_even_when_it_was_empty() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Answer("show_sadbot_image".into()));
    backend.queue_completion(Completion::Answer("go_back_to_last_image".into()));
    let service = service_with(backend);

    service.detect("show sadbot").await;
    let intent = service.detect("go back").await;

    assert_eq!(intent, Intent::GoBack);
    let image = service.image();
    assert_eq!(image.current, None);
    assert_eq!(image.last, None);
}

#[tokio::test]
async fn show_shifts_the_displayed_image_into_the_slot() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Answer("show_zenbot_image".into()));
    backend.queue_completion(Completion::Answer("show_sadbot_image".into()));
    backend.queue_completion(Completion::Answer("show_zenbot_image".into()));
    let service = service_with(backend);

    service.detect("zen please").await;
    service.detect("now sad").await;
    service.detect("zen again").await;

    let image = service.image();
    assert_eq!(image.current.as_deref(), Some("zenbot.jpg"));
    assert_eq!(image.last.as_deref(), Some("sadbot.jpg"));
}

#[tokio::test]
async fn classifier_answers_are_trimmed_and_case_folded() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Answer("  SHOW_ZENBOT_IMAGE \n".into()));
    let service = service_with(backend);

    let intent = service.detect("zen me").await;

    assert_eq!(
        intent,
        Intent::ShowImage {
            agent_id: "zenbot".into()
        }
    );
}

#[tokio::test]
async fn answers_outside_the_vocabulary_leave_state_untouched() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Answer("show_zenbot_image".into()));
    backend.queue_completion(Completion::Answer("make_me_a_sandwich".into()));
    let service = service_with(backend);

    service.detect("zen me").await;
    let before = service.image();
    let intent = service.detect("lunch?").await;

    assert_eq!(intent, Intent::Unknown);
    assert_eq!(service.image(), before);
}

#[tokio::test]
async fn classifier_failure_degrades_to_unknown() {
    let backend = MockBackend::new();
    backend.queue_completion(Completion::Fail);
    let service = service_with(backend);

    let intent = service.detect("anything").await;

    assert_eq!(intent, Intent::Unknown);
    assert_eq!(intent.label(), "unknown");
    assert_eq!(service.image().current, None);
}
