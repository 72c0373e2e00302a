use crate::{
    BridgeCommand, Phase, Trigger, ViewUpdate,
    tests::support::Harness,
};

/// WHAT: A picked image and its preview are both displayed
/// WHY: Core happy path of the source selection workflow
#[tokio::test]
async fn given_picked_image_when_preview_loads_then_path_and_preview_displayed() {
    // Given: A fresh view
    let mut harness = Harness::new();

    // When: The host picks /img/logo.png and renders its preview
    harness.select_source("/img/logo.png", "iVBORw0KG...").await;

    // Then: The view shows that path with that preview
    let view = harness.orchestrator.view();
    assert_eq!(view.source_path(), "/img/logo.png");
    assert_eq!(view.preview(), "iVBORw0KG...");
    assert_eq!(
        harness.drain_updates(),
        vec![ViewUpdate::SourceSelected {
            path: "/img/logo.png".to_string(),
            preview: "iVBORw0KG...".to_string(),
        }]
    );
}

/// WHAT: Nothing is displayed until the preview has resolved
/// WHY: The path field and preview update together, after both calls
#[tokio::test]
async fn given_image_picked_when_preview_outstanding_then_view_unchanged() {
    // Given: A pick that has resolved its path
    let mut harness = Harness::new();
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("/img/logo.png");
    harness.settle().await;

    // When: The preview fetch is still outstanding
    let fetch = harness.next_call().await;

    // Then: No update was published yet
    assert_eq!(
        fetch.command,
        BridgeCommand::GetPreview {
            image_path: "/img/logo.png".to_string()
        }
    );
    assert!(harness.drain_updates().is_empty());
    assert_eq!(harness.orchestrator.view().source_path(), "");
}

/// WHAT: Cancelling the picker keeps the previous selection
/// WHY: Cancellation is not an error and must not touch state
#[tokio::test]
async fn given_previous_selection_when_picker_cancelled_then_state_unchanged() {
    // Given: An existing selection
    let mut harness = Harness::new();
    harness.select_source("/img/logo.png", "AAAA").await;
    harness.drain_updates();

    // When: The picker is cancelled twice, once with null and once with ""
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_cancelled();
    harness.settle().await;
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("");
    harness.settle().await;

    // Then: No preview was requested, nothing changed, status untouched
    harness.assert_no_call().await;
    assert!(harness.drain_updates().is_empty());
    let view = harness.orchestrator.view();
    assert_eq!(view.source_path(), "/img/logo.png");
    assert_eq!(view.preview(), "AAAA");
    assert_eq!(*view.phase(), Phase::Idle);
}

/// WHAT: A late preview from an earlier pick is discarded
/// WHY: Last trigger wins, not last resolver
#[tokio::test]
async fn given_overlapping_picks_when_earlier_preview_resolves_last_then_discarded() {
    // Given: Pick A has resolved its path and is fetching its preview
    let mut harness = Harness::new();
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("/img/a.png");
    harness.settle().await;
    let preview_a = harness.next_call().await;

    // And: Pick B is triggered and fetches its own preview
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("/img/b.png");
    harness.settle().await;
    let preview_b = harness.next_call().await;

    // When: B's preview resolves first, then A's
    preview_b.reply_preview("BBBB");
    harness.settle().await;
    preview_a.reply_preview("AAAA");
    harness.settle().await;

    // Then: The view shows B with B's preview only
    let view = harness.orchestrator.view();
    assert_eq!(view.source_path(), "/img/b.png");
    assert_eq!(view.preview(), "BBBB");
    assert_eq!(
        harness.drain_updates(),
        vec![ViewUpdate::SourceSelected {
            path: "/img/b.png".to_string(),
            preview: "BBBB".to_string(),
        }]
    );
}

/// WHAT: A superseded pick never requests a preview
/// WHY: Previews must not be fetched for stale paths
#[tokio::test]
async fn given_second_pick_started_when_first_path_arrives_late_then_no_preview_requested() {
    // Given: Two picks in flight
    let mut harness = Harness::new();
    harness.trigger(Trigger::PickSource);
    let pick_a = harness.next_call().await;
    harness.trigger(Trigger::PickSource);
    let pick_b = harness.next_call().await;

    // When: The first pick resolves after the second was triggered
    pick_a.reply_path("/img/a.png");
    harness.settle().await;

    // Then: No preview call was made for /img/a.png
    harness.assert_no_call().await;

    // And: The second pick proceeds normally
    pick_b.reply_path("/img/b.png");
    harness.settle().await;
    let fetch = harness.next_call().await;
    assert_eq!(
        fetch.command,
        BridgeCommand::GetPreview {
            image_path: "/img/b.png".to_string()
        }
    );
}

/// WHAT: A cancelled newer pick also discards an older pending preview
/// WHY: Ordering follows triggers, so the newest (cancelled) pick wins
#[tokio::test]
async fn given_older_preview_outstanding_when_newer_pick_cancelled_then_older_discarded() {
    // Given: A preview in flight for /img/a.png
    let mut harness = Harness::new();
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("/img/a.png");
    harness.settle().await;
    let preview_a = harness.next_call().await;

    // When: A newer pick is cancelled, then A's preview resolves
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_cancelled();
    harness.settle().await;
    preview_a.reply_preview("AAAA");
    harness.settle().await;

    // Then: Nothing was displayed
    assert!(harness.drain_updates().is_empty());
    assert_eq!(harness.orchestrator.view().source_path(), "");
}

/// WHAT: A failed preview shows the new path with no preview and a failure
/// WHY: The old preview must not appear against the new path, and the
/// failure must be visible
#[tokio::test]
async fn given_previous_selection_when_preview_fails_then_path_shown_without_preview() {
    // Given: An existing selection with a preview
    let mut harness = Harness::new();
    harness.select_source("/img/logo.png", "AAAA").await;
    harness.drain_updates();

    // When: A new pick's preview fails
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_path("/img/broken.png");
    harness.settle().await;
    harness.next_call().await.reply_error("not an image");
    harness.settle().await;

    // Then: The new path is shown with an empty preview and a failed status
    let view = harness.orchestrator.view();
    assert_eq!(view.source_path(), "/img/broken.png");
    assert_eq!(view.preview(), "");
    assert!(matches!(view.phase(), Phase::Failed { reason } if reason.contains("not an image")));
}

/// WHAT: A failing image picker surfaces a failure and keeps the selection
/// WHY: Genuine host failures are distinct from cancellation
#[tokio::test]
async fn given_previous_selection_when_picker_fails_then_failed_and_selection_kept() {
    // Given: An existing selection
    let mut harness = Harness::new();
    harness.select_source("/img/logo.png", "AAAA").await;
    harness.drain_updates();

    // When: The picker itself fails
    harness.trigger(Trigger::PickSource);
    harness.next_call().await.reply_error("dialog unavailable");
    harness.settle().await;

    // Then: Status is Failed, selection untouched
    let phases = harness.drain_phases();
    assert_eq!(phases.len(), 1);
    assert!(matches!(&phases[0], Phase::Failed { reason } if reason.contains("dialog unavailable")));
    assert_eq!(harness.orchestrator.view().source_path(), "/img/logo.png");
    assert_eq!(harness.orchestrator.view().preview(), "AAAA");
}
