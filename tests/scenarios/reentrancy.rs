//! Scenario: trigger re-entrancy and re-runs

use crate::helpers::*;
use std::time::Duration;
use thermoci::{RunState, StatusIndicator, Timeline};

#[tokio::test(start_paused = true)]
async fn second_trigger_while_running_is_ignored() {
    let (simulator, surface, events) = simulator_fixture(Timeline::reference());

    let handle = simulator.trigger().await.expect("first trigger starts");
    let first_run_id = simulator.state().await.run_id.unwrap();

    // Let part of the run play out, then press the button again
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(simulator.trigger().await.is_none());

    {
        let surface = surface.lock().await;
        // Log was not cleared mid-run and no duplicate schedule was created
        assert_eq!(surface.log_cleared_count, 1);
        assert_eq!(surface.log.len(), 2);
    }
    assert_eq!(simulator.state().await.run_id, Some(first_run_id));

    handle.await.unwrap();

    let surface = surface.lock().await;
    assert_eq!(surface.log.len(), 8, "no duplicate steps fired");
    let started = events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| matches!(e, thermoci::SimulationEvent::RunStarted { .. }))
        .count();
    assert_eq!(started, 1);
}

#[tokio::test(start_paused = true)]
async fn completed_run_can_be_retriggered() {
    let (simulator, surface, _events) = simulator_fixture(Timeline::reference());

    let handle = simulator.trigger().await.expect("first trigger starts");
    handle.await.unwrap();
    let first_run_id = simulator.state().await.run_id.unwrap();
    assert_eq!(simulator.state().await.status, RunState::Completed);

    let handle = simulator.trigger().await.expect("retrigger after completion");
    let second_run_id = simulator.state().await.run_id.unwrap();
    assert_ne!(first_run_id, second_run_id);

    {
        let surface = surface.lock().await;
        // Fresh run clears the previous log
        assert_eq!(surface.log_cleared_count, 2);
        assert_eq!(surface.log.len(), 0);
        assert_eq!(surface.status(), StatusIndicator::Running);
    }

    handle.await.unwrap();
    let surface = surface.lock().await;
    assert_eq!(surface.log.len(), 8);
    assert_eq!(surface.status(), StatusIndicator::Success);
}
