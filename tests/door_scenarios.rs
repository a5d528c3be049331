//! End-to-end door scenarios driven through the public API.

use actuate::doors::DOOR_BROKEN;
use actuate::motion::{ActuatorDriver, ActuatorHandle};
use actuate::{
    Door, DoorCommand, DoorConfig, DoorState, GarageCommand, GarageDoor, GarageState, StatusLog,
    StatusReport,
};
use std::time::Duration;

#[test]
fn door_opens_and_closes_through_sensor_events() {
    let log = StatusLog::new();
    let mut door = Door::new(log.clone());
    assert_eq!(door.state(), Some(&DoorState::Closed));
    assert_eq!(door.percent(), 0);

    assert!(door.open());
    assert_eq!(door.state(), Some(&DoorState::Opening));
    assert!(door.is_moving());

    for _ in 0..99 {
        door.tick();
    }
    assert_eq!(door.percent(), 99);
    assert_eq!(door.state(), Some(&DoorState::Opening));

    door.tick();
    assert_eq!(door.percent(), 100);
    assert_eq!(door.state(), Some(&DoorState::Opened));
    assert!(!door.is_moving());
    assert_eq!(log.last(), Some(StatusReport::new("Opened", 100)));

    assert!(door.close());
    assert_eq!(door.state(), Some(&DoorState::Closing));
    for _ in 0..100 {
        door.tick();
    }
    assert_eq!(door.percent(), 0);
    assert_eq!(door.state(), Some(&DoorState::Closed));
    assert!(!door.is_moving());
    assert_eq!(log.last(), Some(StatusReport::new("Closed", 0)));
}

#[test]
fn door_reports_every_step_in_order() {
    let log = StatusLog::new();
    let mut door = Door::new(log.clone());

    door.open();
    door.advance(Duration::from_secs(1));

    let reports = log.reports();
    assert_eq!(reports.len(), 102);
    assert_eq!(reports[0], StatusReport::new("Opening", 0));
    for (i, report) in reports[1..101].iter().enumerate() {
        assert_eq!(report, &StatusReport::new("Opening", i as u8 + 1));
    }
    assert_eq!(reports[101], StatusReport::new("Opened", 100));
}

#[test]
fn door_timing_follows_config() {
    let mut door = Door::with_config(
        DoorConfig::door().with_tick_period(Duration::from_millis(50)),
        StatusLog::new(),
    );

    door.open();
    door.advance(Duration::from_millis(499));
    assert_eq!(door.percent(), 9);
    door.advance(Duration::from_millis(1));
    assert_eq!(door.percent(), 10);
}

#[test]
fn garage_stop_and_resume_from_partial_opening() {
    let log = StatusLog::new();
    let mut door = GarageDoor::new(log.clone());

    assert!(door.button_pushed());
    assert_eq!(door.state(), Some(&GarageState::Opening));
    for _ in 0..40 {
        door.tick();
    }
    assert_eq!(door.percent(), 40);

    assert!(door.button_pushed());
    assert_eq!(door.state(), Some(&GarageState::OpeningStopped));
    assert!(!door.is_moving());
    door.advance(Duration::from_secs(5));
    assert_eq!(door.percent(), 40);

    assert!(door.button_pushed());
    assert_eq!(door.state(), Some(&GarageState::Closing));
    assert_eq!(log.last(), Some(StatusReport::new("Door Closing", 40)));

    for _ in 0..39 {
        door.tick();
    }
    assert_eq!(door.percent(), 1);
    assert_eq!(door.state(), Some(&GarageState::Closing));

    door.tick();
    assert_eq!(door.percent(), 0);
    assert_eq!(door.state(), Some(&GarageState::Closed));
    assert_eq!(log.last(), Some(StatusReport::new("Door Closed", 0)));
}

#[test]
fn garage_closing_stop_resumes_upward() {
    let mut door = GarageDoor::new(StatusLog::new());

    door.button_pushed();
    door.advance(Duration::from_secs(3));
    assert_eq!(door.state(), Some(&GarageState::Opened));

    door.button_pushed();
    for _ in 0..25 {
        door.tick();
    }
    door.button_pushed();
    assert_eq!(door.state(), Some(&GarageState::ClosingStopped));
    assert_eq!(door.percent(), 75);

    door.button_pushed();
    assert_eq!(door.state(), Some(&GarageState::Opening));
    door.tick();
    assert_eq!(door.percent(), 76);
}

#[test]
fn garage_history_follows_the_ring() {
    let mut door = GarageDoor::new(StatusLog::new());
    for _ in 0..5 {
        assert!(door.button_pushed());
    }

    let path: Vec<GarageState> = door
        .history()
        .unwrap()
        .get_path()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(
        path,
        vec![
            GarageState::Closed,
            GarageState::Opening,
            GarageState::OpeningStopped,
            GarageState::Closing,
            GarageState::ClosingStopped,
            GarageState::Opening,
        ]
    );
}

#[test]
fn broken_label_is_exported() {
    assert_eq!(DOOR_BROKEN, "Door Broken");
}

async fn send<C: std::fmt::Debug + Send + 'static>(
    handle: &ActuatorHandle<C>,
    command: C,
) -> bool {
    handle.execute(command).await.unwrap()
}

#[tokio::test(start_paused = true)]
async fn driven_door_opens_in_real_time() {
    let log = StatusLog::new();
    let (handle, task) = ActuatorDriver::spawn(Door::new(log.clone()));

    assert!(send(&handle, DoorCommand::Open).await);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(send(&handle, DoorCommand::Open).await);
    tokio::time::sleep(Duration::from_millis(600)).await;

    drop(handle);
    let door = task.await.unwrap();
    assert_eq!(door.state(), Some(&DoorState::Opened));
    assert_eq!(door.percent(), 100);
    assert_eq!(log.last(), Some(StatusReport::new("Opened", 100)));
}

#[tokio::test(start_paused = true)]
async fn driven_garage_stops_between_pushes() {
    let (handle, task) = ActuatorDriver::spawn(GarageDoor::new(StatusLog::new()));

    assert!(send(&handle, GarageCommand::ButtonPushed).await);
    tokio::time::sleep(Duration::from_millis(30 * 20 + 15)).await;
    assert!(send(&handle, GarageCommand::ButtonPushed).await);
    tokio::time::sleep(Duration::from_secs(2)).await;

    drop(handle);
    let door = task.await.unwrap();
    assert_eq!(door.state(), Some(&GarageState::OpeningStopped));
    assert_eq!(door.percent(), 20);
}
