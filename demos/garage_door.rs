//! Garage Door
//!
//! This example drives a single-button garage door in real time.
//!
//! Key concepts:
//! - One command cycling through move and stop states
//! - Stopping keeps the door where it is; the next push reverses it
//! - Status collected in a shared `StatusLog`
//! - Door timing read from TOML configuration
//!
//! Run with: cargo run --example garage_door

use actuate::motion::ActuatorDriver;
use actuate::{DoorConfig, GarageCommand, GarageDoor, StatusLog};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== Garage Door ===\n");

    let config = DoorConfig::from_toml_str("tick_period_ms = 30").unwrap();
    let log = StatusLog::new();
    let (handle, task) = ActuatorDriver::spawn(GarageDoor::with_config(config, log.clone()));

    let push = |label: &'static str, wait: Duration| {
        let handle = handle.clone();
        let log = log.clone();
        async move {
            let accepted = handle.execute(GarageCommand::ButtonPushed).await.unwrap();
            tokio::time::sleep(wait).await;
            let last = log.last().unwrap();
            println!(
                "{label:<28} accepted={accepted:<5} -> {:<13} {:>3}%",
                last.status, last.percent
            );
        }
    };

    push("Push (closed)", Duration::from_millis(1215)).await;
    push("Push (opening)", Duration::from_millis(300)).await;
    push("Push (stopped part way)", Duration::from_millis(600)).await;
    push("Push (closing)", Duration::from_millis(300)).await;
    push("Push (stopped part way)", Duration::from_secs(4)).await;
    push("Push (opened)", Duration::from_secs(4)).await;

    drop(handle);
    let door = task.await.unwrap();

    println!("\nFinal state: {:?} at {}%", door.state(), door.percent());
    println!("Status updates reported: {}", log.len());

    println!("\n=== Example Complete ===");
}
