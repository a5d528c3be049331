//! Simple Door
//!
//! This example drives a simple door in real time.
//!
//! Key concepts:
//! - Open and close commands sent to a driven actuator
//! - One-percent motion steps every 10ms
//! - Re-sending a command while it is in progress is harmless
//! - Turning the door around mid-travel
//!
//! Run with: cargo run --example door
//! Set RUST_LOG=actuate=trace to watch the engine and motion timer.

use actuate::motion::ActuatorDriver;
use actuate::{Door, DoorCommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== Simple Door ===\n");

    let door = Door::new(|status: &str, percent: u8| {
        if percent % 25 == 0 || !status.ends_with("ing") {
            println!("  {status:<8} {percent:>3}%");
        }
    });
    let (handle, task) = ActuatorDriver::spawn(door);

    println!("Opening fully:");
    handle.execute(DoorCommand::Open).await.unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;
    println!("  (open again while opening)");
    handle.execute(DoorCommand::Open).await.unwrap();
    tokio::time::sleep(Duration::from_millis(700)).await;

    println!("\nClosing, then changing our mind at about 50%:");
    handle.execute(DoorCommand::Close).await.unwrap();
    tokio::time::sleep(Duration::from_millis(505)).await;
    handle.execute(DoorCommand::Open).await.unwrap();
    tokio::time::sleep(Duration::from_millis(600)).await;

    drop(handle);
    let door = task.await.unwrap();

    println!("\nFinal state: {:?} at {}%", door.state(), door.percent());
    if let Some(history) = door.history() {
        println!("Transitions recorded: {}", history.transitions().len());
    }

    println!("\n=== Example Complete ===");
}
