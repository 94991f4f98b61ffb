//! Basic usage example
//!
//! Logs to `./app.log` and pushes to a local Loki instance if one is running.
//! Entries still reach the file when Loki is unreachable.
//!
//! Run with: cargo run --example basic_usage

use rust_loki_logger::{global, new_field, LoggerConfig};
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Rust Loki Logger - Basic Usage Example ===\n");

    global::initialize(
        LoggerConfig::new()
            .with_level("debug")
            .with_file_path("./app.log")
            .with_remote_url("http://localhost:3100/loki/api/v1/push")
            .with_label("service", "example-app")
            .with_label("env", "development")
            .with_label("version", "1.0.0")
            .with_console(true),
    );

    global::info_with_fields(
        "application started",
        [new_field("startup_time", chrono::Utc::now())],
    );
    global::debug_with_fields("debug information", [new_field("debug_flag", true)]);

    global::info_with_fields(
        "user login",
        [
            new_field("user_id", "12345"),
            new_field("username", "alice"),
            new_field("ip", "192.168.1.100"),
        ],
    );

    global::warn_with_fields(
        "slow database connection",
        [
            new_field("connection_time", 5.2),
            new_field("threshold", 3.0),
            new_field("database", "postgres"),
        ],
    );

    process_orders();

    global::info("application finished");

    let metrics = global::global_logger().metrics();
    println!(
        "\nDelivered: {}, dropped: {}",
        metrics.delivered_count(),
        metrics.dropped_count()
    );
}

fn process_orders() {
    global::info("processing orders");

    for i in 1..=5 {
        global::info_with_fields(
            "processing order",
            [
                new_field("order_id", i),
                new_field("customer_id", 100 + i),
                new_field("amount", 99.99 * i as f64),
                new_field("status", "processing"),
            ],
        );

        thread::sleep(Duration::from_millis(100));

        if i == 3 {
            global::warn_with_fields(
                "order processing slow",
                [new_field("order_id", i), new_field("processing_time", 2.5)],
            );
        }
    }

    global::info_with_fields("orders complete", [new_field("total_orders", 5)]);
}
