//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pawhaven_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pawhaven_core ping={}", pawhaven_core::ping());
    println!("pawhaven_core version={}", pawhaven_core::core_version());
    println!("{}", pawhaven_core::service_banner());
}
