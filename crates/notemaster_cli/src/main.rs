//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notemaster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("notemaster_core ping={}", notemaster_core::ping());
    println!("notemaster_core version={}", notemaster_core::core_version());
}
