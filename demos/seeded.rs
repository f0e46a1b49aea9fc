//! # Seeded Run
//!
//! Deterministic replay of the backdrop.
//!
//! ## What This Demonstrates
//!
//! - `.with_seed(..)` pins the particle generator, so every run spawns the
//!   same population and flickers the same connections
//! - `.with_scroll_speed(..)` scales wheel sensitivity
//!
//! The production backdrop is intentionally nondeterministic; seeding exists
//! for visual regression comparisons and debugging a specific flicker.
//!
//! Run with: `cargo run --example seeded`

use driftfield::Backdrop;

fn main() {
    if let Err(e) = Backdrop::new()
        .with_title("driftfield - seeded")
        .with_seed(0xC0FFEE)
        .with_scroll_speed(1.5)
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
