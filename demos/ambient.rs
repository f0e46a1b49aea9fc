//! # Ambient Backdrop
//!
//! The default scroll-driven constellation field.
//!
//! ## What This Demonstrates
//!
//! - The `Backdrop::new().with_*().run()` builder
//! - Scene-mode changes as you scroll through the nine sections
//! - The flickering connection lines between nearby particles
//!
//! ## Controls
//!
//! - **Scroll wheel**: move through the page sections
//! - **Escape**: quit
//!
//! Watch the field turn from sparse green (wireframe) to dense yellow
//! (garden) to densest violet (final) as you scroll down, and back again
//! as you scroll up.
//!
//! Run with: `cargo run --example ambient`

use driftfield::Backdrop;

fn main() {
    if let Err(e) = Backdrop::new()
        .with_title("driftfield - ambient")
        .with_section_height(1000.0)
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
