//! User interface components for Ping!.
//!
//! This module contains the components that make up the application shell:
//! the top navigation bar, the authentication screen, the overlay dialogs
//! the bar opens, and the document title utility.

pub mod auth; // Sign-in / sign-up screen (public for routing)
mod dialogs; // Search, notifications and new-group overlays
mod header; // Top navigation bar
mod icons; // Inline SVG icon set
pub mod pages; // Route shells (public for routing)
pub mod title;
