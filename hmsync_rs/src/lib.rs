//! # hmsync
//!
//! **Page logic for the HMSync landing site** - everything the marketing page
//! does that is not markup, kept free of browser APIs so it can be tested on
//! the host.
//!
//! ## Features
//!
//! - **Contact Validation** - Five-field demo request schema with inline error messages
//! - **Scroll Transforms** - Piecewise-linear mappings from scroll progress to layer styles
//! - **Reveal Latch** - Sections that slide in once when they first enter the viewport
//! - **Notifications** - FIFO toast queue with explicit-clock auto-dismiss
//! - **Page Content** - Feature and value-proposition copy as static data
//!
//! ## Quick Start
//!
//! ```rust
//! use hmsync::contact::{ContactField, ContactForm, SubmitOutcome};
//! use hmsync::notify::ToastQueue;
//! use std::time::Duration;
//!
//! let mut toasts = ToastQueue::new(Duration::ZERO);
//! let mut form = ContactForm::default();
//! form.set(ContactField::Name, "J");
//!
//! assert_eq!(form.submit(&mut toasts), SubmitOutcome::Rejected);
//! assert!(form.error(ContactField::Name).is_some());
//! assert!(toasts.is_empty());
//! ```
//!
//! ```rust
//! use hmsync::scroll::{HeroParallax, ScrollProgress};
//!
//! let parallax = HeroParallax::default();
//! let start = parallax.styles(ScrollProgress::START);
//! assert_eq!(start.back_layer.translate_y, 0.0);
//! assert_eq!(start.content.opacity, 1.0);
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Demo-request form: field schema, email grammar and submit flow.
pub mod contact;

/// Static page copy: features, value propositions, comparison lists.
pub mod content;

/// Transient notification queue.
pub mod notify;

/// Reveal-on-view latch for animated sections.
pub mod reveal;

/// Scroll progress and scroll-linked transforms.
pub mod scroll;

/// Light/dark theme preference.
pub mod theme;

// ============================================================================
// Re-exports
// ============================================================================

pub use contact::{ContactField, ContactForm, ContactRequest, FieldErrors, SubmitOutcome};
pub use notify::{Notifier, Toast, ToastId, ToastQueue};
pub use scroll::{HeroParallax, LayerStyle, ScrollProgress, Transform, TransformError};
