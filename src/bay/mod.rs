//! Repair bay: the damaged-system diagnostic game.
//!
//! ## Module Map
//!
//! ```text
//! ┌──────────┐   HTTP   ┌──────────────────────────────────────────────┐
//! │  Client  │ ───────> │  server.rs  (Router, ServerConfig, serve)    │
//! │          │ <─────── │    └─ api.rs  (handlers, ApiError)           │
//! └──────────┘          │         │                                    │
//!                       │         v                                    │
//!                       │  service.rs  (DiagnosticService)             │
//!                       │    ├─ catalog.rs  (FaultCatalog)             │
//!                       │    ├─ picker.rs   (FaultPicker)              │
//!                       │    └─ session.rs  (SessionStore)             │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! 1. `GET /status` → `DiagnosticService::check_status()` picks a system from
//!    the catalog and stores it under the caller's IP.
//! 2. `GET /repair-bay` → `DiagnosticService::repair_code()` looks the IP up
//!    and answers with an HTML page carrying the repair code, or 404 when the
//!    caller never asked for a status.
//! 3. `POST /teapot` → always 418.

pub mod api;
pub mod catalog;
pub mod picker;
pub mod server;
pub mod service;
pub mod session;
