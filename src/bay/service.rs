//! The diagnostic session service.
//!
//! Two-step flow per client address:
//!
//! 1. [`DiagnosticService::check_status`] draws a fault from the catalog and
//!    records it as the client's session, replacing any earlier one.
//! 2. [`DiagnosticService::repair_code`] reads that session back and resolves
//!    the repair code; [`render_repair_page`] wraps it for the browser.

use tracing::{debug, error, info};

use super::catalog::FaultCatalog;
use super::picker::{FaultPicker, RandomPicker};
use super::session::{ClientSession, SessionStore};
use crate::errors::DiagnosticError;

/// CSS class of the element holding the repair code.
pub const ANCHOR_CLASS: &str = "anchor-point";

pub struct DiagnosticService {
    catalog: FaultCatalog,
    sessions: SessionStore,
    picker: Box<dyn FaultPicker>,
}

impl Default for DiagnosticService {
    fn default() -> Self {
        Self::new(FaultCatalog::default(), RandomPicker)
    }
}

impl DiagnosticService {
    pub fn new(catalog: FaultCatalog, picker: impl FaultPicker + 'static) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            picker: Box::new(picker),
        }
    }

    pub fn catalog(&self) -> &FaultCatalog {
        &self.catalog
    }

    pub(crate) fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Assign a fresh damaged system to `client` and return its identifier.
    pub async fn check_status(&self, client: &str) -> String {
        let fault_ids = self.catalog.fault_ids();
        let idx = self.picker.pick(fault_ids);
        // Catalog is never empty, so index 0 always exists.
        let fault = fault_ids.get(idx).unwrap_or(&fault_ids[0]).clone();

        self.sessions
            .assign(client, ClientSession::assigned(fault.clone()))
            .await;

        info!(client, damaged_system = %fault, "Assigned damaged system");
        fault
    }

    /// Repair code for the fault last assigned to `client`.
    pub async fn repair_code(&self, client: &str) -> Result<String, DiagnosticError> {
        let fault = self
            .sessions
            .get(client)
            .await
            .and_then(|session| session.damaged_system)
            .ok_or_else(|| {
                debug!(client, "Repair code requested before status check");
                DiagnosticError::NoDamagedSystem
            })?;

        match self.catalog.repair_code(&fault) {
            Some(code) => Ok(code.to_string()),
            None => {
                error!(client, damaged_system = %fault, "Session references unknown system");
                Err(DiagnosticError::InvalidDamagedSystem { fault })
            }
        }
    }
}

/// HTML page showing `code` inside the anchor element.
pub fn render_repair_page(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Repair</title></head>
<body>
  <div class="{}">{}</div>
</body>
</html>
"#,
        ANCHOR_CLASS,
        escape_html(code)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
