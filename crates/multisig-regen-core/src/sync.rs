//! Filesystem boundary: read templates, rewrite the target, write it back.
//!
//! All disk access for a run lives here. The order matters for failure
//! behavior: every template source is read before the target is opened, so a
//! missing or unreadable template aborts the run with the target file
//! untouched. The rewritten target is written in a single call; there is no
//! backup and no rollback.

use std::path::Path;

use crate::catalog::{TemplateKind, TARGET_PATH};
use crate::embed::{self, EmbedReport};
use crate::error::{RegenError, Result};

/// Run a full regeneration rooted at `root` (the toolkit repository root).
///
/// Reads the template sources listed in [`TemplateKind::ALL`], rewrites the
/// matching embedded constants in [`TARGET_PATH`], overwrites the target file,
/// and returns the per-template report.
pub fn regenerate(root: &Path) -> Result<EmbedReport> {
    let mut payloads = Vec::with_capacity(TemplateKind::ALL.len());
    for kind in TemplateKind::ALL {
        let path = root.join(kind.source_path());
        let content = std::fs::read_to_string(&path).map_err(|e| RegenError::TemplateRead {
            kind: kind.as_str(),
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!("read {kind} template: {} bytes from {}", content.len(), path.display());

        if content.contains("\"#") {
            // Would close the generated raw-string literal early. The rewrite
            // proceeds anyway; the resulting target will not compile.
            tracing::warn!("{kind} template contains a '\"#' sequence");
        }
        payloads.push((kind, content));
    }

    let target_path = root.join(TARGET_PATH);
    let target = std::fs::read_to_string(&target_path).map_err(|e| RegenError::TargetRead {
        path: target_path.clone(),
        source: e,
    })?;

    let (rewritten, report) = embed::embed_all(&target, &payloads);

    for entry in &report.entries {
        if entry.regions == 0 {
            tracing::warn!(
                "no {} declaration found in {}; left unchanged",
                entry.kind.constant_name(),
                target_path.display()
            );
        }
    }

    std::fs::write(&target_path, rewritten).map_err(|e| RegenError::TargetWrite {
        path: target_path.clone(),
        source: e,
    })?;
    tracing::debug!("wrote {}", target_path.display());

    Ok(report)
}
