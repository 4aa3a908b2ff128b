//! Pure rewrite of embedded-constant payloads.
//!
//! Takes the target text and the fresh template payloads as plain strings and
//! returns the rewritten text plus an [`EmbedReport`]. No filesystem access
//! happens here; see [`crate::sync`] for the I/O boundary.

use crate::catalog::TemplateKind;
use crate::region;

/// Per-template outcome of one run.
#[derive(Debug, Clone, Copy)]
pub struct EmbedEntry {
    pub kind: TemplateKind,
    /// Byte length of the freshly read template content.
    pub bytes: usize,
    /// Number of regions rewritten for this kind. Zero means the target
    /// contained no matching declaration and the rewrite was a no-op.
    pub regions: usize,
}

/// Outcome of a full run, one entry per template kind in embedding order.
#[derive(Debug, Clone, Default)]
pub struct EmbedReport {
    pub entries: Vec<EmbedEntry>,
}

/// Rewrite every region for one constant name, returning the new text and the
/// number of regions rewritten.
///
/// The scan resumes after each rewritten declaration, so payload that was just
/// inserted is never re-matched even if it happens to contain a declaration
/// with the same name.
pub fn embed_one(target: &str, constant_name: &str, payload: &str) -> (String, usize) {
    let mut out = String::with_capacity(target.len() + payload.len());
    let mut cursor = 0;
    let mut rewritten = 0;

    while let Some(found) = region::find_region(target, constant_name, cursor) {
        out.push_str(&target[cursor..found.start]);
        out.push_str(&region::declaration(constant_name, payload));
        cursor = found.end;
        rewritten += 1;
    }
    out.push_str(&target[cursor..]);

    (out, rewritten)
}

/// Apply all template payloads sequentially, each over the output of the
/// previous step, and collect the report.
pub fn embed_all(target: &str, payloads: &[(TemplateKind, String)]) -> (String, EmbedReport) {
    let mut text = target.to_string();
    let mut report = EmbedReport::default();

    for (kind, payload) in payloads {
        let (next, rewritten) = embed_one(&text, kind.constant_name(), payload);
        text = next;
        report.entries.push(EmbedEntry {
            kind: *kind,
            bytes: payload.len(),
            regions: rewritten,
        });
    }

    (text, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::declaration;

    fn target_with_all(basic: &str, timelock: &str, weighted: &str) -> String {
        format!(
            "use anyhow::Result;\n\n{}\n\n{}\n\n{}\n\npub fn run(name: &str) -> Result<()> {{\n    let _ = name;\n    Ok(())\n}}\n",
            declaration("BASIC_TEMPLATE_LIB", basic),
            declaration("TIMELOCK_TEMPLATE_LIB", timelock),
            declaration("WEIGHTED_TEMPLATE_LIB", weighted),
        )
    }

    fn payloads() -> Vec<(TemplateKind, String)> {
        vec![
            (TemplateKind::Basic, "fn main() {}".to_string()),
            (TemplateKind::Timelock, "fn locked() {}".to_string()),
            (TemplateKind::Weighted, "fn weighted() {}".to_string()),
        ]
    }

    #[test]
    fn test_embed_replaces_all_payloads_verbatim() {
        let target = target_with_all("OLD_BASIC", "OLD_TIMELOCK", "OLD_WEIGHTED");
        let (out, report) = embed_all(&target, &payloads());

        let expected = target_with_all("fn main() {}", "fn locked() {}", "fn weighted() {}");
        assert_eq!(out, expected);
        assert!(report.entries.iter().all(|e| e.regions == 1));
    }

    #[test]
    fn test_embed_reports_exact_byte_counts() {
        let target = target_with_all("OLD_BASIC", "OLD_TIMELOCK", "OLD_WEIGHTED");
        let (_, report) = embed_all(&target, &payloads());

        assert_eq!(report.entries[0].bytes, "fn main() {}".len());
        assert_eq!(report.entries[1].bytes, "fn locked() {}".len());
        assert_eq!(report.entries[2].bytes, "fn weighted() {}".len());
    }

    #[test]
    fn test_embed_is_idempotent() {
        let target = target_with_all("OLD_BASIC", "OLD_TIMELOCK", "OLD_WEIGHTED");
        let (once, _) = embed_all(&target, &payloads());
        let (twice, _) = embed_all(&once, &payloads());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_embed_missing_region_is_noop_for_that_kind() {
        // Target carries only the basic and weighted declarations.
        let target = format!(
            "{}\n{}\n",
            declaration("BASIC_TEMPLATE_LIB", "OLD_BASIC"),
            declaration("WEIGHTED_TEMPLATE_LIB", "OLD_WEIGHTED"),
        );
        let (out, report) = embed_all(&target, &payloads());

        assert_eq!(report.entries[0].regions, 1);
        assert_eq!(report.entries[1].regions, 0);
        assert_eq!(report.entries[2].regions, 1);
        assert!(out.contains("fn main() {}"));
        assert!(!out.contains("fn locked() {}"));
        assert!(out.contains("fn weighted() {}"));
    }

    #[test]
    fn test_embed_one_leaves_other_constants_untouched() {
        let target = target_with_all("OLD_BASIC", "OLD_TIMELOCK", "OLD_WEIGHTED");
        let (out, rewritten) = embed_one(&target, "TIMELOCK_TEMPLATE_LIB", "fn locked() {}");

        assert_eq!(rewritten, 1);
        assert!(out.contains("OLD_BASIC"));
        assert!(out.contains("fn locked() {}"));
        assert!(out.contains("OLD_WEIGHTED"));
    }

    #[test]
    fn test_embed_one_rewrites_repeated_regions() {
        let target = format!(
            "{}\n{}\n",
            declaration("BASIC_TEMPLATE_LIB", "first"),
            declaration("BASIC_TEMPLATE_LIB", "second"),
        );
        let (out, rewritten) = embed_one(&target, "BASIC_TEMPLATE_LIB", "fresh");

        assert_eq!(rewritten, 2);
        assert!(!out.contains("first"));
        assert!(!out.contains("second"));
    }

    #[test]
    fn test_embed_one_does_not_rematch_inserted_payload() {
        let target = declaration("BASIC_TEMPLATE_LIB", "OLD");
        // A payload that itself looks like an (unterminated) declaration open.
        let tricky = "const BASIC_TEMPLATE_LIB: &str = r#\"inner";
        let (out, rewritten) = embed_one(&target, "BASIC_TEMPLATE_LIB", tricky);

        assert_eq!(rewritten, 1);
        assert_eq!(out, declaration("BASIC_TEMPLATE_LIB", tricky));
    }
}
