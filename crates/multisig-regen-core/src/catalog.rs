//! The fixed set of templates the toolkit embeds.
//!
//! Paths are relative to the toolkit repository root, which is assumed to be
//! the working directory of the run. The constant names must match the
//! declarations in the target file exactly; renaming a constant there without
//! updating this catalog turns the corresponding rewrite into a silent no-op.

/// Path to the generator source file that holds the embedded constants.
pub const TARGET_PATH: &str = "cli/src/commands/init.rs";

/// One of the toolkit's contract templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Basic,
    Timelock,
    Weighted,
}

impl TemplateKind {
    /// Embedding order. Rewrites are applied sequentially in this order.
    pub const ALL: [TemplateKind; 3] = [Self::Basic, Self::Timelock, Self::Weighted];

    /// Name of the embedded constant in the target file.
    pub fn constant_name(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC_TEMPLATE_LIB",
            Self::Timelock => "TIMELOCK_TEMPLATE_LIB",
            Self::Weighted => "WEIGHTED_TEMPLATE_LIB",
        }
    }

    /// Path to the template's contract source, relative to the repo root.
    pub fn source_path(&self) -> &'static str {
        match self {
            Self::Basic => "templates/basic/contract/src/lib.rs",
            Self::Timelock => "templates/timelock/contract/src/lib.rs",
            Self::Weighted => "templates/weighted/contract/src/lib.rs",
        }
    }

    /// Short lowercase name, used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Timelock => "timelock",
            Self::Weighted => "weighted",
        }
    }

    /// Capitalized label used in the success report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Timelock => "Timelock",
            Self::Weighted => "Weighted",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
