//! The compiled-in guide catalog.
//!
//! rulekit installs a fixed set of guidance documents. This module is the
//! single source of truth for what those documents are: their stable keys,
//! the file names they create in a project, and where their bundled sources
//! live relative to the package root. The slice order is the display order
//! everywhere a catalog is shown.

/// One installable guidance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideEntry {
    /// Stable identifier; doubles as the name of the selection flag.
    pub key: &'static str,
    /// File name created in the destination directory.
    pub file_name: &'static str,
    /// One-line purpose string shown in the interactive menu.
    pub description: &'static str,
    /// Bundled source path, relative to the package root.
    pub source: &'static str,
}

/// Every guide rulekit knows how to install, in display order.
pub const GUIDES: &[GuideEntry] = &[
    GuideEntry {
        key: "claude",
        file_name: "CLAUDE.md",
        description: "Core working agreement for AI coding assistants",
        source: "guides/CLAUDE.md",
    },
    GuideEntry {
        key: "backend",
        file_name: "BACKEND.md",
        description: "Backend service and API rules",
        source: "guides/BACKEND.md",
    },
    GuideEntry {
        key: "frontend",
        file_name: "FRONTEND.md",
        description: "Frontend and UI component rules",
        source: "guides/FRONTEND.md",
    },
];
