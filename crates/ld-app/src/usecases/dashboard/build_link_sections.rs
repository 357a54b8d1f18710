//! Use case for selecting what the two link sections render.

use tracing::{debug, info_span};

use ld_core::dashboard::{section_content, LinkSubset, SectionContent};
use ld_core::library::Link;
use ld_core::settings::DashboardSettings;

/// What the dashboard's two link sections render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSections {
    pub recent: SectionContent,
    pub pinned: SectionContent,
}

/// Applies the responsive selection policy to the current link snapshot.
///
/// Both sections derive from the same effective item count; `links` is
/// `None` while the upstream load is still running.
pub struct BuildLinkSections;

impl BuildLinkSections {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        links: Option<&[Link]>,
        viewport_width: u32,
        settings: &DashboardSettings,
    ) -> LinkSections {
        let _span = info_span!("usecase.build_link_sections.execute", viewport_width).entered();

        let sections = LinkSections {
            recent: section_content(links, LinkSubset::Recent, viewport_width, settings),
            pinned: section_content(links, LinkSubset::Pinned, viewport_width, settings),
        };
        debug!(
            loading = links.is_none(),
            recent_populated = matches!(sections.recent, SectionContent::Populated(_)),
            pinned_populated = matches!(sections.pinned, SectionContent::Populated(_)),
            "link sections selected"
        );
        sections
    }
}

impl Default for BuildLinkSections {
    fn default() -> Self {
        Self::new()
    }
}
