use crate::dashboard::viewport::effective_item_count;
use crate::library::Link;
use crate::settings::DashboardSettings;

/// Which slice of the link collection a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSubset {
    /// First N links in supplied order (most-recent-first upstream).
    Recent,
    /// Links with a non-empty pin set, relative order preserved.
    Pinned,
}

/// Call-to-action shown when a section is empty after loading finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyAction {
    /// Recent section: offer the add-link control and the per-format
    /// import controls.
    ImportPrompt,
    /// Pinned section: hint at pinning favorites.
    PinHint,
}

/// What the rendering layer gets for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Links still loading; placeholders sized to the configured column
    /// count, not the computed item count.
    Loading { placeholder_count: usize },
    Populated(Vec<Link>),
    Empty(EmptyAction),
}

/// First N links in supplied order.
pub fn recent_selection(links: &[Link], count: usize) -> Vec<Link> {
    links.iter().take(count).cloned().collect()
}

/// Pinned links only, relative order preserved, truncated to N.
pub fn pinned_selection(links: &[Link], count: usize) -> Vec<Link> {
    links
        .iter()
        .filter(|link| link.is_pinned())
        .take(count)
        .cloned()
        .collect()
}

/// Select what one section renders.
///
/// `links` is `None` until the upstream load finishes; afterwards the
/// relevant subset decides between a populated list and the section's
/// call-to-action block.
pub fn section_content(
    links: Option<&[Link]>,
    subset: LinkSubset,
    viewport_width: u32,
    settings: &DashboardSettings,
) -> SectionContent {
    let Some(links) = links else {
        return SectionContent::Loading {
            placeholder_count: settings.placeholder_count(),
        };
    };

    let count = effective_item_count(viewport_width, settings.columns);
    let selected = match subset {
        LinkSubset::Recent => recent_selection(links, count),
        LinkSubset::Pinned => pinned_selection(links, count),
    };

    if selected.is_empty() {
        let action = match subset {
            LinkSubset::Recent => EmptyAction::ImportPrompt,
            LinkSubset::Pinned => EmptyAction::PinHint,
        };
        return SectionContent::Empty(action);
    }

    SectionContent::Populated(selected)
}
