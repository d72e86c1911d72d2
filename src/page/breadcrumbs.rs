//! Breadcrumb trails
//!
//! `Dashboard` -> section list -> leaf. Every crumb but the last is linked.

use serde::Serialize;

use super::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

impl Crumb {
    fn link(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href: Some(href),
        }
    }

    fn leaf(label: &'static str) -> Self {
        Self { label, href: None }
    }
}

pub(super) fn trail(screen: Screen) -> Vec<Crumb> {
    let surface = screen.surface();

    match screen.section() {
        None => vec![Crumb::leaf(surface.label())],
        Some(section) => vec![
            Crumb::link(surface.label(), surface.path()),
            Crumb::link(section.label(), section.path()),
            Crumb::leaf(screen.leaf_label()),
        ],
    }
}

/// Plain-text rendering, e.g. `Dashboard / Client / Details`
pub fn trail_text(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|crumb| crumb.label)
        .collect::<Vec<_>>()
        .join(" / ")
}
