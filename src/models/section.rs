// src/models/section.rs
// DOCUMENTATION: Section-level results handed to the front end
// PURPOSE: Keep "nothing found" and "backend down" distinct from each other

use serde::Serialize;

use super::{Locale, LocalizedText};
use crate::config::{RenderConfig, Theme};

/// Which part of the page a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Gallery,
    Posts,
}

impl SectionKind {
    fn empty_notice(&self) -> LocalizedText {
        match self {
            SectionKind::Gallery => LocalizedText::new("No images returned.", "لم يتم العثور على صور."),
            SectionKind::Posts => LocalizedText::new("No recent posts found.", "لا توجد منشورات حديثة."),
        }
    }

    fn unavailable_notice(&self) -> LocalizedText {
        match self {
            SectionKind::Gallery => LocalizedText::new(
                "Failed to fetch images from backend.",
                "تعذر جلب الصور من الخادم.",
            ),
            SectionKind::Posts => LocalizedText::new(
                "Failed to fetch community posts.",
                "تعذر جلب منشورات المجتمع.",
            ),
        }
    }

    fn title(&self) -> LocalizedText {
        match self {
            SectionKind::Gallery => LocalizedText::new("Photo Gallery", "معرض الصور"),
            SectionKind::Posts => LocalizedText::new("Community Buzz (Reddit)", "حديث المجتمع (Reddit)"),
        }
    }
}

/// Result of rendering one page section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome<T> {
    /// At least one item to show
    Ready(Vec<T>),
    /// Backend answered but nothing usable came back
    Empty,
    /// Backend unreachable, non-success status or undecodable body
    Unavailable,
}

impl<T> SectionOutcome<T> {
    /// `Ready` when the list has items, `Empty` otherwise
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            SectionOutcome::Empty
        } else {
            SectionOutcome::Ready(items)
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            SectionOutcome::Ready(_) => "ready",
            SectionOutcome::Empty => "empty",
            SectionOutcome::Unavailable => "unavailable",
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        match self {
            SectionOutcome::Ready(items) => items.len(),
            _ => 0,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render into the wire shape for one section
    pub fn into_response(self, kind: SectionKind, render: &RenderConfig) -> SectionResponse<T> {
        let status = self.status();
        let (items, notice) = match self {
            SectionOutcome::Ready(items) => (items, None),
            SectionOutcome::Empty => (Vec::new(), Some(kind.empty_notice().get(render.locale))),
            SectionOutcome::Unavailable => {
                (Vec::new(), Some(kind.unavailable_notice().get(render.locale)))
            }
        };

        SectionResponse {
            section: kind,
            title: kind.title().get(render.locale),
            status,
            items,
            notice,
            locale: render.locale,
            theme: render.theme.clone(),
        }
    }
}

/// Section DTO for API responses
#[derive(Debug, Serialize)]
pub struct SectionResponse<T> {
    pub section: SectionKind,
    pub title: &'static str,
    pub status: &'static str,
    pub items: Vec<T>,
    pub notice: Option<&'static str>,
    pub locale: Locale,
    pub theme: Theme,
}
