//! Immutable record types for page content.
//!
//! Templates declare static arrays of these and render them inside reveal
//! wrappers. None of them carry behavior or lifecycle; they exist so the
//! page sections share a shape instead of each inventing tuple soup.

use crate::i18n::Tr;

/// A portfolio entry (architecture, interiors, photography).
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: Tr,
    pub location: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct Award {
    pub title: Tr,
    pub org: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: Tr,
}

#[derive(Debug, Clone, Copy)]
pub struct Office {
    pub city: Tr,
    pub address: &'static str,
}

/// A dish, a drink, or a bag of beans. Prices stay literal strings so each
/// template controls its own currency formatting.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub name: Tr,
    pub description: Tr,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: Tr,
    pub body: Tr,
}

#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub name: Tr,
    pub price: &'static str,
    pub blurb: Tr,
    pub points: &'static [Tr],
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub title: Tr,
    pub author: &'static str,
    pub rubric: Tr,
}

#[derive(Debug, Clone, Copy)]
pub struct Collection {
    pub name: Tr,
    pub pieces: u8,
    pub note: Tr,
}
