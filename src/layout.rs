use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::PixelRect;

/// Closed set of UI region labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiType {
    NavigationBar,
    Sidebar,
    Container,
    Card,
    InputField,
    Button,
    Icon,
    UiSection,
}

impl UiType {
    pub const ALL: [UiType; 8] = [
        UiType::NavigationBar,
        UiType::Sidebar,
        UiType::Container,
        UiType::Card,
        UiType::InputField,
        UiType::Button,
        UiType::Icon,
        UiType::UiSection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiType::NavigationBar => "navigation_bar",
            UiType::Sidebar => "sidebar",
            UiType::Container => "container",
            UiType::Card => "card",
            UiType::InputField => "input_field",
            UiType::Button => "button",
            UiType::Icon => "icon",
            UiType::UiSection => "ui_section",
        }
    }
}

impl fmt::Display for UiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position and size of a rectangle relative to the image it was found in
#[derive(Debug, Clone, Copy)]
pub struct LayoutRatios {
    /// Top edge in pixels
    pub y: f64,
    pub img_h: f64,
    pub rel_w: f64,
    pub rel_h: f64,
}

impl LayoutRatios {
    pub fn new(rect: &PixelRect, img_w: u32, img_h: u32) -> Self {
        let (iw, ih) = (img_w as f64, img_h as f64);
        Self {
            y: rect.y as f64,
            img_h: ih,
            rel_w: rect.w as f64 / iw,
            rel_h: rect.h as f64 / ih,
        }
    }
}

/// One entry of the ordered classification table
pub struct LayoutRule {
    pub label: UiType,
    pub matches: fn(&LayoutRatios) -> bool,
}

/// Classification rules, evaluated top to bottom. Ratio ranges overlap, so
/// the order decides the label.
pub const LAYOUT_RULES: [LayoutRule; 7] = [
    // Top horizontal strip
    LayoutRule {
        label: UiType::NavigationBar,
        matches: |r| r.y < r.img_h * 0.15 && r.rel_w > 0.6,
    },
    // Tall vertical strip
    LayoutRule {
        label: UiType::Sidebar,
        matches: |r| r.rel_h > 0.5 && r.rel_w < 0.25,
    },
    LayoutRule {
        label: UiType::Container,
        matches: |r| r.rel_w > 0.45 && r.rel_h > 0.25,
    },
    LayoutRule {
        label: UiType::Card,
        matches: |r| r.rel_w > 0.2 && r.rel_w <= 0.45 && r.rel_h > 0.15 && r.rel_h <= 0.3,
    },
    // Wide but short
    LayoutRule {
        label: UiType::InputField,
        matches: |r| r.rel_w > 0.3 && r.rel_h < 0.12,
    },
    LayoutRule {
        label: UiType::Button,
        matches: |r| r.rel_w < 0.3 && r.rel_h < 0.15,
    },
    // Unreachable while the button rule precedes it
    LayoutRule {
        label: UiType::Icon,
        matches: |r| r.rel_w < 0.1 && r.rel_h < 0.1,
    },
];

/// Label for a set of ratios; `UiSection` when no rule matches
pub fn classify_ratios(ratios: &LayoutRatios) -> UiType {
    LAYOUT_RULES
        .iter()
        .find(|rule| (rule.matches)(ratios))
        .map(|rule| rule.label)
        .unwrap_or(UiType::UiSection)
}

/// Classify a padded-frame rectangle against the padded image dimensions
pub fn classify(rect: &PixelRect, img_w: u32, img_h: u32) -> UiType {
    classify_ratios(&LayoutRatios::new(rect, img_w, img_h))
}
