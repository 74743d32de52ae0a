//! Static page copy.

pub const PRODUCT_NAME: &str = "HMSync";
pub const TAGLINE: &str = "Advanced Control. Owner-First. Fully Customizable.";
pub const HERO_BADGE: &str = "Next-Generation Hospital Management";
pub const HERO_DESCRIPTION: &str = "The complete hospital management system designed for modern healthcare facilities. \
     Take control with advanced features, customizable workflows, and unparalleled flexibility.";
pub const FOOTER_BLURB: &str = "The complete hospital management system for modern healthcare.";

pub const CONTACT_EMAIL: &str = "contact@hmsync.com";
pub const CONTACT_PHONE: &str = "+1 (555) 000-0000";
pub const CONTACT_LOCATION: &str = "Available Worldwide";

/// Anchor ids that buttons scroll to.
pub const FEATURES_ANCHOR: &str = "features";
pub const CONTACT_ANCHOR: &str = "contact";

/// Icon glyph rendered in a feature tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Stethoscope,
    Calendar,
    TestTube,
    BedDouble,
    FileText,
    BarChart,
    Shield,
    Database,
    Settings,
    Lock,
    Zap,
    Sparkles,
}

impl Icon {
    /// CSS class carrying the glyph.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Users => "icon icon-users",
            Icon::Stethoscope => "icon icon-stethoscope",
            Icon::Calendar => "icon icon-calendar",
            Icon::TestTube => "icon icon-test-tube",
            Icon::BedDouble => "icon icon-bed-double",
            Icon::FileText => "icon icon-file-text",
            Icon::BarChart => "icon icon-bar-chart",
            Icon::Shield => "icon icon-shield",
            Icon::Database => "icon icon-database",
            Icon::Settings => "icon icon-settings",
            Icon::Lock => "icon icon-lock",
            Icon::Zap => "icon icon-zap",
            Icon::Sparkles => "icon icon-sparkles",
        }
    }
}

/// Gradient behind a tile's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    BluePurple,
    PurplePink,
}

impl ColorTheme {
    pub fn class(self) -> &'static str {
        match self {
            ColorTheme::BluePurple => "tile-icon gradient-blue-purple",
            ColorTheme::PurplePink => "tile-icon gradient-purple-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub color_theme: ColorTheme,
}

const fn feature(icon: Icon, title: &'static str, description: &'static str) -> FeatureDescriptor {
    FeatureDescriptor {
        icon,
        title,
        description,
        color_theme: ColorTheme::BluePurple,
    }
}

const fn value(icon: Icon, title: &'static str, description: &'static str) -> FeatureDescriptor {
    FeatureDescriptor {
        color_theme: ColorTheme::PurplePink,
        ..feature(icon, title, description)
    }
}

pub const FEATURES: [FeatureDescriptor; 9] = [
    feature(
        Icon::Users,
        "Patient Management",
        "Complete patient registration, records, and history tracking",
    ),
    feature(
        Icon::Stethoscope,
        "Doctor Management",
        "Manage doctor profiles, schedules, and earnings",
    ),
    feature(
        Icon::Calendar,
        "OPD Management",
        "Streamline outpatient appointments and consultations",
    ),
    feature(
        Icon::TestTube,
        "Pathology Lab",
        "Order tests, track results, and generate reports",
    ),
    feature(
        Icon::BedDouble,
        "In-Patient Admissions",
        "Manage admissions, room transfers, and discharges",
    ),
    feature(
        Icon::FileText,
        "Billing & Payments",
        "Comprehensive billing with multiple payment methods",
    ),
    feature(
        Icon::BarChart,
        "Analytics & Reports",
        "Real-time insights and financial summaries",
    ),
    feature(Icon::Shield, "Audit Logs", "Complete activity tracking for compliance"),
    feature(
        Icon::Database,
        "Backup & Restore",
        "Automated backups with one-click restore",
    ),
];

pub const WHY_CHOOSE: [FeatureDescriptor; 4] = [
    value(
        Icon::Settings,
        "Fully Customizable",
        "Tailor every aspect to match your hospital's unique workflow",
    ),
    value(
        Icon::Lock,
        "Owner-First Control",
        "Complete control over your data and system configuration",
    ),
    value(
        Icon::Zap,
        "Advanced Features",
        "Role-based access, multi-user support, and real-time updates",
    ),
    value(
        Icon::Sparkles,
        "Modern Interface",
        "Beautiful, intuitive design that your staff will love",
    ),
];

pub const TRADITIONAL_PAIN_POINTS: [&str; 5] = [
    "Disconnected modules and data silos",
    "Limited customization options",
    "No control over your own data",
    "Complex, outdated interfaces",
    "Hidden costs and vendor lock-in",
];

pub const HMSYNC_APPROACH: [&str; 5] = [
    "Fully integrated, unified platform",
    "Customize every workflow to your needs",
    "Complete ownership and control",
    "Modern, intuitive user experience",
    "Transparent pricing, no surprises",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().chain(WHY_CHOOSE.iter()).map(|f| f.title).collect();
        let before = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), before);
    }

    #[test]
    fn every_descriptor_has_copy() {
        for f in FEATURES.iter().chain(WHY_CHOOSE.iter()) {
            assert!(!f.title.is_empty());
            assert!(!f.description.is_empty());
            assert!(f.icon.class().starts_with("icon "));
        }
    }

    #[test]
    fn comparison_lists_line_up() {
        assert_eq!(TRADITIONAL_PAIN_POINTS.len(), HMSYNC_APPROACH.len());
    }
}
