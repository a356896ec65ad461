//! Portfolio content and section geometry.
//!
//! The portfolio renders as one continuous document windowed by the
//! terminal viewport. All content is authored here as static data with
//! fixed per-section heights, so scroll and reveal arithmetic stays pure:
//! the view pads or truncates each section to exactly its declared height.

/// Section identifiers, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Work,
    Contact,
}

impl SectionId {
    pub const ORDER: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Work,
        SectionId::Contact,
    ];

    /// Label used in the navbar and the navigation menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Work => "Work",
            Self::Contact => "Contact",
        }
    }

    /// Index within [`SectionId::ORDER`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::About => 1,
            Self::Work => 2,
            Self::Contact => 3,
        }
    }

    /// Rows this section occupies in the document.
    #[must_use]
    pub fn height(self) -> u16 {
        match self {
            Self::Hero => 28,
            Self::About => 30,
            Self::Work => 38,
            Self::Contact => 26,
        }
    }

    /// First document row of this section.
    #[must_use]
    pub fn start(self) -> u16 {
        Self::ORDER[..self.index()]
            .iter()
            .map(|s| s.height())
            .sum()
    }
}

/// Total document height in rows.
#[must_use]
pub fn document_height() -> u16 {
    SectionId::ORDER.iter().map(|s| s.height()).sum()
}

// ---- authored content -----------------------------------------------------

pub const OWNER_NAME: &str = "Arul Aravinth";
pub const HERO_TAGLINE: &str = "I build things for the web, end to end.";

pub const ABOUT_INTRO: &[&str] = &[
    "I'm a developer who enjoys taking products from first sketch to",
    "production: data models, APIs, interfaces, and the glue between.",
    "Away from the keyboard I read, run, and tinker with home automation.",
];

/// One entry of a tab panel: (heading, detail).
pub type PanelEntry = (&'static str, &'static str);

/// A tab panel with a stable identifier the tab links refer to.
#[derive(Debug, Clone, Copy)]
pub struct TabPanel {
    pub id: &'static str,
    pub entries: &'static [PanelEntry],
}

pub const TAB_PANELS: [TabPanel; 3] = [
    TabPanel {
        id: "skills",
        entries: &[
            ("Frontend", "TypeScript, React, responsive layout"),
            ("Backend", "Rust, Node.js, PostgreSQL, REST APIs"),
            ("Tooling", "Linux, Docker, CI pipelines, Git"),
        ],
    },
    TabPanel {
        id: "experience",
        entries: &[
            ("2023 - now", "Full stack developer, product team of four"),
            ("2021 - 2023", "Web developer, agency client work"),
            ("2020 - 2021", "Freelance sites and dashboards"),
        ],
    },
    TabPanel {
        id: "education",
        entries: &[
            ("B.E. Computer Science", "graduated 2020"),
            ("Certifications", "cloud fundamentals, database design"),
        ],
    },
];

/// A work item participating in scroll reveal.
#[derive(Debug, Clone, Copy)]
pub struct WorkItem {
    pub title: &'static str,
    pub blurb: &'static str,
    pub stack: &'static str,
}

pub const WORK_ITEMS: [WorkItem; 5] = [
    WorkItem {
        title: "Ledgerline",
        blurb: "Small-business invoicing with live payment status.",
        stack: "React · Rust · PostgreSQL",
    },
    WorkItem {
        title: "Shelfspace",
        blurb: "Inventory tracking for a local bookstore chain.",
        stack: "TypeScript · Node.js · Redis",
    },
    WorkItem {
        title: "Trailhead",
        blurb: "Route planner with offline map bundles.",
        stack: "React Native · SQLite",
    },
    WorkItem {
        title: "Pulseboard",
        blurb: "Uptime dashboard with alert routing.",
        stack: "Rust · WebSockets",
    },
    WorkItem {
        title: "This portfolio",
        blurb: "The terminal résumé you are reading right now.",
        stack: "Rust · ratatui",
    },
];

pub const CONTACT_INTRO: &str = "Have a project in mind? Send a message.";
