//! Fixed marketing copy.  Company details are not in here; they come from
//! [`crate::config::SiteConfig`] at render time.

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ServiceType {
    pub name: &'static str,
    pub description: &'static str,
    pub typical_lanes: &'static str,
    pub trailer_type: &'static str,
    pub notes: &'static str,
}

/// A titled card with a bullet list: safety policies and driver benefits.
pub struct DetailCard {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

pub struct Announcement {
    pub date: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub priority: Priority,
}

/// A legal page section: heading, optional lead sentence, bullet list.
pub struct LegalSection {
    pub heading: &'static str,
    pub lead: &'static str,
    pub items: &'static [&'static str],
}

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "Smart Dispatch",
        description: "Advanced routing and load optimization for maximum efficiency and cost savings",
    },
    Feature {
        title: "Live Tracking",
        description: "Real-time shipment tracking and status updates for complete visibility",
    },
    Feature {
        title: "Safety First",
        description: "Comprehensive safety protocols and DOT compliance for secure transportation",
    },
    Feature {
        title: "On-Time Delivery",
        description: "Reliable scheduling and delivery commitments you can count on",
    },
];

pub const SERVICE_TYPES: &[ServiceType] = &[
    ServiceType {
        name: "Dry Van",
        description: "Standard enclosed trailers for general freight and non-perishable goods",
        typical_lanes: "Regional and long-haul routes across all 48 states",
        trailer_type: "53' dry van trailers",
        notes: "Most common freight type, flexible scheduling",
    },
    ServiceType {
        name: "Reefer",
        description: "Temperature-controlled transportation for perishable goods",
        typical_lanes: "Food distribution centers, pharmaceutical routes",
        trailer_type: "53' refrigerated trailers",
        notes: "Temperature monitoring, food-grade certified",
    },
    ServiceType {
        name: "Power-Only",
        description: "Tractor service for customer-owned or leased trailers",
        typical_lanes: "Drop yards, distribution centers, customer facilities",
        trailer_type: "Customer-provided trailers",
        notes: "Flexible capacity, reduced deadhead miles",
    },
    ServiceType {
        name: "Expedited",
        description: "Time-critical shipments with priority handling and delivery",
        typical_lanes: "Emergency freight, just-in-time manufacturing",
        trailer_type: "Various based on cargo requirements",
        notes: "Team drivers available, 24/7 dispatch support",
    },
];

pub const SHIPPER_VALUE_PROPS: &[Feature] = &[
    Feature {
        title: "Competitive Rates",
        description: "Market-leading pricing with transparent cost structure and no hidden fees",
    },
    Feature {
        title: "On-Time Performance",
        description: "99.2% on-time delivery rate with proactive communication and contingency planning",
    },
    Feature {
        title: "Full Insurance Coverage",
        description: "Comprehensive cargo and liability insurance for complete peace of mind",
    },
    Feature {
        title: "Real-Time Tracking",
        description: "Advanced GPS tracking with live updates and customer portal access",
    },
];

pub const DRIVER_BENEFITS: &[DetailCard] = &[
    DetailCard {
        title: "Competitive Pay",
        description: "Top industry rates with performance bonuses and weekly pay options",
        details: &[
            "$0.65-$0.75 per mile",
            "Performance bonuses",
            "Weekly pay available",
            "Fuel card provided",
        ],
    },
    DetailCard {
        title: "Home Time",
        description: "Balanced work-life schedule with guaranteed home time",
        details: &[
            "Home every weekend",
            "Regional routes available",
            "Flexible scheduling",
            "Family-friendly policies",
        ],
    },
    DetailCard {
        title: "Modern Equipment",
        description: "Well-maintained fleet with latest safety and comfort features",
        details: &[
            "2020+ model trucks",
            "APU equipped",
            "GPS navigation",
            "Regular maintenance",
        ],
    },
];

pub const DRIVER_REQUIREMENTS: &[&str] = &[
    "Valid Class A CDL with clean driving record",
    "Minimum 2 years of verifiable OTR experience",
    "DOT physical and drug screening (company paid)",
    "Professional attitude and strong work ethic",
    "Ability to pass background check",
    "Reliable communication and smartphone required",
    "Flexibility for various route assignments",
    "Commitment to safety and compliance standards",
];

pub const SAFETY_POLICIES: &[DetailCard] = &[
    DetailCard {
        title: "Pre-Trip Inspections",
        description: "Comprehensive vehicle inspection procedures required before every trip",
        details: &[
            "Daily Vehicle Inspection Report (DVIR) completion",
            "Brake system and tire condition checks",
            "Lights, signals, and safety equipment verification",
            "Load securement and weight distribution review",
        ],
    },
    DetailCard {
        title: "Hours of Service (HOS)",
        description: "Strict compliance with federal driving time regulations",
        details: &[
            "11-hour driving limit within 14-hour window",
            "Mandatory 10-hour rest period between shifts",
            "Electronic Logging Device (ELD) monitoring",
            "70-hour weekly limit with 34-hour restart",
        ],
    },
    DetailCard {
        title: "Chain Laws (Seasonal)",
        description: "Winter weather driving requirements and equipment standards",
        details: &[
            "Tire chain installation and inspection procedures",
            "Weather monitoring and route planning",
            "Emergency equipment and communication protocols",
            "Seasonal training and certification requirements",
        ],
    },
];

pub const SAFETY_ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        date: "2025-01-15",
        title: "Winter Weather Safety Reminder",
        content: "All drivers must carry approved tire chains and emergency supplies during winter months. Review chain installation procedures before departure.",
        priority: Priority::High,
    },
    Announcement {
        date: "2025-01-10",
        title: "ELD System Update Completed",
        content: "Electronic Logging Device software has been updated across all fleet vehicles. Contact dispatch if you experience any technical issues.",
        priority: Priority::Medium,
    },
    Announcement {
        date: "2025-01-05",
        title: "Safety Bonus Program Extended",
        content: "Due to excellent safety performance, our quarterly safety bonus program has been extended through Q2 2025. Keep up the great work!",
        priority: Priority::Medium,
    },
    Announcement {
        date: "2024-12-20",
        title: "Holiday Schedule Reminder",
        content: "Office hours will be modified during the holiday period. Emergency dispatch remains available 24/7 for urgent matters.",
        priority: Priority::Low,
    },
];

pub const LEGAL_LAST_UPDATED: &str = "September 5, 2025";

pub const STOP_KEYWORDS: &str = "STOP, STOPALL, UNSUBSCRIBE, CANCEL, END, or QUIT";

pub const PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "Information We Collect",
        lead: "When you use our services, request quotes, or apply for employment, we may collect:",
        items: &[
            "Name, email address, and phone number",
            "Company information and business details",
            "Shipping addresses and freight details",
            "Employment history and qualifications (for driver applications)",
            "Communication preferences and consent records",
            "IP address and browser details",
        ],
    },
    LegalSection {
        heading: "How We Use Your Information",
        lead: "We use the information we collect to:",
        items: &[
            "Provide freight services and respond to quote requests",
            "Process driver applications and communicate about employment",
            "Send service updates, shipment notifications, and business communications",
            "Improve our website, services, and customer experience",
            "Comply with legal and regulatory requirements",
            "Protect our business interests and prevent fraud",
        ],
    },
    LegalSection {
        heading: "Information Sharing and Disclosure",
        lead: "We do not sell, trade, or rent your personal information. We may share your information only:",
        items: &[
            "With service providers who support our operations (under confidentiality obligations)",
            "When required by law or to protect our rights and safety",
            "In connection with a merger, acquisition, or business transfer",
        ],
    },
    LegalSection {
        heading: "Your Rights and Choices",
        lead: "You may be able to:",
        items: &[
            "Request access, correction, or deletion of your data (subject to law)",
            "Opt out of SMS anytime via the STOP keywords",
            "Withdraw consent for marketing communications",
        ],
    },
];

pub const SMS_MESSAGE_TYPES: &[Feature] = &[
    Feature {
        title: "Quote Updates",
        description: "Status updates on your freight quote requests",
    },
    Feature {
        title: "Shipment Notifications",
        description: "Pickup confirmations, delivery updates, tracking",
    },
    Feature {
        title: "Driver Communications",
        description: "Application status and employment info",
    },
    Feature {
        title: "Service Alerts",
        description: "Delays, schedule changes, or service issues",
    },
    Feature {
        title: "Account Information",
        description: "Security alerts and account notices",
    },
];

pub const SMS_FREQUENCY: &[&str] = &[
    "Quote requests: 1–3 messages per inquiry",
    "Active shipments: 2–5 messages per load",
    "Driver applications: 1–4 messages during process",
    "Service alerts: As needed for important updates",
];

pub const NO_THIRD_PARTY_SHARING: &str = "We do not sell or share mobile numbers, SMS opt-in data, or consent with third parties for their marketing or promotional use.";

pub const CARRIER_LIABILITY: &str = "Mobile carriers are not liable for delayed or undelivered messages.";
