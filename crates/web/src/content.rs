//! Fixed copy for the non-catalog parts of the site.

/// A titled blurb (feature tile, capability, service).
#[derive(Debug, Clone, Copy)]
pub struct Blurb {
    pub title: &'static str,
    pub text: &'static str,
}

/// A header/footer navigation entry.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// A dated company milestone.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// A sitemap entry for a fixed page.
#[derive(Debug, Clone, Copy)]
pub struct SitemapEntry {
    pub title: &'static str,
    pub href: &'static str,
    pub text: &'static str,
}

/// A section of the privacy policy.
#[derive(Debug, Clone, Copy)]
pub struct PolicySection {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "All Products", href: "/products" },
    NavItem { label: "About Us", href: "/about" },
    NavItem { label: "Blog", href: "/blog" },
    NavItem { label: "Contact Us", href: "/contact" },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "All Products", href: "/products" },
    NavItem { label: "About Us", href: "/about" },
    NavItem { label: "Industry Blog", href: "/blog" },
    NavItem { label: "Contact Us", href: "/contact" },
    NavItem { label: "Site Map", href: "/sitemap" },
    NavItem { label: "Privacy Policy", href: "/privacy" },
];

/// Number of catalog products linked from the footer.
pub const FOOTER_PRODUCT_LINKS: usize = 6;

pub const HOME_FEATURES: &[Blurb] = &[
    Blurb {
        title: "Industrial Manufacturing",
        text: "State-of-the-art processing facility with contract farming partnerships",
    },
    Blurb {
        title: "Export Ready",
        text: "FSSAI, APEDA, IEC certified for global B2B markets",
    },
    Blurb {
        title: "Quality Assured",
        text: "Strict quality standards from sourcing to final product",
    },
    Blurb {
        title: "Bulk Supply",
        text: "Reliable logistics for wholesale and industrial orders",
    },
];

pub const HOME_PRODUCT_GROUPS: &[Blurb] = &[
    Blurb {
        title: "Raw Chicory Roots",
        text: "Premium quality contract-farmed chicory roots",
    },
    Blurb {
        title: "Roasted Chicory Products",
        text: "Dark & light roast cubes, granules, and powder",
    },
    Blurb {
        title: "Liquid Chicory Extract",
        text: "Concentrated extract for beverage manufacturers",
    },
    Blurb {
        title: "Processed Chicory",
        text: "Hand-cut and dried chicory cubes for food industry",
    },
];

pub const HERO_BADGES: &[&str] = &["FSSAI Certified", "Export Ready", "APEDA Registered"];

pub const CAPABILITIES: &[Blurb] = &[
    Blurb {
        title: "State-of-the-Art Manufacturing",
        text: "Modern processing facility equipped with advanced machinery for consistent quality production",
    },
    Blurb {
        title: "Contract Farming Model",
        text: "Direct partnerships with local farmers ensuring traceable, high-quality raw materials",
    },
    Blurb {
        title: "Export Readiness",
        text: "Comprehensive export documentation and packaging for global B2B markets",
    },
    Blurb {
        title: "Local Employment",
        text: "Supporting the local economy by providing employment opportunities in rural areas",
    },
];

pub const CERTIFICATIONS: &[Blurb] = &[
    Blurb {
        title: "FSSAI",
        text: "Food Safety and Standards Authority of India certification",
    },
    Blurb {
        title: "APEDA",
        text: "Agricultural and Processed Food Products Export Development Authority",
    },
    Blurb {
        title: "IEC",
        text: "Import Export Code for international trade",
    },
];

pub const CONTRACT_FARMING_STEPS: &[Blurb] = &[
    Blurb {
        title: "Direct Farmer Partnerships",
        text: "Long-term contracts with local farmers ensuring consistent supply",
    },
    Blurb {
        title: "Quality Assurance",
        text: "Strict quality standards from seed selection to harvest",
    },
    Blurb {
        title: "Traceability",
        text: "Complete tracking from farm to final product",
    },
    Blurb {
        title: "Local Employment",
        text: "Supporting rural communities and local economy",
    },
];

pub const ABOUT_STORY: &[&str] = &[
    "RS Impex was founded in 2025 with a vision to become a leading manufacturer and supplier of premium chicory products for global B2B markets. Based in Etah, Uttar Pradesh, we leverage the region's agricultural strengths to produce high-quality chicory products.",
    "Our company is built on the foundation of manufacturing excellence, sustainable practices, and strong B2B partnerships. We focus exclusively on industrial and wholesale markets, serving coffee processors, food manufacturers, and beverage companies worldwide.",
    "Through our contract farming model, we ensure complete traceability and quality control from farm to final product, while supporting local communities and maintaining strict compliance with international standards.",
];

/// Headline figures on the about page.
pub const COMPANY_FACTS: &[Blurb] = &[
    Blurb { title: "2025", text: "Founded with industrial focus" },
    Blurb { title: "Etah, UP", text: "Strategic location for agriculture" },
    Blurb { title: "B2B Export", text: "Industrial & wholesale focus" },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2025",
        title: "Company Establishment",
        text: "RS Impex established with focus on chicory manufacturing and export",
    },
    Milestone {
        year: "2025",
        title: "Certifications Acquired",
        text: "Obtained FSSAI, APEDA, and IEC certifications for quality and export compliance",
    },
    Milestone {
        year: "2025",
        title: "Contract Farming Initiative",
        text: "Launched contract farming program with local farmers in Uttar Pradesh",
    },
];

pub const SERVICES: &[&str] = &[
    "Bulk Supply & Wholesale",
    "Custom Processing",
    "Export Documentation",
    "Quality Certification",
    "Logistics Support",
];

pub const EXPORT_CREDENTIALS: &[&str] = &[
    "FSSAI Certified",
    "APEDA Registered",
    "IEC Code: Available",
    "Export Packaging",
];

pub const LOGISTICS_POINTS: &[&str] = &["Quick turnaround", "Export packaging", "Quality certified"];

pub const SITEMAP_MAIN: &[SitemapEntry] = &[
    SitemapEntry {
        title: "Home",
        href: "/",
        text: "RSI Chicory homepage with company overview and featured products",
    },
    SitemapEntry {
        title: "All Products",
        href: "/products",
        text: "Complete catalog of chicory products for B2B buyers",
    },
    SitemapEntry {
        title: "About Us",
        href: "/about",
        text: "Company profile, certifications, and manufacturing capabilities",
    },
    SitemapEntry {
        title: "Industry Blog",
        href: "/blog",
        text: "Industry insights, market analysis, and chicory processing expertise",
    },
    SitemapEntry {
        title: "Contact Us",
        href: "/contact",
        text: "Business inquiries, quotes, and direct contact information",
    },
];

pub const SITEMAP_UTILITY: &[SitemapEntry] = &[
    SitemapEntry {
        title: "Site Map",
        href: "/sitemap",
        text: "Complete website navigation structure",
    },
    SitemapEntry {
        title: "Privacy Policy",
        href: "/privacy",
        text: "Data privacy and website usage policies",
    },
];

pub const PRIVACY_LAST_UPDATED: &str = "January 15, 2025";

pub const PRIVACY_SECTIONS: &[PolicySection] = &[
    PolicySection {
        title: "Information We Collect",
        points: &[
            "Business contact information including company name, contact person details, email addresses, and phone numbers provided through our contact forms and business inquiries.",
            "Technical information such as IP addresses, browser type, device information, and website usage patterns collected automatically when you visit our website.",
            "Business communication records including emails, phone calls, and WhatsApp messages related to product inquiries, quotes, and business transactions.",
            "Product preference data and purchase history for existing B2B customers to improve our service quality and product recommendations.",
        ],
    },
    PolicySection {
        title: "How We Use Your Information",
        points: &[
            "Processing business inquiries and providing quotes for our chicory products and services.",
            "Communicating with potential and existing B2B customers regarding product availability, pricing, and order status.",
            "Improving our website functionality and user experience based on usage analytics and feedback.",
            "Maintaining business records and complying with legal and regulatory requirements.",
            "Sending relevant industry updates and product information to interested business contacts (with consent).",
        ],
    },
    PolicySection {
        title: "Data Protection & Security",
        points: &[
            "We implement industry-standard security measures to protect your personal and business information from unauthorized access, disclosure, or misuse.",
            "All sensitive business communications are encrypted using SSL/TLS protocols during transmission.",
            "Access to customer data is restricted to authorized personnel only and is used strictly for legitimate business purposes.",
            "We regularly review and update our security practices to maintain the highest standards of data protection.",
            "Business data is stored securely and retained only for as long as necessary for legitimate business purposes or as required by law.",
        ],
    },
    PolicySection {
        title: "Data Sharing & Third Parties",
        points: &[
            "We do not sell, trade, or rent your personal information to third parties for marketing purposes.",
            "Business information may be shared with trusted service providers (logistics, payment processors) strictly for order fulfillment and business operations.",
            "We may disclose information when required by law, regulation, or legal process, or to protect our rights and interests.",
            "In case of business merger or acquisition, customer data may be transferred as part of business assets with continued protection under this privacy policy.",
        ],
    },
];

pub const PRIVACY_COOKIES: &[Blurb] = &[
    Blurb {
        title: "Essential cookies",
        text: "Required for basic website functionality",
    },
    Blurb {
        title: "Analytics cookies",
        text: "Help us understand website usage and performance",
    },
    Blurb {
        title: "Functional cookies",
        text: "Remember your preferences and settings",
    },
];

pub const PRIVACY_RIGHTS: &[&str] = &[
    "Request access to your personal data and update any inaccurate information.",
    "Request a copy of your data in a commonly used, machine-readable format.",
    "Request deletion of your personal data, subject to legal and business requirements.",
    "Unsubscribe from marketing communications at any time.",
];
