//! Site content: the RSI Chicory product range and blog posts.
//!
//! Built once at startup; the catalogs are immutable afterwards.

use chicory_core::DomainResult;

use crate::article::{Article, NewArticle};
use crate::index::Catalog;
use crate::product::{NewProduct, Product};

/// Slug served when a product lookup misses.
pub const DEFAULT_PRODUCT_SLUG: &str = "raw-chicory-roots";

const PP_BAGS: &str = "PP bags, 25kg/50kg";

const PRODUCTS: &[NewProduct<'static>] = &[
    NewProduct {
        id: "1",
        name: "Raw Chicory Roots",
        description: "Premium quality raw chicory roots sourced from contract farms. Fresh, sun-dried, and ready for processing.",
        category: "Raw Materials",
        applications: &["Coffee Industry", "Food Processing", "Pharmaceutical"],
        form: "Whole Roots",
        price_range: "₹25-35/kg",
        moq: "500 kg",
        featured: true,
        overview: "Premium quality raw chicory roots sourced from our contracted farms in Uttar Pradesh. French seed lineage ensures superior quality and consistency for industrial processing.",
        origin: "India (French seed lineage)",
        processing: "Contract farming with strict quality control. Sun-dried and carefully sorted to maintain natural properties.",
        specifications: &[
            ("Color", "Natural brown"),
            ("Form", "Whole roots"),
            ("Moisture", "12-14%"),
            ("Shelf Life", "24 months"),
            ("Packaging", PP_BAGS),
        ],
        features: &["Contract farmed", "Sun dried", "French seed variety", "Traceable source"],
    },
    NewProduct {
        id: "2",
        name: "Hand Cut Chicory Roots",
        description: "Carefully hand-cut chicory roots maintaining uniform size for consistent processing and roasting.",
        category: "Processed Raw",
        applications: &["Coffee Blending", "Beverage Industry"],
        form: "Cut Roots",
        price_range: "₹30-40/kg",
        moq: "250 kg",
        featured: false,
        overview: "Carefully hand-cut chicory roots maintaining uniform size for consistent processing and roasting.",
        origin: "",
        processing: "",
        specifications: &[("Form", "Cut Roots")],
        features: &[],
    },
    NewProduct {
        id: "3",
        name: "Roasted Chicory Cubes (Dark Roast)",
        description: "Dark roasted chicory cubes with rich flavor profile. Perfect for coffee blending and instant coffee production.",
        category: "Roasted Products",
        applications: &["Coffee Manufacturing", "Instant Coffee", "Beverage Blends"],
        form: "Cubes",
        price_range: "₹45-60/kg",
        moq: "100 kg",
        featured: true,
        overview: "Dark roasted chicory cubes with rich, intense flavor profile. Perfect for coffee blending and instant coffee production. In-house roasting ensures consistent quality and flavor.",
        origin: "India",
        processing: "Precision roasting at controlled temperatures. Cut into uniform cubes for consistent brewing.",
        specifications: &[
            ("Color", "Dark brown"),
            ("Form", "Uniform cubes"),
            ("Moisture", "4-6%"),
            ("Shelf Life", "18 months"),
            ("Packaging", PP_BAGS),
        ],
        features: &["Dark roast profile", "Uniform cubes", "Rich flavor", "Instant solubility"],
    },
    NewProduct {
        id: "4",
        name: "Roasted Chicory Cubes (Light Roast)",
        description: "Light roasted chicory cubes with mild flavor. Ideal for delicate coffee blends and specialty beverages.",
        category: "Roasted Products",
        applications: &["Premium Coffee", "Specialty Beverages", "Food Flavoring"],
        form: "Cubes",
        price_range: "₹42-58/kg",
        moq: "100 kg",
        featured: false,
        overview: "Light roasted chicory cubes with mild flavor. Ideal for delicate coffee blends and specialty beverages.",
        origin: "",
        processing: "",
        specifications: &[("Form", "Cubes")],
        features: &[],
    },
    NewProduct {
        id: "5",
        name: "Dried Chicory Cubes",
        description: "Sun-dried chicory cubes without roasting. Natural flavor preserved for diverse food applications.",
        category: "Dried Products",
        applications: &["Food Processing", "Health Foods", "Natural Supplements"],
        form: "Cubes",
        price_range: "₹35-45/kg",
        moq: "200 kg",
        featured: false,
        overview: "Sun-dried chicory cubes without roasting. Natural flavor preserved for diverse food applications.",
        origin: "",
        processing: "",
        specifications: &[("Form", "Cubes")],
        features: &[],
    },
    NewProduct {
        id: "6",
        name: "Liquid Chicory Extract",
        description: "Concentrated liquid chicory extract. High solubility and intense flavor for beverage manufacturers.",
        category: "Extracts",
        applications: &["Beverage Industry", "Instant Coffee", "Liquid Coffee"],
        form: "Liquid",
        price_range: "₹120-180/kg",
        moq: "50 kg",
        featured: true,
        overview: "Concentrated liquid chicory extract with high solubility and intense flavor. Perfect for beverage manufacturers requiring consistent liquid solutions.",
        origin: "India",
        processing: "Advanced extraction process maintaining natural properties. Concentrated for maximum flavor impact.",
        specifications: &[
            ("Color", "Dark brown liquid"),
            ("Form", "Concentrated extract"),
            ("Concentration", "60-65%"),
            ("Shelf Life", "12 months"),
            ("Packaging", "Food grade containers, 25kg/50kg"),
        ],
        features: &["High concentration", "Instant solubility", "Consistent quality", "Food grade packaging"],
    },
    NewProduct {
        id: "7",
        name: "Roasted Chicory Granules",
        description: "Fine roasted chicory granules for instant solubility. Perfect for instant coffee and beverage mixes.",
        category: "Granulated Products",
        applications: &["Instant Coffee", "Beverage Mixes", "Coffee Blends"],
        form: "Granules",
        price_range: "₹55-75/kg",
        moq: "100 kg",
        featured: false,
        overview: "Fine roasted chicory granules for instant solubility. Perfect for instant coffee and beverage mixes.",
        origin: "",
        processing: "",
        specifications: &[("Form", "Granules")],
        features: &[],
    },
    NewProduct {
        id: "8",
        name: "Roasted Chicory Powder",
        description: "Fine roasted chicory powder. Premium quality for coffee blending and food industry applications.",
        category: "Powder Products",
        applications: &["Coffee Industry", "Food Manufacturing", "Baking Industry"],
        form: "Fine Powder",
        price_range: "₹50-70/kg",
        moq: "100 kg",
        featured: true,
        overview: "Fine roasted chicory powder. Premium quality for coffee blending and food industry applications.",
        origin: "",
        processing: "",
        specifications: &[("Form", "Fine Powder")],
        features: &[],
    },
];

const ARTICLES: &[NewArticle<'static>] = &[
    NewArticle {
        id: "1",
        title: "Chicory Export Opportunities in Global Coffee Markets 2025",
        excerpt: "Analyzing the growing demand for chicory products in international coffee processing and the export opportunities for Indian manufacturers.",
        body: "",
        author: "RSI Chicory Team",
        published: "2025-01-15",
        category: "Market Analysis",
        tags: &["Export", "Coffee Industry", "Global Markets"],
        featured: true,
        read_time: "8 min read",
    },
    NewArticle {
        id: "2",
        title: "Quality Standards in Chicory Processing: FSSAI and APEDA Guidelines",
        excerpt: "Understanding the essential quality standards and certifications required for chicory manufacturing and export in India.",
        body: "",
        author: "Quality Team",
        published: "2025-01-10",
        category: "Quality Assurance",
        tags: &["FSSAI", "APEDA", "Quality Control"],
        featured: false,
        read_time: "6 min read",
    },
    NewArticle {
        id: "3",
        title: "Contract Farming: Ensuring Consistent Chicory Supply Chain",
        excerpt: "How contract farming partnerships with local farmers create a reliable supply chain for industrial chicory processing.",
        body: "",
        author: "Supply Chain Team",
        published: "2025-01-05",
        category: "Supply Chain",
        tags: &["Contract Farming", "Supply Chain", "Agriculture"],
        featured: true,
        read_time: "7 min read",
    },
    NewArticle {
        id: "4",
        title: "Roasting Techniques: Dark vs Light Roast Chicory for Different Applications",
        excerpt: "Technical analysis of roasting methods and their impact on flavor profiles for various industrial applications.",
        body: "",
        author: "Production Team",
        published: "2024-12-28",
        category: "Processing",
        tags: &["Roasting", "Processing", "Technical"],
        featured: false,
        read_time: "5 min read",
    },
    NewArticle {
        id: "5",
        title: "Liquid Chicory Extract: Manufacturing and Applications in Beverage Industry",
        excerpt: "Comprehensive guide to liquid chicory extract production and its growing applications in the global beverage industry.",
        body: "",
        author: "Technical Team",
        published: "2024-12-20",
        category: "Product Focus",
        tags: &["Liquid Extract", "Beverage Industry", "Manufacturing"],
        featured: false,
        read_time: "9 min read",
    },
    NewArticle {
        id: "6",
        title: "Sustainability in Chicory Farming: Environmental and Economic Benefits",
        excerpt: "Exploring how sustainable chicory farming practices benefit both the environment and rural economic development.",
        body: "",
        author: "Sustainability Team",
        published: "2024-12-15",
        category: "Sustainability",
        tags: &["Sustainability", "Environment", "Rural Development"],
        featured: true,
        read_time: "6 min read",
    },
];

/// The product range, defaulting to raw chicory roots on a lookup miss.
pub fn product_catalog() -> DomainResult<Catalog<Product>> {
    let products = PRODUCTS
        .iter()
        .map(Product::create)
        .collect::<DomainResult<Vec<_>>>()?;
    Catalog::with_default(products, DEFAULT_PRODUCT_SLUG)
}

/// Blog posts, newest first; a lookup miss serves the newest post.
pub fn article_catalog() -> DomainResult<Catalog<Article>> {
    let articles = ARTICLES
        .iter()
        .map(Article::create)
        .collect::<DomainResult<Vec<_>>>()?;
    Catalog::new(articles)
}
