//! Static catalog content served by the read-only API.
//!
//! The VORUS line is three fragrances, four signature notes, and a handful
//! of press quotes - small enough to live in memory as fixed content, built
//! once at state construction and immutable afterwards. Handlers serve it
//! verbatim; the cart routes resolve products out of it by handle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable fragrance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable string handle, used as the cart line id.
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
}

/// One fragrance note in the scent pyramid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragranceNote {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

/// A press quote shown in the testimonials section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub title: String,
    pub image: String,
}

/// Immutable catalog content held in application state.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    notes: Vec<FragranceNote>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Build the VORUS catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
            notes: builtin_notes(),
            testimonials: builtin_testimonials(),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn notes(&self) -> &[FragranceNote] {
        &self.notes
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Look up a product by handle.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: "vorus-noir".to_string(),
            name: "VORUS Noir".to_string(),
            subtitle: "The Original".to_string(),
            description: "Our signature scent. Bold, mysterious, unforgettable.".to_string(),
            price: Decimal::from(185),
            image: "https://images.unsplash.com/photo-1758871992965-836e1fb0f9bc?w=1080"
                .to_string(),
        },
        Product {
            id: "vorus-midnight".to_string(),
            name: "VORUS Midnight".to_string(),
            subtitle: "Limited Edition".to_string(),
            description: "Intensified with deeper amber and leather accords.".to_string(),
            price: Decimal::from(210),
            image: "https://images.unsplash.com/photo-1666694890565-93659106d39e?w=1080"
                .to_string(),
        },
        Product {
            id: "vorus-ember".to_string(),
            name: "VORUS Ember".to_string(),
            subtitle: "Warm & Spiced".to_string(),
            description: "A warmer interpretation with tobacco and vanilla.".to_string(),
            price: Decimal::from(195),
            image: "https://images.unsplash.com/photo-1708486235073-14879ff14c4c?w=1080"
                .to_string(),
        },
    ]
}

fn builtin_notes() -> Vec<FragranceNote> {
    vec![
        FragranceNote {
            id: "bergamot".to_string(),
            name: "Bergamot".to_string(),
            description: "Citrus top note with vibrant, fresh energy".to_string(),
            image: "https://images.unsplash.com/photo-1758181839713-ce6068d79147?w=1080"
                .to_string(),
        },
        FragranceNote {
            id: "black-pepper".to_string(),
            name: "Black Pepper".to_string(),
            description: "Spicy heart with bold, masculine warmth".to_string(),
            image: "https://images.unsplash.com/photo-1649951806971-ad0e00408773?w=1080"
                .to_string(),
        },
        FragranceNote {
            id: "midnight-amber".to_string(),
            name: "Midnight Amber".to_string(),
            description: "Deep, resinous base with mysterious allure".to_string(),
            image: "https://images.unsplash.com/photo-1740819912820-6535ad66884a?w=1080"
                .to_string(),
        },
        FragranceNote {
            id: "smoked-cedar".to_string(),
            name: "Smoked Cedar".to_string(),
            description: "Woody foundation with refined, smoky character".to_string(),
            image: "https://images.unsplash.com/photo-1515446134809-993c501ca304?w=1080"
                .to_string(),
        },
    ]
}

fn builtin_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "gq".to_string(),
            quote: "VORUS isn't just a fragrance\u{2014}it's an attitude. It commands attention \
                    without saying a word."
                .to_string(),
            author: "Marcus Chen".to_string(),
            title: "GQ Magazine".to_string(),
            image: "https://images.unsplash.com/photo-1618008797651-3eb256213400?w=400"
                .to_string(),
        },
        Testimonial {
            id: "esquire".to_string(),
            quote: "The perfect balance of sophistication and raw magnetism. This is what \
                    modern luxury smells like."
                .to_string(),
            author: "James Sullivan".to_string(),
            title: "Esquire".to_string(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400"
                .to_string(),
        },
        Testimonial {
            id: "vogue-homme".to_string(),
            quote: "A masterclass in olfactory design. VORUS Midnight is my go-to for evening \
                    events."
                .to_string(),
            author: "Alexander Noir".to_string(),
            title: "Vogue Homme".to_string(),
            image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400"
                .to_string(),
        },
    ]
}
