//! Built-in sample catalog.
//!
//! Seeded into an empty store and served as-is when the store is unreachable.

use stride_core::NewProduct;

/// Number of products in the sample catalog.
pub const SAMPLE_COUNT: usize = 4;

/// The sample catalog, in seeding order.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        sample(
            "Air Nova Runner",
            "Featherlight daily trainer with responsive foam midsole.",
            149.0,
            "running",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1200&auto=format&fit=crop",
            "Nova",
            &["black", "volt", "white"],
        ),
        sample(
            "Atlas Court Pro",
            "Premium leather court shoe with heritage styling.",
            179.0,
            "lifestyle",
            "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?q=80&w=1200&auto=format&fit=crop",
            "Atlas",
            &["white", "navy", "gold"],
        ),
        sample(
            "Storm Glide TR",
            "Trail-ready outsole and water-repellent upper.",
            159.0,
            "trail",
            "https://images.unsplash.com/photo-1608231387042-66d1773070a5?q=80&w=1200&auto=format&fit=crop",
            "Storm",
            &["slate", "orange", "charcoal"],
        ),
        sample(
            "Pulse React 2",
            "Max cushioning with dynamic energy return.",
            199.0,
            "running",
            "https://images.unsplash.com/photo-1603808033192-6aa3c0d03ff2?q=80&w=1200&auto=format&fit=crop",
            "Pulse",
            &["crimson", "white", "black"],
        ),
    ]
}

fn sample(
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    brand: &str,
    colors: &[&str],
) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        in_stock: true,
        image: Some(image.to_string()),
        brand: Some(brand.to_string()),
        colors: Some(colors.iter().map(|c| (*c).to_string()).collect()),
    }
}
