use crate::models::{Catalog, Category, ServiceItem};

fn item(id: i64, name: &str, price: u32) -> ServiceItem {
    ServiceItem {
        id,
        name: name.to_string(),
        price,
        description: None,
    }
}

/// The seed catalog used when nothing is persisted yet. Returns fresh owned
/// data on every call so callers can never alias the template.
pub fn default_catalog() -> Catalog {
    Catalog::from([
        (
            Category::Makeup,
            vec![
                item(1, "Simple Make-up", 500),
                item(2, "Full Make-up", 1000),
                item(3, "Bridal Make-up", 2500),
                item(4, "Photoshop Make-up", 800),
                item(5, "Male Make-up", 500),
            ],
        ),
        (
            Category::Facials,
            vec![
                item(6, "Simple Product", 1000),
                item(7, "Garnier Product", 1200),
                item(8, "Skin Touch Project", 800),
                item(9, "Half Facial", 600),
            ],
        ),
        (
            Category::Waxing,
            vec![
                item(10, "Eyebrow Waxing", 300),
                item(11, "Full Body Waxing", 2500),
                item(12, "Full Leg Wax", 900),
                item(13, "Half Leg", 500),
                item(14, "Brazilian Wax", 1200),
            ],
        ),
        (
            Category::Kinyozi,
            vec![
                item(15, "Head Shave", 300),
                item(16, "Head Shave + Massage + Steam", 500),
                item(17, "Face Scrub", 300),
                item(18, "Nail Cutting", 200),
                item(19, "Beard Trim", 100),
            ],
        ),
        (
            Category::Massage,
            vec![
                item(20, "Steam Massage", 4000),
                item(21, "Sensual Massage", 7000),
                item(22, "Bamboo Massage", 3500),
                item(23, "Teen Massage", 1000),
                item(24, "Swedish Massage", 2500),
                item(25, "Deep Tissue Massage", 3000),
                item(26, "Lava Stone Massage", 3500),
                item(27, "Sport Massage", 3500),
            ],
        ),
        (
            Category::Nails,
            vec![
                item(28, "Gel Application", 400),
                item(29, "Artificial Nail", 600),
                item(30, "Acrylic", 1200),
                item(31, "Manicure (full)", 900),
                item(32, "Pedicure (full)", 900),
            ],
        ),
    ])
}
