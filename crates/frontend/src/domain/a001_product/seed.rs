use chrono::NaiveDate;
use contracts::domain::a001_product::{Product, ProductStatus};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    platform: &str,
    price: f64,
    discount: u8,
    status: ProductStatus,
    sales: u32,
    (y, m, d): (i32, u32, u32),
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        platform: platform.to_string(),
        price,
        discount,
        stock: "Unlimited".to_string(),
        status,
        sales,
        date_added: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

/// Каталог продавца при открытии страницы
pub fn products() -> Vec<Product> {
    use ProductStatus::*;
    vec![
        product("prod-1", "Elden Ring", "Steam", 59.99, 15, Active, 245, (2023, 1, 15)),
        product("prod-2", "Cyberpunk 2077", "Epic Games", 49.99, 20, Active, 189, (2023, 2, 10)),
        product("prod-3", "Microsoft Office 2023", "Windows", 149.99, 0, Active, 78, (2023, 3, 5)),
        product(
            "prod-4",
            "Adobe Photoshop (1 Year)",
            "Windows/Mac",
            239.99,
            10,
            Active,
            56,
            (2023, 3, 20),
        ),
        product("prod-5", "Minecraft Java Edition", "Java", 29.99, 0, Active, 312, (2023, 1, 5)),
        product("prod-6", "Steam Wallet $50", "Steam", 50.0, 0, Active, 423, (2023, 2, 15)),
        product("prod-7", "Elden Ring DLC", "Steam", 29.99, 0, Draft, 0, (2023, 4, 10)),
    ]
}

/// Платформы для фильтра
pub const PLATFORMS: &[&str] = &["Steam", "Epic Games", "Windows", "Windows/Mac", "Java"];
