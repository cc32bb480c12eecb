use chrono::NaiveDate;
use contracts::domain::a002_sale::{Sale, SaleStatus};

fn sale(n: u32, product: &str, platform: &str, customer: &str, day: u32, amount: f64) -> Sale {
    Sale {
        id: format!("sale-{}", n),
        order_id: format!("ORD-{}", 12344 + n),
        product: product.to_string(),
        platform: platform.to_string(),
        customer: customer.to_string(),
        date: NaiveDate::from_ymd_opt(2023, 4, day).unwrap_or_default(),
        amount,
        status: SaleStatus::Completed,
    }
}

/// Продажи продавца при открытии страницы
pub fn sales() -> Vec<Sale> {
    vec![
        sale(1, "Elden Ring", "Steam", "john.doe@example.com", 22, 59.99),
        sale(2, "Cyberpunk 2077", "Epic Games", "jane.smith@example.com", 21, 49.99),
        sale(3, "Microsoft Office 2023", "Windows", "robert.johnson@example.com", 20, 149.99),
        sale(4, "Elden Ring", "Steam", "sarah.williams@example.com", 19, 59.99),
        sale(5, "Cyberpunk 2077", "Epic Games", "michael.brown@example.com", 18, 49.99),
        sale(6, "Adobe Photoshop (1 Year)", "Windows/Mac", "emily.davis@example.com", 17, 239.99),
        sale(7, "Minecraft Java Edition", "Java", "david.miller@example.com", 16, 29.99),
        sale(8, "Steam Wallet $50", "Steam", "jennifer.wilson@example.com", 15, 50.0),
        sale(9, "Elden Ring", "Steam", "thomas.anderson@example.com", 14, 59.99),
        sale(10, "Microsoft Office 2023", "Windows", "lisa.taylor@example.com", 13, 149.99),
    ]
}
