use catalog_api::response::{ResultId, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl Product {
    /// Text that gets embedded for this product.
    pub fn text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }

    pub fn to_result(&self, score: f64) -> SearchResult {
        SearchResult {
            id: Some(ResultId::Number(self.id as i64)),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: Some(self.category.to_string()),
            score,
        }
    }
}

const fn product(
    id: u32,
    name: &'static str,
    description: &'static str,
    category: &'static str,
) -> Product {
    Product { id, name, description, category }
}

pub static PRODUCTS: [Product; 26] = [
    product(1, "Smartphone", "High-end smartphone with advanced camera and long battery life", "Electronics"),
    product(2, "Laptop", "Powerful laptop for professional use with dedicated graphics card", "Electronics"),
    product(3, "Headphones", "Wireless noise-cancelling headphones with premium sound quality", "Electronics"),
    product(4, "Smart Watch", "Fitness tracker and smartwatch with heart rate monitoring", "Electronics"),
    product(5, "Tablet", "Lightweight tablet with high-resolution display for reading and browsing", "Electronics"),
    product(6, "Bluetooth Speaker", "Portable waterproof speaker with deep bass and long battery life", "Electronics"),
    product(7, "Digital Camera", "Professional DSLR camera with multiple lenses and 4K video recording", "Electronics"),
    product(8, "Gaming Console", "Next-generation gaming console with 4K graphics and fast loading times", "Electronics"),
    product(9, "External Hard Drive", "High-capacity storage device for backups and file transfers", "Electronics"),
    product(10, "Wireless Mouse", "Ergonomic wireless mouse with customizable buttons and long battery life", "Electronics"),
    product(11, "Organic Pasta", "Whole grain pasta made from organic ingredients, perfect for healthy meals", "Food"),
    product(12, "Chocolate Cookies", "Delicious cookies with chunks of premium dark chocolate", "Food"),
    product(13, "Fresh Fruit Basket", "Assortment of seasonal fruits including apples, oranges, and berries", "Food"),
    product(14, "Gourmet Coffee", "Premium single-origin coffee beans with rich flavor and aroma", "Food"),
    product(15, "Artisan Bread", "Freshly baked sourdough bread made with traditional methods", "Food"),
    product(16, "Protein Bars", "Nutritious snack bars with 20g of protein and natural ingredients", "Food"),
    product(17, "Organic Honey", "Raw, unfiltered honey from local beekeepers with natural health benefits", "Food"),
    product(18, "Gourmet Cheese Selection", "Curated selection of artisanal cheeses from around the world", "Food"),
    product(19, "Winter Jacket", "Insulated waterproof jacket for cold weather with adjustable hood", "Clothing"),
    product(20, "Running Shoes", "Lightweight athletic shoes with cushioned soles for runners", "Clothing"),
    product(21, "Cotton T-Shirt", "Soft, breathable cotton t-shirt available in various colors", "Clothing"),
    product(22, "Denim Jeans", "Classic fit jeans made from premium denim with stretch comfort", "Clothing"),
    product(23, "Coffee Maker", "Programmable coffee machine with built-in grinder for fresh coffee", "Home & Kitchen"),
    product(24, "Non-stick Cookware Set", "Complete set of pots and pans with durable non-stick coating", "Home & Kitchen"),
    product(25, "Smart Thermostat", "Wi-Fi enabled thermostat that learns your schedule to save energy", "Home & Kitchen"),
    product(26, "Air Purifier", "HEPA filter air purifier that removes allergens and pollutants", "Home & Kitchen"),
];
