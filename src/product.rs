use serde::{Deserialize, Serialize};

/// One scraped product listing
///
/// Field declaration order is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Full product title (from the title attribute, not the truncated link text)
    pub title: String,

    /// Product description text
    pub description: String,

    /// Price in dollars, currency symbol stripped
    pub price: f64,

    /// Star rating, 0-5
    pub rating: u32,

    /// Number of reviews, 0 when the page shows none
    pub num_of_reviews: u32,
}

impl Product {
    /// CSV header columns, in field declaration order
    pub const FIELDS: [&'static str; 5] =
        ["title", "description", "price", "rating", "num_of_reviews"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        assert_eq!(
            Product::FIELDS,
            ["title", "description", "price", "rating", "num_of_reviews"]
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let product = Product {
            title: "Asus VivoBook X441NA-GA190".to_string(),
            description: "Asus VivoBook X441NA-GA190 Chocolate Black".to_string(),
            price: 295.99,
            rating: 3,
            num_of_reviews: 14,
        };

        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_csv_row_matches_field_order() {
        let product = Product {
            title: "t".to_string(),
            description: "d".to_string(),
            price: 1.5,
            rating: 4,
            num_of_reviews: 2,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(&product).unwrap();
        let row = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(row.trim_end(), "t,d,1.5,4,2");
    }
}
