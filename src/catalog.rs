//! Static catalog of the e-commerce test pages to scrape
//!
//! Six fixed categories, each mapped to a page under the webscraper.io
//! test-sites tree. Iteration order (and therefore output order) is fixed
//! by [`Category::ALL`].

/// Base URL for the webscraper.io test sites
pub const BASE_URL: &str = "https://webscraper.io/test-sites";

/// One of the six predefined product groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Home,
    Computers,
    Laptops,
    Tablets,
    Phones,
    Touch,
}

impl Category {
    /// All categories in catalog (and output) order
    pub const ALL: [Category; 6] = [
        Category::Home,
        Category::Computers,
        Category::Laptops,
        Category::Tablets,
        Category::Phones,
        Category::Touch,
    ];

    /// Label used as the mapping key and the output file stem
    pub fn label(&self) -> &'static str {
        match self {
            Category::Home => "home",
            Category::Computers => "computers",
            Category::Laptops => "laptops",
            Category::Tablets => "tablets",
            Category::Phones => "phones",
            Category::Touch => "touch",
        }
    }

    /// Page path relative to [`BASE_URL`]
    fn path(&self) -> &'static str {
        match self {
            Category::Home => "/e-commerce/more/",
            Category::Computers => "/e-commerce/more/computers",
            Category::Laptops => "/e-commerce/more/computers/laptops",
            Category::Tablets => "/e-commerce/more/computers/tablets",
            Category::Phones => "/e-commerce/more/phones",
            Category::Touch => "/e-commerce/more/phones/touch",
        }
    }

    /// Fully-qualified page URL for this category
    pub fn url(&self) -> String {
        format!("{}{}", BASE_URL, self.path())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
