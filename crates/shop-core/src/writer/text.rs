//! # Text Format
//!
//! One human-readable line per item:
//!
//! ```text
//! Thriller - Produced by: Michael Jackson (Price: $12.99)
//! Web Hosting - Service Cost: $50.00
//! Electricity - Utility Cost: $100.00
//! ```
//!
//! Meant for console and logs, not for parsing.

use crate::error::CoreResult;
use crate::types::ChargeableItem;
use crate::writer::OutputFormat;

/// Plain text, newline-terminated lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl TextFormat {
    /// Renders a single item, including its trailing newline.
    pub fn render_item(item: &ChargeableItem) -> String {
        match item {
            ChargeableItem::PhysicalProduct(product) => format!(
                "{} - Produced by: {} (Price: {})\n",
                product.title(),
                product.producer_full_name(),
                product.unit_price()
            ),
            ChargeableItem::Service(service) => format!(
                "{} - Service Cost: {}\n",
                service.service_name(),
                service.service_cost()
            ),
            ChargeableItem::UtilityService(utility) => format!(
                "{} - Utility Cost: {}\n",
                utility.utility_name(),
                utility.utility_cost()
            ),
        }
    }
}

impl OutputFormat for TextFormat {
    fn render(items: &[ChargeableItem]) -> CoreResult<String> {
        Ok(items.iter().map(TextFormat::render_item).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PhysicalProduct, Service, UtilityService};
    use crate::writer::TextWriter;

    #[test]
    fn test_physical_product_line() {
        let item = PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99)
            .unwrap()
            .into();
        assert_eq!(
            TextFormat::render_item(&item),
            "Thriller - Produced by: Michael Jackson (Price: $12.99)\n"
        );
    }

    #[test]
    fn test_service_line() {
        let item = Service::new("Web Hosting", 50.0).unwrap().into();
        assert_eq!(
            TextFormat::render_item(&item),
            "Web Hosting - Service Cost: $50.00\n"
        );
    }

    #[test]
    fn test_utility_line() {
        let item = UtilityService::new("Electricity", 100.0).unwrap().into();
        assert_eq!(
            TextFormat::render_item(&item),
            "Electricity - Utility Cost: $100.00\n"
        );
    }

    #[test]
    fn test_price_rounds_to_two_decimals() {
        let item = PhysicalProduct::new("Rounding", "A", "B", 12.999)
            .unwrap()
            .into();
        assert_eq!(
            TextFormat::render_item(&item),
            "Rounding - Produced by: A B (Price: $13.00)\n"
        );
    }

    #[test]
    fn test_huge_price_is_not_infinite() {
        let item = PhysicalProduct::new("Big", "A", "B", 1e307).unwrap().into();
        let line = TextFormat::render_item(&item);

        assert!(line.starts_with("Big - Produced by: A B (Price: $10000000000"));
        assert!(line.ends_with(".00)\n"));
        assert!(!line.contains("inf"));
    }

    #[test]
    fn test_empty_surname_keeps_single_space() {
        let item = PhysicalProduct::new("Back in Black", "AC/DC", "", 10.99)
            .unwrap()
            .into();
        assert_eq!(
            TextFormat::render_item(&item),
            "Back in Black - Produced by: AC/DC  (Price: $10.99)\n"
        );
    }

    #[test]
    fn test_one_line_per_item() {
        let mut writer = TextWriter::new();
        writer.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap());
        writer.add_item(Service::new("Web Hosting", 50.0).unwrap());
        writer.add_item(UtilityService::new("Electricity", 100.0).unwrap());
        writer.add_item(Service::new("Web Hosting", 50.0).unwrap());

        let output = writer.write().unwrap();
        assert_eq!(output.matches('\n').count(), writer.len());
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_write_is_repeatable() {
        let mut writer = TextWriter::new();
        writer.add_item(UtilityService::new("Water", 30.25).unwrap());

        let first = writer.write().unwrap();
        let second = writer.write().unwrap();
        assert_eq!(first, second);
        assert_eq!(writer.len(), 1);
    }
}
