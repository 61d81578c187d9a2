//! # XML Format
//!
//! Renders items as a pretty-printed `<products>` document.
//!
//! ## Document Shape
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <products>
//!   <product>                        ← PhysicalProduct
//!     <title>Thriller</title>
//!     <producer>
//!       <name>Michael</name>
//!       <surname>Jackson</surname>
//!     </producer>
//!     <price>12.99</price>
//!   </product>
//!   <product>                        ← Service
//!     <serviceName>Web Hosting</serviceName>
//!     <serviceCost>50.00</serviceCost>
//!   </product>
//!   <product>                        ← UtilityService
//!     <utilityName>Electricity</utilityName>
//!     <utilityCost>100.00</utilityCost>
//!   </product>
//! </products>
//! ```
//!
//! Prices are two-decimal strings. There is no parser back into items:
//! a loaded document is only ever raw text.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{CoreError, CoreResult};
use crate::money::format_amount;
use crate::types::{Chargeable, ChargeableItem};
use crate::writer::OutputFormat;

const INDENT_SIZE: usize = 2;

/// Pretty-printed XML with a UTF-8 declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl OutputFormat for XmlFormat {
    fn render(items: &[ChargeableItem]) -> CoreResult<String> {
        let mut doc = XmlDocument::new();

        doc.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        if items.is_empty() {
            doc.emit(Event::Empty(BytesStart::new("products")))?;
        } else {
            doc.open("products")?;
            for item in items {
                doc.open("product")?;
                write_product(&mut doc, item)?;
                doc.close("product")?;
            }
            doc.close("products")?;
        }

        doc.finish()
    }
}

/// Writes the variant-specific children of one `<product>`.
fn write_product(doc: &mut XmlDocument, item: &ChargeableItem) -> CoreResult<()> {
    match item {
        ChargeableItem::PhysicalProduct(product) => {
            doc.text_element("title", product.title())?;
            doc.open("producer")?;
            doc.text_element("name", product.producer_first_name())?;
            doc.text_element("surname", product.producer_last_name())?;
            doc.close("producer")?;
            doc.text_element("price", &format_amount(product.price()))?;
        }
        ChargeableItem::Service(service) => {
            doc.text_element("serviceName", service.service_name())?;
            doc.text_element("serviceCost", &format_amount(service.price()))?;
        }
        ChargeableItem::UtilityService(utility) => {
            doc.text_element("utilityName", utility.utility_name())?;
            doc.text_element("utilityCost", &format_amount(utility.price()))?;
        }
    }
    Ok(())
}

// =============================================================================
// Document Builder
// =============================================================================

/// Thin wrapper over an indenting quick-xml writer into memory.
struct XmlDocument {
    writer: Writer<Vec<u8>>,
}

impl XmlDocument {
    fn new() -> Self {
        XmlDocument {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE),
        }
    }

    fn emit(&mut self, event: Event<'_>) -> CoreResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| CoreError::Render(e.to_string()))
    }

    fn open(&mut self, tag: &str) -> CoreResult<()> {
        self.emit(Event::Start(BytesStart::new(tag)))
    }

    fn close(&mut self, tag: &str) -> CoreResult<()> {
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    /// `<tag>text</tag>` on one line, with `<`, `>` and `&` escaped.
    fn text_element(&mut self, tag: &str, text: &str) -> CoreResult<()> {
        self.open(tag)?;
        self.emit(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        self.close(tag)
    }

    fn finish(self) -> CoreResult<String> {
        let mut xml = String::from_utf8(self.writer.into_inner())
            .map_err(|e| CoreError::Render(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PhysicalProduct, Service, UtilityService};
    use crate::writer::XmlWriter;

    const THRILLER_XML: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<products>
  <product>
    <title>Thriller</title>
    <producer>
      <name>Michael</name>
      <surname>Jackson</surname>
    </producer>
    <price>12.99</price>
  </product>
</products>
";

    fn mixed_writer() -> XmlWriter {
        let mut writer = XmlWriter::new();
        writer.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap());
        writer.add_item(Service::new("Web Hosting", 50.0).unwrap());
        writer.add_item(UtilityService::new("Electricity", 100.0).unwrap());
        writer
    }

    #[test]
    fn test_single_product_document() {
        let mut writer = XmlWriter::new();
        writer.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap());

        assert_eq!(writer.write().unwrap(), THRILLER_XML);
    }

    #[test]
    fn test_huge_price_renders_digits() {
        let mut writer = XmlWriter::new();
        writer.add_item(PhysicalProduct::new("Big", "A", "B", 1e307).unwrap());

        let xml = writer.write().unwrap();
        assert!(!xml.contains("inf"));
        assert!(xml.contains("<price>10000000000"));
        assert!(xml.contains(".00</price>"));
    }

    #[test]
    fn test_declaration_and_root() {
        let xml = mixed_writer().write().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<products>"));
        assert!(xml.ends_with("</products>\n"));
    }

    #[test]
    fn test_one_product_element_per_item() {
        let writer = mixed_writer();
        let xml = writer.write().unwrap();
        assert_eq!(xml.matches("<product>").count(), writer.len());
        assert_eq!(xml.matches("</product>").count(), writer.len());
    }

    #[test]
    fn test_variant_specific_children() {
        let xml = mixed_writer().write().unwrap();

        assert!(xml.contains("<title>Thriller</title>"));
        assert!(xml.contains("<name>Michael</name>"));
        assert!(xml.contains("<surname>Jackson</surname>"));
        assert!(xml.contains("<price>12.99</price>"));

        assert!(xml.contains("<serviceName>Web Hosting</serviceName>"));
        assert!(xml.contains("<serviceCost>50.00</serviceCost>"));

        assert!(xml.contains("<utilityName>Electricity</utilityName>"));
        assert!(xml.contains("<utilityCost>100.00</utilityCost>"));

        assert_eq!(xml.matches("<title>").count(), 1);
        assert_eq!(xml.matches("<serviceName>").count(), 1);
        assert_eq!(xml.matches("<utilityName>").count(), 1);
    }

    #[test]
    fn test_products_keep_insertion_order() {
        let xml = mixed_writer().write().unwrap();
        let title = xml.find("<title>").unwrap();
        let service = xml.find("<serviceName>").unwrap();
        let utility = xml.find("<utilityName>").unwrap();
        assert!(title < service && service < utility);
    }

    #[test]
    fn test_price_is_rounded_string() {
        let mut writer = XmlWriter::new();
        writer.add_item(Service::new("Consulting", 12.999).unwrap());
        let xml = writer.write().unwrap();
        assert!(xml.contains("<serviceCost>13.00</serviceCost>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut writer = XmlWriter::new();
        writer.add_item(PhysicalProduct::new("Rock & Roll <Live>", "A", "B", 1.0).unwrap());
        let xml = writer.write().unwrap();
        assert!(xml.contains("<title>Rock &amp; Roll &lt;Live&gt;</title>"));
    }

    #[test]
    fn test_empty_writer_renders_empty_root() {
        let xml = XmlWriter::new().write().unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<products/>\n"
        );
    }

    #[test]
    fn test_write_is_repeatable() {
        let writer = mixed_writer();
        assert_eq!(writer.write().unwrap(), writer.write().unwrap());
    }
}
