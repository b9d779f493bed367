// Column specs for catalog exports: manufacturers, categories, products

use crate::cell::{CellKind, CellValue};
use crate::errors::ExportError;
use crate::export::PictureResolver;
use crate::models::{Category, Manufacturer, Product};
use crate::schema::ColumnSpec;
use std::sync::Arc;

pub fn manufacturer_columns(
    pictures: Arc<dyn PictureResolver>,
) -> Result<ColumnSpec<Manufacturer>, ExportError> {
    let mut spec = ColumnSpec::new("Manufacturers");
    spec.field("Id")?
        .field("Name")?
        .field("Description")?
        .field("ManufacturerTemplateId")?
        .field("MetaKeywords")?
        .field("MetaDescription")?
        .field("MetaTitle")?;
    spec.synthetic("Picture", CellKind::Text, move |manufacturer: &Manufacturer| {
        Ok(picture_cell(&pictures, manufacturer.picture_id))
    });
    spec.field("PageSize")?
        .field("AllowCustomersToSelectPageSize")?
        .field("PageSizeOptions")?
        .field("PriceRanges")?
        .field("Published")?
        .field("DisplayOrder")?;
    Ok(spec)
}

pub fn category_columns(
    pictures: Arc<dyn PictureResolver>,
) -> Result<ColumnSpec<Category>, ExportError> {
    let mut spec = ColumnSpec::new("Categories");
    spec.field("Id")?
        .field("Name")?
        .field("Description")?
        .field("CategoryTemplateId")?
        .field("MetaKeywords")?
        .field("MetaDescription")?
        .field("MetaTitle")?
        .field("ParentCategoryId")?;
    spec.synthetic("Picture", CellKind::Text, move |category: &Category| {
        Ok(picture_cell(&pictures, category.picture_id))
    });
    spec.field("PageSize")?
        .field("AllowCustomersToSelectPageSize")?
        .field("PageSizeOptions")?
        .field("PriceRanges")?
        .field("ShowOnHomePage")?
        .field("IncludeInTopMenu")?
        .field("Published")?
        .field("DisplayOrder")?;
    Ok(spec)
}

pub fn product_columns() -> Result<ColumnSpec<Product>, ExportError> {
    let mut spec = ColumnSpec::new("Products");
    spec.field_as("ProductId", "Id")?
        .field("ProductType")?
        .field("VisibleIndividually")?
        .field("Name")?
        .field("ShortDescription")?
        .field("FullDescription")?
        .field("VendorId")?
        .field("ShowOnHomePage")?
        .field("MetaKeywords")?
        .field("MetaDescription")?
        .field("MetaTitle")?
        .field("AllowCustomerReviews")?
        .field("Published")?
        .field("Sku")?
        .field("ManufacturerPartNumber")?
        .field("Gtin")?
        .field("IsGiftCard")?
        .field("IsDownload")?
        .field("IsShipEnabled")?
        .field("IsFreeShipping")?
        .field("AdditionalShippingCharge")?
        .field("IsTaxExempt")?
        .field("ManageInventoryMethod")?
        .field("StockQuantity")?
        .field("DisplayStockAvailability")?
        .field("MinStockQuantity")?
        .field("LowStockActivity")?
        .field("NotifyAdminForQuantityBelow")?
        .field("BackorderMode")?
        .field("AllowBackInStockSubscriptions")?
        .field("OrderMinimumQuantity")?
        .field("OrderMaximumQuantity")?
        .field("DisableBuyButton")?
        .field("DisableWishlistButton")?
        .field("AvailableForPreOrder")?
        .field("PreOrderAvailabilityStartDateTimeUtc")?
        .field("CallForPrice")?
        .field("Price")?
        .field("OldPrice")?
        .field("ProductCost")?
        .field("CustomerEntersPrice")?
        .field("MinimumCustomerEnteredPrice")?
        .field("MaximumCustomerEnteredPrice")?
        .field("Weight")?
        .field("Length")?
        .field("Width")?
        .field("Height")?;
    Ok(spec)
}

// Picture id 0 means no picture was ever attached.
fn picture_cell(pictures: &Arc<dyn PictureResolver>, picture_id: i32) -> CellValue {
    if picture_id == 0 {
        return CellValue::Empty;
    }
    match pictures.thumb_local_path(picture_id) {
        Some(path) => CellValue::text(&path),
        None => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::NoPictures;

    #[test]
    fn test_catalog_specs_replace_picture_id_with_path_column() {
        let pictures: Arc<dyn PictureResolver> = Arc::new(NoPictures);
        let spec = manufacturer_columns(Arc::clone(&pictures)).unwrap();
        let names = spec.column_names();
        assert!(names.contains(&"Picture".to_string()));
        assert!(!names.contains(&"PictureId".to_string()));

        let spec = category_columns(pictures).unwrap();
        let names = spec.column_names();
        assert!(names.contains(&"Picture".to_string()));
        assert!(!names.contains(&"PictureId".to_string()));
    }

    #[test]
    fn test_product_spec_renames_id() {
        let spec = product_columns().unwrap();
        let names = spec.column_names();
        assert!(names.contains(&"ProductId".to_string()));
        assert!(!names.contains(&"Id".to_string()));
    }

    #[test]
    fn test_unresolved_picture_renders_empty() {
        let pictures: Arc<dyn PictureResolver> = Arc::new(NoPictures);
        assert_eq!(picture_cell(&pictures, 0), CellValue::Empty);
        assert_eq!(picture_cell(&pictures, 7), CellValue::Empty);
    }
}
