// Export managers: column specs per record type and xlsx generation

mod catalog;
mod customers;
mod orders;

pub use catalog::{category_columns, manufacturer_columns, product_columns};
pub use customers::customer_columns;
pub use orders::order_columns;

use crate::codec;
use crate::config::ExportSettings;
use crate::errors::ExportError;
use crate::models::{Category, Customer, Manufacturer, Order, Product};
use crate::schema::{verify_all_fields_covered, ColumnSpec, Record};
use std::sync::Arc;
use tracing::{info, instrument};

/// Resolves a picture id to the local path of its thumbnail. Catalog
/// exports embed the resolved path as a plain text cell.
pub trait PictureResolver: Send + Sync {
    /// Returns `None` when the picture does not exist or has no stored
    /// thumbnail; the cell is then left empty.
    fn thumb_local_path(&self, picture_id: i32) -> Option<String>;
}

/// Picture resolver for installations without a media store.
pub struct NoPictures;

impl PictureResolver for NoPictures {
    fn thumb_local_path(&self, _picture_id: i32) -> Option<String> {
        None
    }
}

/// Entry point for turning entity collections into xlsx buffers.
///
/// Every export first checks its column spec against the record's field
/// table so a new entity field cannot silently go missing from the sheet.
pub struct ExportManager {
    pictures: Arc<dyn PictureResolver>,
    settings: ExportSettings,
}

impl ExportManager {
    pub fn new(pictures: Arc<dyn PictureResolver>, settings: ExportSettings) -> Self {
        ExportManager { pictures, settings }
    }

    fn export<T: Record>(
        &self,
        records: &[T],
        spec: &ColumnSpec<T>,
    ) -> Result<Vec<u8>, ExportError> {
        let profile = self.settings.profile(T::TYPE_NAME);
        verify_all_fields_covered(spec, &profile)?;
        let buffer = codec::encode(records, spec)?;
        info!(
            record_type = T::TYPE_NAME,
            records = records.len(),
            bytes = buffer.len(),
            "Export complete"
        );
        Ok(buffer)
    }

    #[instrument(skip(self, orders), fields(orders = orders.len()))]
    pub fn export_orders_to_xlsx(&self, orders: &[Order]) -> Result<Vec<u8>, ExportError> {
        let spec = order_columns()?;
        self.export(orders, &spec)
    }

    #[instrument(skip(self, customers), fields(customers = customers.len()))]
    pub fn export_customers_to_xlsx(
        &self,
        customers: &[Customer],
    ) -> Result<Vec<u8>, ExportError> {
        let spec = customer_columns()?;
        self.export(customers, &spec)
    }

    #[instrument(skip(self, manufacturers), fields(manufacturers = manufacturers.len()))]
    pub fn export_manufacturers_to_xlsx(
        &self,
        manufacturers: &[Manufacturer],
    ) -> Result<Vec<u8>, ExportError> {
        let spec = manufacturer_columns(Arc::clone(&self.pictures))?;
        self.export(manufacturers, &spec)
    }

    #[instrument(skip(self, categories), fields(categories = categories.len()))]
    pub fn export_categories_to_xlsx(
        &self,
        categories: &[Category],
    ) -> Result<Vec<u8>, ExportError> {
        let spec = category_columns(Arc::clone(&self.pictures))?;
        self.export(categories, &spec)
    }

    #[instrument(skip(self, products), fields(products = products.len()))]
    pub fn export_products_to_xlsx(&self, products: &[Product]) -> Result<Vec<u8>, ExportError> {
        let spec = product_columns()?;
        self.export(products, &spec)
    }
}
