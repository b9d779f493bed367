// Domain records and coded enumerations for the export engine

use crate::cell::{CellKind, CellValue, EnumCode};
use crate::schema::{FieldDef, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! coded_enum {
    ($name:ident { $($variant:ident = $code:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $code),+
        }

        impl EnumCode for $name {
            const NAME: &'static str = stringify!($name);

            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

coded_enum!(OrderStatus {
    Pending = 10,
    Processing = 20,
    Complete = 30,
    Cancelled = 40,
});

coded_enum!(PaymentStatus {
    Pending = 10,
    Authorized = 20,
    Paid = 30,
    PartiallyRefunded = 35,
    Refunded = 40,
    Voided = 50,
});

coded_enum!(ShippingStatus {
    ShippingNotRequired = 10,
    NotYetShipped = 20,
    PartiallyShipped = 25,
    Shipped = 30,
    Delivered = 40,
});

coded_enum!(TaxDisplayType {
    IncludingTax = 0,
    ExcludingTax = 10,
});

coded_enum!(ProductType {
    SimpleProduct = 5,
    GroupedProduct = 10,
});

coded_enum!(ManageInventoryMethod {
    DontManageStock = 0,
    ManageStock = 1,
    ManageStockByAttributes = 2,
});

coded_enum!(LowStockActivity {
    Nothing = 0,
    DisableBuyButton = 1,
    Unpublish = 2,
});

coded_enum!(BackorderMode {
    NoBackorders = 0,
    AllowQtyBelow0 = 1,
    AllowQtyBelow0AndNotifyCustomer = 2,
});

/// Country reference, used only for its display name in flattened
/// address columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
}

/// Postal address attached to an order. Addresses never export as their
/// own sheet; order exports flatten them into prefixed columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub city: String,
    pub address1: String,
    pub address2: String,
    pub zip_postal_code: String,
    pub phone_number: String,
    pub fax_number: String,
    pub country: Option<Country>,
}

impl Address {
    pub fn country_name(&self) -> CellValue {
        match &self.country {
            Some(country) => CellValue::text(&country.name),
            None => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub customer_guid: Uuid,
    pub email: String,
    pub username: String,
    pub vendor_id: i32,
    pub affiliate_id: i32,
    pub active: bool,
    pub is_tax_exempt: bool,
    pub admin_comment: String,
    pub created_on_utc: DateTime<Utc>,
    pub deleted: bool,
}

impl Record for Customer {
    const TYPE_NAME: &'static str = "Customer";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("CustomerGuid", CellKind::Uuid),
        FieldDef::new("Email", CellKind::Text),
        FieldDef::new("Username", CellKind::Text),
        FieldDef::new("VendorId", CellKind::Integer),
        FieldDef::new("AffiliateId", CellKind::Integer),
        FieldDef::new("Active", CellKind::Bool),
        FieldDef::new("IsTaxExempt", CellKind::Bool),
        FieldDef::new("AdminComment", CellKind::Text),
        FieldDef::new("CreatedOnUtc", CellKind::DateTime),
        FieldDef::new("Deleted", CellKind::Bool),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "CustomerGuid" => Some(CellValue::from_uuid(&self.customer_guid)),
            "Email" => Some(CellValue::text(&self.email)),
            "Username" => Some(CellValue::text(&self.username)),
            "VendorId" => Some(CellValue::from_i32(self.vendor_id)),
            "AffiliateId" => Some(CellValue::from_i32(self.affiliate_id)),
            "Active" => Some(CellValue::from_bool(self.active)),
            "IsTaxExempt" => Some(CellValue::from_bool(self.is_tax_exempt)),
            "AdminComment" => Some(CellValue::text(&self.admin_comment)),
            "CreatedOnUtc" => Some(CellValue::from_datetime(&self.created_on_utc)),
            "Deleted" => Some(CellValue::from_bool(self.deleted)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub order_guid: Uuid,
    pub store_id: i32,
    pub customer: Customer,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub pick_up_in_store: bool,
    pub payment_method_system_name: String,
    pub customer_currency_code: String,
    pub currency_rate: f64,
    pub customer_tax_display_type: TaxDisplayType,
    pub vat_number: String,
    pub order_subtotal_incl_tax: f64,
    pub order_subtotal_excl_tax: f64,
    pub order_sub_total_discount_incl_tax: f64,
    pub order_sub_total_discount_excl_tax: f64,
    pub order_shipping_incl_tax: f64,
    pub order_shipping_excl_tax: f64,
    pub payment_method_additional_fee_incl_tax: f64,
    pub payment_method_additional_fee_excl_tax: f64,
    pub tax_rates: String,
    pub order_tax: f64,
    pub order_discount: f64,
    pub order_total: f64,
    pub refunded_amount: f64,
    pub shipping_method: String,
    pub shipping_rate_computation_method_system_name: String,
    pub custom_values_xml: Option<String>,
    pub paid_date_utc: Option<DateTime<Utc>>,
    pub billing_address: Address,
    pub shipping_address: Option<Address>,
    pub created_on_utc: DateTime<Utc>,
    pub deleted: bool,
}

impl Record for Order {
    const TYPE_NAME: &'static str = "Order";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("OrderGuid", CellKind::Uuid),
        FieldDef::new("StoreId", CellKind::Integer),
        FieldDef::new("Customer", CellKind::Text),
        FieldDef::new("OrderStatus", CellKind::Integer),
        FieldDef::new("PaymentStatus", CellKind::Integer),
        FieldDef::new("ShippingStatus", CellKind::Integer),
        FieldDef::new("PickUpInStore", CellKind::Bool),
        FieldDef::new("PaymentMethodSystemName", CellKind::Text),
        FieldDef::new("CustomerCurrencyCode", CellKind::Text),
        FieldDef::new("CurrencyRate", CellKind::Decimal),
        FieldDef::new("CustomerTaxDisplayType", CellKind::Integer),
        FieldDef::new("VatNumber", CellKind::Text),
        FieldDef::new("OrderSubtotalInclTax", CellKind::Decimal),
        FieldDef::new("OrderSubtotalExclTax", CellKind::Decimal),
        FieldDef::new("OrderSubTotalDiscountInclTax", CellKind::Decimal),
        FieldDef::new("OrderSubTotalDiscountExclTax", CellKind::Decimal),
        FieldDef::new("OrderShippingInclTax", CellKind::Decimal),
        FieldDef::new("OrderShippingExclTax", CellKind::Decimal),
        FieldDef::new("PaymentMethodAdditionalFeeInclTax", CellKind::Decimal),
        FieldDef::new("PaymentMethodAdditionalFeeExclTax", CellKind::Decimal),
        FieldDef::new("TaxRates", CellKind::Text),
        FieldDef::new("OrderTax", CellKind::Decimal),
        FieldDef::new("OrderDiscount", CellKind::Decimal),
        FieldDef::new("OrderTotal", CellKind::Decimal),
        FieldDef::new("RefundedAmount", CellKind::Decimal),
        FieldDef::new("ShippingMethod", CellKind::Text),
        FieldDef::new(
            "ShippingRateComputationMethodSystemName",
            CellKind::Text,
        ),
        FieldDef::new("CustomValuesXml", CellKind::Text),
        FieldDef::new("PaidDateUtc", CellKind::DateTime),
        FieldDef::new("BillingAddress", CellKind::Text),
        FieldDef::new("ShippingAddress", CellKind::Text),
        FieldDef::new("CreatedOnUtc", CellKind::DateTime),
        FieldDef::new("Deleted", CellKind::Bool),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "OrderGuid" => Some(CellValue::from_uuid(&self.order_guid)),
            "StoreId" => Some(CellValue::from_i32(self.store_id)),
            "OrderStatus" => Some(CellValue::from_enum(self.order_status)),
            "PaymentStatus" => Some(CellValue::from_enum(self.payment_status)),
            "ShippingStatus" => Some(CellValue::from_enum(self.shipping_status)),
            "PickUpInStore" => Some(CellValue::from_bool(self.pick_up_in_store)),
            "PaymentMethodSystemName" => {
                Some(CellValue::text(&self.payment_method_system_name))
            }
            "CustomerCurrencyCode" => Some(CellValue::text(&self.customer_currency_code)),
            "CurrencyRate" => Some(CellValue::from_f64(self.currency_rate)),
            "CustomerTaxDisplayType" => {
                Some(CellValue::from_enum(self.customer_tax_display_type))
            }
            "VatNumber" => Some(CellValue::text(&self.vat_number)),
            "OrderSubtotalInclTax" => Some(CellValue::from_f64(self.order_subtotal_incl_tax)),
            "OrderSubtotalExclTax" => Some(CellValue::from_f64(self.order_subtotal_excl_tax)),
            "OrderSubTotalDiscountInclTax" => {
                Some(CellValue::from_f64(self.order_sub_total_discount_incl_tax))
            }
            "OrderSubTotalDiscountExclTax" => {
                Some(CellValue::from_f64(self.order_sub_total_discount_excl_tax))
            }
            "OrderShippingInclTax" => Some(CellValue::from_f64(self.order_shipping_incl_tax)),
            "OrderShippingExclTax" => Some(CellValue::from_f64(self.order_shipping_excl_tax)),
            "PaymentMethodAdditionalFeeInclTax" => Some(CellValue::from_f64(
                self.payment_method_additional_fee_incl_tax,
            )),
            "PaymentMethodAdditionalFeeExclTax" => Some(CellValue::from_f64(
                self.payment_method_additional_fee_excl_tax,
            )),
            "TaxRates" => Some(CellValue::text(&self.tax_rates)),
            "OrderTax" => Some(CellValue::from_f64(self.order_tax)),
            "OrderDiscount" => Some(CellValue::from_f64(self.order_discount)),
            "OrderTotal" => Some(CellValue::from_f64(self.order_total)),
            "RefundedAmount" => Some(CellValue::from_f64(self.refunded_amount)),
            "ShippingMethod" => Some(CellValue::text(&self.shipping_method)),
            "ShippingRateComputationMethodSystemName" => Some(CellValue::text(
                &self.shipping_rate_computation_method_system_name,
            )),
            "CustomValuesXml" => Some(CellValue::opt_text(&self.custom_values_xml)),
            "PaidDateUtc" => Some(CellValue::from_opt_datetime(&self.paid_date_utc)),
            "CreatedOnUtc" => Some(CellValue::from_datetime(&self.created_on_utc)),
            "Deleted" => Some(CellValue::from_bool(self.deleted)),
            // Nested records have no direct cell rendering; order exports
            // flatten them through synthetic columns instead.
            "Customer" | "BillingAddress" | "ShippingAddress" => None,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub manufacturer_template_id: i32,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub picture_id: i32,
    pub page_size: i32,
    pub allow_customers_to_select_page_size: bool,
    pub page_size_options: String,
    pub price_ranges: String,
    pub published: bool,
    pub display_order: i32,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
    pub deleted: bool,
}

impl Record for Manufacturer {
    const TYPE_NAME: &'static str = "Manufacturer";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("Name", CellKind::Text),
        FieldDef::new("Description", CellKind::Text),
        FieldDef::new("ManufacturerTemplateId", CellKind::Integer),
        FieldDef::new("MetaKeywords", CellKind::Text),
        FieldDef::new("MetaDescription", CellKind::Text),
        FieldDef::new("MetaTitle", CellKind::Text),
        FieldDef::new("PictureId", CellKind::Integer),
        FieldDef::new("PageSize", CellKind::Integer),
        FieldDef::new("AllowCustomersToSelectPageSize", CellKind::Bool),
        FieldDef::new("PageSizeOptions", CellKind::Text),
        FieldDef::new("PriceRanges", CellKind::Text),
        FieldDef::new("Published", CellKind::Bool),
        FieldDef::new("DisplayOrder", CellKind::Integer),
        FieldDef::new("CreatedOnUtc", CellKind::DateTime),
        FieldDef::new("UpdatedOnUtc", CellKind::DateTime),
        FieldDef::new("Deleted", CellKind::Bool),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "Name" => Some(CellValue::text(&self.name)),
            "Description" => Some(CellValue::text(&self.description)),
            "ManufacturerTemplateId" => {
                Some(CellValue::from_i32(self.manufacturer_template_id))
            }
            "MetaKeywords" => Some(CellValue::text(&self.meta_keywords)),
            "MetaDescription" => Some(CellValue::text(&self.meta_description)),
            "MetaTitle" => Some(CellValue::text(&self.meta_title)),
            "PictureId" => Some(CellValue::from_i32(self.picture_id)),
            "PageSize" => Some(CellValue::from_i32(self.page_size)),
            "AllowCustomersToSelectPageSize" => {
                Some(CellValue::from_bool(self.allow_customers_to_select_page_size))
            }
            "PageSizeOptions" => Some(CellValue::text(&self.page_size_options)),
            "PriceRanges" => Some(CellValue::text(&self.price_ranges)),
            "Published" => Some(CellValue::from_bool(self.published)),
            "DisplayOrder" => Some(CellValue::from_i32(self.display_order)),
            "CreatedOnUtc" => Some(CellValue::from_datetime(&self.created_on_utc)),
            "UpdatedOnUtc" => Some(CellValue::from_datetime(&self.updated_on_utc)),
            "Deleted" => Some(CellValue::from_bool(self.deleted)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category_template_id: i32,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub parent_category_id: i32,
    pub picture_id: i32,
    pub page_size: i32,
    pub allow_customers_to_select_page_size: bool,
    pub page_size_options: String,
    pub price_ranges: String,
    pub show_on_home_page: bool,
    pub include_in_top_menu: bool,
    pub published: bool,
    pub display_order: i32,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
    pub deleted: bool,
}

impl Record for Category {
    const TYPE_NAME: &'static str = "Category";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("Name", CellKind::Text),
        FieldDef::new("Description", CellKind::Text),
        FieldDef::new("CategoryTemplateId", CellKind::Integer),
        FieldDef::new("MetaKeywords", CellKind::Text),
        FieldDef::new("MetaDescription", CellKind::Text),
        FieldDef::new("MetaTitle", CellKind::Text),
        FieldDef::new("ParentCategoryId", CellKind::Integer),
        FieldDef::new("PictureId", CellKind::Integer),
        FieldDef::new("PageSize", CellKind::Integer),
        FieldDef::new("AllowCustomersToSelectPageSize", CellKind::Bool),
        FieldDef::new("PageSizeOptions", CellKind::Text),
        FieldDef::new("PriceRanges", CellKind::Text),
        FieldDef::new("ShowOnHomePage", CellKind::Bool),
        FieldDef::new("IncludeInTopMenu", CellKind::Bool),
        FieldDef::new("Published", CellKind::Bool),
        FieldDef::new("DisplayOrder", CellKind::Integer),
        FieldDef::new("CreatedOnUtc", CellKind::DateTime),
        FieldDef::new("UpdatedOnUtc", CellKind::DateTime),
        FieldDef::new("Deleted", CellKind::Bool),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "Name" => Some(CellValue::text(&self.name)),
            "Description" => Some(CellValue::text(&self.description)),
            "CategoryTemplateId" => Some(CellValue::from_i32(self.category_template_id)),
            "MetaKeywords" => Some(CellValue::text(&self.meta_keywords)),
            "MetaDescription" => Some(CellValue::text(&self.meta_description)),
            "MetaTitle" => Some(CellValue::text(&self.meta_title)),
            "ParentCategoryId" => Some(CellValue::from_i32(self.parent_category_id)),
            "PictureId" => Some(CellValue::from_i32(self.picture_id)),
            "PageSize" => Some(CellValue::from_i32(self.page_size)),
            "AllowCustomersToSelectPageSize" => {
                Some(CellValue::from_bool(self.allow_customers_to_select_page_size))
            }
            "PageSizeOptions" => Some(CellValue::text(&self.page_size_options)),
            "PriceRanges" => Some(CellValue::text(&self.price_ranges)),
            "ShowOnHomePage" => Some(CellValue::from_bool(self.show_on_home_page)),
            "IncludeInTopMenu" => Some(CellValue::from_bool(self.include_in_top_menu)),
            "Published" => Some(CellValue::from_bool(self.published)),
            "DisplayOrder" => Some(CellValue::from_i32(self.display_order)),
            "CreatedOnUtc" => Some(CellValue::from_datetime(&self.created_on_utc)),
            "UpdatedOnUtc" => Some(CellValue::from_datetime(&self.updated_on_utc)),
            "Deleted" => Some(CellValue::from_bool(self.deleted)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub product_type: ProductType,
    pub visible_individually: bool,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub vendor_id: i32,
    pub show_on_home_page: bool,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub allow_customer_reviews: bool,
    pub published: bool,
    pub sku: String,
    pub manufacturer_part_number: String,
    pub gtin: String,
    pub is_gift_card: bool,
    pub is_download: bool,
    pub is_ship_enabled: bool,
    pub is_free_shipping: bool,
    pub additional_shipping_charge: f64,
    pub is_tax_exempt: bool,
    pub manage_inventory_method: ManageInventoryMethod,
    pub stock_quantity: i32,
    pub display_stock_availability: bool,
    pub min_stock_quantity: i32,
    pub low_stock_activity: LowStockActivity,
    pub notify_admin_for_quantity_below: i32,
    pub backorder_mode: BackorderMode,
    pub allow_back_in_stock_subscriptions: bool,
    pub order_minimum_quantity: i32,
    pub order_maximum_quantity: i32,
    pub disable_buy_button: bool,
    pub disable_wishlist_button: bool,
    pub available_for_pre_order: bool,
    pub pre_order_availability_start_date_time_utc: Option<DateTime<Utc>>,
    pub call_for_price: bool,
    pub price: f64,
    pub old_price: f64,
    pub product_cost: f64,
    pub customer_enters_price: bool,
    pub minimum_customer_entered_price: f64,
    pub maximum_customer_entered_price: f64,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
    pub deleted: bool,
}

impl Record for Product {
    const TYPE_NAME: &'static str = "Product";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("ProductType", CellKind::Integer),
        FieldDef::new("VisibleIndividually", CellKind::Bool),
        FieldDef::new("Name", CellKind::Text),
        FieldDef::new("ShortDescription", CellKind::Text),
        FieldDef::new("FullDescription", CellKind::Text),
        FieldDef::new("VendorId", CellKind::Integer),
        FieldDef::new("ShowOnHomePage", CellKind::Bool),
        FieldDef::new("MetaKeywords", CellKind::Text),
        FieldDef::new("MetaDescription", CellKind::Text),
        FieldDef::new("MetaTitle", CellKind::Text),
        FieldDef::new("AllowCustomerReviews", CellKind::Bool),
        FieldDef::new("Published", CellKind::Bool),
        FieldDef::new("Sku", CellKind::Text),
        FieldDef::new("ManufacturerPartNumber", CellKind::Text),
        FieldDef::new("Gtin", CellKind::Text),
        FieldDef::new("IsGiftCard", CellKind::Bool),
        FieldDef::new("IsDownload", CellKind::Bool),
        FieldDef::new("IsShipEnabled", CellKind::Bool),
        FieldDef::new("IsFreeShipping", CellKind::Bool),
        FieldDef::new("AdditionalShippingCharge", CellKind::Decimal),
        FieldDef::new("IsTaxExempt", CellKind::Bool),
        FieldDef::new("ManageInventoryMethod", CellKind::Integer),
        FieldDef::new("StockQuantity", CellKind::Integer),
        FieldDef::new("DisplayStockAvailability", CellKind::Bool),
        FieldDef::new("MinStockQuantity", CellKind::Integer),
        FieldDef::new("LowStockActivity", CellKind::Integer),
        FieldDef::new("NotifyAdminForQuantityBelow", CellKind::Integer),
        FieldDef::new("BackorderMode", CellKind::Integer),
        FieldDef::new("AllowBackInStockSubscriptions", CellKind::Bool),
        FieldDef::new("OrderMinimumQuantity", CellKind::Integer),
        FieldDef::new("OrderMaximumQuantity", CellKind::Integer),
        FieldDef::new("DisableBuyButton", CellKind::Bool),
        FieldDef::new("DisableWishlistButton", CellKind::Bool),
        FieldDef::new("AvailableForPreOrder", CellKind::Bool),
        FieldDef::new("PreOrderAvailabilityStartDateTimeUtc", CellKind::DateTime),
        FieldDef::new("CallForPrice", CellKind::Bool),
        FieldDef::new("Price", CellKind::Decimal),
        FieldDef::new("OldPrice", CellKind::Decimal),
        FieldDef::new("ProductCost", CellKind::Decimal),
        FieldDef::new("CustomerEntersPrice", CellKind::Bool),
        FieldDef::new("MinimumCustomerEnteredPrice", CellKind::Decimal),
        FieldDef::new("MaximumCustomerEnteredPrice", CellKind::Decimal),
        FieldDef::new("Weight", CellKind::Decimal),
        FieldDef::new("Length", CellKind::Decimal),
        FieldDef::new("Width", CellKind::Decimal),
        FieldDef::new("Height", CellKind::Decimal),
        FieldDef::new("CreatedOnUtc", CellKind::DateTime),
        FieldDef::new("UpdatedOnUtc", CellKind::DateTime),
        FieldDef::new("Deleted", CellKind::Bool),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "ProductType" => Some(CellValue::from_enum(self.product_type)),
            "VisibleIndividually" => Some(CellValue::from_bool(self.visible_individually)),
            "Name" => Some(CellValue::text(&self.name)),
            "ShortDescription" => Some(CellValue::text(&self.short_description)),
            "FullDescription" => Some(CellValue::text(&self.full_description)),
            "VendorId" => Some(CellValue::from_i32(self.vendor_id)),
            "ShowOnHomePage" => Some(CellValue::from_bool(self.show_on_home_page)),
            "MetaKeywords" => Some(CellValue::text(&self.meta_keywords)),
            "MetaDescription" => Some(CellValue::text(&self.meta_description)),
            "MetaTitle" => Some(CellValue::text(&self.meta_title)),
            "AllowCustomerReviews" => Some(CellValue::from_bool(self.allow_customer_reviews)),
            "Published" => Some(CellValue::from_bool(self.published)),
            "Sku" => Some(CellValue::text(&self.sku)),
            "ManufacturerPartNumber" => {
                Some(CellValue::text(&self.manufacturer_part_number))
            }
            "Gtin" => Some(CellValue::text(&self.gtin)),
            "IsGiftCard" => Some(CellValue::from_bool(self.is_gift_card)),
            "IsDownload" => Some(CellValue::from_bool(self.is_download)),
            "IsShipEnabled" => Some(CellValue::from_bool(self.is_ship_enabled)),
            "IsFreeShipping" => Some(CellValue::from_bool(self.is_free_shipping)),
            "AdditionalShippingCharge" => {
                Some(CellValue::from_f64(self.additional_shipping_charge))
            }
            "IsTaxExempt" => Some(CellValue::from_bool(self.is_tax_exempt)),
            "ManageInventoryMethod" => {
                Some(CellValue::from_enum(self.manage_inventory_method))
            }
            "StockQuantity" => Some(CellValue::from_i32(self.stock_quantity)),
            "DisplayStockAvailability" => {
                Some(CellValue::from_bool(self.display_stock_availability))
            }
            "MinStockQuantity" => Some(CellValue::from_i32(self.min_stock_quantity)),
            "LowStockActivity" => Some(CellValue::from_enum(self.low_stock_activity)),
            "NotifyAdminForQuantityBelow" => {
                Some(CellValue::from_i32(self.notify_admin_for_quantity_below))
            }
            "BackorderMode" => Some(CellValue::from_enum(self.backorder_mode)),
            "AllowBackInStockSubscriptions" => {
                Some(CellValue::from_bool(self.allow_back_in_stock_subscriptions))
            }
            "OrderMinimumQuantity" => Some(CellValue::from_i32(self.order_minimum_quantity)),
            "OrderMaximumQuantity" => Some(CellValue::from_i32(self.order_maximum_quantity)),
            "DisableBuyButton" => Some(CellValue::from_bool(self.disable_buy_button)),
            "DisableWishlistButton" => Some(CellValue::from_bool(self.disable_wishlist_button)),
            "AvailableForPreOrder" => Some(CellValue::from_bool(self.available_for_pre_order)),
            "PreOrderAvailabilityStartDateTimeUtc" => Some(CellValue::from_opt_datetime(
                &self.pre_order_availability_start_date_time_utc,
            )),
            "CallForPrice" => Some(CellValue::from_bool(self.call_for_price)),
            "Price" => Some(CellValue::from_f64(self.price)),
            "OldPrice" => Some(CellValue::from_f64(self.old_price)),
            "ProductCost" => Some(CellValue::from_f64(self.product_cost)),
            "CustomerEntersPrice" => Some(CellValue::from_bool(self.customer_enters_price)),
            "MinimumCustomerEnteredPrice" => {
                Some(CellValue::from_f64(self.minimum_customer_entered_price))
            }
            "MaximumCustomerEnteredPrice" => {
                Some(CellValue::from_f64(self.maximum_customer_entered_price))
            }
            "Weight" => Some(CellValue::from_f64(self.weight)),
            "Length" => Some(CellValue::from_f64(self.length)),
            "Width" => Some(CellValue::from_f64(self.width)),
            "Height" => Some(CellValue::from_f64(self.height)),
            "CreatedOnUtc" => Some(CellValue::from_datetime(&self.created_on_utc)),
            "UpdatedOnUtc" => Some(CellValue::from_datetime(&self.updated_on_utc)),
            "Deleted" => Some(CellValue::from_bool(self.deleted)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Record;

    #[test]
    fn test_order_status_codes_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Complete,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code(15), None);
    }

    #[test]
    fn test_payment_status_uses_gapped_codes() {
        assert_eq!(PaymentStatus::PartiallyRefunded.code(), 35);
        assert_eq!(PaymentStatus::from_code(35), Some(PaymentStatus::PartiallyRefunded));
    }

    #[test]
    fn test_tax_display_type_starts_at_zero() {
        assert_eq!(TaxDisplayType::IncludingTax.code(), 0);
        assert_eq!(TaxDisplayType::ExcludingTax.code(), 10);
    }

    #[test]
    fn test_field_tables_have_unique_names() {
        fn assert_unique(fields: &[crate::schema::FieldDef], type_name: &str) {
            let mut seen = std::collections::HashSet::new();
            for field in fields {
                assert!(seen.insert(field.name), "{type_name} repeats {}", field.name);
            }
        }
        assert_unique(Order::FIELDS, Order::TYPE_NAME);
        assert_unique(Customer::FIELDS, Customer::TYPE_NAME);
        assert_unique(Manufacturer::FIELDS, Manufacturer::TYPE_NAME);
        assert_unique(Category::FIELDS, Category::TYPE_NAME);
        assert_unique(Product::FIELDS, Product::TYPE_NAME);
    }

    #[test]
    fn test_country_name_falls_back_to_empty() {
        let address = Address {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            company: String::new(),
            city: "New York".to_string(),
            address1: "21 West 52nd Street".to_string(),
            address2: String::new(),
            zip_postal_code: "10021".to_string(),
            phone_number: "123456789".to_string(),
            fax_number: String::new(),
            country: None,
        };
        assert!(address.country_name().is_empty());
    }
}
