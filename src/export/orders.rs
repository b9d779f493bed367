// Column spec for order exports, including flattened address columns

use crate::cell::{CellKind, CellValue};
use crate::errors::ExportError;
use crate::models::{Address, Order};
use crate::schema::ColumnSpec;

/// Builds the order sheet layout. Enum-backed fields export under their
/// `*Id` column names, nested addresses flatten into `Billing*` and
/// `Shipping*` columns, and the customer contributes only its id.
pub fn order_columns() -> Result<ColumnSpec<Order>, ExportError> {
    let mut spec = ColumnSpec::new("Orders");
    spec.field_as("OrderId", "Id")?
        .field("OrderGuid")?
        .field("StoreId")?;
    spec.synthetic("CustomerId", CellKind::Integer, |order: &Order| {
        Ok(CellValue::from_i32(order.customer.id))
    });
    spec.field_as("OrderStatusId", "OrderStatus")?
        .field_as("PaymentStatusId", "PaymentStatus")?
        .field_as("ShippingStatusId", "ShippingStatus")?
        .field_as("ShippingPickUpInStore", "PickUpInStore")?
        .field("PaymentMethodSystemName")?
        .field("CustomerCurrencyCode")?
        .field("CurrencyRate")?
        .field("VatNumber")?
        .field("OrderSubtotalInclTax")?
        .field("OrderSubtotalExclTax")?
        .field("OrderSubTotalDiscountInclTax")?
        .field("OrderSubTotalDiscountExclTax")?
        .field("OrderShippingInclTax")?
        .field("OrderShippingExclTax")?
        .field("PaymentMethodAdditionalFeeInclTax")?
        .field("PaymentMethodAdditionalFeeExclTax")?
        .field("TaxRates")?
        .field("OrderTax")?
        .field("OrderDiscount")?
        .field("OrderTotal")?
        .field("RefundedAmount")?
        .field("ShippingMethod")?
        .field("ShippingRateComputationMethodSystemName")?
        .field("CustomValuesXml")?
        .field("CreatedOnUtc")?;

    address_columns(&mut spec, "Billing", |order| Some(&order.billing_address));
    address_columns(&mut spec, "Shipping", |order| order.shipping_address.as_ref());

    Ok(spec)
}

type AddressPick = fn(&Order) -> Option<&Address>;

fn address_columns(spec: &mut ColumnSpec<Order>, prefix: &str, pick: AddressPick) {
    let parts: [(&str, fn(&Address) -> CellValue); 11] = [
        ("FirstName", |a| CellValue::text(&a.first_name)),
        ("LastName", |a| CellValue::text(&a.last_name)),
        ("Email", |a| CellValue::text(&a.email)),
        ("Company", |a| CellValue::text(&a.company)),
        ("Country", Address::country_name),
        ("City", |a| CellValue::text(&a.city)),
        ("Address1", |a| CellValue::text(&a.address1)),
        ("Address2", |a| CellValue::text(&a.address2)),
        ("ZipPostalCode", |a| CellValue::text(&a.zip_postal_code)),
        ("PhoneNumber", |a| CellValue::text(&a.phone_number)),
        ("FaxNumber", |a| CellValue::text(&a.fax_number)),
    ];
    for (suffix, render) in parts {
        let column = format!("{prefix}{suffix}");
        spec.synthetic(&column, CellKind::Text, move |order: &Order| {
            Ok(pick(order).map_or(CellValue::Empty, render))
        });
    }
}
