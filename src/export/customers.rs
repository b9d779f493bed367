// Column spec for customer exports

use crate::errors::ExportError;
use crate::models::Customer;
use crate::schema::ColumnSpec;

pub fn customer_columns() -> Result<ColumnSpec<Customer>, ExportError> {
    let mut spec = ColumnSpec::new("Customers");
    spec.field("CustomerGuid")?
        .field("Email")?
        .field("Username")?
        .field("VendorId")?
        .field("AffiliateId")?
        .field("Active")?
        .field("IsTaxExempt")?
        .field("CreatedOnUtc")?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_columns_omit_internal_fields() {
        let spec = customer_columns().unwrap();
        let names = spec.column_names();
        assert!(!names.contains(&"Id".to_string()));
        assert!(!names.contains(&"AdminComment".to_string()));
        assert!(!names.contains(&"Deleted".to_string()));
        assert!(names.contains(&"CustomerGuid".to_string()));
    }
}
