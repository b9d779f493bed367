// Property-based tests for the tabular codec

use chrono::{DateTime, Duration, TimeZone, Utc};
use commerce_export::cell::datetime_to_serial;
use commerce_export::{decode, encode, CellKind, CellValue, ColumnSpec, FieldDef, Record};
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// Test record
// ============================================================================

#[derive(Debug, Clone)]
struct Shipment {
    id: i32,
    reference: Uuid,
    description: String,
    quantity: i32,
    weight: f64,
    delivered: bool,
    dispatched_on: DateTime<Utc>,
    note: Option<String>,
}

impl Record for Shipment {
    const TYPE_NAME: &'static str = "Shipment";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", CellKind::Integer),
        FieldDef::new("Reference", CellKind::Uuid),
        FieldDef::new("Description", CellKind::Text),
        FieldDef::new("Quantity", CellKind::Integer),
        FieldDef::new("Weight", CellKind::Decimal),
        FieldDef::new("Delivered", CellKind::Bool),
        FieldDef::new("DispatchedOn", CellKind::DateTime),
        FieldDef::new("Note", CellKind::Text),
    ];

    fn field_value(&self, name: &str) -> Option<CellValue> {
        match name {
            "Id" => Some(CellValue::from_i32(self.id)),
            "Reference" => Some(CellValue::from_uuid(&self.reference)),
            "Description" => Some(CellValue::text(&self.description)),
            "Quantity" => Some(CellValue::from_i32(self.quantity)),
            "Weight" => Some(CellValue::from_f64(self.weight)),
            "Delivered" => Some(CellValue::from_bool(self.delivered)),
            "DispatchedOn" => Some(CellValue::from_datetime(&self.dispatched_on)),
            "Note" => Some(CellValue::opt_text(&self.note)),
            _ => None,
        }
    }
}

fn shipment_spec(order: &[&'static str]) -> ColumnSpec<Shipment> {
    let mut spec = ColumnSpec::new("Shipments");
    for &name in order {
        spec.field(name).expect("known field");
    }
    spec
}

const NATURAL_ORDER: &[&str] = &[
    "Id",
    "Reference",
    "Description",
    "Quantity",
    "Weight",
    "Delivered",
    "DispatchedOn",
    "Note",
];

const SHUFFLED_ORDER: &[&str] = &[
    "Note",
    "Weight",
    "Id",
    "DispatchedOn",
    "Reference",
    "Delivered",
    "Description",
    "Quantity",
];

/// The cell a shipment is expected to produce for a column, after a write
/// and read cycle.
fn expected_cell(shipment: &Shipment, name: &str) -> CellValue {
    match name {
        "Id" => CellValue::Number(shipment.id as f64),
        "Reference" => CellValue::Text(shipment.reference.to_string()),
        "Description" => CellValue::Text(shipment.description.clone()),
        "Quantity" => CellValue::Number(shipment.quantity as f64),
        "Weight" => CellValue::Number(shipment.weight),
        "Delivered" => CellValue::Bool(shipment.delivered),
        "DispatchedOn" => CellValue::Number(datetime_to_serial(&shipment.dispatched_on)),
        "Note" => match &shipment.note {
            Some(note) => CellValue::Text(note.clone()),
            None => CellValue::Empty,
        },
        other => panic!("unknown column {other}"),
    }
}

// ============================================================================
// Property Generators
// ============================================================================

fn arb_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    // Whole milliseconds between 1990-01-01 and roughly 2080
    (0i64..2_840_140_800_000).prop_map(|ms| {
        Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(ms)
    })
}

fn arb_shipment() -> impl Strategy<Value = Shipment> {
    (
        0..1_000_000i32,
        any::<u128>(),
        "[a-zA-Z][a-zA-Z0-9 ]{0,19}",
        0..10_000i32,
        0.0..5_000.0f64,
        any::<bool>(),
        arb_datetime(),
        prop::option::of("[a-zA-Z][a-zA-Z0-9 ]{0,19}"),
    )
        .prop_map(
            |(id, reference, description, quantity, weight, delivered, dispatched_on, note)| {
                Shipment {
                    id,
                    reference: Uuid::from_u128(reference),
                    description,
                    quantity,
                    weight,
                    delivered,
                    dispatched_on,
                    note,
                }
            },
        )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every encoded record decodes back to the cells its fields produce.
    #[test]
    fn prop_encode_decode_round_trip(shipments in prop::collection::vec(arb_shipment(), 1..8)) {
        let spec = shipment_spec(NATURAL_ORDER);
        let buffer = encode(&shipments, &spec).unwrap();
        let rows = decode::<Shipment>(&buffer, 2, &spec.reader_kinds()).unwrap();

        prop_assert_eq!(rows.len(), shipments.len());
        for (row, shipment) in rows.iter().zip(&shipments) {
            for name in NATURAL_ORDER {
                prop_assert_eq!(
                    row.get(name),
                    Some(&expected_cell(shipment, name)),
                    "column {}",
                    name
                );
            }
        }
    }

    /// Two encodes of the same records decode to identical rows.
    #[test]
    fn prop_encoding_is_deterministic(shipments in prop::collection::vec(arb_shipment(), 1..5)) {
        let spec = shipment_spec(NATURAL_ORDER);
        let kinds = spec.reader_kinds();
        let first = decode::<Shipment>(&encode(&shipments, &spec).unwrap(), 2, &kinds).unwrap();
        let second = decode::<Shipment>(&encode(&shipments, &spec).unwrap(), 2, &kinds).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The header row, not the writer's layout, dictates how cells are
    /// addressed: a reordered sheet yields the same values per name.
    #[test]
    fn prop_header_is_authoritative(shipments in prop::collection::vec(arb_shipment(), 1..5)) {
        let natural = shipment_spec(NATURAL_ORDER);
        let shuffled = shipment_spec(SHUFFLED_ORDER);

        let natural_rows =
            decode::<Shipment>(&encode(&shipments, &natural).unwrap(), 2, &natural.reader_kinds())
                .unwrap();
        let shuffled_rows =
            decode::<Shipment>(&encode(&shipments, &shuffled).unwrap(), 2, &shuffled.reader_kinds())
                .unwrap();

        for (a, b) in natural_rows.iter().zip(&shuffled_rows) {
            for name in NATURAL_ORDER {
                prop_assert_eq!(a.get(name), b.get(name), "column {}", name);
            }
        }
    }

    /// A later start row skips exactly the leading data rows.
    #[test]
    fn prop_start_row_skips_leading_rows(
        shipments in prop::collection::vec(arb_shipment(), 2..8),
        skip in 0usize..4,
    ) {
        prop_assume!(skip < shipments.len());
        let spec = shipment_spec(NATURAL_ORDER);
        let buffer = encode(&shipments, &spec).unwrap();
        let rows = decode::<Shipment>(&buffer, 2 + skip as u32, &spec.reader_kinds()).unwrap();

        prop_assert_eq!(rows.len(), shipments.len() - skip);
        if let Some(first) = rows.first() {
            prop_assert_eq!(
                first.get("Id"),
                Some(&expected_cell(&shipments[skip], "Id"))
            );
        }
    }
}
