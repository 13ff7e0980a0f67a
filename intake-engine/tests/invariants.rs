//! Property tests: the billing invariants hold after any edit sequence

use intake_engine::{ClampPolicy, IntakeConfig, LineRegeneration, apply};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::Material;
use shared::order::{IntakeCommand, MeasurementField, OrderDraft, PaymentMethod, Tender};

fn material(id: i64, cents: i64) -> Material {
    Material {
        id,
        name: format!("Fabric {}", id),
        price: Decimal::new(cents, 2),
        thool: Decimal::new(58, 0),
        kethet: Decimal::new(21, 0),
        thool_kum: Decimal::new(23, 0),
        ardh_f_kum: Decimal::new(9, 0),
        jamba: Decimal::new(11, 0),
        ragab: Decimal::new(15, 0),
        is_active: true,
    }
}

/// Clerk text: mostly numbers, sometimes junk or out of range
fn typed_number() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..500).prop_map(|n| n.to_string()),
        2 => (0i64..100_000).prop_map(|c| Decimal::new(c, 2).to_string()),
        1 => (-500i64..0).prop_map(|n| n.to_string()),
        1 => "[a-z ]{0,4}",
        1 => prop_oneof![
            Just("79228162514264337593543950335".to_string()),
            Just("-79228162514264337593543950335".to_string()),
            Just("1000000000".to_string()),
            Just("-1000000000".to_string()),
            Just("1e27".to_string()),
        ],
    ]
}

fn method() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::Split),
    ]
}

fn selection_command() -> impl Strategy<Value = IntakeCommand> {
    prop_oneof![
        3 => (1i64..6, 0i64..50_000).prop_map(|(id, cents)| IntakeCommand::SelectEntry {
            material: material(id, cents),
        }),
        1 => (1i64..6).prop_map(|material_id| IntakeCommand::RemoveEntry { material_id }),
        1 => (1i64..6, typed_number()).prop_map(|(material_id, value)| {
            IntakeCommand::EditMeasurement {
                material_id,
                field: MeasurementField::Thool,
                value,
            }
        }),
        1 => Just(IntakeCommand::ClearEntries),
    ]
}

fn line_command() -> impl Strategy<Value = IntakeCommand> {
    prop_oneof![
        2 => (1u32..7, typed_number())
            .prop_map(|(serial, quantity)| IntakeCommand::SetQuantity { serial, quantity }),
        2 => (1u32..7, typed_number()).prop_map(|(serial, fee)| IntakeCommand::SetFee { serial, fee }),
        1 => Just(IntakeCommand::AddAdHocLine),
        1 => (1u32..7).prop_map(|serial| IntakeCommand::RemoveLine { serial }),
        1 => Just(IntakeCommand::ClearLines),
    ]
}

fn payment_command() -> impl Strategy<Value = IntakeCommand> {
    prop_oneof![
        2 => typed_number().prop_map(|advance| IntakeCommand::SetAdvance { advance }),
        2 => method().prop_map(|method| IntakeCommand::SetPaymentMethod { method }),
        1 => typed_number().prop_map(|amount| IntakeCommand::SetCashAmount { amount }),
        1 => typed_number().prop_map(|amount| IntakeCommand::SetCardAmount { amount }),
    ]
}

fn command() -> impl Strategy<Value = IntakeCommand> {
    prop_oneof![
        3 => selection_command(),
        4 => line_command(),
        3 => payment_command(),
    ]
}

fn config() -> impl Strategy<Value = IntakeConfig> {
    any::<bool>().prop_map(|preserve| {
        let policy = if preserve {
            LineRegeneration::PreserveById
        } else {
            LineRegeneration::Replace
        };
        IntakeConfig::default().with_line_regeneration(policy)
    })
}

fn touches_tender(command: &IntakeCommand) -> bool {
    matches!(
        command,
        IntakeCommand::SetPaymentMethod { .. }
            | IntakeCommand::SetCashAmount { .. }
            | IntakeCommand::SetCardAmount { .. }
    )
}

fn check_invariants(draft: &OrderDraft, last: &IntakeCommand) -> Result<(), TestCaseError> {
    let mut sum = Decimal::ZERO;
    for (idx, line) in draft.lines.iter().enumerate() {
        prop_assert_eq!(line.serial, idx as u32 + 1);
        prop_assert_eq!(line.amount, Decimal::from(line.quantity) * line.fee);
        sum += line.amount;
    }
    let totals = &draft.totals;
    prop_assert_eq!(totals.total, sum);
    prop_assert_eq!(totals.balance, totals.total - totals.advance);

    match totals.tender {
        Tender::Cash => {
            prop_assert_eq!(totals.cash_amount(), totals.total);
            prop_assert_eq!(totals.card_amount(), Decimal::ZERO);
        }
        Tender::Card => {
            prop_assert_eq!(totals.cash_amount(), Decimal::ZERO);
            prop_assert_eq!(totals.card_amount(), totals.total);
        }
        Tender::Split { cash, card } => {
            if touches_tender(last) {
                prop_assert_eq!(cash + card, totals.total);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold_after_every_edit(
        config in config(),
        commands in prop::collection::vec(command(), 1..40),
    ) {
        let mut draft = OrderDraft::new();
        for command in &commands {
            apply(&mut draft, command, &config);
            check_invariants(&draft, command)?;
        }
    }

    #[test]
    fn test_entries_stay_unique(commands in prop::collection::vec(command(), 1..40)) {
        let config = IntakeConfig::default();
        let mut draft = OrderDraft::new();
        for command in &commands {
            apply(&mut draft, command, &config);
        }
        let mut ids: Vec<i64> = draft.entries.iter().map(|e| e.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_clamped_balance_never_negative(
        commands in prop::collection::vec(command(), 1..40),
    ) {
        let config = IntakeConfig::default().with_clamp_policy(ClampPolicy {
            negative_balance: true,
            negative_split: true,
        });
        let mut draft = OrderDraft::new();
        for command in &commands {
            apply(&mut draft, command, &config);
            prop_assert!(draft.totals.balance >= Decimal::ZERO);
            // Only the derived half is clamped; the typed half is taken as-is
            if let Tender::Split { cash, card } = draft.totals.tender {
                match command {
                    IntakeCommand::SetCashAmount { .. } => prop_assert!(card >= Decimal::ZERO),
                    IntakeCommand::SetCardAmount { .. } => prop_assert!(cash >= Decimal::ZERO),
                    IntakeCommand::SetPaymentMethod { .. } => {
                        prop_assert!(cash >= Decimal::ZERO && card >= Decimal::ZERO);
                    }
                    _ => {}
                }
            }
        }
    }
}
