//! Display labels for phone and email subtype codes.
//! 电话 / 邮箱子类型代码的显示标签

use std::borrow::Cow;

use super::{DataKind, SubtypeField};

/// Out-of-range code that selects a table's fallback label.
pub const CUSTOM_TYPE_SENTINEL: i32 = -1;

const CUSTOM_LABEL: &str = "Custom";

const PHONE_LABELS: &[(i32, &str)] = &[
    (1, "Home"),
    (2, "Mobile"),
    (3, "Work"),
    (4, "Work Fax"),
    (5, "Home Fax"),
    (6, "Pager"),
    (7, "Other"),
    (8, "Callback"),
    (9, "Car"),
    (10, "Company Main"),
    (11, "ISDN"),
    (12, "Main"),
    (13, "Other Fax"),
    (14, "Radio"),
    (15, "Telex"),
    (16, "TTY TDD"),
    (17, "Work Mobile"),
    (18, "Work Pager"),
    (19, "Assistant"),
    (20, "MMS"),
];

const EMAIL_LABELS: &[(i32, &str)] = &[(1, "Home"), (2, "Work"), (3, "Other"), (4, "Mobile")];

fn table(kind: DataKind) -> &'static [(i32, &'static str)] {
    match kind {
        DataKind::Phone => PHONE_LABELS,
        DataKind::Email => EMAIL_LABELS,
    }
}

/// Standard label for `code`, or the fallback label when the code is not in
/// the table.
pub fn type_label(kind: DataKind, code: i32) -> &'static str {
    table(kind)
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(CUSTOM_LABEL)
}

/// Label shown before the data value. Never fails: free text is used as-is.
pub fn subtype_label(kind: DataKind, field: &SubtypeField) -> Cow<'_, str> {
    match field {
        SubtypeField::Text(text) => Cow::Borrowed(text.as_str()),
        SubtypeField::Code(code) => Cow::Borrowed(type_label(kind, *code)),
        SubtypeField::Absent => Cow::Borrowed(type_label(kind, CUSTOM_TYPE_SENTINEL)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_use_table_label() {
        assert_eq!(type_label(DataKind::Phone, 2), "Mobile");
        assert_eq!(type_label(DataKind::Phone, 20), "MMS");
        assert_eq!(type_label(DataKind::Email, 2), "Work");
        assert_eq!(type_label(DataKind::Email, 4), "Mobile");
    }

    #[test]
    fn test_out_of_range_codes_fall_back() {
        assert_eq!(type_label(DataKind::Phone, 0), "Custom");
        assert_eq!(type_label(DataKind::Phone, 21), "Custom");
        assert_eq!(type_label(DataKind::Email, 5), "Custom");
        assert_eq!(type_label(DataKind::Email, CUSTOM_TYPE_SENTINEL), "Custom");
    }

    #[test]
    fn test_field_variants() {
        assert_eq!(
            subtype_label(DataKind::Phone, &SubtypeField::Code(3)),
            "Work"
        );
        assert_eq!(subtype_label(DataKind::Email, &SubtypeField::Absent), "Custom");
        assert_eq!(
            subtype_label(DataKind::Phone, &SubtypeField::Text("Custom".into())),
            "Custom"
        );
        assert_eq!(
            subtype_label(DataKind::Phone, &SubtypeField::Text("Boat".into())),
            "Boat"
        );
    }
}
