use cs_core::contacts::GroupInfo;
use cs_core::ports::{Record, RecordField, ResourceLabelPort, ResourceRef, ThemeHint};

/// Columns needed to build a [`GroupInfo`].
pub(crate) const GROUP_FIELDS: &[RecordField] = &[
    RecordField::Id,
    RecordField::ResPackage,
    RecordField::TitleRes,
    RecordField::Title,
    RecordField::AccountName,
    RecordField::SummaryCount,
];

/// Build the display data for a group row.
///
/// Title priority: the foreign-package resource when both package and
/// resource id are present and resolve to non-empty text, else the stored
/// title.
pub(crate) async fn group_info_from_record(
    id: i64,
    record: &Record,
    labels: &dyn ResourceLabelPort,
    theme: &ThemeHint,
) -> GroupInfo {
    let resource_title = match resource_ref(record) {
        Some(resource) => labels
            .resolve_text(&resource, theme)
            .await
            .filter(|text| !text.is_empty()),
        None => None,
    };

    let title = resource_title.or_else(|| record.get_text(RecordField::Title));

    GroupInfo::new(
        id,
        title,
        record.get_text(RecordField::AccountName),
        record.get_text(RecordField::SummaryCount),
    )
}

fn resource_ref(record: &Record) -> Option<ResourceRef> {
    let package = record.get_text(RecordField::ResPackage)?;
    let raw_id = record.get_text(RecordField::TitleRes)?;
    match raw_id.parse::<i32>() {
        Ok(resource_id) => Some(ResourceRef::new(package, resource_id)),
        Err(_) => {
            tracing::warn!(
                package = %package,
                title_res = %raw_id,
                "group title resource id is not numeric, using stored title"
            );
            None
        }
    }
}
