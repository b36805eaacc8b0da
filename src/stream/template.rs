//! Identity fields: the skeleton every extraction starts from.

use tracing::debug;

use crate::document::{Field, RawDocument};
use crate::error::{ExtractionError, Result};
use crate::stream::info::{StreamInfo, StreamType, GENERIC_SERVICE_ID, NO_AGE_LIMIT};

fn required(doc: &RawDocument, field: &'static str) -> Result<String> {
    doc.field(field).string().map_err(|kind| {
        debug!("Required field {field} unusable: {kind}");
        ExtractionError::MissingField { field }
    })
}

/// Build a [`StreamInfo`] skeleton from the mandatory identity fields.
///
/// Fails with [`ExtractionError::MissingField`] if `webpage_url`,
/// `display_id` or `title` is absent or not a string. `live` and
/// `age_limit` never fail; they fall back to [`StreamType::Video`] and
/// [`NO_AGE_LIMIT`].
pub fn build_template(doc: &RawDocument) -> Result<StreamInfo> {
    let url = required(doc, "webpage_url")?;

    // Any present, non-null `live` marks a live stream, `false` included.
    let stream_type = if matches!(doc.field("live"), Field::Value(_)) {
        StreamType::Live
    } else {
        StreamType::Video
    };

    let id = required(doc, "display_id")?;
    let name = required(doc, "title")?;

    let age_limit = doc
        .field("age_limit")
        .int()
        .ok()
        .filter(|limit| *limit > 0)
        .and_then(|limit| i32::try_from(limit).ok())
        .unwrap_or(NO_AGE_LIMIT);

    let info = StreamInfo::new(GENERIC_SERVICE_ID, url, stream_type, id, name, age_limit);
    Ok(info)
}
