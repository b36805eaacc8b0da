//! Optional descriptive fields.
//!
//! Each field is read on its own. A failure is recorded on the result and
//! the field stays unset; it never affects the other fields or the
//! extraction as a whole.

use tracing::debug;

use crate::document::RawDocument;
use crate::stream::info::{ExtraField, FieldError, StreamInfo};

fn string(doc: &RawDocument, field: ExtraField) -> Result<String, FieldError> {
    doc.field(field.key())
        .string()
        .map_err(|kind| FieldError { field, kind })
}

fn int(doc: &RawDocument, field: ExtraField) -> Result<i64, FieldError> {
    doc.field(field.key())
        .int()
        .map_err(|kind| FieldError { field, kind })
}

/// Keep the value, or record why it is missing.
fn record<T>(errors: &mut Vec<FieldError>, value: Result<T, FieldError>) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(error) => {
            debug!("Extra field {error}");
            errors.push(error);
            None
        }
    }
}

/// Fill the optional fields of `info` from `doc`. Never fails.
pub fn collect_extras(doc: &RawDocument, mut info: StreamInfo) -> StreamInfo {
    let errors = &mut info.errors;

    info.thumbnail_url = record(errors, string(doc, ExtraField::ThumbnailUrl));
    info.duration = record(errors, int(doc, ExtraField::Duration));
    info.uploader_name = record(errors, string(doc, ExtraField::UploaderName));
    info.uploader_url = record(errors, string(doc, ExtraField::UploaderUrl));
    info.description = record(errors, string(doc, ExtraField::Description));
    info.view_count = record(errors, int(doc, ExtraField::ViewCount));
    info.upload_date = record(errors, string(doc, ExtraField::UploadDate));
    info.uploader_avatar_url = record(errors, string(doc, ExtraField::UploaderAvatarUrl));
    info.start_position = Some(doc.field(ExtraField::StartPosition.key()).int_or(0));
    info.like_count = record(errors, int(doc, ExtraField::LikeCount));
    info.dislike_count = record(errors, int(doc, ExtraField::DislikeCount));

    info
}
