use crate::domain::model::NameRecord;
use crate::utils::error::{NameSortError, Result};

/// Orders records by last name, then given name, comparing bytes.
pub fn sort_names(mut records: Vec<NameRecord>) -> Result<Vec<NameRecord>> {
    if records.is_empty() {
        return Err(NameSortError::invalid_param("name list to sort is empty"));
    }

    records.sort_by(|a, b| {
        a.last_name()
            .cmp(b.last_name())
            .then_with(|| a.given_name().cmp(b.given_name()))
    });

    Ok(records)
}
