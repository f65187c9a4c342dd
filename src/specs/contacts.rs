// src/specs/contacts.rs
//
// Contact listing page.
//
// Row i (1-based, inside `#_list_form > ul`):
//   li[i]/div[1]/div[1]/a     name
//   li[i]/div[1]/div[2]/p/a   company
//   li[i]/div[1]/div[3]       email
//   li[i]/div[1]/div[4]       phone
//
// Any of the four may be missing; a missing field is an empty cell, never a dropped row.

use tracing::debug;

use crate::browser::{text_if_present, Browser, Locator};
use crate::config::consts::{LIST_ITEM_CSS, NEXT_BUTTON_CSS, ROW_XPATH_PREFIX};
use crate::core::sanitize::clean_field;
use crate::error::DriverError;
use crate::store::{ContactStore, Letter, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Company, Field::Email, Field::Phone];

    fn suffix(self) -> &'static str {
        match self {
            Field::Name => "div[1]/div[1]/a",
            Field::Company => "div[1]/div[2]/p/a",
            Field::Email => "div[1]/div[3]",
            Field::Phone => "div[1]/div[4]",
        }
    }
}

pub fn field_locator(field: Field, row: usize) -> Locator {
    Locator::xpath(format!("{ROW_XPATH_PREFIX}[{row}]/{}", field.suffix()))
}

pub fn next_button() -> Locator {
    Locator::css(NEXT_BUTTON_CSS)
}

pub fn list_items() -> Locator {
    Locator::css(LIST_ITEM_CSS)
}

/// Build one complete record for row `row` (1-based).
/// Driver failures other than "not found" abort before anything is stored.
pub fn extract_record<B: Browser + ?Sized>(browser: &mut B, row: usize) -> Result<Record, DriverError> {
    let mut read = |field: Field| -> Result<String, DriverError> {
        let raw = text_if_present(browser, &field_locator(field, row))?;
        Ok(raw.as_deref().map(clean_field).unwrap_or_default())
    };

    Ok(Record {
        name: read(Field::Name)?,
        company: read(Field::Company)?,
        email: read(Field::Email)?,
        phone: read(Field::Phone)?,
    })
}

/// Extract rows `1..=count` into `letter`'s bucket. Returns how many were stored.
pub fn extract_rows<B: Browser + ?Sized>(
    browser: &mut B,
    letter: Letter,
    count: usize,
    store: &mut ContactStore,
) -> Result<usize, DriverError> {
    for row in 1..=count {
        let record = extract_record(browser, row)?;
        debug!("{letter} row {row}: {} | {} | {} | {}", record.name, record.company, record.email, record.phone);
        store.push(letter, record);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_locators_are_one_based_and_field_specific() {
        assert_eq!(
            field_locator(Field::Name, 1),
            Locator::xpath(r#"//*[@id="_list_form"]/ul/li[1]/div[1]/div[1]/a"#)
        );
        assert_eq!(
            field_locator(Field::Company, 12).value(),
            r#"//*[@id="_list_form"]/ul/li[12]/div[1]/div[2]/p/a"#
        );
        assert_eq!(
            field_locator(Field::Phone, 3).value(),
            r#"//*[@id="_list_form"]/ul/li[3]/div[1]/div[4]"#
        );
    }

    #[test]
    fn fields_have_distinct_locators() {
        let mut seen: Vec<Locator> = Field::ALL.iter().map(|f| field_locator(*f, 2)).collect();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
