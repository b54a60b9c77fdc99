//! Borrowing record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A loan linking one book to one patron.
///
/// A record is `Open` while `return_date` is absent and `Closed` once it is
/// set. Closing is the only transition and it is terminal: `borrow_date` is
/// immutable and `return_date` is written exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowingRecord {
    pub id: i64,
    pub book_id: i64,
    pub patron_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRecord {
    /// An open loan has no return date set
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}
