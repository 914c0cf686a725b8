use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted record of the total count for a single calendar day. The id
/// exists for list rendering; `date` is the real key, unique per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub count: u64,
}

impl DailyEntry {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            count,
        }
    }
}

/// Live counter state as served to the page.
#[derive(Debug, Serialize, Deserialize)]
pub struct CounterResponse {
    pub date: String,
    pub count: u64,
    pub phrase: String,
    pub phrase_index: usize,
}

/// Today's recorded total, read back from history.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<DailyEntry>,
}
