use crate::models::DailyEntry;
use crate::storage::KeyValueStore;
use chrono::{Local, NaiveDate};
use tracing::warn;

/// The rotating dhikr phrases. The label advances every [`PHRASE_CYCLE`]
/// counts, mirroring a 33-bead misbaha.
pub const PHRASES: [&str; 3] = ["SubhanAllah", "Alhamdulillah", "Allahu Akbar"];
pub const PHRASE_CYCLE: u64 = 33;

pub const KEY_COUNT: &str = "currentCount";
pub const KEY_LAST_RESET: &str = "lastResetDate";
pub const KEY_ENTRIES: &str = "entries";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily tally over an injectable key-value store.
///
/// The in-memory fields are the session state; every mutation writes through
/// to the store so a reload picks up where the session left off. The history
/// list lives only in the store and is decoded on each read, so corrupt or
/// missing data degrades to an empty history instead of an error.
pub struct CounterStore<S: KeyValueStore> {
    store: S,
    count: u64,
    phrase_index: usize,
    last_reset_date: Option<NaiveDate>,
}

impl<S: KeyValueStore> CounterStore<S> {
    /// Restores session state from persisted values. The phrase index is not
    /// persisted; it is a function of the count, so it is derived here and
    /// cannot drift from the count across restarts.
    pub fn load(store: S) -> Self {
        let count = store
            .get(KEY_COUNT)
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0);
        let last_reset_date = store
            .get(KEY_LAST_RESET)
            .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok());

        Self {
            phrase_index: ((count / PHRASE_CYCLE) as usize) % PHRASES.len(),
            store,
            count,
            last_reset_date,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phrase(&self) -> &'static str {
        PHRASES[self.phrase_index]
    }

    pub fn last_reset_date(&self) -> Option<NaiveDate> {
        self.last_reset_date
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    pub fn increment(&mut self) {
        self.increment_at(today());
    }

    /// Adds one count, rotating the phrase on every 33rd count, then writes
    /// the count and today's history entry through to the store.
    pub fn increment_at(&mut self, today: NaiveDate) {
        self.count += 1;
        if self.count % PHRASE_CYCLE == 0 {
            self.phrase_index = (self.phrase_index + 1) % PHRASES.len();
        }
        self.store.set(KEY_COUNT, self.count.to_string());
        self.record_to_history_at(today);
    }

    pub fn reset(&mut self) {
        self.reset_at(today());
    }

    /// Zeroes the count and phrase, and records the zero for today.
    pub fn reset_at(&mut self, today: NaiveDate) {
        self.count = 0;
        self.phrase_index = 0;
        self.store.set(KEY_COUNT, "0".to_string());
        self.record_to_history_at(today);
    }

    /// Starts a fresh tally when the calendar day has changed since the last
    /// reset. Compares `NaiveDate`s directly, never formatted strings.
    /// Idempotent within a day; returns whether a rollover happened so the
    /// caller knows to persist.
    pub fn check_and_rollover_if_new_day(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == Some(today) {
            return false;
        }
        self.count = 0;
        self.phrase_index = 0;
        self.last_reset_date = Some(today);
        self.store.set(KEY_COUNT, "0".to_string());
        self.store
            .set(KEY_LAST_RESET, today.format(DATE_FORMAT).to_string());
        true
    }

    pub fn record_to_history(&mut self) {
        self.record_to_history_at(today());
    }

    /// Upserts today's history entry with the current count. Matching is by
    /// calendar-day equality, so a day never gets a second entry.
    pub fn record_to_history_at(&mut self, today: NaiveDate) {
        let mut entries = self.entries();
        match entries.iter_mut().find(|entry| entry.date == today) {
            Some(entry) => entry.count = self.count,
            None => entries.push(DailyEntry::new(today, self.count)),
        }
        match serde_json::to_string(&entries) {
            Ok(encoded) => self.store.set(KEY_ENTRIES, encoded),
            Err(err) => warn!("failed to encode history: {err}"),
        }
    }

    /// Decodes the persisted history. Corrupt or missing data reads as an
    /// empty list; nothing propagates to the caller.
    pub fn entries(&self) -> Vec<DailyEntry> {
        let Some(raw) = self.store.get(KEY_ENTRIES) else {
            return Vec::new();
        };
        match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("failed to decode history, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    pub fn today_count(&self) -> u64 {
        self.today_count_at(today())
    }

    /// Read path for the progress display: today's recorded total, or 0 when
    /// no entry exists yet.
    pub fn today_count_at(&self, today: NaiveDate) -> u64 {
        self.entries()
            .iter()
            .find(|entry| entry.date == today)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Duration;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, n).unwrap()
    }

    fn fresh() -> CounterStore<MemoryStore> {
        let mut counter = CounterStore::load(MemoryStore::default());
        counter.check_and_rollover_if_new_day(day(5));
        counter
    }

    #[test]
    fn count_tracks_taps_and_phrase_follows_count() {
        let mut counter = fresh();
        for n in 1..=100u64 {
            counter.increment_at(day(5));
            assert_eq!(counter.count(), n);
            assert_eq!(counter.phrase_index(), ((n / 33) % 3) as usize);
        }
    }

    #[test]
    fn phrase_rotates_every_33_and_wraps() {
        let mut counter = fresh();
        for _ in 0..33 {
            counter.increment_at(day(5));
        }
        assert_eq!(counter.count(), 33);
        assert_eq!(counter.phrase_index(), 1);
        assert_eq!(counter.phrase(), "Alhamdulillah");

        for _ in 0..66 {
            counter.increment_at(day(5));
        }
        assert_eq!(counter.count(), 99);
        assert_eq!(counter.phrase_index(), 0);

        counter.reset_at(day(5));
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.phrase_index(), 0);
    }

    #[test]
    fn reset_zeroes_count_and_phrase_regardless_of_state() {
        let mut counter = fresh();
        for _ in 0..40 {
            counter.increment_at(day(5));
        }
        counter.reset_at(day(5));
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.phrase_index(), 0);
        assert_eq!(counter.phrase(), "SubhanAllah");
        assert_eq!(counter.today_count_at(day(5)), 0);
    }

    #[test]
    fn rollover_resets_on_new_day() {
        let mut counter = fresh();
        for _ in 0..10 {
            counter.increment_at(day(5));
        }

        let rolled = counter.check_and_rollover_if_new_day(day(6));
        assert!(rolled);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.phrase_index(), 0);
        assert_eq!(counter.last_reset_date(), Some(day(6)));
        // Yesterday's history entry keeps its final count.
        assert_eq!(counter.today_count_at(day(5)), 10);
    }

    #[test]
    fn rollover_is_idempotent_within_a_day() {
        let mut counter = fresh();
        for _ in 0..7 {
            counter.increment_at(day(5));
        }

        assert!(counter.check_and_rollover_if_new_day(day(6)));
        let count = counter.count();
        let phrase = counter.phrase_index();
        assert!(!counter.check_and_rollover_if_new_day(day(6)));
        assert_eq!(counter.count(), count);
        assert_eq!(counter.phrase_index(), phrase);
    }

    #[test]
    fn first_run_forces_rollover() {
        let mut counter = CounterStore::load(MemoryStore::default());
        assert_eq!(counter.last_reset_date(), None);
        assert!(counter.check_and_rollover_if_new_day(day(5)));
        assert_eq!(counter.last_reset_date(), Some(day(5)));
    }

    #[test]
    fn history_keeps_one_entry_per_day_with_latest_count() {
        let mut counter = fresh();
        counter.increment_at(day(5));
        counter.increment_at(day(5));

        let entries = counter.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, day(5));
        assert_eq!(entries[0].count, 2);
        assert_eq!(counter.today_count_at(day(5)), 2);
    }

    #[test]
    fn history_spans_days_without_duplicates() {
        let mut counter = fresh();
        counter.increment_at(day(5));
        counter.check_and_rollover_if_new_day(day(6));
        counter.increment_at(day(6));
        counter.increment_at(day(6));

        let entries = counter.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(counter.today_count_at(day(5)), 1);
        assert_eq!(counter.today_count_at(day(6)), 2);
    }

    #[test]
    fn today_count_on_empty_history_is_zero() {
        let counter = CounterStore::load(MemoryStore::default());
        assert_eq!(counter.today_count_at(day(5)), 0);
    }

    #[test]
    fn corrupt_history_reads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(KEY_ENTRIES, "{not json".to_string());
        let counter = CounterStore::load(store);
        assert!(counter.entries().is_empty());
        assert_eq!(counter.today_count_at(day(5)), 0);
    }

    #[test]
    fn load_restores_count_and_derives_phrase() {
        let mut store = MemoryStore::default();
        store.set(KEY_COUNT, "40".to_string());
        store.set(KEY_LAST_RESET, "2026-01-05".to_string());
        let counter = CounterStore::load(store);
        assert_eq!(counter.count(), 40);
        assert_eq!(counter.phrase_index(), 1);
        assert_eq!(counter.last_reset_date(), Some(day(5)));
    }

    #[test]
    fn load_tolerates_garbage_values() {
        let mut store = MemoryStore::default();
        store.set(KEY_COUNT, "many".to_string());
        store.set(KEY_LAST_RESET, "someday".to_string());
        let counter = CounterStore::load(store);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.last_reset_date(), None);
    }

    #[test]
    fn mutations_write_through_to_the_store() {
        let mut counter = fresh();
        counter.increment_at(day(5));
        assert_eq!(counter.storage().get(KEY_COUNT), Some("1"));
        counter.reset_at(day(5));
        assert_eq!(counter.storage().get(KEY_COUNT), Some("0"));
        assert_eq!(counter.storage().get(KEY_LAST_RESET), Some("2026-01-05"));
    }

    #[test]
    fn rollover_one_day_later_resets_count() {
        let yesterday = day(5);
        let today = yesterday + Duration::days(1);

        let mut counter = fresh();
        counter.check_and_rollover_if_new_day(yesterday);
        for _ in 0..10 {
            counter.increment_at(yesterday);
        }
        assert_eq!(counter.count(), 10);

        counter.check_and_rollover_if_new_day(today);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.last_reset_date(), Some(today));
    }
}
