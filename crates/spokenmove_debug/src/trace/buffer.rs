//! Ring buffer for trace records.
//!
//! Provides a fixed-size buffer that stores the most recent trace records,
//! indexed by parse number for queries.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
    /// Parse numbers present in the buffer, oldest first.
    parse_index: VecDeque<u64>,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
            parse_index: VecDeque::new(),
        }
    }

    /// Creates a buffer with default size (10000 records).
    #[must_use]
    pub fn default_size() -> Self {
        Self::new(10000)
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, parse: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.parse_index.back() != Some(&parse) {
            self.parse_index.push_back(parse);
        }
        self.records
            .push_back(TraceRecord::new(id, parse, timestamp_ns, event));

        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
        // Drop parses whose records have all been evicted
        match self.oldest_parse() {
            Some(oldest) => {
                while self.parse_index.front().is_some_and(|&p| p < oldest) {
                    self.parse_index.pop_front();
                }
            }
            None => self.parse_index.clear(),
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all records from the buffer.
    pub fn clear(&mut self) {
        self.records.clear();
        self.parse_index.clear();
        // Record ids stay monotonic across clears
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the record with the given id, if still buffered.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&TraceRecord> {
        self.records.iter().rev().find(|r| r.id == id)
    }

    /// Returns records for a specific parse.
    #[must_use]
    pub fn records_for_parse(&self, parse: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.parse == parse)
    }

    /// Returns the records of the most recent parse.
    #[must_use]
    pub fn last_parse(&self) -> Vec<&TraceRecord> {
        self.newest_parse()
            .map(|parse| self.records_for_parse(parse))
            .unwrap_or_default()
    }

    /// Returns the most recent N records.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns the oldest parse number in the buffer.
    #[must_use]
    pub fn oldest_parse(&self) -> Option<u64> {
        self.records.front().map(|r| r.parse)
    }

    /// Returns the newest parse number in the buffer.
    #[must_use]
    pub fn newest_parse(&self) -> Option<u64> {
        self.records.back().map(|r| r.parse)
    }

    /// Returns all parse numbers in the buffer.
    #[must_use]
    pub fn parses(&self) -> Vec<u64> {
        self.parse_index.iter().copied().collect()
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_parse: self.oldest_parse(),
            newest_parse: self.newest_parse(),
            parse_count: self.parse_index.len(),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::default_size()
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest parse in buffer.
    pub oldest_parse: Option<u64>,
    /// Newest parse in buffer.
    pub newest_parse: Option<u64>,
    /// Number of distinct parses.
    pub parse_count: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
