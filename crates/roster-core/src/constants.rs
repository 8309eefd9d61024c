/// Application identity shared across crates
pub const APP_NAME: &str = "Roster";
pub const APP_VENDOR: &str = "Roster";

/// Default `PRODID` stamped on exported calendars
pub const DEFAULT_PRODID: &str =
    const_str::concat!("-//", APP_VENDOR, "//", APP_NAME, " Schedule Export//EN");

/// The single time zone every meeting time is interpreted in.
pub const CALENDAR_TZID: &str = "America/Los_Angeles";

/// Term bounds used when section rows carry no dates (ISO 8601).
pub const FALLBACK_TERM_START: &str = "2025-01-06";
pub const FALLBACK_TERM_END: &str = "2025-03-21";

/// Name of the schedule every collection starts with.
pub const DEFAULT_SCHEDULE_NAME: &str = "Schedule 1";

/// Course numbers at or above this value are upper division.
pub const UPPER_DIVISION_FLOOR: u32 = 100;

/// Namespace for deterministic event UIDs (UUID v5).
pub const EVENT_UID_NAMESPACE: uuid::Uuid =
    uuid::Uuid::from_u128(0x6f1c_2a0e_93b4_4d57_a1e2_5c0b_7d39_e844);
