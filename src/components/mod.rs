pub mod auto_sync;
pub mod breadcrumbs;
pub mod duty_day_calendar;
pub mod layout;
pub mod month_calendar;
pub mod preference_calendar;
pub mod status_calendar;

pub use auto_sync::AutoSyncPanel;
pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use duty_day_calendar::DutyDayCalendarModal;
pub use layout::Layout;
pub use month_calendar::MonthCalendar;
pub use preference_calendar::PreferenceCalendarModal;
pub use status_calendar::StatusCalendarModal;
