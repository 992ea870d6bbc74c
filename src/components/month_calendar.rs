use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use dioxus_free_icons::icons::hi_outline_icons::{HiChevronLeft, HiChevronRight};

use crate::dates::month_grid;
use crate::i18n::{month_title, weekdays_short};

/// Shared month grid: weekday header, leading blanks for the weekday of day
/// 1, one button per day. The parent decides every cell's classes, so the
/// same widget serves status, preference and duty-day calendars.
#[component]
pub fn MonthCalendar(
    cursor: NaiveDate,
    loading: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_day: EventHandler<NaiveDate>,
    cell_class: Callback<NaiveDate, String>,
) -> Element {
    let cells = month_grid(cursor.year(), cursor.month());

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            button {
                class: "p-2 text-gray-400 hover:text-gray-600",
                onclick: move |_| on_prev.call(()),
                Icon { width: 20, height: 20, icon: HiChevronLeft }
            }
            h4 { class: "text-lg font-semibold text-gray-900",
                {month_title(cursor.year(), cursor.month())}
            }
            button {
                class: "p-2 text-gray-400 hover:text-gray-600",
                onclick: move |_| on_next.call(()),
                Icon { width: 20, height: 20, icon: HiChevronRight }
            }
        }
        if loading {
            div { class: "flex justify-center items-center h-64",
                div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600" }
            }
        } else {
            div { class: "grid grid-cols-7 gap-1 mb-2",
                for wd in weekdays_short() {
                    div { class: "text-center text-sm font-medium text-gray-500 py-2", {wd} }
                }
            }
            div { class: "grid grid-cols-7 gap-1",
                for cell in cells.into_iter() {
                    div { class: "h-12",
                        if let Some(day) = cell {
                            button {
                                class: format!(
                                    "w-full h-full text-sm font-medium rounded-md transition-colors {}",
                                    cell_class.call(day),
                                ),
                                onclick: move |_| on_day.call(day),
                                {day.day().to_string()}
                            }
                        } else {
                            div { class: "h-full" }
                        }
                    }
                }
            }
        }
    }
}
