use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use dioxus_free_icons::icons::hi_outline_icons::{
    HiCalendar, HiClipboardList, HiHome, HiOfficeBuilding, HiUserGroup,
};

use crate::i18n::t;
use crate::Route;

/// Top navigation bar plus the routed page body.
#[component]
pub fn Layout() -> Element {
    let path = use_route::<Route>().to_string();
    let is_active = |href: &str| {
        if href == "/" {
            path == "/"
        } else {
            path.starts_with(href)
        }
    };
    let link_class = |active: bool| {
        if active {
            "inline-flex items-center gap-2 px-1 pt-1 border-b-2 border-indigo-500 text-sm font-medium text-gray-900"
        } else {
            "inline-flex items-center gap-2 px-1 pt-1 border-b-2 border-transparent text-sm font-medium text-gray-500 hover:border-gray-300 hover:text-gray-700"
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            nav { class: "bg-white shadow-sm border-b border-gray-200",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        div { class: "flex items-center gap-8",
                            h1 { class: "text-xl font-semibold text-gray-900", {t("app.title")} }
                            div { class: "hidden sm:flex sm:space-x-6",
                                Link { to: Route::Home {}, class: link_class(is_active("/")),
                                    Icon { width: 20, height: 20, icon: HiHome }
                                    span { {t("nav.home")} }
                                }
                                Link { to: Route::Structures {}, class: link_class(is_active("/departments")),
                                    Icon { width: 20, height: 20, icon: HiOfficeBuilding }
                                    span { {t("nav.structures")} }
                                }
                                Link { to: Route::AcademicDutyStructures {}, class: link_class(is_active("/duty-structures")),
                                    Icon { width: 20, height: 20, icon: HiClipboardList }
                                    span { {t("nav.duties")} }
                                }
                                Link { to: Route::DutyDistribution {}, class: link_class(is_active("/duty-distribution")),
                                    Icon { width: 20, height: 20, icon: HiCalendar }
                                    span { {t("nav.distribution")} }
                                }
                                Link { to: Route::PersonnelStructures {}, class: link_class(is_active("/personnel-expense")),
                                    Icon { width: 20, height: 20, icon: HiUserGroup }
                                    span { {t("nav.personnel")} }
                                }
                                Link { to: Route::DutyTypes {}, class: link_class(is_active("/duty-types")),
                                    Icon { width: 20, height: 20, icon: HiClipboardList }
                                    span { {t("nav.duty_types")} }
                                }
                            }
                        }
                    }
                }
            }
            main { class: "max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8",
                Outlet::<Route> {}
            }
        }
    }
}
