use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use dioxus_free_icons::icons::hi_outline_icons::{HiChevronRight, HiHome};

use crate::i18n::t;
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub to: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, to: Route) -> Self {
        Self { label: label.into(), to: Some(to) }
    }

    pub fn here(label: impl Into<String>) -> Self {
        Self { label: label.into(), to: None }
    }
}

#[component]
pub fn Breadcrumbs(items: Vec<Crumb>) -> Element {
    rsx! {
        nav { class: "flex mb-6", "aria-label": "Breadcrumb",
            ol { class: "flex items-center space-x-2",
                li {
                    Link {
                        to: Route::Home {},
                        class: "inline-flex items-center text-sm font-medium text-indigo-600 hover:text-indigo-500",
                        Icon { width: 16, height: 16, icon: HiHome }
                        span { class: "ml-1", {t("nav.home")} }
                    }
                }
                for crumb in items.into_iter() {
                    li { class: "flex items-center",
                        Icon { width: 16, height: 16, class: "text-gray-400 mx-2", icon: HiChevronRight }
                        if let Some(to) = crumb.to.clone() {
                            Link {
                                to,
                                class: "text-sm font-medium text-indigo-600 hover:text-indigo-500",
                                {crumb.label.clone()}
                            }
                        } else {
                            span { class: "text-sm font-medium text-gray-900", {crumb.label.clone()} }
                        }
                    }
                }
            }
        }
    }
}
