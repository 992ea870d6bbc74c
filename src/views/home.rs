use dioxus::prelude::*;

use crate::api;
use crate::components::AutoSyncPanel;
use crate::i18n::t;
use crate::models::Department;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut structures = use_signal(Vec::<Department>::new);
    let mut duty_type_count = use_signal(|| 0usize);

    use_effect(move || {
        spawn(async move {
            // Non-critical dashboard fetches; failures just leave the cards
            // empty.
            if let Ok(items) = api::list_departments().await {
                structures.set(items.into_iter().filter(|d| d.parent_id.is_none()).collect());
            }
            if let Ok(types) = api::list_duty_types().await {
                duty_type_count.set(types.len());
            }
        });
    });

    let card_class = "block bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow";

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", {t("home.title")} }
                p { class: "text-sm text-gray-500 mt-1", {t("home.subtitle")} }
            }

            AutoSyncPanel { on_sync_complete: move |_| {} }

            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                Link { to: Route::Structures {}, class: card_class,
                    h3 { class: "text-lg font-medium text-gray-900", {t("nav.structures")} }
                    p { class: "text-3xl font-bold text-indigo-600 mt-2", {structures.read().len().to_string()} }
                    p { class: "text-sm text-gray-500 mt-1", {t("home.structures_hint")} }
                }
                Link { to: Route::DutyTypes {}, class: card_class,
                    h3 { class: "text-lg font-medium text-gray-900", {t("nav.duty_types")} }
                    p { class: "text-3xl font-bold text-indigo-600 mt-2", {duty_type_count.read().to_string()} }
                    p { class: "text-sm text-gray-500 mt-1", {t("home.duty_types_hint")} }
                }
                Link { to: Route::DutyDistribution {}, class: card_class,
                    h3 { class: "text-lg font-medium text-gray-900", {t("nav.distribution")} }
                    p { class: "text-sm text-gray-500 mt-2", {t("home.distribution_hint")} }
                }
                Link { to: Route::AcademicDutyStructures {}, class: card_class,
                    h3 { class: "text-lg font-medium text-gray-900", {t("nav.duties")} }
                    p { class: "text-sm text-gray-500 mt-2", {t("home.duties_hint")} }
                }
                Link { to: Route::PersonnelStructures {}, class: card_class,
                    h3 { class: "text-lg font-medium text-gray-900", {t("nav.personnel")} }
                    p { class: "text-sm text-gray-500 mt-2", {t("home.personnel_hint")} }
                }
            }
        }
    }
}
