//! Secretary page: opening hours, enrolment, documents and the holiday
//! calendar for a selectable year.

use aeas_models::Holiday;
use chrono::{Datelike, Utc};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_language};
use crate::components::empty_state::{EmptyState, EmptyTone};
use crate::core::format::{format_day, month_title};
use crate::core::ticker::Slot;
use crate::features::secretary::state::{
    calendar_filters, group_by_month, next_holiday, selectable_years,
};
use crate::i18n::{LocaleCode, TranslationBundle};

const SECTIONS: [&str; 3] = ["hours", "enrolment", "documents"];

#[function_component(SecretaryPage)]
pub(crate) fn secretary_page() -> Html {
    let bundle = use_bundle();
    let language = use_language().language;
    let client = use_api();
    let today = Utc::now().date_naive();
    let year = use_state(|| today.year());
    let holidays = use_state(Slot::<Vec<Holiday>>::default);

    {
        let holidays = holidays.clone();
        use_effect_with_deps(
            move |year: &i32| {
                holidays.set(Slot::Loading);
                let filters = calendar_filters(*year);
                spawn_local(async move {
                    match client.list_holidays(&filters).await {
                        Ok(page) => holidays.set(Slot::Loaded(page.data)),
                        Err(err) => {
                            console::error!(format!("holidays failed: {err}"));
                            holidays.set(Slot::Failed);
                        }
                    }
                });
                || ()
            },
            *year,
        );
    }

    let onchange = {
        let year = year.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Ok(next) = select.value().parse::<i32>() {
                    year.set(next);
                }
            }
        })
    };

    let calendar = match &*holidays {
        Slot::Loading => html! {
            <EmptyState tone={EmptyTone::Loading} message={bundle.text("common.loading", "A carregar…")} />
        },
        Slot::Failed => html! {
            <EmptyState tone={EmptyTone::Error} message={bundle.text("secretary.holidays_error", "")} />
        },
        Slot::Loaded(list) if list.is_empty() => html! {
            <EmptyState message={bundle.text("secretary.holidays_empty", "")} />
        },
        Slot::Loaded(list) => render_calendar(list, &bundle, language, today),
    };

    html! {
        <section class="page secretary-page">
            <header class="page-header">
                <h1>{bundle.text("secretary.title", "Secretaria")}</h1>
                <p class="lead">{bundle.text("secretary.subtitle", "")}</p>
            </header>
            <div class="info-grid">
                {for SECTIONS.iter().map(|section| html! {
                    <article class="info-card">
                        <h2>{bundle.text(&format!("secretary.{section}.title"), "")}</h2>
                        <p>{bundle.text(&format!("secretary.{section}.body"), "")}</p>
                    </article>
                })}
            </div>
            <section class="holidays">
                <header class="section-header">
                    <h2>{bundle.text("secretary.holidays_title", "Calendário de feriados")}</h2>
                    <label>
                        <span class="sr-only">{bundle.text("secretary.year_label", "Ano")}</span>
                        <select {onchange}>
                            {for selectable_years(today).into_iter().map(|option| html! {
                                <option value={option.to_string()} selected={option == *year}>{option}</option>
                            })}
                        </select>
                    </label>
                </header>
                {calendar}
            </section>
        </section>
    }
}

fn render_calendar(
    holidays: &[Holiday],
    bundle: &TranslationBundle,
    language: LocaleCode,
    today: chrono::NaiveDate,
) -> Html {
    let upcoming = next_holiday(holidays, today).map(|holiday| {
        bundle.format(
            "secretary.next_holiday",
            "Próximo feriado: {name}, {date}",
            &[
                ("name", &holiday.name),
                ("date", &format_day(holiday.date, language)),
            ],
        )
    });

    html! {
        <>
            if let Some(upcoming) = upcoming {
                <p class="callout">{upcoming}</p>
            }
            <div class="month-grid">
                {for group_by_month(holidays).into_iter().map(|(month, entries)| html! {
                    <article class="month" key={month.to_string()}>
                        <h3>{month_title(month, language)}</h3>
                        <ul>
                            {for entries.iter().map(|holiday| html! {
                                <li key={holiday.id.clone()}>
                                    <time datetime={holiday.date.to_string()}>{format_day(holiday.date, language)}</time>
                                    <span class="holiday-name">{holiday.name.clone()}</span>
                                    <span class={classes!("badge", holiday.kind.as_str())}>
                                        {bundle.text(&format!("secretary.types.{}", holiday.kind.as_str()), holiday.kind.as_str())}
                                    </span>
                                </li>
                            })}
                        </ul>
                    </article>
                })}
            </div>
        </>
    }
}
