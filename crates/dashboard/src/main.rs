//! Dioxus-based benchmark comparison dashboard for rapier
//!
//! A pure Rust frontend that compiles to WebAssembly.
//! 100% Rust - no manually written JS/TS/CSS.
//! All styling is inline in Rust code.
//!
//! ## Comparing two revisions
//!
//! Two dropdowns pick the revisions to compare, newest first. Every change
//! to either dropdown or to the "other engines" checkbox fetches the
//! comparison again and redraws one line chart per test. The page URL may
//! preselect revisions with `?date1=<ms>&date2=<ms>`.

use benchbot_core::{
    build_comparison_charts, initial_selection, option_label, sort_newest_first, BenchDate,
    BenchKey, ChartGroup, ColorTable, ComparisonCharts, RequestSequencer, RequestedDates,
    RevisionSelection, ServiceConfig,
};
use dioxus::prelude::*;
use tracing::{debug, info};

mod api;
mod styles;

use styles::*;

/// Global theme context - true = dark mode
#[derive(Clone, Copy)]
struct ThemeCtx(Signal<bool>);

/// State behind the fetch-and-render pipeline.
///
/// Colors and request tickets live here rather than in globals so that a
/// backend keeps its color across reloads of the same page.
#[derive(Clone, Copy)]
struct Pipeline {
    sequencer: Signal<RequestSequencer>,
    colors: Signal<ColorTable>,
    charts: Signal<Option<ComparisonCharts>>,
    error: Signal<Option<String>>,
    fetching: Signal<bool>,
}

impl Pipeline {
    /// Fetch a comparison and replace the charts, unless a newer request
    /// was issued in the meantime
    fn run(mut self, selection: RevisionSelection, other_engines: bool) {
        let ticket = self.sequencer.write().issue();
        self.fetching.set(true);

        spawn(async move {
            let config = ServiceConfig::default();
            let result = api::load_comparison(&config, selection, other_engines).await;

            if !self.sequencer.peek().is_current(ticket) {
                debug!(
                    "Dropping stale comparison of {} and {}",
                    selection.date1, selection.date2
                );
                return;
            }

            let result = result.and_then(|response| {
                build_comparison_charts(response, &mut *self.colors.write())
                    .map_err(|e| e.to_string())
            });

            match result {
                Ok(charts) => {
                    info!("Rendering {} charts", charts.groups.len());
                    self.error.set(None);
                    self.charts.set(Some(charts));
                }
                Err(e) => {
                    self.charts.set(None);
                    self.error.set(Some(e));
                }
            }
            self.fetching.set(false);
        });
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

#[component]
fn App() -> Element {
    // Theme state - default to dark mode
    let dark_mode = use_signal(|| true);
    use_context_provider(|| ThemeCtx(dark_mode));

    let mut keys = use_signal(|| None::<Vec<BenchKey>>);
    let mut selection = use_signal(|| None::<RevisionSelection>);
    let mut other_engines = use_signal(|| false);

    let pipeline = Pipeline {
        sequencer: use_signal(RequestSequencer::new),
        colors: use_signal(ColorTable::new),
        charts: use_signal(|| None::<ComparisonCharts>),
        error: use_signal(|| None::<String>),
        fetching: use_signal(|| false),
    };
    let mut error = pipeline.error;

    use_effect(move || {
        spawn(async move {
            match api::load_keys(&ServiceConfig::default()).await {
                Ok(mut loaded) => {
                    sort_newest_first(&mut loaded);
                    let requested = RequestedDates::from_query(&location_search());
                    let initial = initial_selection(&loaded, &requested);
                    info!("Loaded {} revisions", loaded.len());

                    keys.set(Some(loaded));
                    selection.set(initial);
                    if let Some(initial) = initial {
                        pipeline.run(initial, false);
                    }
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let dark = *dark_mode.read();
    let current = *selection.read();
    let engines = *other_engines.read();

    rsx! {
        div { style: "{app_style(dark)}",
            Header {}

            main { style: "{main_content_style(dark)}",
                match (keys.read().as_ref(), current) {
                    (None, _) => rsx! {
                        if let Some(err) = error.read().as_ref() {
                            ErrorState { message: err.clone() }
                        } else {
                            LoadingState {}
                        }
                    },
                    (Some(_), None) => rsx! { EmptyState {} },
                    (Some(list), Some(current)) => rsx! {
                        Controls {
                            keys: list.clone(),
                            selection: current,
                            other_engines: engines,
                            on_select: move |next: RevisionSelection| {
                                selection.set(Some(next));
                                pipeline.run(next, *other_engines.peek());
                            },
                            on_toggle_engines: move |enabled: bool| {
                                other_engines.set(enabled);
                                pipeline.run(current, enabled);
                            },
                        }
                        if let Some(err) = pipeline.error.read().as_ref() {
                            ErrorState { message: err.clone() }
                        } else if let Some(charts) = pipeline.charts.read().as_ref() {
                            ComparisonView { charts: charts.clone() }
                        } else if *pipeline.fetching.read() {
                            LoadingState {}
                        }
                    },
                }
            }
        }
    }
}

/// Query string of the page URL, empty outside a browser
fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[component]
fn Header() -> Element {
    let ThemeCtx(mut dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        header { style: "{header_style(dark)}",
            h1 { style: "{title_style(dark)}", "rapier benchmarks" }
            button {
                style: "{toggle_btn_style(dark)}",
                onclick: move |_| {
                    let current = *dark_mode.read();
                    dark_mode.set(!current);
                },
                if dark { "☀ light" } else { "☾ dark" }
            }
        }
    }
}

#[component]
fn LoadingState() -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{loading_style(dark)}",
            "Loading..."
        }
    }
}

#[component]
fn ErrorState(message: String) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{error_style(dark)}",
            strong { "Error: " }
            "{message}"
        }
    }
}

#[component]
fn EmptyState() -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{empty_style(dark)}",
            p { "No benchmarked revisions yet." }
            p { style: "{muted_style(dark)}", "Charts appear once the benchmarks service has recorded a run." }
        }
    }
}

/// The two revision dropdowns and the other engines checkbox
#[component]
fn Controls(
    keys: Vec<BenchKey>,
    selection: RevisionSelection,
    other_engines: bool,
    on_select: EventHandler<RevisionSelection>,
    on_toggle_engines: EventHandler<bool>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{controls_style(dark)}",
            RevisionSelect {
                keys: keys.clone(),
                selected: selection.date1,
                on_change: move |date1| on_select.call(RevisionSelection { date1, ..selection }),
            }
            span { style: "{muted_style(dark)}", "vs." }
            RevisionSelect {
                keys,
                selected: selection.date2,
                on_change: move |date2| on_select.call(RevisionSelection { date2, ..selection }),
            }
            label { style: "{checkbox_label_style(dark)}",
                input {
                    r#type: "checkbox",
                    checked: other_engines,
                    onchange: move |evt: Event<FormData>| on_toggle_engines.call(evt.checked()),
                }
                "Other engines"
            }
        }
    }
}

#[component]
fn RevisionSelect(
    keys: Vec<BenchKey>,
    selected: BenchDate,
    on_change: EventHandler<BenchDate>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        select {
            style: "{select_style(dark)}",
            value: "{selected}",
            onchange: move |evt: Event<FormData>| {
                match evt.value().parse::<BenchDate>() {
                    Ok(date) => on_change.call(date),
                    Err(e) => debug!("Ignoring revision choice: {}", e),
                }
            },
            for key in keys.iter() {
                option {
                    key: "{key.date}",
                    value: "{key.date}",
                    selected: key.date == selected,
                    "{option_label(key)}"
                }
            }
        }
    }
}

/// Every chart for one comparison
#[component]
fn ComparisonView(charts: ComparisonCharts) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let header = &charts.header;
    let summary = format!(
        "{} vs. {} - {}",
        header.key1.revision_tag(),
        header.key2.revision_tag(),
        header.compiler_part()
    );

    rsx! {
        div {
            p { style: "margin-bottom: 1rem;",
                code { style: "{code_style(dark)}", "{summary}" }
            }
            if charts.groups.is_empty() {
                div { style: "{empty_style(dark)}",
                    p { "No benchmark entries to compare." }
                }
            }
            for group in charts.groups.iter() {
                ChartCard { key: "{group.name}", group: group.clone() }
            }
        }
    }
}

/// One test: title, line chart and legend
#[component]
fn ChartCard(group: ChartGroup) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{chart_card_style(dark)}",
            div { style: "{chart_header_style(dark)}",
                span { style: "{chart_title_style(dark)}", "{group.title}" }
                if group.is_ragged() {
                    span { style: "{warning_badge_style(dark)}", "series lengths differ" }
                }
            }

            ChartSvg { group: group.clone(), chart_width: 800.0, chart_height: 300.0 }

            div { style: "{chart_legend_style(dark)}",
                // Labels repeat when both sides are the same revision
                for (i, dataset) in group.datasets.iter().enumerate() {
                    div { key: "{i}", style: "{legend_item_style(dark)}",
                        span { style: "width: 12px; height: 3px; background: {dataset.color};" }
                        span { "{dataset.label}" }
                    }
                }
            }
        }
    }
}

/// SVG line chart, y axis in milliseconds starting at zero
#[component]
fn ChartSvg(group: ChartGroup, chart_width: f64, chart_height: f64) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let padding = 60.0;
    let max_value = group.max_value();
    let frames = group.labels.len();
    let grid_c = grid_color(dark);
    let axis_c = axis_color(dark);

    rsx! {
        div { style: "padding: 0.5rem;",
            svg {
                style: "width: 100%; height: auto; max-height: 400px;",
                view_box: "0 0 {chart_width} {chart_height}",
                "preserveAspectRatio": "xMidYMid meet",

                for i in 0..5 {
                    line {
                        x1: "{padding}",
                        y1: "{padding + (chart_height - 2.0 * padding) * (i as f64 / 4.0)}",
                        x2: "{chart_width - padding}",
                        y2: "{padding + (chart_height - 2.0 * padding) * (i as f64 / 4.0)}",
                        stroke: "{grid_c}",
                        "stroke-width": "1",
                    }
                }

                for i in 0..5 {
                    text {
                        x: "{padding - 4.0}",
                        y: "{padding + (chart_height - 2.0 * padding) * (i as f64 / 4.0) + 3.0}",
                        fill: "{axis_c}",
                        "font-size": "12",
                        "text-anchor": "end",
                        "{format_value(max_value * (1.0 - i as f64 / 4.0))}ms"
                    }
                }

                text {
                    x: "{padding}",
                    y: "{chart_height - padding + 16.0}",
                    fill: "{axis_c}",
                    "font-size": "12",
                    "0"
                }
                text {
                    x: "{chart_width - padding}",
                    y: "{chart_height - padding + 16.0}",
                    fill: "{axis_c}",
                    "font-size": "12",
                    "text-anchor": "end",
                    "{frames.saturating_sub(1)}"
                }

                for (i, dataset) in group.datasets.iter().enumerate() {
                    path {
                        key: "{i}-line",
                        d: "{generate_line_path(&dataset.data, frames, max_value, chart_width, chart_height, padding)}",
                        fill: "none",
                        stroke: "{dataset.color}",
                        "stroke-width": "2",
                    }
                }
            }
        }
    }
}

/// Polyline through `values`, spread over `frames` x positions.
///
/// Values past the x axis are not drawn.
fn generate_line_path(
    values: &[f64],
    frames: usize,
    max_value: f64,
    width: f64,
    height: f64,
    padding: f64,
) -> String {
    let mut path = String::new();
    let span = frames.saturating_sub(1).max(1) as f64;
    // Zero-valued charts still need a non-zero scale
    let scale = if max_value > 0.0 { max_value } else { 1.0 };

    for (i, value) in values.iter().take(frames).enumerate() {
        let x = padding + (width - 2.0 * padding) * (i as f64 / span);
        let y = padding + (height - 2.0 * padding) * (1.0 - value / scale);

        if i == 0 {
            path.push_str(&format!("M {:.1} {:.1}", x, y));
        } else {
            path.push_str(&format!(" L {:.1} {:.1}", x, y));
        }
    }

    path
}

fn format_value(value: f64) -> String {
    if value >= 1_000.0 {
        format!("{:.0}", value)
    } else if value >= 10.0 {
        format!("{:.1}", value)
    } else if value >= 0.01 {
        format!("{:.2}", value)
    } else if value > 0.0 {
        format!("{:.3}", value)
    } else {
        "0".to_string()
    }
}
