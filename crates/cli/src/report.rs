//! Standalone HTML comparison report with Chart.js

use crate::error::{Error, Result};
use benchbot_core::{ChartGroup, ComparisonCharts};
use minijinja::{context, Environment};
use std::path::Path;

/// HTML template for the comparison report
const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: #ffffff;
            color: #1a1a1a;
            line-height: 1.5;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            padding: 1.5rem;
        }

        header {
            padding-bottom: 1rem;
            margin-bottom: 1.5rem;
            border-bottom: 1px solid #d0d7de;
        }

        h1 {
            font-size: 1.4rem;
            font-weight: 600;
        }

        .revisions {
            color: #57606a;
            font-family: 'SF Mono', 'Fira Code', monospace;
            font-size: 0.9rem;
        }

        .chart-container {
            margin-bottom: 2rem;
        }

        .ragged {
            color: #cf222e;
            font-size: 0.85rem;
        }

        .no-data {
            text-align: center;
            padding: 3rem;
            color: #6e7781;
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{{ title }}</h1>
            <p class="revisions">{{ revision1 }} vs. {{ revision2 }} - {{ compiler }}</p>
        </header>

        {% if groups %}
            {% for group in groups %}
            <div class="chart-container">
                {% if group.ragged %}
                <p class="ragged">Series in this chart have different lengths.</p>
                {% endif %}
                <canvas id="chart-{{ loop.index0 }}" height="100"></canvas>
            </div>
            {% endfor %}
        {% else %}
            <div class="no-data">
                <p>No benchmark entries to compare.</p>
            </div>
        {% endif %}
    </div>

    <script>
        const groups = {{ groups_json | safe }};

        document.addEventListener('DOMContentLoaded', function() {
            groups.forEach((group, index) => {
                const canvas = document.getElementById('chart-' + index);
                if (!canvas) return;

                new Chart(canvas, {
                    type: 'line',
                    data: {
                        labels: group.labels,
                        datasets: group.datasets.map(dataset => ({
                            label: dataset.label,
                            data: dataset.data,
                            fill: false,
                            borderColor: dataset.color,
                            backgroundColor: dataset.color,
                            borderWidth: 2,
                            pointRadius: 0
                        }))
                    },
                    options: {
                        plugins: {
                            title: {
                                display: true,
                                text: group.title
                            }
                        },
                        scales: {
                            y: {
                                beginAtZero: true,
                                ticks: {
                                    callback: function(value) {
                                        return value + 'ms';
                                    }
                                }
                            }
                        }
                    }
                });
            });
        });
    </script>
</body>
</html>
"#;

/// Group data for template rendering
#[derive(Debug, Clone, serde::Serialize)]
struct GroupData {
    ragged: bool,
}

/// Render the comparison as a standalone HTML page
pub fn render_report(charts: &ComparisonCharts, title: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("report.html", REPORT_TEMPLATE)?;

    let template = env.get_template("report.html")?;

    let groups: Vec<GroupData> = charts
        .groups
        .iter()
        .map(|g| GroupData {
            ragged: g.is_ragged(),
        })
        .collect();

    let html = template.render(context! {
        title => title,
        revision1 => charts.header.key1.revision_tag(),
        revision2 => charts.header.key2.revision_tag(),
        compiler => charts.header.compiler_part(),
        groups => groups,
        groups_json => script_json(&charts.groups)?,
    })?;

    Ok(html)
}

/// JSON that is safe to inline in a `<script>` element
fn script_json(groups: &[ChartGroup]) -> Result<String> {
    Ok(serde_json::to_string(groups)?.replace("</", "<\\/"))
}

/// Write the report to `path`
pub fn write_report(charts: &ComparisonCharts, title: &str, path: &Path) -> Result<()> {
    let html = render_report(charts, title)?;
    write_file(path, &html)
}

/// Write `contents` to `path`, creating missing parent directories
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::FileWrite {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| Error::FileWrite {
        path: path.display().to_string(),
        source: e,
    })
}
