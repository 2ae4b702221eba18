use chrono::{DateTime, Utc};
use checklist_rules::ChecklistReport;
use tera::{Context, Tera};

/// Body served whenever the dashboard cannot be produced.
pub const FAILURE_PAGE: &str = "Error generating dashboard.";

const TEMPLATE_NAME: &str = "dashboard.html";

/// Renders checklist reports as the HTML dashboard page.
pub struct DashboardRenderer {
    template_engine: Tera,
}

impl DashboardRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut template_engine = Tera::default();
        template_engine.add_raw_template(TEMPLATE_NAME, DASHBOARD_TEMPLATE)?;

        Ok(Self { template_engine })
    }

    pub fn render(&self, report: &ChecklistReport) -> Result<String, tera::Error> {
        self.render_at(report, Utc::now())
    }

    pub fn render_at(
        &self,
        report: &ChecklistReport,
        generated_at: DateTime<Utc>,
    ) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("results", &report.results);
        context.insert("summary", &report.summary);
        context.insert(
            "generated_at",
            &generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        );

        self.template_engine.render(TEMPLATE_NAME, &context)
    }
}

const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Applicant Checklist</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: #333;
            max-width: 720px;
            margin: 40px auto;
            padding: 0 20px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th, td {
            text-align: left;
            padding: 10px;
            border-bottom: 1px solid #ddd;
        }
        .passed .status { color: #1e7e34; }
        .failed .status { color: #c0392b; }
        .meta { color: #777; font-size: 13px; }
    </style>
</head>
<body>
    <h1>Applicant Checklist</h1>
    <p class="summary">{{ summary.passed }} of {{ summary.total }} checks passed</p>
    <table>
        <thead>
            <tr><th>Rule</th><th>Status</th></tr>
        </thead>
        <tbody>
            {% for result in results %}
            <tr class="{{ result.status | lower }}">
                <td class="rule">{{ result.ruleName }}</td>
                <td class="status">{{ result.status }}</td>
            </tr>
            {% endfor %}
        </tbody>
    </table>
    <p class="meta">Generated {{ generated_at }}</p>
</body>
</html>
"#;
