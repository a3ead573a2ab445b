use tera::{Context, Tera};
use tracing::info;

use crate::error::ExportError;
use crate::report::ReportContext;

/// The built-in report layout, styled after the assessment form itself.
pub const REPORT_TEMPLATE: &str = r#"<html>
    <head>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            h1, h2 { color: #3498db; }
            .risk-high { color: #e74c3c; font-weight: bold; }
            .risk-medium { color: #f39c12; font-weight: bold; }
            .risk-low { color: #2ecc71; font-weight: bold; }
            .info-box { background-color: #d4edff; padding: 15px; margin: 10px 0; border-radius: 5px; }
            table { width: 100%; border-collapse: collapse; margin: 20px 0; }
            th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
            th { background-color: #f2f2f2; }
        </style>
    </head>
    <body>
        <h1>Pre-Operative Assessment Report</h1>
        <p><strong>Generated:</strong> {{ generated_at }}</p>

        <h2>Patient Information</h2>
        <table>
            <tr><th>Age</th><td>{{ age }} years</td></tr>
            <tr><th>Comorbidities</th><td>{{ comorbidities }}</td></tr>
            <tr><th>ASA classification</th><td>{{ asa_class }}</td></tr>
            <tr><th>Anticoagulant use</th><td>{% if uses_anticoagulants %}Yes{% else %}No{% endif %}</td></tr>
            <tr><th>Corticosteroid use</th><td>{% if uses_corticosteroids %}Yes{% else %}No{% endif %}</td></tr>
            <tr><th>Recent surgery (last 3 months)</th><td>{% if recent_surgery %}Yes{% else %}No{% endif %}</td></tr>
        </table>

        <h2>Surgery Information</h2>
        <table>
            <tr><th>Surgery type</th><td>{{ surgery_type }}</td></tr>
            <tr><th>Anesthesia type</th><td>{{ anesthesia_type }}</td></tr>
            <tr><th>Complexity</th><td>{{ surgery_complexity }}</td></tr>
        </table>

        <h2>Risk Assessment</h2>
        <p>Surgical risk: <span class="{{ tier_class }}">{{ tier | upper }}</span> (score: {{ score }})</p>

        <div class="info-box">
            <h3>Fasting Guidance</h3>
            <p><strong>Solid food:</strong> {{ solids_hours }} hours before surgery</p>
            <p><strong>Clear liquids:</strong> {{ clear_liquids_hours }} hours before surgery</p>
            <p><small>Note: clear liquids include water, tea without milk, and pulp-free fruit juice.</small></p>
        </div>

        <h2>Personalized Recommendations</h2>
        <ul>
        {% for recommendation in recommendations %}<li>{{ recommendation }}</li>
        {% endfor %}</ul>

        <p style="margin-top: 40px; font-style: italic;">
            This report was generated automatically and does not replace a
            medical evaluation. Consult your physician for guidance specific
            to your case.
        </p>
    </body>
</html>
"#;

/// Render the built-in report template.
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    let html = render_report_with_template("report.html", REPORT_TEMPLATE, context)?;
    info!(html_len = html.len(), "report rendered");
    Ok(html)
}

/// Render a caller-supplied Tera template with a ReportContext.
///
/// The `template_content` is the raw template string; the context fields
/// become the template variables.
pub fn render_report_with_template(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context struct to Tera variables via serde_json
    let value = serde_json::to_value(context)?;
    let tera_context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &tera_context)?;
    Ok(rendered)
}
