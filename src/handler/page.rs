//! Landing page rendering
//!
//! The page is a single self-contained document: inline CSS, no scripts,
//! no external assets. It is rendered on every request so the timestamp and
//! hostname are always current.

use std::fmt::Write;

use crate::release::Release;
use crate::snapshot::Snapshot;

const HEADLINE: &str = "\u{1f680} Welcome to The CloudDevOpsHub Blue-Green Deployment Demo";

/// Stylesheet with `$variable` placeholders filled from the release theme
const STYLESHEET: &str = r"
    * { box-sizing: border-box; }
    body {
      margin: 0;
      min-height: 100vh;
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      display: flex;
      align-items: center;
      justify-content: center;
      background: $background;
    }
    .card {
      background: #ffffff;
      width: 92%;
      max-width: 680px;
      padding: 50px 64px;
      border-radius: 18px;
      box-shadow: 0 25px 75px rgba(0, 0, 0, 0.35);
      text-align: center;
    }
    h1 { margin: 0 0 10px; color: #2c3e50; font-size: 2.3rem; }
    .subtitle { color: #7f8c8d; font-size: 1rem; margin-bottom: 24px; }
    .release { font-size: 2.8rem; font-weight: 700; color: $accent; margin: 20px 0; }
    .env-chip {
      display: inline-block;
      padding: 14px 36px;
      border-radius: 999px;
      background: $chip;
      color: #fff;
      font-size: 1.1rem;
      letter-spacing: 1px;
      margin-bottom: 28px;
    }
    .details { text-align: left; color: #555; font-size: 0.95rem; line-height: 1.8; }
    .badge {
      display: inline-block;
      background: $badge;
      color: #fff;
      padding: 6px 16px;
      border-radius: 20px;
      font-size: 0.85rem;
      margin-left: 8px;
    }
    .features {
      margin: 25px 0;
      background: #ecfdf5;
      border-left: 6px solid $chip;
      padding: 18px 22px;
      border-radius: 12px;
    }
    .features h3 { margin-top: 0; color: $chip; font-size: 1.1rem; }
    .features ul { padding-left: 18px; margin: 10px 0 0; }
    .features li { margin: 8px 0; }
    .footer { margin-top: 35px; font-size: 0.85rem; color: #999; text-align: center; }
";

/// Render the landing page for `release`
pub fn render(release: &Release, snapshot: &Snapshot) -> String {
    let theme = &release.theme;
    let stylesheet = STYLESHEET
        .replace("$background", theme.background)
        .replace("$accent", theme.accent)
        .replace("$chip", theme.chip)
        .replace("$badge", theme.badge);

    let mut html = String::with_capacity(4096);
    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{title}</title>
  <style>{stylesheet}</style>
</head>
<body>
  <div class="card">
    <h1>{headline}</h1>
    <div class="subtitle">{subtitle}</div>
    <div class="release">Release v{version}</div>
    <div class="env-chip">{banner}</div>
    <div class="details">
      <p><strong>{state_label}:</strong><span class="badge">{badge}</span></p>
      <p>{description}</p>
"#,
        title = escape_html(theme.title),
        headline = HEADLINE,
        subtitle = escape_html(theme.subtitle),
        version = escape_html(release.version),
        banner = release.environment.banner(),
        state_label = escape_html(theme.state_label),
        badge = escape_html(release.deployment_badge),
        description = escape_html(theme.description),
    );

    if !release.highlights.is_empty() {
        let _ = write!(
            html,
            "      <div class=\"features\">\n        <h3>What\u{2019}s Included in v{}</h3>\n        <ul>\n",
            escape_html(release.version)
        );
        for item in release.highlights {
            let _ = writeln!(html, "          <li>{}</li>", escape_html(item));
        }
        html.push_str("        </ul>\n      </div>\n");
    }

    let _ = write!(
        html,
        r#"      <p><strong>{time_label}:</strong><br /><span id="server-time">{timestamp}</span></p>
      <p><strong>Running Host:</strong><br /><span id="server-host">{hostname}</span></p>
    </div>
    <div class="footer">{footer}</div>
  </div>
</body>
</html>
"#,
        time_label = escape_html(theme.time_label),
        timestamp = escape_html(&snapshot.timestamp),
        hostname = escape_html(&snapshot.hostname),
        footer = escape_html(theme.footer),
    );

    html
}

/// Escape text for HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
