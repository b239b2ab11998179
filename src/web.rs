use crate::bets::Bet;
use crate::trades::{Trade, TradeAction, TradeMetrics};
use crate::view;

const STYLE: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#0f1117;color:#e1e4e8;min-height:100vh;padding:16px}
a{color:#58a6ff;text-decoration:none}
a:hover{text-decoration:underline}
.navbar{display:flex;justify-content:space-between;align-items:center;max-width:960px;margin:0 auto 16px auto;padding-bottom:12px;border-bottom:1px solid #30363d}
.brand{font-size:20px;font-weight:700;color:#58a6ff}
.nav-links{display:flex;gap:14px;font-size:14px}
.filters{display:flex;gap:8px;flex-wrap:wrap;max-width:960px;margin:0 auto 16px auto}
.chip{padding:4px 12px;border-radius:14px;font-size:13px;background:#161b22;border:1px solid #30363d;color:#8b949e}
.chip.active{background:#1f6feb;border-color:#1f6feb;color:#fff}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:12px;max-width:960px;margin:0 auto}
.card{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:14px}
.card .category{font-size:11px;font-weight:600;text-transform:uppercase;letter-spacing:1px;color:#8b949e}
.card h3{font-size:15px;margin:6px 0}
.card .odds{font-size:13px;color:#8b949e;margin-bottom:4px}
.card .odds strong{color:#e1e4e8}
.card .prices{font-size:13px;color:#8b949e;margin-bottom:10px}
.notice{max-width:960px;margin:0 auto;padding:24px;text-align:center;color:#8b949e;background:#161b22;border:1px solid #30363d;border-radius:8px}
.stats{display:flex;gap:12px;flex-wrap:wrap;max-width:960px;margin:0 auto 16px auto}
.stat-card{flex:1;min-width:160px;background:#161b22;border:1px solid #30363d;border-radius:8px;padding:14px}
.stat-card span{color:#8b949e;font-size:12px;text-transform:uppercase;letter-spacing:1px}
.stat-card strong{display:block;font-size:20px;margin-top:4px}
table{width:100%;max-width:960px;margin:0 auto;border-collapse:collapse;background:#161b22;border:1px solid #30363d}
th{font-size:12px;text-transform:uppercase;letter-spacing:1px;color:#8b949e;text-align:left;padding:10px 12px;border-bottom:1px solid #30363d}
td{font-size:13px;padding:8px 12px;border-bottom:1px solid #21262d}
td.num,th.num{text-align:right;font-variant-numeric:tabular-nums}
.buy{color:#3fb950}
.sell{color:#f85149}
.component-frame{display:block;max-width:960px;margin:0 auto}
.back{display:block;max-width:960px;margin:0 auto 12px auto;font-size:14px}
"#;

/// Entity-encode text for splicing into page chrome. Distinct from the
/// component renderer's literal escaping, which leaves markup characters
/// alone on purpose.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape a string for an HTML attribute value (iframe srcdoc embedding).
pub fn attr_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Shared page chrome: navbar plus the assembled body sections.
pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav class="navbar">
  <span class="brand">AirBets</span>
  <div class="nav-links">
    <a href="/">Home</a>
    <a href="/trades">Profile / Trade Summary</a>
  </div>
</nav>
{body}
</body>
</html>
"#,
        title = html_escape(title),
    )
}

/// Category filter chips plus the compact bet-card grid.
pub fn render_bet_grid(bets: &[&Bet], categories: &[String], selected: Option<&str>) -> String {
    let mut html = String::from(r#"<div class="filters">"#);
    let all_class = if selected.is_none() { "chip active" } else { "chip" };
    html.push_str(&format!(r#"<a class="{all_class}" href="/">All</a>"#));
    for category in categories {
        let class = if selected == Some(category.as_str()) {
            "chip active"
        } else {
            "chip"
        };
        html.push_str(&format!(
            r#"<a class="{class}" href="/?category={category}">{}</a>"#,
            html_escape(category),
        ));
    }
    html.push_str("</div>");

    if bets.is_empty() {
        html.push_str(r#"<div class="notice">No bets in this category yet.</div>"#);
        return html;
    }

    html.push_str(r#"<div class="grid">"#);
    for bet in bets {
        html.push_str(&format!(
            r#"
<div class="card">
  <div class="category">{category}</div>
  <h3>{name}</h3>
  <div class="odds">Yes <strong>{yes_pct}%</strong> &middot; No <strong>{no_pct}%</strong></div>
  <div class="prices">${yes_value} / ${no_value}</div>
  <a href="/bets/{id}">View</a>
</div>"#,
            category = html_escape(&bet.category),
            name = html_escape(&bet.bet_name),
            yes_pct = view::format_percent(bet.yes_percent),
            no_pct = view::format_percent(bet.no_percent),
            yes_value = view::format_currency(bet.yes_value),
            no_value = view::format_currency(bet.no_value),
            id = bet.bet_id,
        ));
    }
    html.push_str("</div>");
    html
}

pub fn render_back_link() -> String {
    r#"<a class="back" href="/">&larr; Back to list</a>"#.to_string()
}

/// Metric stat cards plus the trade history table.
pub fn render_trade_summary(metrics: &TradeMetrics, trades: &[Trade]) -> String {
    let mut html = format!(
        r#"
<div class="stats">
  <div class="stat-card"><span>Total Trades</span><strong>{}</strong></div>
  <div class="stat-card"><span>Total Volume</span><strong>{}</strong></div>
  <div class="stat-card"><span>Total Value</span><strong>${}</strong></div>
</div>"#,
        metrics.total_trades,
        metrics.total_volume,
        view::format_currency(metrics.total_value),
    );

    if trades.is_empty() {
        html.push_str(r#"<div class="notice">No trades recorded yet.</div>"#);
        return html;
    }

    html.push_str(
        r#"
<table>
  <thead>
    <tr><th>Trade</th><th>Symbol</th><th>Action</th><th class="num">Quantity</th><th class="num">Price</th><th>Time</th></tr>
  </thead>
  <tbody>"#,
    );
    for trade in trades {
        let action_class = match trade.action {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        };
        let quantity = trade
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "&mdash;".to_string());
        let price = trade
            .price
            .map(|p| format!("${}", view::format_currency(p)))
            .unwrap_or_else(|| "&mdash;".to_string());
        html.push_str(&format!(
            r#"
    <tr>
      <td>{id}</td>
      <td>{symbol}</td>
      <td class="{action_class}">{action}</td>
      <td class="num">{quantity}</td>
      <td class="num">{price}</td>
      <td>{time}</td>
    </tr>"#,
            id = html_escape(&trade.trade_id),
            symbol = html_escape(&trade.symbol),
            action = trade.action,
            time = trade.timestamp.format("%Y-%m-%d %H:%M"),
        ));
    }
    html.push_str("\n  </tbody>\n</table>");
    html
}
