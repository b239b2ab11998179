use rust_decimal::{Decimal, RoundingStrategy};

use crate::bets::Bet;
use crate::component::{ComponentError, Components, TemplateData};
use crate::sink::{DisplaySink, FrameHints};
use crate::trades::{aggregate_trades, Trade};
use crate::web;

pub const BET_SUMMARY_COMPONENT: &str = "bet_summary";

/// Recommended frame height for the bet summary card, in px.
pub const BET_SUMMARY_HEIGHT: u32 = 700;

/// Fixed two-decimal currency format. Round-half-to-even; negatives and
/// oversized magnitudes format like anything else.
pub fn format_currency(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    )
}

/// Whole-number percent format, same rounding rule as currency.
pub fn format_percent(value: Decimal) -> String {
    format!(
        "{:.0}",
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    )
}

/// Build the placeholder mapping the bet-summary template expects. Built
/// fresh per render. No range validation: rejecting nonsensical bets is the
/// catalog's job, the builder only formats what it is given.
pub fn bet_summary_data(bet: &Bet) -> TemplateData {
    // The image URL goes in verbatim as markup, so the fallback path can
    // inject plain text and the happy path a working <img> tag.
    let image_html = match bet.bet_image_link.as_deref() {
        Some(url) if !url.is_empty() => format!(r#"<img src="{url}" alt="Bet image" />"#),
        _ => "No Image Available".to_string(),
    };

    TemplateData::from([
        ("BET_NAME".to_string(), bet.bet_name.clone()),
        ("IMAGE_HTML".to_string(), image_html),
        ("YES_VALUE".to_string(), format_currency(bet.yes_value)),
        ("NO_VALUE".to_string(), format_currency(bet.no_value)),
        ("YES_PERCENT".to_string(), format_percent(bet.yes_percent)),
        ("NO_PERCENT".to_string(), format_percent(bet.no_percent)),
        ("RULES".to_string(), bet.rules.clone()),
    ])
}

/// Render the bet-summary card for one bet and hand it to the sink with the
/// recommended height hint.
pub fn display_bet_summary(
    components: &Components,
    sink: &mut dyn DisplaySink,
    bet: &Bet,
) -> Result<(), ComponentError> {
    let data = bet_summary_data(bet);
    components.display(
        sink,
        BET_SUMMARY_COMPONENT,
        &data,
        FrameHints::with_height(BET_SUMMARY_HEIGHT),
    )
}

/// Present aggregate trade metrics and the trade table as page widgets.
pub fn display_trade_summary(sink: &mut dyn DisplaySink, trades: &[Trade]) {
    let metrics = aggregate_trades(trades);
    sink.widget(web::render_trade_summary(&metrics, trades));
}
